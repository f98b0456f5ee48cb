use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("unknown star: {name}")]
    UnknownStar { name: String },

    #[error("link {from} - {to} names a star missing from the catalog")]
    DanglingLink { from: String, to: String },
}

impl CatalogError {
    pub fn unknown_star(name: impl Into<String>) -> Self {
        Self::UnknownStar { name: name.into() }
    }
}
