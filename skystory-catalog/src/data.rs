use crate::entry::{ConstellationLink, StarCatalogEntry};

const fn star(
    name: &'static str,
    ra_hours: f64,
    dec_deg: f64,
    magnitude: f64,
    constellation: &'static str,
) -> StarCatalogEntry {
    StarCatalogEntry::new(name, ra_hours, dec_deg, magnitude, Some(constellation))
}

const fn lone(name: &'static str, ra_hours: f64, dec_deg: f64, magnitude: f64) -> StarCatalogEntry {
    StarCatalogEntry::new(name, ra_hours, dec_deg, magnitude, None)
}

const fn link(a: &'static str, b: &'static str) -> ConstellationLink {
    ConstellationLink::new(a, b)
}

// J2000.0 positions, V magnitudes.
pub(crate) static STARS: &[StarCatalogEntry] = &[
    // Orion
    star("Betelgeuse", 5.9195, 7.4071, 0.42, "Ori"),
    star("Rigel", 5.2423, -8.2016, 0.13, "Ori"),
    star("Bellatrix", 5.4189, 6.3497, 1.64, "Ori"),
    star("Mintaka", 5.5334, -0.2991, 2.25, "Ori"),
    star("Alnilam", 5.6036, -1.2019, 1.69, "Ori"),
    star("Alnitak", 5.6793, -1.9426, 1.77, "Ori"),
    star("Saiph", 5.7959, -9.6696, 2.09, "Ori"),
    star("Meissa", 5.5856, 9.9342, 3.33, "Ori"),
    // Ursa Major
    star("Dubhe", 11.0621, 61.7510, 1.79, "UMa"),
    star("Merak", 11.0307, 56.3824, 2.37, "UMa"),
    star("Phecda", 11.8972, 53.6948, 2.44, "UMa"),
    star("Megrez", 12.2571, 57.0326, 3.31, "UMa"),
    star("Alioth", 12.9005, 55.9598, 1.77, "UMa"),
    star("Mizar", 13.3988, 54.9254, 2.23, "UMa"),
    star("Alkaid", 13.7923, 49.3133, 1.86, "UMa"),
    // Cassiopeia
    star("Caph", 0.1530, 59.1498, 2.28, "Cas"),
    star("Schedar", 0.6751, 56.5373, 2.24, "Cas"),
    star("Navi", 0.9451, 60.7167, 2.47, "Cas"),
    star("Ruchbah", 1.4303, 60.2353, 2.68, "Cas"),
    star("Segin", 1.9066, 63.6701, 3.37, "Cas"),
    // Cygnus
    star("Deneb", 20.6905, 45.2803, 1.25, "Cyg"),
    star("Sadr", 20.3705, 40.2567, 2.23, "Cyg"),
    star("Aljanah", 20.7702, 33.9703, 2.48, "Cyg"),
    star("Fawaris", 19.7496, 45.1308, 2.87, "Cyg"),
    star("Albireo", 19.5121, 27.9597, 3.05, "Cyg"),
    // Lyra
    star("Vega", 18.6156, 38.7837, 0.03, "Lyr"),
    star("Sheliak", 18.8347, 33.3627, 3.52, "Lyr"),
    star("Sulafat", 18.9824, 32.6896, 3.25, "Lyr"),
    // Aquila
    star("Altair", 19.8464, 8.8683, 0.76, "Aql"),
    star("Tarazed", 19.7710, 10.6133, 2.72, "Aql"),
    star("Alshain", 19.9219, 6.4068, 3.71, "Aql"),
    // Scorpius
    star("Antares", 16.4901, -26.4320, 1.06, "Sco"),
    star("Acrab", 16.0906, -19.8055, 2.62, "Sco"),
    star("Dschubba", 16.0056, -22.6217, 2.29, "Sco"),
    star("Sargas", 17.6220, -42.9978, 1.86, "Sco"),
    star("Shaula", 17.5601, -37.1038, 1.62, "Sco"),
    star("Lesath", 17.5127, -37.2958, 2.70, "Sco"),
    // Crux
    star("Acrux", 12.4433, -63.0991, 0.76, "Cru"),
    star("Mimosa", 12.7953, -59.6888, 1.25, "Cru"),
    star("Gacrux", 12.5194, -57.1132, 1.64, "Cru"),
    star("Imai", 12.2524, -58.7489, 2.79, "Cru"),
    // Leo
    star("Regulus", 10.1395, 11.9672, 1.40, "Leo"),
    star("Algieba", 10.3329, 19.8415, 2.08, "Leo"),
    star("Zosma", 11.2351, 20.5237, 2.56, "Leo"),
    star("Denebola", 11.8177, 14.5721, 2.14, "Leo"),
    star("Chertan", 11.2373, 15.4296, 3.33, "Leo"),
    // Gemini
    star("Pollux", 7.7553, 28.0262, 1.14, "Gem"),
    star("Castor", 7.5767, 31.8883, 1.58, "Gem"),
    star("Alhena", 6.6285, 16.3993, 1.93, "Gem"),
    // Centaurus
    star("Rigil Kentaurus", 14.6601, -60.8340, -0.27, "Cen"),
    star("Hadar", 14.0637, -60.3730, 0.61, "Cen"),
    // Auriga
    star("Capella", 5.2782, 45.9980, 0.08, "Aur"),
    star("Menkalinan", 5.9921, 44.9474, 1.90, "Aur"),
    // Bright stars outside the drawn figures
    lone("Sirius", 6.7525, -16.7161, -1.46),
    lone("Canopus", 6.3992, -52.6957, -0.74),
    lone("Arcturus", 14.2610, 19.1824, -0.05),
    lone("Procyon", 7.6550, 5.2250, 0.34),
    lone("Achernar", 1.6286, -57.2367, 0.46),
    lone("Aldebaran", 4.5987, 16.5093, 0.86),
    lone("Spica", 13.4199, -11.1613, 0.97),
    lone("Fomalhaut", 22.9608, -29.6222, 1.16),
    lone("Adhara", 6.9771, -28.9721, 1.50),
    lone("Elnath", 5.4382, 28.6075, 1.65),
    lone("Miaplacidus", 9.2200, -69.7172, 1.67),
    lone("Alnair", 22.1372, -46.9610, 1.74),
    lone("Mirfak", 3.4054, 49.8612, 1.79),
    lone("Wezen", 7.1399, -26.3932, 1.83),
    lone("Avior", 8.3752, -59.5095, 1.86),
    lone("Peacock", 20.4275, -56.7351, 1.94),
    lone("Polaris", 2.5302, 89.2641, 1.98),
    lone("Alphard", 9.4598, -8.6586, 1.98),
    lone("Hamal", 2.1196, 23.4624, 2.00),
    lone("Alpheratz", 0.1398, 29.0904, 2.06),
    lone("Rasalhague", 17.5822, 12.5600, 2.07),
    lone("Algol", 3.1361, 40.9556, 2.12),
    lone("Alphecca", 15.5781, 26.7147, 2.22),
];

pub(crate) static LINKS: &[ConstellationLink] = &[
    // Orion
    link("Meissa", "Betelgeuse"),
    link("Meissa", "Bellatrix"),
    link("Betelgeuse", "Bellatrix"),
    link("Betelgeuse", "Alnitak"),
    link("Bellatrix", "Mintaka"),
    link("Mintaka", "Alnilam"),
    link("Alnilam", "Alnitak"),
    link("Alnitak", "Saiph"),
    link("Mintaka", "Rigel"),
    // Ursa Major
    link("Dubhe", "Merak"),
    link("Merak", "Phecda"),
    link("Phecda", "Megrez"),
    link("Megrez", "Dubhe"),
    link("Megrez", "Alioth"),
    link("Alioth", "Mizar"),
    link("Mizar", "Alkaid"),
    // Cassiopeia
    link("Caph", "Schedar"),
    link("Schedar", "Navi"),
    link("Navi", "Ruchbah"),
    link("Ruchbah", "Segin"),
    // Cygnus
    link("Deneb", "Sadr"),
    link("Sadr", "Albireo"),
    link("Aljanah", "Sadr"),
    link("Sadr", "Fawaris"),
    // Lyra
    link("Vega", "Sheliak"),
    link("Sheliak", "Sulafat"),
    link("Sulafat", "Vega"),
    // Aquila
    link("Tarazed", "Altair"),
    link("Altair", "Alshain"),
    // Scorpius
    link("Acrab", "Dschubba"),
    link("Dschubba", "Antares"),
    link("Antares", "Sargas"),
    link("Sargas", "Shaula"),
    link("Shaula", "Lesath"),
    // Crux
    link("Acrux", "Gacrux"),
    link("Mimosa", "Imai"),
    // Leo
    link("Regulus", "Algieba"),
    link("Algieba", "Zosma"),
    link("Zosma", "Denebola"),
    link("Denebola", "Chertan"),
    link("Chertan", "Regulus"),
    // Gemini
    link("Castor", "Pollux"),
    link("Pollux", "Alhena"),
    // Centaurus
    link("Rigil Kentaurus", "Hadar"),
    // Auriga
    link("Capella", "Menkalinan"),
];
