//! Static lookup tables for flavor families and growing regions.

/// Flavor families offered by the questionnaire and the note fragments that
/// count as a match for each.
pub const FLAVOR_FAMILIES: &[(&str, &[&str])] = &[
    (
        "fruity",
        &[
            "fruit", "berry", "citrus", "tropical", "bright", "tangy", "cherry", "raspberry",
        ],
    ),
    (
        "nutty",
        &["nut", "almond", "hazelnut", "walnut", "pecan", "roasted"],
    ),
    (
        "floral",
        &[
            "flower",
            "floral",
            "jasmine",
            "rose",
            "lavender",
            "violet",
            "orange blossom",
        ],
    ),
    (
        "spicy",
        &["spice", "pepper", "cinnamon", "cardamom", "ginger", "chili"],
    ),
    (
        "classic",
        &["cocoa", "chocolate", "traditional", "classic", "pure"],
    ),
];

/// Growing regions offered by the questionnaire and their member origins.
pub const REGIONS: &[(&str, &[&str])] = &[
    (
        "South America",
        &["Peru", "Ecuador", "Venezuela", "Brazil", "Colombia", "Bolivia"],
    ),
    ("Africa", &["Madagascar", "Ghana", "Tanzania"]),
    ("Asia", &["India", "Java", "Philippines", "Vietnam"]),
    ("Caribbean", &["Trinidad", "Grenada", "Dominican Republic"]),
];

/// Return the synonyms of the flavor family named in `tag`.
///
/// Questionnaire options such as `"Fruity/Tangy"` name the family in their
/// first word, so the lookup matches on containment.
pub(crate) fn flavor_synonyms(tag: &str) -> Option<&'static [&'static str]> {
    let lowered = tag.to_lowercase();
    FLAVOR_FAMILIES
        .iter()
        .find(|(family, _)| lowered.contains(family))
        .map(|(_, synonyms)| *synonyms)
}

/// Return the origins belonging to `region`, compared case-insensitively.
pub(crate) fn region_origins(region: &str) -> Option<&'static [&'static str]> {
    let wanted = region.trim();
    REGIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, origins)| *origins)
}
