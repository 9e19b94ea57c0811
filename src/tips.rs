//! Static health tip lists
//!
//! Tips are keyed by category; the language code is an opaque passthrough
//! for the localization layer and never selects content here.

/// Known tip categories; unknown input falls back to general
const CATEGORIES: [(&str, &[&str]); 4] = [
    (
        "general",
        &[
            "Drink at least 8 glasses of water a day",
            "Sleep 7-8 hours every night",
            "Wash hands with soap for 20 seconds",
            "Get regular health check-ups",
        ],
    ),
    (
        "nutrition",
        &[
            "Include seasonal fruits and vegetables in every meal",
            "Limit packaged and fried food",
            "Use iodized salt in home cooking",
            "Prefer whole grains over refined flour",
        ],
    ),
    (
        "hygiene",
        &[
            "Keep drinking water containers covered",
            "Wash raw produce before cooking",
            "Clean and cover wounds promptly",
            "Dispose of household waste daily",
        ],
    ),
    (
        "seasonal",
        &[
            "Remove stagnant water to prevent mosquito breeding",
            "Boil drinking water during the monsoon",
            "Dress in layers during temperature swings",
            "Get the annual flu vaccine before winter",
        ],
    ),
];

/// Resolve a category to its tip list. Returns the resolved category name
/// alongside the tips so the response can echo what was actually served.
pub fn tips_for(category: Option<&str>) -> (&'static str, &'static [&'static str]) {
    let requested = category.unwrap_or("general").trim().to_lowercase();

    CATEGORIES
        .iter()
        .find(|(name, _)| *name == requested)
        .copied()
        .unwrap_or(CATEGORIES[0])
}
