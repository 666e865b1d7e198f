//! Hand-curated compatibility tables.
//!
//! The goal and diet tables are authored per entry and are not symmetric:
//! an entry listing another category does not imply the reverse entry exists.

/// Goal -> goals that train well alongside it
pub const GOAL_COMPATIBILITY: &[(&str, &[&str])] = &[
    ("Weight Loss", &["General Fitness", "Endurance", "Toning"]),
    ("Muscle Gain", &["Strength", "Bodybuilding"]),
    ("Strength", &["Muscle Gain", "Powerlifting"]),
    ("Endurance", &["Weight Loss", "Marathon Training"]),
    ("General Fitness", &["Weight Loss", "Flexibility", "Toning"]),
    ("Flexibility", &["General Fitness", "Mobility"]),
    ("Toning", &["Weight Loss"]),
    ("Bodybuilding", &["Muscle Gain"]),
];

/// Diet -> diets that are easy to share meals with
pub const DIET_COMPATIBILITY: &[(&str, &[&str])] = &[
    ("Vegan", &["Vegetarian", "Plant-Based"]),
    ("Vegetarian", &["Vegan", "Plant-Based"]),
    ("Plant-Based", &["Vegan", "Vegetarian"]),
    ("Pescatarian", &["Vegetarian", "Mediterranean"]),
    ("Mediterranean", &["Pescatarian", "Balanced"]),
    ("Keto", &["Paleo", "Low-Carb"]),
    ("Paleo", &["Keto", "Whole30"]),
    ("Low-Carb", &["Keto", "Paleo"]),
    ("Balanced", &["Mediterranean", "Flexible"]),
    ("Flexible", &["Balanced", "Mediterranean"]),
];

/// Lowercase name fragments of gym chains with many locations
pub const GYM_CHAINS: &[&str] = &[
    "planet fitness",
    "la fitness",
    "24 hour fitness",
    "gold's gym",
    "anytime fitness",
    "equinox",
    "crunch",
    "orangetheory",
    "life time",
    "ymca",
    "snap fitness",
    "f45",
];

fn entry<'a>(table: &'a [(&'a str, &'a [&'a str])], key: &str) -> &'a [&'a str] {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, related)| *related)
        .unwrap_or(&[])
}

/// True when either goal's entry lists the other
pub fn goals_related(a: &str, b: &str) -> bool {
    entry(GOAL_COMPATIBILITY, a).contains(&b) || entry(GOAL_COMPATIBILITY, b).contains(&a)
}

/// True when `from`'s diet entry lists `to`. The reverse entry is not consulted.
pub fn diet_lists(from: &str, to: &str) -> bool {
    entry(DIET_COMPATIBILITY, from).contains(&to)
}

/// First known chain whose name appears in both (already lowercased) gym names
pub fn shared_chain(a: &str, b: &str) -> Option<&'static str> {
    GYM_CHAINS
        .iter()
        .copied()
        .find(|chain| a.contains(chain) && b.contains(chain))
}
