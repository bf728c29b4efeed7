//! Static pick lists backing the selection widgets.

/// Language the interface and diagnosis default to.
pub const DEFAULT_LANGUAGE: &str = "en";

/// (code, native label) pairs offered by the language dropdown.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "हिन्दी"),
    ("te", "తెలుగు"),
    ("ta", "தமிழ்"),
    ("kn", "ಕನ್ನಡ"),
    ("mr", "मराठी"),
];

/// (identifier, label) pairs offered by the crop selector. Identifiers
/// are what the diagnosis service expects in the `crop` field.
pub const CROPS: &[(&str, &str)] = &[
    ("tomato", "Tomato"),
    ("potato", "Potato"),
    ("rice", "Rice"),
    ("wheat", "Wheat"),
    ("maize", "Maize"),
    ("cotton", "Cotton"),
    ("chilli", "Chilli"),
    ("brinjal", "Brinjal"),
];

/// State → districts map for the two-level location selector.
pub const STATES: &[(&str, &[&str])] = &[
    (
        "Andhra Pradesh",
        &["Anantapur", "Chittoor", "East Godavari", "Guntur", "Krishna", "Kurnool"],
    ),
    (
        "Karnataka",
        &["Belagavi", "Bengaluru Rural", "Hassan", "Mandya", "Mysuru", "Tumakuru"],
    ),
    (
        "Maharashtra",
        &["Ahmednagar", "Kolhapur", "Nashik", "Pune", "Sangli", "Solapur"],
    ),
    (
        "Tamil Nadu",
        &["Coimbatore", "Erode", "Madurai", "Salem", "Thanjavur", "Tiruchirappalli"],
    ),
    (
        "Telangana",
        &["Karimnagar", "Khammam", "Nalgonda", "Nizamabad", "Warangal"],
    ),
    (
        "Uttar Pradesh",
        &["Agra", "Aligarh", "Bareilly", "Gorakhpur", "Meerut", "Varanasi"],
    ),
];

/// Districts for a state, empty for an unknown or unselected state.
pub fn districts_for(state: &str) -> &'static [&'static str] {
    STATES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, districts)| *districts)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_listed() {
        assert!(LANGUAGES.iter().any(|(code, _)| *code == DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_districts_for_known_state() {
        let districts = districts_for("Karnataka");
        assert!(districts.contains(&"Mysuru"));
    }

    #[test]
    fn test_districts_for_unknown_state() {
        assert!(districts_for("Atlantis").is_empty());
        assert!(districts_for("").is_empty());
    }

    #[test]
    fn test_every_state_has_districts() {
        for (state, districts) in STATES {
            assert!(!districts.is_empty(), "no districts for {}", state);
        }
    }

    #[test]
    fn test_crop_identifiers_lowercase() {
        for (id, _) in CROPS {
            assert_eq!(*id, id.to_lowercase());
        }
    }
}
