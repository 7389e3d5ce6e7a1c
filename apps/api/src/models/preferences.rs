use serde::Deserialize;

pub const DEFAULT_LOCATION: &str = "Remote";

/// Search preferences sent alongside skills and career fields.
/// Unknown keys are ignored; a missing `location` falls back to "Remote".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub location: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl Preferences {
    /// Decodes preferences from the raw request mapping.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Preferences::deserialize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_location_defaults_to_remote() {
        let prefs = Preferences::from_value(&json!({})).unwrap();
        assert_eq!(prefs.location, "Remote");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let prefs =
            Preferences::from_value(&json!({"location": "Berlin", "workMode": "Hybrid"})).unwrap();
        assert_eq!(prefs.location, "Berlin");
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(Preferences::from_value(&json!("Remote")).is_err());
        assert!(Preferences::from_value(&json!(null)).is_err());
    }

    #[test]
    fn test_non_string_location_is_rejected() {
        assert!(Preferences::from_value(&json!({"location": 42})).is_err());
    }
}
