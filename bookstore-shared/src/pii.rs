use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A wrapper for sensitive data that masks its value in Debug and Display output.
///
/// Serialization still writes the real value: collaborators need the card
/// details, logs never do.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_are_masked() {
        let card = Masked("4111111111111111".to_string());
        assert_eq!(format!("{:?}", card), "********");
        assert_eq!(card.to_string(), "********");
    }

    #[test]
    fn test_serialization_keeps_real_value() {
        let card = Masked("123".to_string());
        assert_eq!(serde_json::to_string(&card).unwrap(), "\"123\"");
        let parsed: Masked<String> = serde_json::from_str("\"456\"").unwrap();
        assert_eq!(parsed.expose(), "456");
    }
}
