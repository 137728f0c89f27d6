use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an attendance tap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    In,
    Out,
}

impl EntryType {
    pub fn et_as_str(&self) -> &'static str {
        match self {
            EntryType::In => "in",
            EntryType::Out => "out",
        }
    }

    /// Human label used in confirmations and listings.
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::In => "checked in",
            EntryType::Out => "checked out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EntryType::In)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.et_as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_stored_form_only() {
        assert_eq!(
            serde_json::from_str::<EntryType>("\"in\"").unwrap(),
            EntryType::In
        );
        assert!(serde_json::from_str::<EntryType>("\"lunch\"").is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&EntryType::Out).unwrap(), "\"out\"");
    }
}
