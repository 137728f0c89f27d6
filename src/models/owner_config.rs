use serde::{Deserialize, Serialize};

/// Owner identity and the device the kiosk is bound to.
///
/// The PIN is stored and compared in clear: it gates the admin screens,
/// it is not a credential.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerConfig {
    pub owner_email: String,
    #[serde(rename = "ownerPIN")]
    pub owner_pin: String,
    pub device_id: String,
}

impl OwnerConfig {
    pub fn pin_matches(&self, pin: &str) -> bool {
        self.owner_pin == pin
    }

    pub fn credentials_match(&self, email: &str, pin: &str) -> bool {
        self.owner_email == email && self.owner_pin == pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_stored_field_names() {
        let cfg = OwnerConfig {
            owner_email: "a@x.com".into(),
            owner_pin: "1234".into(),
            device_id: "dev".into(),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(
            json,
            r#"{"ownerEmail":"a@x.com","ownerPIN":"1234","deviceId":"dev"}"#
        );
    }

    #[test]
    fn credentials_are_case_sensitive() {
        let cfg = OwnerConfig {
            owner_email: "a@x.com".into(),
            owner_pin: "abc".into(),
            device_id: "dev".into(),
        };
        assert!(cfg.credentials_match("a@x.com", "abc"));
        assert!(!cfg.credentials_match("A@x.com", "abc"));
        assert!(!cfg.credentials_match("a@x.com", "ABC"));
    }
}
