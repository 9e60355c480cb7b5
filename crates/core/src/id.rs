//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

static SERIAL_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^KON-\w+-\d+$").expect("serial number pattern is valid")
});

/// Container serial number, `KON-<word characters>-<digits>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SerialNumber(String);

impl SerialNumber {
    /// Validate an externally supplied serial number.
    pub fn parse(value: &str) -> DomainResult<Self> {
        if SERIAL_NUMBER_PATTERN.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(DomainError::invalid_argument(format!(
                "invalid serial number (expected KON-<code>-<digits>): {value:?}"
            )))
        }
    }

    /// Generate a fresh serial number for a container of the given kind code.
    ///
    /// The numeric part comes from the random bits of a UUIDv7; uniqueness within a
    /// storage is still checked when the container is added.
    pub fn generate(kind_code: &str) -> Self {
        let random = Uuid::now_v7().as_u128() as u64;
        Self(format!("KON-{kind_code}-{random}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SerialNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SerialNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SerialNumber> for String {
    fn from(value: SerialNumber) -> Self {
        value.0
    }
}

/// Identifier of a ship.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipId(Uuid);

impl ShipId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ShipId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ShipId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ShipId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for ShipId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_argument(format!("ShipId: {e}")))?;
        Ok(Self(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_accepts_well_formed_serial_numbers() {
        for value in ["KON-LIQ-001", "KON-GAS-001", "KON-C-42", "KON-CHL_2-7"] {
            let serial = SerialNumber::parse(value).unwrap();
            assert_eq!(serial.as_str(), value);
        }
    }

    #[test]
    fn parse_rejects_malformed_serial_numbers() {
        for value in ["TEST123", "KON--1", "KON-ABC-", "KON-ABC-12x", "kon-abc-1", " KON-A-1"] {
            match SerialNumber::parse(value) {
                Err(DomainError::InvalidArgument(_)) => {}
                other => panic!("Expected InvalidArgument for {value:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn generated_serial_numbers_are_valid_and_distinct() {
        let a = SerialNumber::generate("G");
        let b = SerialNumber::generate("G");
        assert!(a.as_str().starts_with("KON-G-"));
        assert_eq!(SerialNumber::parse(a.as_str()).unwrap(), a);
        assert_ne!(a, b);
    }

    #[test]
    fn string_conversions_validate_input() {
        let serial: SerialNumber = "KON-LIQ-001".parse().unwrap();
        assert_eq!(String::from(serial), "KON-LIQ-001");
        assert!(SerialNumber::try_from("nope".to_string()).is_err());
    }

    #[test]
    fn ship_id_parses_its_display_form() {
        let id = ShipId::new();
        assert_eq!(id.to_string().parse::<ShipId>().unwrap(), id);
        assert!("not-a-uuid".parse::<ShipId>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every KON-<word>-<digits> string is accepted verbatim.
        #[test]
        fn well_formed_serials_always_parse(code in "[A-Za-z0-9_]{1,12}", digits in "[0-9]{1,12}") {
            let value = format!("KON-{code}-{digits}");
            let serial = SerialNumber::parse(&value).unwrap();
            prop_assert_eq!(serial.as_str(), value.as_str());
        }
    }
}
