#![deny(unsafe_code)]

use std::borrow::Borrow;
use std::fmt;

use crate::ModelError;

/// Stable identifier of an area node (e.g. `MA-05-01`).
///
/// Codes are trimmed on construction and never empty. Deserialization goes
/// through the same check, so a blank code in source data is rejected early.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct AreaCode(String);

impl AreaCode {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidCode(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse a possibly-blank code, treating blank input as "no code".
    pub fn parse_optional(value: &str) -> Option<Self> {
        Self::new(value).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AreaCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AreaCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AreaCode {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for AreaCode {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AreaCode> for String {
    fn from(code: AreaCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for AreaCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AreaCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Identifier of a level type definition in the tenant's type catalog.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct LevelTypeId(u64);

impl LevelTypeId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for LevelTypeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for LevelTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional codes in the form forms persist: `""` stands for no code.
/// Reading accepts `null` as well.
pub(crate) mod blank_code {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::AreaCode;

    pub fn serialize<S>(code: &Option<AreaCode>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(code.as_ref().map_or("", AreaCode::as_str))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<AreaCode>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(AreaCode::parse_optional))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_code_is_trimmed() {
        let code = AreaCode::new("  MA-05 ").unwrap();
        assert_eq!(code.as_str(), "MA-05");
        assert_eq!(code, "MA-05");
    }

    #[test]
    fn blank_area_code_is_rejected() {
        assert!(AreaCode::new("").is_err());
        assert!(AreaCode::new("   ").is_err());
        assert!(AreaCode::parse_optional(" ").is_none());
    }

    #[test]
    fn area_code_deserialization_validates() {
        let code: AreaCode = serde_json::from_str("\"MA\"").unwrap();
        assert_eq!(code.as_str(), "MA");
        assert!(serde_json::from_str::<AreaCode>("\"  \"").is_err());
    }
}
