//! Serde helper functions for lenient request decoding.
//!
//! Browser clients send loosely typed JSON: a missing journal link arrives as
//! `0`, `""` or `null`, an unset priority as `""`, and completion flags as
//! either booleans or `0`/`1`. These helpers normalize those shapes.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::journal::Priority;

/// Deserialize an optional row id, treating `null`, `0` and empty strings as None.
/// Numeric strings are accepted. Negative ids are rejected.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    let id = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("invalid id: {n}")))?,
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid id: {s}")))?,
        Some(other) => return Err(D::Error::custom(format!("invalid id: {other}"))),
    };

    match id {
        0 => Ok(None),
        id if id < 0 => Err(D::Error::custom(format!("invalid id: {id}"))),
        id => Ok(Some(id)),
    }
}

/// Deserialize an optional priority, treating empty strings as None.
pub fn deserialize_optional_priority<'de, D>(
    deserializer: D,
) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => s.parse().map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize an optional flag from a boolean or the integers `0`/`1`.
pub fn deserialize_optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            _ => Err(D::Error::custom(format!("invalid flag: {n}"))),
        },
        Some(other) => Err(D::Error::custom(format!("invalid flag: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        id_field: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_optional_priority")]
        priority_field: Option<Priority>,
        #[serde(default, deserialize_with = "deserialize_optional_flag")]
        flag_field: Option<bool>,
    }

    fn parse(json: &str) -> Result<TestStruct, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_deserialize_optional_id_missing() {
        let result = parse(r#"{}"#).unwrap();
        assert_eq!(result.id_field, None);
    }

    #[test]
    fn test_deserialize_optional_id_falsy() {
        assert_eq!(parse(r#"{"id_field": 0}"#).unwrap().id_field, None);
        assert_eq!(parse(r#"{"id_field": null}"#).unwrap().id_field, None);
        assert_eq!(parse(r#"{"id_field": ""}"#).unwrap().id_field, None);
    }

    #[test]
    fn test_deserialize_optional_id_value() {
        assert_eq!(parse(r#"{"id_field": 7}"#).unwrap().id_field, Some(7));
        assert_eq!(parse(r#"{"id_field": "12"}"#).unwrap().id_field, Some(12));
    }

    #[test]
    fn test_deserialize_optional_id_invalid() {
        assert!(parse(r#"{"id_field": -3}"#).is_err());
        assert!(parse(r#"{"id_field": 1.5}"#).is_err());
        assert!(parse(r#"{"id_field": "abc"}"#).is_err());
        assert!(parse(r#"{"id_field": true}"#).is_err());
    }

    #[test]
    fn test_deserialize_optional_priority_empty() {
        assert_eq!(parse(r#"{"priority_field": ""}"#).unwrap().priority_field, None);
        assert_eq!(parse(r#"{"priority_field": null}"#).unwrap().priority_field, None);
    }

    #[test]
    fn test_deserialize_optional_priority_value() {
        let result = parse(r#"{"priority_field": "High"}"#).unwrap();
        assert_eq!(result.priority_field, Some(Priority::High));
    }

    #[test]
    fn test_deserialize_optional_priority_invalid() {
        assert!(parse(r#"{"priority_field": "urgent"}"#).is_err());
    }

    #[test]
    fn test_deserialize_optional_flag() {
        assert_eq!(parse(r#"{"flag_field": true}"#).unwrap().flag_field, Some(true));
        assert_eq!(parse(r#"{"flag_field": 0}"#).unwrap().flag_field, Some(false));
        assert_eq!(parse(r#"{"flag_field": 1}"#).unwrap().flag_field, Some(true));
        assert_eq!(parse(r#"{}"#).unwrap().flag_field, None);
    }

    #[test]
    fn test_deserialize_optional_flag_invalid() {
        assert!(parse(r#"{"flag_field": 2}"#).is_err());
        assert!(parse(r#"{"flag_field": "yes"}"#).is_err());
    }
}
