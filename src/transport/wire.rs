use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::decode_u64;

/// Numeric fields TextMagic returns either as JSON numbers or as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString<N> {
    Number(N),
    Text(String),
}

/// Decimal value such as a balance, cost or price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireDecimal(pub f64);

impl<'de> Deserialize<'de> for WireDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrString::<f64>::deserialize(deserializer)? {
            NumberOrString::Number(value) => Ok(Self(value)),
            NumberOrString::Text(value) => value.trim().parse().map(Self).map_err(|_| {
                D::Error::custom(format!("expected a decimal number, got {value:?}"))
            }),
        }
    }
}

/// Signed integer such as a Unix timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireInt(pub i64);

impl<'de> Deserialize<'de> for WireInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrString::<i64>::deserialize(deserializer)? {
            NumberOrString::Number(value) => Ok(Self(value)),
            NumberOrString::Text(value) => value.trim().parse().map(Self).map_err(|_| {
                D::Error::custom(format!("expected an integer, got {value:?}"))
            }),
        }
    }
}

/// Unsigned identifier (message id or phone number).
///
/// Strings that are not plain decimal numbers decode to `None` so callers can
/// skip the entry instead of failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireId(pub Option<u64>);

impl<'de> Deserialize<'de> for WireId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match NumberOrString::<u64>::deserialize(deserializer)? {
            NumberOrString::Number(value) => Self(Some(value)),
            NumberOrString::Text(value) => Self(decode_u64(&value)),
        })
    }
}

/// Decode the values of a JSON object keyed by decimal ids.
///
/// Keys that are not decimal numbers are skipped before their value is looked
/// at, so a stray `error_code` member or a garbage entry costs only that entry.
pub fn decode_numeric_keyed<T: DeserializeOwned>(
    map: BTreeMap<String, Value>,
    entry: &'static str,
) -> Result<Vec<(u64, T)>, serde_json::Error> {
    let mut decoded = Vec::with_capacity(map.len());
    for (key, value) in map {
        let Some(id) = decode_u64(&key) else {
            tracing::warn!(key = %key, entry, "skipping entry with non-numeric key");
            continue;
        };
        decoded.push((id, serde_json::from_value(value)?));
    }
    Ok(decoded)
}
