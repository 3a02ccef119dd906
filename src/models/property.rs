//! Property, operation and commission records

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A property listing
///
/// Absent and `null` fields both decode to the field's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub agent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub public_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_image_full: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_image_thumb: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub parking_spaces: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub property_type: String,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub show_prices: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub share_commission: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub operations: Vec<Operation>,
}

/// A sale or rental offer attached to a property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    // The API misspells this field.
    #[serde(rename = "formated_amount", deserialize_with = "null_as_default")]
    pub formatted_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub commission: Commission,
    #[serde(deserialize_with = "null_as_default")]
    pub period: String,
}

/// Commission offered to a co-broker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commission {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    pub value: Option<CommissionValue>,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
}

/// The API sends commission values as either numbers or strings
#[derive(Debug, Clone, PartialEq)]
pub enum CommissionValue {
    Numeric(f64),
    Text(String),
}

impl CommissionValue {
    /// Numeric value, parsing text when it holds a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    fn from_json(value: Value) -> Result<Option<Self>, String> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_f64()
                .map(|n| Some(Self::Numeric(n)))
                .ok_or_else(|| format!("commission value {n} is not representable")),
            Value::String(s) => Ok(Some(Self::Text(s))),
            other => Err(format!(
                "commission value must be a number or string, got {other}"
            )),
        }
    }
}

impl fmt::Display for CommissionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for CommissionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Numeric(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

// `Option<CommissionValue>` routes `null` to `None` before this runs, so only
// non-null values reach `from_json` here.
impl<'de> Deserialize<'de> for CommissionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(value)
            .map_err(de::Error::custom)?
            .ok_or_else(|| de::Error::custom("commission value is null"))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
