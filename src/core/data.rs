use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw value of one data record: a scalar that grows from the axis baseline,
/// or an explicit `[start, end]` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Scalar(f64),
    Range([f64; 2]),
}

impl DataValue {
    /// Resolves the value into a `[start, end]` pair using `base` for scalars.
    #[must_use]
    pub fn to_range(self, base: f64) -> [f64; 2] {
        match self {
            Self::Scalar(value) => [base, value],
            Self::Range(range) => range,
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number.as_f64().map(Self::Scalar),
            Value::Array(items) if items.len() == 2 => {
                let start = items[0].as_f64()?;
                let end = items[1].as_f64()?;
                Some(Self::Range([start, end]))
            }
            _ => None,
        }
    }
}

/// One input record of a radial bar series.
///
/// `category` is only consulted when the categorical axis is numeric; the
/// payload travels untouched into the produced sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    #[serde(default)]
    pub value: Option<DataValue>,
    #[serde(default)]
    pub category: Option<f64>,
    #[serde(default)]
    pub payload: Value,
}

impl DataEntry {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: Some(DataValue::Scalar(value)),
            category: None,
            payload: Value::Null,
        }
    }

    #[must_use]
    pub fn range(start: f64, end: f64) -> Self {
        Self {
            value: Some(DataValue::Range([start, end])),
            category: None,
            payload: Value::Null,
        }
    }

    /// Builds an entry from a JSON record by reading `data_key`.
    ///
    /// A number becomes a scalar, a two-number array becomes a range, anything
    /// else leaves the value unset.
    #[must_use]
    pub fn from_payload(payload: Value, data_key: &str) -> Self {
        let value = payload.get(data_key).and_then(DataValue::from_json);
        Self {
            value,
            category: None,
            payload,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: f64) -> Self {
        self.category = Some(category);
        self
    }

    /// Display name carried in the payload's `name` field.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.payload.get("name").and_then(Value::as_str)
    }

    /// `[start, end]` pair for a non-stacked entry. A missing value maps to NaN.
    #[must_use]
    pub fn resolved_range(&self, base: f64) -> [f64; 2] {
        self.value
            .map_or([base, f64::NAN], |value| value.to_range(base))
    }
}
