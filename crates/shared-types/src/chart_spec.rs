//! Chart payload carried on the host element
//!
//! The server renders a JSON document of the form
//! `{ "labels": [...], "datasets": [{...}, ...] }` into a data attribute.
//! This module turns that raw attribute into a validated [`ChartSpec`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{HookError, HookResult};

/// A single series, passed through to the rendering library untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(Map<String, Value>);

impl Dataset {
    /// Series label, if the server supplied a string one
    pub fn label(&self) -> Option<&str> {
        self.0.get("label").and_then(Value::as_str)
    }

    /// Number of points in `data`, zero when absent or not an array
    pub fn point_count(&self) -> usize {
        self.0
            .get("data")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

/// Validated label/dataset payload driving one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    /// Read a spec from the raw attribute value of `attribute`.
    ///
    /// An absent or empty attribute is `MissingData`, text that is not JSON is
    /// `MalformedData`, and JSON without a label array and a dataset array is
    /// `InvalidShape`.
    pub fn from_attribute(raw: Option<&str>, attribute: &str) -> HookResult<Self> {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                return Err(HookError::MissingData {
                    attribute: attribute.to_string(),
                })
            }
        };

        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Validate an already parsed JSON document
    pub fn from_value(value: Value) -> HookResult<Self> {
        let mut root = match value {
            Value::Object(root) => root,
            other => {
                return Err(HookError::shape(
                    format!("expected an object, got {}", json_kind(&other)),
                    None,
                ))
            }
        };

        let labels = match root.remove("labels") {
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| label_text(index, item))
                .collect::<HookResult<Vec<_>>>()?,
            Some(other) => {
                return Err(HookError::shape(
                    format!("labels must be an array, got {}", json_kind(&other)),
                    Some("labels"),
                ))
            }
            None => return Err(HookError::shape("labels is missing", Some("labels"))),
        };

        let datasets = match root.remove("datasets") {
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Object(fields) => Ok(Dataset(fields)),
                    other => Err(HookError::shape(
                        format!(
                            "datasets[{index}] must be an object, got {}",
                            json_kind(&other)
                        ),
                        Some("datasets"),
                    )),
                })
                .collect::<HookResult<Vec<_>>>()?,
            Some(other) => {
                return Err(HookError::shape(
                    format!("datasets must be an array, got {}", json_kind(&other)),
                    Some("datasets"),
                ))
            }
            None => {
                return Err(HookError::shape(
                    "datasets is missing",
                    Some("datasets"),
                ))
            }
        };

        Ok(Self { labels, datasets })
    }

    pub fn series_count(&self) -> usize {
        self.datasets.len()
    }
}

impl TryFrom<Value> for ChartSpec {
    type Error = HookError;

    fn try_from(value: Value) -> HookResult<Self> {
        Self::from_value(value)
    }
}

/// Largest float whose integral value is still exact
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

fn label_text(index: usize, item: Value) -> HookResult<String> {
    match item {
        Value::String(text) => Ok(text),
        // Integral floats print the way JavaScript's String(n) does: 1.0 -> "1".
        Value::Number(number) => Ok(match number.as_f64() {
            Some(float)
                if number.is_f64() && float.fract() == 0.0 && float.abs() <= MAX_EXACT_FLOAT =>
            {
                format!("{}", float as i64)
            }
            _ => number.to_string(),
        }),
        other => Err(HookError::shape(
            format!(
                "labels[{index}] must be a string or number, got {}",
                json_kind(&other)
            ),
            Some("labels"),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ATTR: &str = "data-chart-data";

    #[test]
    fn test_parses_report_payload() {
        let raw = r#"{"labels":["2024-01","2024-02"],"datasets":[{"label":"A","data":[1,2]}]}"#;
        let spec = ChartSpec::from_attribute(Some(raw), ATTR).unwrap();

        assert_eq!(spec.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(spec.series_count(), 1);
        assert_eq!(spec.datasets[0].label(), Some("A"));
        assert_eq!(spec.datasets[0].point_count(), 2);
    }

    #[test]
    fn test_missing_and_empty_attribute() {
        for raw in [None, Some("")] {
            match ChartSpec::from_attribute(raw, ATTR) {
                Err(HookError::MissingData { attribute }) => assert_eq!(attribute, ATTR),
                other => panic!("expected MissingData, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = ChartSpec::from_attribute(Some("{labels: ["), ATTR).unwrap_err();
        assert_eq!(err.kind(), "malformed_data");
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        let cases = [
            (json!(null), None),
            (json!([1, 2]), None),
            (json!({ "datasets": [] }), Some("labels")),
            (json!({ "labels": [] }), Some("datasets")),
            (json!({ "labels": "2024-01", "datasets": [] }), Some("labels")),
            (json!({ "labels": [null], "datasets": [] }), Some("labels")),
            (json!({ "labels": [], "datasets": {} }), Some("datasets")),
            (json!({ "labels": [], "datasets": [3] }), Some("datasets")),
        ];

        for (value, expected_field) in cases {
            match ChartSpec::from_value(value.clone()) {
                Err(HookError::InvalidShape { field, .. }) => {
                    assert_eq!(field.as_deref(), expected_field, "payload {value}")
                }
                other => panic!("expected InvalidShape for {value}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_accepts_empty_series_and_numeric_labels() {
        let spec = ChartSpec::from_value(json!({ "labels": [], "datasets": [] })).unwrap();
        assert!(spec.labels.is_empty());
        assert_eq!(spec.series_count(), 0);

        let spec = ChartSpec::from_value(json!({
            "labels": [2023, "2024"],
            "datasets": [],
            "extra": true
        }))
        .unwrap();
        assert_eq!(spec.labels, vec!["2023", "2024"]);
    }

    #[test]
    fn test_integral_float_labels_drop_fraction() {
        let spec = ChartSpec::from_value(json!({
            "labels": [1.0, 2.5, -3.0, 7],
            "datasets": []
        }))
        .unwrap();
        assert_eq!(spec.labels, vec!["1", "2.5", "-3", "7"]);
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let raw = r#"{"labels":[2024,"x"],"datasets":[{"data":[1,2]}]}"#;
        let parsed: ChartSpec = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, ChartSpec::from_attribute(Some(raw), ATTR).unwrap());
        assert_eq!(parsed.labels, vec!["2024", "x"]);

        let err = serde_json::from_str::<ChartSpec>(r#"{"labels":[]}"#).unwrap_err();
        assert!(err.to_string().contains("datasets is missing"));
    }

    #[test]
    fn test_dataset_passes_through_unmodified() {
        let raw = json!({
            "labels": ["a"],
            "datasets": [{
                "label": "Revenue",
                "data": [4.5],
                "borderColor": "rgb(75, 192, 192)",
                "tension": 0.1
            }]
        });
        let spec = ChartSpec::from_value(raw.clone()).unwrap();

        assert_eq!(
            serde_json::to_value(&spec.datasets[0]).unwrap(),
            raw["datasets"][0]
        );
    }
}
