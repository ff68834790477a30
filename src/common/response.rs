//! Responses returned by a route computation plugin.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use serde::Deserialize;

use crate::common::Point;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// Result of an itinerary request.
pub struct Response {
    /// Metrics reported by the plugin, e.g. `time_s`.
    #[serde(default)]
    pub metrics: HashMap<String, MetricValue>,
    /// Geometry of every computed itinerary.
    #[serde(default)]
    pub results: Vec<Vec<Point>>,
}

impl Response {
    /// Creates a response carrying only metrics.
    pub fn with_metrics<K, V, I>(metrics: I) -> Response
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MetricValue>,
    {
        Response {
            metrics: metrics
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            results: Vec::new(),
        }
    }

    pub fn metric(&self, key: &str) -> Option<&MetricValue> {
        self.metrics.get(key)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
/// A metric value, which plugins report either as a number or as a numeric string.
///
/// Any other JSON value is kept as is and never reads as a number.
pub enum MetricValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl MetricValue {
    /// Returns the value as a real number, parsing it if it was reported as text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(number) => Some(*number),
            MetricValue::Text(text) => text.trim().parse().ok(),
            MetricValue::Other(_) => None,
        }
    }
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(number) => write!(f, "{number}"),
            MetricValue::Text(text) => write!(f, "{text:?}"),
            MetricValue::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(number: f64) -> Self {
        MetricValue::Number(number)
    }
}

impl From<&str> for MetricValue {
    fn from(text: &str) -> Self {
        MetricValue::Text(text.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(text: String) -> Self {
        MetricValue::Text(text)
    }
}
