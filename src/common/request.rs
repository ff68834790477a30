//! Itinerary requests submitted to a route computation plugin.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::Point;

/// Plugin specific options, e.g. `{"prepare_result": 0}` or `{"Isochrone/limit": 10.0}`.
pub type PluginOptions = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Request for an itinerary from `origin` through every [Step] in order.
pub struct ItineraryRequest {
    /// Name of the plugin computing the itinerary.
    pub plugin_name: String,
    pub plugin_options: PluginOptions,
    pub origin: Point,
    pub steps: Vec<Step>,
    /// Optimizing criteria, omitted when empty so the plugin uses its own default.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub criteria: Vec<Cost>,
    /// Transport type ids (powers of 2) the plugin may use, omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_transport_modes: Vec<u32>,
}

impl ItineraryRequest {
    /// Creates a request with a single step from `origin` to `destination`.
    pub fn single_step(
        plugin_name: impl Into<String>,
        plugin_options: PluginOptions,
        origin: Point,
        destination: Point,
    ) -> ItineraryRequest {
        ItineraryRequest {
            plugin_name: plugin_name.into(),
            plugin_options,
            origin,
            steps: vec![Step::new(destination)],
            criteria: Vec::new(),
            allowed_transport_modes: Vec::new(),
        }
    }

    pub fn with_criteria(mut self, criteria: Vec<Cost>) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_allowed_transport_modes(mut self, modes: Vec<u32>) -> Self {
        self.allowed_transport_modes = modes;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// One leg of an itinerary.
pub struct Step {
    pub destination: Point,
}

impl Step {
    pub fn new(destination: Point) -> Step {
        Step { destination }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
/// Cost identifiers usable as optimizing criteria.
pub enum Cost {
    Distance = 1,
    Duration = 2,
    Price = 3,
    Carbon = 4,
    Calories = 5,
    NumberOfChanges = 6,
}

impl From<Cost> for u8 {
    fn from(cost: Cost) -> Self {
        cost as u8
    }
}
