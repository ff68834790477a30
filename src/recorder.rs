//! Per trial measurements and run level accumulators.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use crate::common::{distance_proxy, Point, Response};

/// Metric holding the algorithm time reported by the plugin, in seconds.
pub const TIME_METRIC: &str = "time_s";

#[derive(Debug, Clone, Copy, PartialEq)]
/// A sampled origin/destination pair and its distance proxy.
pub struct Sample {
    pub origin: Point,
    pub destination: Point,
    pub distance_proxy: f64,
}

impl Sample {
    pub fn new(origin: Point, destination: Point) -> Sample {
        Sample {
            origin,
            destination,
            distance_proxy: distance_proxy(&origin, &destination),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Measurements of one completed trial.
pub struct Trial {
    pub origin: Point,
    pub destination: Point,
    /// Squared Euclidean distance between origin and destination.
    pub distance_proxy: f64,
    /// Seconds the plugin reports spending in its algorithm.
    pub algorithm_time: f64,
    /// Seconds observed around the request, network and marshalling included.
    pub roundtrip_time: f64,
}

/// Reads the [TIME_METRIC] of a response as seconds.
pub fn algorithm_time(response: &Response) -> Result<f64, MetricsError> {
    let value = response
        .metric(TIME_METRIC)
        .ok_or(MetricsError::Missing(TIME_METRIC))?;

    value.as_f64().ok_or_else(|| MetricsError::Unparseable {
        key: TIME_METRIC,
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, Default)]
/// Index aligned measurement sequences of a run, and their running totals.
pub struct Recorder {
    algorithm_time: Vec<f64>,
    roundtrip_time: Vec<f64>,
    distance_proxy: Vec<f64>,

    total_algorithm_time: f64,
    total_roundtrip_time: f64,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Recorder {
            algorithm_time: Vec::with_capacity(capacity),
            roundtrip_time: Vec::with_capacity(capacity),
            distance_proxy: Vec::with_capacity(capacity),
            ..Default::default()
        }
    }

    /// Extracts the algorithm time from `response`, pairs it with the
    /// observed `roundtrip` and appends the trial.
    ///
    /// Nothing is appended when the metric is missing or malformed.
    pub fn record(
        &mut self,
        sample: Sample,
        response: &Response,
        roundtrip: Duration,
    ) -> Result<Trial, MetricsError> {
        let trial = Trial {
            origin: sample.origin,
            destination: sample.destination,
            distance_proxy: sample.distance_proxy,
            algorithm_time: algorithm_time(response)?,
            roundtrip_time: roundtrip.as_secs_f64(),
        };

        self.push(&trial);

        Ok(trial)
    }

    fn push(&mut self, trial: &Trial) {
        self.algorithm_time.push(trial.algorithm_time);
        self.roundtrip_time.push(trial.roundtrip_time);
        self.distance_proxy.push(trial.distance_proxy);

        self.total_algorithm_time += trial.algorithm_time;
        self.total_roundtrip_time += trial.roundtrip_time;
    }

    // === Getters ===

    /// Number of recorded trials.
    pub fn len(&self) -> usize {
        self.algorithm_time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithm_time.is_empty()
    }

    pub fn algorithm_time(&self) -> &[f64] {
        &self.algorithm_time
    }

    pub fn roundtrip_time(&self) -> &[f64] {
        &self.roundtrip_time
    }

    pub fn distance_proxy(&self) -> &[f64] {
        &self.distance_proxy
    }

    pub fn total_algorithm_time(&self) -> f64 {
        self.total_algorithm_time
    }

    pub fn total_roundtrip_time(&self) -> f64 {
        self.total_roundtrip_time
    }

    /// `(algorithm_time, distance_proxy)` of every trial, in trial order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.algorithm_time
            .iter()
            .copied()
            .zip(self.distance_proxy.iter().copied())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            trials: self.len(),
            total_algorithm_time: self.total_algorithm_time,
            total_roundtrip_time: self.total_roundtrip_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Run totals.
pub struct Summary {
    pub trials: usize,
    pub total_algorithm_time: f64,
    pub total_roundtrip_time: f64,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} trials, algorithm time {:.6}s, round-trip time {:.6}s",
            self.trials, self.total_algorithm_time, self.total_roundtrip_time
        )
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
/// A response without a usable timing metric.
pub enum MetricsError {
    #[error("Missing metric {0:?}")]
    Missing(&'static str),

    #[error("Metric {key:?} is not a real number: {value}")]
    Unparseable { key: &'static str, value: String },
}
