//! Main Crate Error

use crate::bench::Phase;
use crate::client::RequestError;
use crate::common::Point;
use crate::recorder::MetricsError;
use crate::source::SourceError;

/// Alias for results of benchmark operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
/// Itinerary benchmark error enum.
///
/// Every variant is fatal to a run.
pub enum Error {
    /// The coordinate source could not be read, or held no points.
    #[error("Coordinate source unavailable: {0}")]
    DataUnavailable(#[from] SourceError),

    /// The request of a trial failed in transport or on the server.
    #[error("Trial {trial}: request from {origin} to {destination} failed: {source}")]
    RequestFailed {
        trial: usize,
        origin: Point,
        destination: Point,
        source: RequestError,
    },

    /// The response of a trial did not carry a usable algorithm time.
    #[error("Trial {trial}: malformed metrics for request from {origin} to {destination}: {source}")]
    MalformedMetrics {
        trial: usize,
        origin: Point,
        destination: Point,
        source: MetricsError,
    },

    /// A benchmark only runs once, from [Phase::Initializing].
    #[error("Benchmark can not run from the {0:?} phase")]
    NotRunnable(Phase),
}
