#![doc = include_str!("../README.md")]
//! ## Feature flags
#![doc = document_features::document_features!()]
//!

mod common;

pub mod bench;
pub mod client;
pub mod dispatcher;
mod error;
pub mod recorder;
pub mod sampler;
pub mod source;

pub use crate::common::{
    distance_proxy, Cost, ItineraryRequest, MetricValue, PluginOptions, Point, Response, Step,
};
pub use bench::{Benchmark, Config, Phase};
pub use client::{Client, HttpClient, RequestError};
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use recorder::{MetricsError, Recorder, Sample, Summary, Trial};
pub use sampler::{RandomSampler, Sampler};
pub use source::{CoordinateSource, Population, SourceError};
