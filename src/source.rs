//! Road network coordinates, read once per run.

mod file;
#[cfg(feature = "postgres")]
mod postgis;

use std::ops::Deref;

use tracing::info;

use crate::common::Point;

pub use file::PointFile;
#[cfg(feature = "postgres")]
pub use postgis::{PostgisSource, ROAD_NODE_QUERY};

/// Prefix of descriptors naming a [PointFile] instead of a database.
pub const FILE_DESCRIPTOR_PREFIX: &str = "file:";

/// Read-only source of road network node coordinates.
pub trait CoordinateSource: std::fmt::Debug {
    /// Runs the underlying query, mapping each row to one [Point].
    fn query_points(&mut self) -> Result<Vec<Point>, SourceError>;

    /// Loads every point into a [Population].
    ///
    /// Fails with [SourceError::Empty] if the query returned no rows.
    fn load_points(&mut self) -> Result<Population, SourceError> {
        let population = Population::new(self.query_points()?)?;

        info!(points = population.len(), "Loaded coordinate population");

        Ok(population)
    }
}

/// Opens the coordinate source named by `descriptor`.
///
/// `file:<path>` opens a [PointFile], anything else is handed to PostgreSQL as
/// a connection string.
pub fn open(descriptor: &str) -> Result<Box<dyn CoordinateSource>, SourceError> {
    if let Some(path) = descriptor.strip_prefix(FILE_DESCRIPTOR_PREFIX) {
        return Ok(Box::new(PointFile::new(path)));
    }

    open_database(descriptor)
}

#[cfg(feature = "postgres")]
fn open_database(dbstring: &str) -> Result<Box<dyn CoordinateSource>, SourceError> {
    Ok(Box::new(PostgisSource::new(dbstring)))
}

#[cfg(not(feature = "postgres"))]
fn open_database(dbstring: &str) -> Result<Box<dyn CoordinateSource>, SourceError> {
    Err(SourceError::Unsupported(dbstring.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
/// Non-empty, immutable sequence of candidate points.
pub struct Population(Box<[Point]>);

impl Population {
    /// Returns [SourceError::Empty] if `points` is empty.
    pub fn new(points: Vec<Point>) -> Result<Self, SourceError> {
        if points.is_empty() {
            return Err(SourceError::Empty);
        }

        Ok(Population(points.into_boxed_slice()))
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }
}

impl Deref for Population {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(thiserror::Error, Debug)]
/// Failures to read a coordinate population.
pub enum SourceError {
    #[error("Coordinate query returned no rows")]
    Empty,

    #[error(transparent)]
    /// Transparent [std::io::Error]
    IO(#[from] std::io::Error),

    #[error("Line {line}: expected two real coordinates, got {content:?}")]
    InvalidLine { line: usize, content: String },

    #[cfg(feature = "postgres")]
    #[error("Database query failed: {0}")]
    Database(#[from] postgres::Error),

    #[error("No coordinate source available for {0:?}, enable the `postgres` feature")]
    Unsupported(String),
}
