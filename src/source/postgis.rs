//! Road nodes read from a PostGIS database.

use postgres::{Client, NoTls};
use tracing::debug;

use super::{CoordinateSource, SourceError};
use crate::common::Point;

/// Coordinates of every road node of the network.
pub const ROAD_NODE_QUERY: &str = "SELECT st_x(geom) AS x, st_y(geom) AS y FROM tempus.road_node";

/// PostGIS backed [CoordinateSource].
///
/// Connects lazily on [CoordinateSource::query_points] and closes the
/// connection once the rows are read.
pub struct PostgisSource {
    dbstring: String,
}

impl PostgisSource {
    /// Creates a source for a libpq style connection string, e.g. `dbname=tempus_test_db`.
    pub fn new(dbstring: impl Into<String>) -> PostgisSource {
        PostgisSource {
            dbstring: dbstring.into(),
        }
    }
}

impl std::fmt::Debug for PostgisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The connection string may carry a password.
        f.debug_struct("PostgisSource").finish_non_exhaustive()
    }
}

impl CoordinateSource for PostgisSource {
    fn query_points(&mut self) -> Result<Vec<Point>, SourceError> {
        let mut client = Client::connect(&self.dbstring, NoTls)?;

        debug!(query = ROAD_NODE_QUERY, "Querying road nodes");

        let rows = client.query(ROAD_NODE_QUERY, &[])?;

        rows.iter()
            .map(|row| -> Result<Point, SourceError> {
                Ok(Point::new(row.try_get(0usize)?, row.try_get(1usize)?))
            })
            .collect()
    }
}
