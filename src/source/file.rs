//! Coordinates read from a plain text file, one `x y` or `x,y` pair per line.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{CoordinateSource, SourceError};
use crate::common::Point;

#[derive(Debug, Clone)]
/// A text file of road node coordinates.
///
/// Blank lines and lines starting with `#` are skipped.
pub struct PointFile {
    path: PathBuf,
}

impl PointFile {
    pub fn new(path: impl AsRef<Path>) -> PointFile {
        PointFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CoordinateSource for PointFile {
    fn query_points(&mut self) -> Result<Vec<Point>, SourceError> {
        debug!(path = ?self.path, "Reading coordinate file");

        parse_points(&fs::read_to_string(&self.path)?)
    }
}

fn parse_points(content: &str) -> Result<Vec<Point>, SourceError> {
    let mut points = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let point = parse_line(trimmed).ok_or_else(|| SourceError::InvalidLine {
            line: index + 1,
            content: line.to_string(),
        })?;

        points.push(point);
    }

    Ok(points)
}

fn parse_line(line: &str) -> Option<Point> {
    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty());

    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;

    if fields.next().is_some() {
        return None;
    }

    Some(Point::new(x, y))
}
