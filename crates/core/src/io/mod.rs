//! Map-file reading
//!
//! The textual terrain format:
//!
//! ```text
//! <rows> <resolution> <smoothness>
//! <altitudes>
//! ...
//! <altitudes>
//! ```
//!
//! e.g.
//!
//! ```text
//! 3 50 10
//! 0 0 1 0
//! 0 2 8 0
//! 1 3 6 4
//! ```
//!
//! `resolution` may be integral or fractional; `smoothness` is an integer.
//! Parameter range checks (`> 0`) happen in the pipeline stages, not here.

use crate::error::{Error, Result};
use crate::grid::HeightGrid;
use std::fs;
use std::path::Path;

/// A parsed map file: the altitude grid plus its two render parameters.
#[derive(Debug, Clone)]
pub struct MapFile {
    pub grid: HeightGrid,
    /// Scale factor converting projected coordinates into pixel space
    pub resolution: f64,
    /// Divisor rescaling altitude into the depth channel
    pub smoothness: i32,
}

/// Read and parse a map file from disk.
pub fn read_map<P: AsRef<Path>>(path: P) -> Result<MapFile> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

/// Parse map-file text.
///
/// Errors carry 1-based line numbers.
pub fn parse_map(text: &str) -> Result<MapFile> {
    let mut lines = text.lines();

    let header = lines.next().ok_or_else(|| Error::Parse {
        line: 1,
        reason: "empty file".to_string(),
    })?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(Error::Parse {
            line: 1,
            reason: format!(
                "expected `<rows> <resolution> <smoothness>`, got {} fields",
                fields.len()
            ),
        });
    }

    let rows: usize = fields[0].parse().map_err(|_| Error::Parse {
        line: 1,
        reason: format!("invalid row count: {}", fields[0]),
    })?;
    let resolution: f64 = fields[1].parse().map_err(|_| Error::Parse {
        line: 1,
        reason: format!("invalid resolution: {}", fields[1]),
    })?;
    let smoothness: i32 = fields[2].parse().map_err(|_| Error::Parse {
        line: 1,
        reason: format!("invalid smoothness: {}", fields[2]),
    })?;

    let mut altitude_rows = Vec::with_capacity(rows);
    for i in 0..rows {
        let line_no = i + 2;
        let line = lines.next().ok_or_else(|| Error::Parse {
            line: line_no,
            reason: format!("expected {} altitude rows, found {}", rows, i),
        })?;

        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>().map_err(|_| Error::Parse {
                    line: line_no,
                    reason: format!("invalid altitude: {}", tok),
                })
            })
            .collect::<Result<Vec<i32>>>()?;
        altitude_rows.push(row);
    }

    let grid = HeightGrid::from_rows(altitude_rows)?;
    Ok(MapFile {
        grid,
        resolution,
        smoothness,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_map() {
        let map = parse_map("3 50 10\n0 0 1 0\n0 2 8 0\n1 3 6 4\n").unwrap();
        assert_eq!(map.grid.shape(), (3, 4));
        assert_eq!(map.resolution, 50.0);
        assert_eq!(map.smoothness, 10);
        assert_eq!(map.grid.get(1, 2).unwrap(), 8);
    }

    #[test]
    fn parse_fractional_resolution() {
        let map = parse_map("1 2.5 1\n0 1\n").unwrap();
        assert_eq!(map.resolution, 2.5);
    }

    #[test]
    fn parse_negative_altitudes() {
        let map = parse_map("2 1 1\n-3 0\n2 -7\n").unwrap();
        assert_eq!(map.grid.get(0, 0).unwrap(), -3);
        assert_eq!(map.grid.get(1, 1).unwrap(), -7);
    }

    #[test]
    fn parse_rejects_bad_header() {
        assert!(matches!(
            parse_map(""),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_map("3 50\n"),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_map("x 50 10\n"),
            Err(Error::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn parse_rejects_missing_rows() {
        let err = parse_map("3 50 10\n0 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn parse_rejects_bad_altitude() {
        let err = parse_map("1 1 1\n0 oops\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = parse_map("2 1 1\n0 1 2\n3 4\n").unwrap_err();
        assert!(matches!(err, Error::RaggedGrid { .. }));
    }
}
