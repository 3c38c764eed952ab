//! Persistence for point values as versioned text records.
//!
//! Each point is archived as one whitespace-separated line carrying a
//! record tag followed by the scalar fields in canonical order:
//!
//! ```text
//! POINTS 1
//! POINT2 <x> <y>
//! POINT3 <x> <y> <z>
//! STEREO_POINT2 <uL> <uR> <v>
//! ```
//!
//! The record tags, the field order, and the field count are the stability
//! contract of the format; changing any of them requires bumping
//! [`FORMAT_VERSION`]. The `POINTS <version>` header must be the first
//! non-comment line of a file. Lines starting with `#` are comments.

use crate::geometry::{point2::Point2, point3::Point3, stereo_point2::StereoPoint2};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Current version of the record format.
pub const FORMAT_VERSION: u32 = 1;

/// Errors that can occur during point record reading/writing
#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid number format at line {line}: {value}")]
    InvalidNumber { line: usize, value: String },

    #[error("Missing required fields at line {line}")]
    MissingFields { line: usize },

    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(u32),
}

/// A point value tagged with its concrete type, as stored on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum PointRecord {
    Point2(Point2),
    Point3(Point3),
    StereoPoint2(StereoPoint2),
}

impl From<Point2> for PointRecord {
    fn from(p: Point2) -> Self {
        PointRecord::Point2(p)
    }
}

impl From<Point3> for PointRecord {
    fn from(p: Point3) -> Self {
        PointRecord::Point3(p)
    }
}

impl From<StereoPoint2> for PointRecord {
    fn from(p: StereoPoint2) -> Self {
        PointRecord::StereoPoint2(p)
    }
}

/// Encode a single record as one line, fields in canonical order.
pub fn encode_record(record: &PointRecord) -> String {
    match record {
        PointRecord::Point2(p) => format!("POINT2 {} {}", p.x(), p.y()),
        PointRecord::Point3(p) => format!("POINT3 {} {} {}", p.x(), p.y(), p.z()),
        PointRecord::StereoPoint2(p) => {
            format!("STEREO_POINT2 {} {} {}", p.ul(), p.ur(), p.v())
        }
    }
}

/// Parse one record line. `line_num` is 1-based and used for error reporting.
pub fn parse_record(line: &str, line_num: usize) -> Result<PointRecord, IoError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Err(IoError::MissingFields { line: line_num });
    }

    let fields = parse_fields(&parts[1..], line_num)?;
    match parts[0] {
        "POINT2" => {
            check_field_count(&fields, 2, line_num)?;
            Ok(PointRecord::Point2(Point2::new(fields[0], fields[1])))
        }
        "POINT3" => {
            check_field_count(&fields, 3, line_num)?;
            Ok(PointRecord::Point3(Point3::new(
                fields[0], fields[1], fields[2],
            )))
        }
        "STEREO_POINT2" => {
            check_field_count(&fields, 3, line_num)?;
            Ok(PointRecord::StereoPoint2(StereoPoint2::new(
                fields[0], fields[1], fields[2],
            )))
        }
        other => Err(IoError::UnsupportedRecordType(other.to_string())),
    }
}

fn parse_fields(parts: &[&str], line_num: usize) -> Result<Vec<f64>, IoError> {
    parts
        .iter()
        .map(|value| {
            value.parse::<f64>().map_err(|_| IoError::InvalidNumber {
                line: line_num,
                value: value.to_string(),
            })
        })
        .collect()
}

fn check_field_count(fields: &[f64], expected: usize, line_num: usize) -> Result<(), IoError> {
    if fields.len() != expected {
        return Err(IoError::MissingFields { line: line_num });
    }
    Ok(())
}

/// Write records to a file, preceded by the `POINTS <version>` header.
pub fn write_points<P: AsRef<Path>>(records: &[PointRecord], path: P) -> Result<(), IoError> {
    let mut content = format!("POINTS {FORMAT_VERSION}\n");
    for record in records {
        content.push_str(&encode_record(record));
        content.push('\n');
    }
    fs::write(path.as_ref(), content)?;
    tracing::debug!(
        "Wrote {} point records to {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Read records from a file written by [`write_points`].
///
/// Fails with [`IoError::UnsupportedVersion`] if the header names a format
/// version this implementation does not understand.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<PointRecord>, IoError> {
    let content = fs::read_to_string(path.as_ref())?;

    let mut records = Vec::new();
    let mut header_seen = false;
    for (idx, raw_line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if !header_seen {
            let version = parse_header(line, line_num)?;
            if version != FORMAT_VERSION {
                return Err(IoError::UnsupportedVersion(version));
            }
            header_seen = true;
            continue;
        }

        records.push(parse_record(line, line_num)?);
    }

    if !header_seen {
        return Err(IoError::Parse {
            line: 0,
            message: "missing POINTS header".to_string(),
        });
    }

    tracing::debug!(
        "Read {} point records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

fn parse_header(line: &str, line_num: usize) -> Result<u32, IoError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "POINTS" {
        return Err(IoError::Parse {
            line: line_num,
            message: format!("expected 'POINTS <version>' header, got '{line}'"),
        });
    }
    parts[1].parse::<u32>().map_err(|_| IoError::InvalidNumber {
        line: line_num,
        value: parts[1].to_string(),
    })
}
