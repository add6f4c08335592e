//! Ring file loading and tile export
//!
//! A ring file holds either a bare coordinate array `[[x, y], ...]` or an
//! object carrying polygon-style `coordinates`. Polygon coordinates arrive
//! as a list of rings; only the outer ring is read, and one extra nesting
//! level is unwrapped the way the original data source wraps its polygons.

use crate::algorithm::tiler::TilingResult;
use crate::io::error::{Result, TilingError, ring_load_error};
use crate::spatial::{Point, Ring};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// Load a polygon ring from a JSON file
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not valid JSON, holds
/// no coordinate array, or the coordinates fail ring validation.
pub fn load_ring(path: &Path) -> Result<Ring> {
    let text = fs::read_to_string(path).map_err(|e| TilingError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })?;

    let document: Value =
        serde_json::from_str(&text).map_err(|e| ring_load_error(path, &e))?;

    let coordinates = coordinate_array(&document)
        .ok_or_else(|| ring_load_error(path, &"no coordinate array found"))?;

    let mut points = Vec::with_capacity(coordinates.len());
    for entry in coordinates {
        let point = point_from(entry)
            .ok_or_else(|| ring_load_error(path, &format!("malformed coordinate pair: {entry}")))?;
        points.push(point);
    }

    Ring::new(points)
}

/// Write a tiling result as JSON
///
/// The output object carries the stride, the candidate and accepted counts,
/// and the accepted tiles as `[min_x, min_y, max_x, max_y]` rectangles.
///
/// # Errors
///
/// Returns an error when the parent directory cannot be created or the file
/// cannot be written.
pub fn export_tiles(result: &TilingResult, output_path: &Path) -> Result<()> {
    let rectangles: Vec<Value> = result
        .tiles()
        .iter()
        .map(|tile| json!(tile.as_rect()))
        .collect();

    let document = json!({
        "stride": result.stride(),
        "candidates": result.candidates(),
        "accepted": result.accepted(),
        "tiles": rectangles,
    });

    let text = serde_json::to_string_pretty(&document).map_err(|e| TilingError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "serialize",
        source: std::io::Error::other(e),
    })?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    fs::write(output_path, text).map_err(|e| TilingError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write",
        source: e,
    })
}

// Accepts a bare ring, an object with "coordinates", and polygon nesting
// ([[...ring...]]), taking the outer ring when several are present.
fn coordinate_array(document: &Value) -> Option<&Vec<Value>> {
    let array = match document {
        Value::Array(items) => items,
        Value::Object(fields) => match fields.get("coordinates") {
            Some(Value::Array(items)) => items,
            _ => return None,
        },
        _ => return None,
    };

    let first_entry = array.first().and_then(Value::as_array);
    let nested = first_entry.is_some_and(|inner| inner.first().is_some_and(Value::is_array));
    if nested { first_entry } else { Some(array) }
}

fn point_from(entry: &Value) -> Option<Point> {
    let pair = entry.as_array()?;
    let x = pair.first()?.as_f64()?;
    let y = pair.get(1)?.as_f64()?;
    Some(Point::new(x, y))
}
