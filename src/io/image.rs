//! PNG previews of scan results
//!
//! Renders the candidate grid cell by cell: accepted candidates in green,
//! rejected ones in grey, on a one-cell background margin. The render reads
//! only the acceptance mask, so it reflects exactly what the scan decided.

use crate::algorithm::tiler::TilingResult;
use crate::io::configuration::{
    ACCEPTED_COLOR, BACKGROUND_COLOR, PREVIEW_CELL_PIXELS, REJECTED_COLOR,
};
use crate::io::error::{Result, TilingError, invalid_input};
use image::{ImageBuffer, Rgb};
use ndarray::Array2;
use std::path::Path;

// Cell classes in the preview raster
const CLASS_BACKGROUND: u8 = 0;
const CLASS_REJECTED: u8 = 1;
const CLASS_ACCEPTED: u8 = 2;

/// Render the candidate grid of a result to a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The scan produced no candidates (nothing to render)
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview(result: &TilingResult, output_path: &Path) -> Result<()> {
    let grid = result.grid();
    if grid.columns == 0 || grid.rows == 0 {
        return Err(invalid_input(
            "grid",
            &format!("{}x{}", grid.columns, grid.rows),
            &"the scan produced no candidates to render",
        ));
    }

    // One margin cell on every side; raster rows grow downward while scan
    // rows grow upward
    let mut cells = Array2::<u8>::from_elem((grid.rows + 2, grid.columns + 2), CLASS_BACKGROUND);
    for column in 0..grid.columns {
        for row in 0..grid.rows {
            let class = if result.is_accepted(column, row) {
                CLASS_ACCEPTED
            } else {
                CLASS_REJECTED
            };
            if let Some(cell) = cells.get_mut([grid.rows - row, column + 1]) {
                *cell = class;
            }
        }
    }

    let scale = PREVIEW_CELL_PIXELS;
    let width = (grid.columns as u32 + 2) * scale;
    let height = (grid.rows as u32 + 2) * scale;
    let preview = ImageBuffer::from_fn(width, height, |pixel_x, pixel_y| {
        let class = cells
            .get([(pixel_y / scale) as usize, (pixel_x / scale) as usize])
            .copied()
            .unwrap_or(CLASS_BACKGROUND);
        let color = match class {
            CLASS_ACCEPTED => ACCEPTED_COLOR,
            CLASS_REJECTED => REJECTED_COLOR,
            _ => BACKGROUND_COLOR,
        };
        Rgb(color)
    });

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    preview
        .save(output_path)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
