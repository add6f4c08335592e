//! Runtime defaults and output constants

// Default values for configurable parameters
/// Default tile side length, in input coordinate units
///
/// Chosen for degree-valued rings, where 0.005° is roughly 500 m of ground
/// at the equator; callers working in other units pass their own stride.
pub const DEFAULT_STRIDE: f64 = 0.005;

// Output settings
/// Suffix added to tile output filenames
pub const OUTPUT_SUFFIX: &str = "_tiles";
/// Suffix added to preview image filenames
pub const PREVIEW_SUFFIX: &str = "_preview";

// Preview rendering
/// Pixel edge of one candidate cell in preview renders
pub const PREVIEW_CELL_PIXELS: u32 = 8;
/// Preview color for accepted candidates (RGB)
pub const ACCEPTED_COLOR: [u8; 3] = [46, 160, 67];
/// Preview color for rejected candidates (RGB)
pub const REJECTED_COLOR: [u8; 3] = [205, 209, 214];
/// Preview background color (RGB)
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
