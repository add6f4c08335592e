//! Stride-derived decimal quantization
//!
//! Output coordinates are rounded to a precision chosen from the stride so
//! quantization error stays well below one tile width regardless of scale.

use num_traits::Float;

/// Highest decimal count honored by quantization
pub const MAX_DECIMALS: u32 = 12;

/// Decimal places appropriate for a given stride
///
/// One decimal more than the stride's leading magnitude, so the worst-case
/// rounding error of `0.5 * 10^-d` is always below a tenth of a tile width.
/// Strides of 1.0 or more round to a single decimal; the result never
/// exceeds [`MAX_DECIMALS`].
pub fn decimals_for_stride(stride: f64) -> u32 {
    if !stride.is_finite() || stride >= 1.0 || stride <= 0.0 {
        return 1;
    }
    let magnitude = (-stride.log10()).ceil() as u32;
    (magnitude + 1).min(MAX_DECIMALS)
}

/// Round a value to a fixed number of decimal places
pub fn round_to_decimals<F: Float>(value: F, decimals: u32) -> F {
    let factor = F::from(10f64.powi(decimals.min(MAX_DECIMALS) as i32)).unwrap_or_else(F::one);
    (value * factor).round() / factor
}
