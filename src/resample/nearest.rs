//! Nearest-neighbor resampling kernel.

use ndarray::ArrayView2;

/// Sample a 2D array using nearest-neighbor interpolation.
///
/// Pixel (0,0) has its upper-left corner at (0.0, 0.0) and its center at
/// (0.5, 0.5), so `floor()` finds the containing pixel. Out-of-range
/// coordinates clamp to the edge. Returns `None` for an empty array.
pub fn sample<T: Copy>(src: &ArrayView2<'_, T>, x: f64, y: f64) -> Option<T> {
    let (rows, cols) = (src.nrows(), src.ncols());
    if rows == 0 || cols == 0 {
        return None;
    }

    let col = (x.floor().max(0.0) as usize).min(cols - 1);
    let row = (y.floor().max(0.0) as usize).min(rows - 1);
    Some(src[(row, col)])
}
