//! Bilinear interpolation resampling kernel.

use ndarray::ArrayView2;
use num_traits::NumCast;

/// Sample a 2D array using bilinear interpolation.
///
/// Subtracts 0.5 from input coordinates to center on pixel centers
/// (pixel center at col+0.5, row+0.5).
///
/// Performs 2×2 weighted interpolation. Coordinates past the outer pixel
/// centers clamp to the edge, so every position on a non-empty array has a
/// value. Returns `None` for an empty array.
pub fn sample<T>(src: &ArrayView2<'_, T>, x: f64, y: f64) -> Option<f64>
where
    T: Copy + NumCast,
{
    let (rows, cols) = (src.nrows(), src.ncols());
    if rows == 0 || cols == 0 {
        return None;
    }

    // Convert from corner-based to center-based coordinates
    let cx = (x - 0.5).clamp(0.0, (cols - 1) as f64);
    let cy = (y - 0.5).clamp(0.0, (rows - 1) as f64);

    let x0 = cx.floor() as usize;
    let y0 = cy.floor() as usize;
    let x1 = (x0 + 1).min(cols - 1);
    let y1 = (y0 + 1).min(rows - 1);

    let f00: f64 = NumCast::from(src[(y0, x0)])?;
    let f10: f64 = NumCast::from(src[(y0, x1)])?;
    let f01: f64 = NumCast::from(src[(y1, x0)])?;
    let f11: f64 = NumCast::from(src[(y1, x1)])?;

    let dx = cx - x0 as f64;
    let dy = cy - y0 as f64;

    Some(
        f00 * (1.0 - dx) * (1.0 - dy)
            + f10 * dx * (1.0 - dy)
            + f01 * (1.0 - dx) * dy
            + f11 * dx * dy,
    )
}
