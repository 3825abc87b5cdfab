//! S-parameter array reshaping helpers

use anyhow::{bail, Result};
use ndarray::{s, Array3};
use num_complex::Complex64;

/// Expand `[nfreq, n, n]` S-parameters to `[nfreq, nports, nports]`.
///
/// Existing entries keep their indices; new rows and columns are zero.
pub fn pad_ports(s: &Array3<Complex64>, nports: usize) -> Result<Array3<Complex64>> {
    let (nfreq, rows, cols) = s.dim();
    if rows != cols {
        bail!("S-parameter matrices must be square, got {}x{}", rows, cols);
    }
    if nports < rows {
        bail!("Cannot pad a {}-port network down to {} ports", rows, nports);
    }

    let mut padded = Array3::<Complex64>::zeros((nfreq, nports, nports));
    padded.slice_mut(s![.., ..rows, ..rows]).assign(s);
    Ok(padded)
}

/// Swap S12 and S21 at every frequency point
pub fn swap_s12_s21(s: &mut Array3<Complex64>) -> Result<()> {
    let (_, rows, cols) = s.dim();
    if rows < 2 || cols < 2 {
        bail!("S12/S21 swap needs at least 2 ports, got {}", rows.min(cols));
    }

    for mut matrix in s.outer_iter_mut() {
        matrix.swap([0, 1], [1, 0]);
    }
    Ok(())
}
