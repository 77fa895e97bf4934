//! Discrete CDF approximation from tabulated PDF samples.
//!
//! Used when no closed form is available, and to validate the analytical
//! family numerically: the final cumulative value of a tabulated defective
//! density approximates that accumulator's choice probability.

use crate::error::{Error, Result};

fn validate_table(xs: &[f64], densities: &[f64]) -> Result<()> {
    if xs.len() != densities.len() {
        return Err(Error::InvalidArgument(format!(
            "grid/density length mismatch: {} vs {}",
            xs.len(),
            densities.len()
        )));
    }
    if xs.len() < 2 {
        return Err(Error::InvalidArgument(format!(
            "need at least 2 tabulated points, got {}",
            xs.len()
        )));
    }
    if xs.iter().any(|x| !x.is_finite()) {
        return Err(Error::InvalidArgument("grid points must be finite".to_string()));
    }
    if densities.iter().any(|d| !d.is_finite() || *d < 0.0) {
        return Err(Error::InvalidArgument("densities must be finite and >= 0".to_string()));
    }
    Ok(())
}

/// Approximate a defective CDF from densities tabulated on an evenly spaced,
/// strictly increasing time grid.
///
/// Rectangle-rule cumulative sum `Σ density·Δt`. The output has the same
/// length as the input, is monotone non-decreasing, and its final entry
/// approximates the tabulated accumulator's choice probability (up to
/// discretization error it lies in `[0, 1]`). No normalization is applied:
/// the defect mass is the point of the exercise.
pub fn cdf_from_defective_pdf(t_grid: &[f64], densities: &[f64]) -> Result<Vec<f64>> {
    validate_table(t_grid, densities)?;

    let n = t_grid.len();
    let dt = (t_grid[n - 1] - t_grid[0]) / (n - 1) as f64;
    if !dt.is_finite() || dt <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "time grid must be strictly increasing, got span {dt} per step"
        )));
    }
    for w in t_grid.windows(2) {
        let step = w[1] - w[0];
        if step <= 0.0 || (step - dt).abs() > 1e-9 * dt + 1e-12 {
            return Err(Error::InvalidArgument(format!(
                "time grid must be evenly spaced and increasing, got step {step} vs mean {dt}"
            )));
        }
    }

    let mut out = Vec::with_capacity(n);
    let mut acc = 0.0;
    for &d in densities {
        acc += d * dt;
        out.push(acc);
    }
    Ok(out)
}

/// Approximate a normalized CDF from density samples at arbitrary, possibly
/// unsorted and unevenly spaced, positions.
///
/// Pairs are sorted by position ascending, integrated with the trapezoid
/// rule, and scaled by the total mass so the output starts at exactly `0.0`
/// and ends at exactly `1.0`. Output length equals input length and follows
/// the sorted position order.
///
/// Fails with [`Error::DegenerateInput`] when the total tabulated mass is
/// zero (an all-zero table), where normalization would divide by zero.
pub fn cdf_from_pdf(xs: &[f64], densities: &[f64]) -> Result<Vec<f64>> {
    validate_table(xs, densities)?;

    let mut pairs: Vec<(f64, f64)> = xs.iter().copied().zip(densities.iter().copied()).collect();
    pairs.sort_by(|p, q| p.0.total_cmp(&q.0));

    let mut cum = Vec::with_capacity(pairs.len());
    cum.push(0.0);
    let mut acc = 0.0;
    for w in pairs.windows(2) {
        let (x0, d0) = w[0];
        let (x1, d1) = w[1];
        acc += 0.5 * (d0 + d1) * (x1 - x0);
        cum.push(acc);
    }

    if !acc.is_finite() || acc <= 0.0 {
        return Err(Error::DegenerateInput(format!(
            "total tabulated mass is {acc}; cannot normalize"
        )));
    }
    Ok(cum.into_iter().map(|c| c / acc).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_and_arity_contracts() {
        assert!(cdf_from_defective_pdf(&[0.0, 1.0], &[0.1]).is_err());
        assert!(cdf_from_defective_pdf(&[0.0], &[0.1]).is_err());
        assert!(cdf_from_pdf(&[0.0, 1.0, 2.0], &[0.1, 0.2]).is_err());
        assert!(cdf_from_pdf(&[0.5], &[0.1]).is_err());
    }

    #[test]
    fn test_uneven_grid_rejected() {
        let t = [0.0, 0.1, 0.25, 0.3];
        let d = [0.1, 0.2, 0.2, 0.1];
        assert!(cdf_from_defective_pdf(&t, &d).is_err());
        // The general helper accepts the same table.
        assert!(cdf_from_pdf(&t, &d).is_ok());
    }

    #[test]
    fn test_decreasing_grid_rejected() {
        assert!(cdf_from_defective_pdf(&[1.0, 0.5, 0.0], &[0.1, 0.1, 0.1]).is_err());
    }

    #[test]
    fn test_rectangle_cumsum() {
        let t = [0.0, 0.5, 1.0, 1.5];
        let d = [0.2, 0.4, 0.4, 0.2];
        let c = cdf_from_defective_pdf(&t, &d).unwrap();
        assert_eq!(c.len(), 4);
        assert_relative_eq!(c[0], 0.1, epsilon = 1e-15);
        assert_relative_eq!(c[1], 0.3, epsilon = 1e-15);
        assert_relative_eq!(c[2], 0.5, epsilon = 1e-15);
        assert_relative_eq!(c[3], 0.6, epsilon = 1e-15);
        for w in c.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_uniform_density_gives_linear_cdf() {
        let xs: Vec<f64> = (0..=10).map(|i| i as f64 * 0.1).collect();
        let ds = vec![1.0; xs.len()];
        let c = cdf_from_pdf(&xs, &ds).unwrap();
        assert_eq!(c.len(), xs.len());
        assert_eq!(c[0], 0.0);
        assert_eq!(*c.last().unwrap(), 1.0);
        for (i, &ci) in c.iter().enumerate() {
            assert_relative_eq!(ci, i as f64 / 10.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let xs = [1.0, 0.0, 0.5];
        let ds = [2.0, 0.0, 1.0];
        // Sorted: x = [0.0, 0.5, 1.0], density = [0.0, 1.0, 2.0] (triangle-ish).
        let c = cdf_from_pdf(&xs, &ds).unwrap();
        let total = 0.25 + 0.75;
        assert_eq!(c[0], 0.0);
        assert_relative_eq!(c[1], 0.25 / total, epsilon = 1e-12);
        assert_eq!(c[2], 1.0);
    }

    #[test]
    fn test_all_zero_table_is_degenerate() {
        let xs = [0.0, 1.0, 2.0];
        let err = cdf_from_pdf(&xs, &[0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput(_)), "got {err:?}");
    }

    #[test]
    fn test_negative_density_rejected() {
        assert!(cdf_from_pdf(&[0.0, 1.0], &[0.1, -0.1]).is_err());
        assert!(cdf_from_defective_pdf(&[0.0, 1.0], &[f64::NAN, 0.1]).is_err());
    }
}
