//! Feature scaling.

use ndarray::Array2;
use ridecast_core::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Per-column z-score scaler.
///
/// Stds are floored at 1e-8 so constant columns (location ids in a
/// single-location run, quiet overnight hours) don't divide by zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Minimum std used in place of a degenerate column's
    const STD_FLOOR: f64 = 1e-8;

    /// Create an unfitted scaler
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `fit` has run
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        !self.means.is_empty()
    }

    /// Learn column statistics from a feature matrix
    pub fn fit(&mut self, x: &Array2<f64>) -> Result<()> {
        let n = x.nrows();
        if n == 0 {
            return Err(Error::Fit("cannot fit scaler on zero rows".to_string()));
        }

        self.means = x
            .columns()
            .into_iter()
            .map(|col| col.sum() / n as f64)
            .collect();

        self.stds = x
            .columns()
            .into_iter()
            .zip(&self.means)
            .map(|(col, &mean)| {
                let var = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
                var.sqrt().max(Self::STD_FLOOR)
            })
            .collect();

        Ok(())
    }

    /// Normalize a matrix with the learned statistics
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.means.len() {
            return Err(Error::Fit(format!(
                "scaler fitted on {} columns, got {}",
                self.means.len(),
                x.ncols()
            )));
        }

        let mut out = x.clone();
        for (j, mut col) in out.columns_mut().into_iter().enumerate() {
            col.mapv_inplace(|v| (v - self.means[j]) / self.stds[j]);
        }
        Ok(out)
    }

    /// Fit and transform in one pass
    pub fn fit_transform(&mut self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.fit(x)?;
        self.transform(x)
    }

    /// Learned column means
    #[must_use]
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Learned column stds
    #[must_use]
    pub fn stds(&self) -> &[f64] {
        &self.stds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_statistics() {
        let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let mut scaler = StandardScaler::new();
        scaler.fit(&x).unwrap();

        assert!((scaler.means()[0] - 2.0).abs() < 1e-12);
        assert!((scaler.means()[1] - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_zero_mean_unit_std() {
        let x = array![[1.0, 5.0], [3.0, 9.0], [5.0, 13.0], [7.0, 17.0]];
        let mut scaler = StandardScaler::new();
        let z = scaler.fit_transform(&x).unwrap();

        for col in z.columns() {
            let mean: f64 = col.sum() / col.len() as f64;
            let var: f64 = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / col.len() as f64;
            assert!(mean.abs() < 1e-12);
            assert!((var - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_constant_column_is_safe() {
        let x = array![[7.0, 1.0], [7.0, 2.0], [7.0, 3.0]];
        let mut scaler = StandardScaler::new();
        let z = scaler.fit_transform(&x).unwrap();
        assert!(z.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_width_mismatch() {
        let mut scaler = StandardScaler::new();
        scaler.fit(&array![[1.0, 2.0]]).unwrap();
        assert!(scaler.transform(&array![[1.0]]).is_err());
    }
}
