//! Linear regression fitted by gradient descent.

use ndarray::{Array1, Array2};
use ridecast_core::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Training hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressorConfig {
    /// Full-batch gradient-descent epochs
    pub epochs: usize,
    /// Learning rate (features are standardized upstream, so one rate
    /// serves all columns)
    pub learning_rate: f64,
    /// L2 penalty on the weights
    pub l2: f64,
}

impl Default for RegressorConfig {
    fn default() -> Self {
        Self {
            epochs: 500,
            learning_rate: 0.05,
            l2: 1e-4,
        }
    }
}

/// Linear regressor: `y ≈ x · w + b`.
///
/// Deterministic: weights start at zero, the bias at the target mean, and
/// full-batch descent has no sampling. Identical inputs give identical
/// fitted parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    config: RegressorConfig,
    weights: Array1<f64>,
    bias: f64,
}

impl Default for LinearRegressor {
    fn default() -> Self {
        Self::new(RegressorConfig::default())
    }
}

impl LinearRegressor {
    /// Create an unfitted regressor
    #[must_use]
    pub fn new(config: RegressorConfig) -> Self {
        Self {
            config,
            weights: Array1::zeros(0),
            bias: 0.0,
        }
    }

    /// Whether `fit` has run
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Fit on a feature matrix and target vector
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
        let n = x.nrows();
        if n == 0 {
            return Err(Error::Fit("cannot fit on zero rows".to_string()));
        }
        if y.len() != n {
            return Err(Error::Fit(format!(
                "feature rows ({n}) and target length ({}) differ",
                y.len()
            )));
        }

        let n_f = n as f64;
        let mut weights = Array1::<f64>::zeros(x.ncols());
        let mut bias = y.sum() / n_f;

        for epoch in 0..self.config.epochs {
            let residual = x.dot(&weights) + bias - y;

            let grad_w = x.t().dot(&residual) / n_f + self.config.l2 * &weights;
            let grad_b = residual.sum() / n_f;

            weights.scaled_add(-self.config.learning_rate, &grad_w);
            bias -= self.config.learning_rate * grad_b;

            if !bias.is_finite() || weights.iter().any(|w| !w.is_finite()) {
                return Err(Error::Fit(format!(
                    "diverged at epoch {epoch}; lower the learning rate"
                )));
            }
        }

        self.weights = weights;
        self.bias = bias;
        Ok(())
    }

    /// Predict targets for a feature matrix
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if !self.is_fitted() {
            return Err(Error::Fit("regressor is not fitted".to_string()));
        }
        if x.ncols() != self.weights.len() {
            return Err(Error::Fit(format!(
                "fitted on {} columns, got {}",
                self.weights.len(),
                x.ncols()
            )));
        }
        Ok(x.dot(&self.weights) + self.bias)
    }

    /// Fitted weights
    #[must_use]
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    /// Fitted bias
    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_recovers_linear_function() {
        // y = 2*x0 - 3*x1 + 5 on standardized-scale inputs
        let x = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [0.5, -0.5],
            [-1.0, 0.5],
            [0.25, 1.5],
            [-0.75, -1.0],
        ];
        let y = x.map_axis(ndarray::Axis(1), |row| 2.0 * row[0] - 3.0 * row[1] + 5.0);

        let mut model = LinearRegressor::new(RegressorConfig {
            epochs: 5000,
            learning_rate: 0.1,
            l2: 0.0,
        });
        model.fit(&x, &y).unwrap();

        assert!((model.weights()[0] - 2.0).abs() < 1e-3);
        assert!((model.weights()[1] + 3.0).abs() < 1e-3);
        assert!((model.bias() - 5.0).abs() < 1e-3);

        let pred = model.predict(&x).unwrap();
        for (p, t) in pred.iter().zip(y.iter()) {
            assert!((p - t).abs() < 1e-2);
        }
    }

    #[test]
    fn test_deterministic_fit() {
        let x = array![[0.0, 1.0], [1.0, 0.0], [1.0, 1.0], [0.5, 0.5]];
        let y = array![1.0, 2.0, 3.0, 2.5];

        let mut a = LinearRegressor::default();
        let mut b = LinearRegressor::default();
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();

        assert_eq!(a.weights(), b.weights());
        assert!((a.bias() - b.bias()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shape_errors() {
        let mut model = LinearRegressor::default();
        assert!(model
            .fit(&array![[1.0], [2.0]], &array![1.0, 2.0, 3.0])
            .is_err());

        assert!(model.predict(&array![[1.0]]).is_err()); // unfitted

        model.fit(&array![[1.0], [2.0]], &array![1.0, 2.0]).unwrap();
        assert!(model.predict(&array![[1.0, 2.0]]).is_err());
    }
}
