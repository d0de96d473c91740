//! Regression metrics.

use ndarray::Array1;
use ridecast_core::error::{Error, Result};
use statrs::statistics::Statistics;

/// Mean absolute error, the promotion metric for registered models
pub fn mean_absolute_error(truth: &Array1<f64>, predicted: &Array1<f64>) -> Result<f64> {
    check_lengths(truth, predicted)?;
    let abs_errors: Vec<f64> = truth
        .iter()
        .zip(predicted.iter())
        .map(|(t, p)| (t - p).abs())
        .collect();
    Ok(abs_errors.mean())
}

/// Root mean squared error, reported alongside MAE for diagnostics
pub fn root_mean_squared_error(truth: &Array1<f64>, predicted: &Array1<f64>) -> Result<f64> {
    check_lengths(truth, predicted)?;
    let sq_errors: Vec<f64> = truth
        .iter()
        .zip(predicted.iter())
        .map(|(t, p)| (t - p).powi(2))
        .collect();
    Ok(sq_errors.mean().sqrt())
}

fn check_lengths(truth: &Array1<f64>, predicted: &Array1<f64>) -> Result<()> {
    if truth.is_empty() {
        return Err(Error::EmptyTransform(
            "cannot score zero predictions".to_string(),
        ));
    }
    if truth.len() != predicted.len() {
        return Err(Error::Fit(format!(
            "truth length ({}) and prediction length ({}) differ",
            truth.len(),
            predicted.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mae() {
        let truth = array![1.0, 2.0, 3.0];
        let pred = array![2.0, 2.0, 1.0];
        assert!((mean_absolute_error(&truth, &pred).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_prediction() {
        let truth = array![4.0, 5.0];
        assert_eq!(mean_absolute_error(&truth, &truth).unwrap(), 0.0);
        assert_eq!(root_mean_squared_error(&truth, &truth).unwrap(), 0.0);
    }

    #[test]
    fn test_rmse_penalizes_outliers() {
        let truth = array![0.0, 0.0, 0.0, 0.0];
        let pred = array![0.0, 0.0, 0.0, 4.0];
        let mae = mean_absolute_error(&truth, &pred).unwrap();
        let rmse = root_mean_squared_error(&truth, &pred).unwrap();
        assert!(rmse > mae);
    }

    #[test]
    fn test_length_checks() {
        let truth = array![1.0];
        assert!(mean_absolute_error(&truth, &array![1.0, 2.0]).is_err());
        assert!(mean_absolute_error(&array![], &array![]).is_err());
    }
}
