use crate::errors::BanditError;

/// Index of the largest value, first occurrence on ties. `None` when empty.
pub fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &value)| match best {
            Some((_, best_value)) if value <= best_value => best,
            _ => Some((i, value)),
        })
        .map(|(i, _)| i)
}

/// Running average after the `count`-th observation (`count` includes `reward`).
pub fn incremental_mean(value: f64, reward: f64, count: u64) -> f64 {
    value + (reward - value) / count as f64
}

/// Constant step size update; recent rewards weigh more.
pub fn exponential_smoothing(value: f64, reward: f64, alpha: f64) -> f64 {
    value + alpha * (reward - value)
}

/// Exploration bonus `c * sqrt(2 ln(1/delta) / count)`.
pub fn confidence_radius(c: f64, delta: f64, count: u64) -> f64 {
    c * (2.0 * (1.0 / delta).ln() / count as f64).sqrt()
}

/// Accepts values in [0, 1].
pub fn check_probability(name: &'static str, value: f64) -> Result<f64, BanditError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(BanditError::invalid(name, value, "must be in [0, 1]"))
    }
}

/// Accepts values in (0, 1).
pub fn check_open_unit(name: &'static str, value: f64) -> Result<f64, BanditError> {
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(BanditError::invalid(name, value, "must be in (0, 1)"))
    }
}

/// Accepts finite values > 0.
pub fn check_positive(name: &'static str, value: f64) -> Result<f64, BanditError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(BanditError::invalid(name, value, "must be in (0, inf)"))
    }
}
