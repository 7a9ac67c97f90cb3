use crate::model::McCostError;
use std::collections::BTreeMap;

/// fixed costs may be zero but never negative.
pub fn validate_cost(name: &str, value: i32) -> Result<(), McCostError> {
    if value < 0 {
        return Err(McCostError::ConfigurationError(format!(
            "{name} must be non-negative, found {value}"
        )));
    }
    Ok(())
}

/// reluctance factors scale durations and must be finite and strictly positive,
/// otherwise pareto comparisons on the resulting costs are meaningless.
pub fn validate_reluctance(name: &str, value: f64) -> Result<(), McCostError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(McCostError::ConfigurationError(format!(
            "{name} must be a finite value greater than zero, found {value}"
        )));
    }
    Ok(())
}

pub fn validate_transit_reluctance_factors(factors: &[f64]) -> Result<(), McCostError> {
    for (index, factor) in factors.iter().enumerate() {
        validate_reluctance(&format!("transit reluctance factor at index {index}"), *factor)?;
    }
    Ok(())
}

pub fn validate_surface_reluctance_factors(
    factors: &BTreeMap<String, f64>,
) -> Result<(), McCostError> {
    for (surface, factor) in factors.iter() {
        validate_reluctance(&format!("surface reluctance factor for '{surface}'"), *factor)?;
    }
    Ok(())
}
