use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Converts a decimal series into `f64` values, failing on the first
/// unrepresentable entry.
pub fn decimals_to_f64(values: &[Decimal]) -> ChartResult<Vec<f64>> {
    values
        .iter()
        .map(|value| decimal_to_f64(*value, "value"))
        .collect()
}

/// Rejects values that cannot be placed above the zero baseline.
pub fn validate_raw_values(values: &[f64]) -> ChartResult<()> {
    if let Some(value) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(ChartError::InvalidData(format!(
            "values must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{decimals_to_f64, validate_raw_values};

    #[test]
    fn decimal_series_converts_in_order() {
        let values = decimals_to_f64(&[Decimal::new(125, 1), Decimal::new(3, 0)]).expect("convert");
        assert_eq!(values, vec![12.5, 3.0]);
    }

    #[test]
    fn raw_values_reject_negative_and_nan() {
        assert!(validate_raw_values(&[0.0, 1.0, 2.5]).is_ok());
        assert!(validate_raw_values(&[1.0, -0.5]).is_err());
        assert!(validate_raw_values(&[f64::NAN]).is_err());
        assert!(validate_raw_values(&[f64::INFINITY]).is_err());
    }
}
