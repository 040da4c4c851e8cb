use crate::error::{DeparturesError, DeparturesResult};
use tracing::error;

pub const BAG_FEE: f64 = 25.0;
pub const MILE_RATE: f64 = 0.10;
pub const FORMAT_ERROR: &str = "error formatting number";

/// Mileage is charged per traveler, checked bags once for the whole booking.
pub fn airfare_total(checked_bags: u32, distance_miles: u32, travelers: u32) -> f64 {
    let mile_cost = f64::from(distance_miles) * MILE_RATE;
    let bag_cost = f64::from(checked_bags) * BAG_FEE;
    f64::from(travelers) * mile_cost + bag_cost
}

/// US dollar amount with thousands separators, e.g. `$1,250.00`.
pub fn format_currency(amount: f64) -> DeparturesResult<String> {
    let cents = (amount * 100.0).round();
    if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
        return Err(DeparturesError::UnformattableAmount(amount));
    }
    let cents = cents as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    let digits = (cents / 100).to_string();
    let mut dollars = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            dollars.push(',');
        }
        dollars.push(c);
    }

    Ok(format!("{sign}${dollars}.{:02}", cents % 100))
}

pub fn calculate_airfare(checked_bags: u32, distance_miles: u32, travelers: u32) -> String {
    let total = airfare_total(checked_bags, distance_miles, travelers);
    format_currency(total).unwrap_or_else(|e| {
        error!(checked_bags, distance_miles, travelers, "Error formatting number: {}", e);
        FORMAT_ERROR.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    #[test]
    fn test_two_bags_two_thousand_miles_three_travelers() {
        assert_eq!(650.0, airfare_total(2, 2000, 3));
        assert_eq!("$650.00", calculate_airfare(2, 2000, 3));
    }

    #[test]
    fn test_bags_are_not_multiplied_by_travelers() {
        assert_eq!(50.0, airfare_total(2, 2000, 0));
        assert_eq!("$50.00", calculate_airfare(2, 2000, 0));
        assert_eq!("$0.00", calculate_airfare(0, 0, 0));
    }

    #[test]
    fn test_cents_and_grouping() {
        assert_eq!("$0.10", calculate_airfare(0, 1, 1));
        assert_eq!("$1,250.00", calculate_airfare(10, 10000, 1));
        assert_eq!("$1,000,028.00", calculate_airfare(1, 1_000_003, 10));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!("$750.00", format_currency(750.0).unwrap());
        assert_eq!("$999.99", format_currency(999.99).unwrap());
        assert_eq!("$100,000.00", format_currency(100_000.0).unwrap());
        assert_eq!("-$12.50", format_currency(-12.5).unwrap());
    }

    #[test]
    fn test_format_currency_rejects_non_finite() {
        assert!(matches!(
            format_currency(f64::NAN),
            Err(DeparturesError::UnformattableAmount(_))
        ));
        assert!(matches!(
            format_currency(f64::INFINITY),
            Err(DeparturesError::UnformattableAmount(_))
        ));
    }

    #[traced_test]
    #[test]
    fn test_unformattable_fare_returns_error_text() {
        assert_eq!(FORMAT_ERROR, calculate_airfare(0, u32::MAX, u32::MAX));
        assert!(logs_contain("Error formatting number"));
    }

    #[traced_test]
    #[test]
    fn test_regular_fare_logs_nothing() {
        assert_eq!("$25.00", calculate_airfare(1, 0, 4));
        assert!(!logs_contain("Error formatting number"));
    }

    proptest! {
        #[test]
        fn test_only_mileage_scales_with_travelers(
            bags in 0..20u32,
            miles in 0..20_000u32,
            travelers in 0..10u32,
        ) {
            let difference = airfare_total(bags, miles, travelers) - airfare_total(bags, miles, 0);
            let expected = f64::from(travelers) * f64::from(miles) * MILE_RATE;
            prop_assert!((difference - expected).abs() < 0.005, "{} vs {}", difference, expected);

            let bag_term = airfare_total(bags, 0, travelers);
            prop_assert_eq!(f64::from(bags) * BAG_FEE, bag_term);
        }
    }
}
