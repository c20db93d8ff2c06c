//! Quote arithmetic.

use crate::domain::ValidationError;
use crate::models::{AddonSelection, PackagePick, PriceBreakdown};

/// Unlimited prints cost this much per booked package hour.
pub const UNLIMITED_PRINTS_PER_HOUR: u32 = 60;

/// Glam booth is a flat fee.
pub const GLAM_BOOTH_FLAT: u32 = 75;

/// Waiting time cost per hour.
pub const WAITING_TIME_PER_HOUR: u32 = 50;

/// Price a package and its add-ons.
///
/// # Errors
///
/// Returns `ValidationError::PriceOverflow` if any line item or the total
/// does not fit in a `u32`.
pub fn compute_breakdown(
    package: &PackagePick,
    addons: &AddonSelection,
) -> Result<PriceBreakdown, ValidationError> {
    let unlimited_prints_price = if addons.unlimited_prints {
        package
            .hours
            .checked_mul(UNLIMITED_PRINTS_PER_HOUR)
            .ok_or(ValidationError::PriceOverflow)?
    } else {
        0
    };

    let glam_booth_price = if addons.glam_booth { GLAM_BOOTH_FLAT } else { 0 };

    let waiting_time_price = if addons.waiting_time > 0 {
        addons
            .waiting_time
            .checked_mul(WAITING_TIME_PER_HOUR)
            .ok_or(ValidationError::PriceOverflow)?
    } else {
        0
    };

    PriceBreakdown::from_line_items(
        package.price,
        unlimited_prints_price,
        glam_booth_price,
        waiting_time_price,
    )
    .ok_or(ValidationError::PriceOverflow)
}

/// Display lines for the selected add-ons.
///
/// The order is always unlimited prints, glam booth, waiting time, whatever
/// order the customer ticked them in. Each line embeds its own price.
pub fn describe_addons(addons: &AddonSelection, breakdown: &PriceBreakdown) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);

    if addons.unlimited_prints {
        lines.push(format!(
            "Unlimited Prints - ${}",
            breakdown.unlimited_prints_price()
        ));
    }

    if addons.glam_booth {
        lines.push(format!("Glam Booth - ${}", breakdown.glam_booth_price()));
    }

    if addons.waiting_time > 0 {
        lines.push(format!(
            "Waiting Time ({} hours) - ${}",
            addons.waiting_time,
            breakdown.waiting_time_price()
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addons(unlimited_prints: bool, glam_booth: bool, waiting_time: u32) -> AddonSelection {
        AddonSelection {
            unlimited_prints,
            glam_booth,
            waiting_time,
        }
    }

    #[test]
    fn test_reference_quote() {
        let package = PackagePick::new(4, 800).unwrap();
        let breakdown = compute_breakdown(&package, &addons(true, false, 2)).unwrap();

        assert_eq!(breakdown.base_price(), 800);
        assert_eq!(breakdown.unlimited_prints_price(), 240);
        assert_eq!(breakdown.glam_booth_price(), 0);
        assert_eq!(breakdown.waiting_time_price(), 100);
        assert_eq!(breakdown.total(), 1140);
    }

    #[test]
    fn test_total_formula_over_combinations() {
        for hours in [1u32, 2, 3, 4, 5, 8] {
            for price in [1u32, 450, 800, 1250] {
                for flags in 0..4u8 {
                    for waiting in [0u32, 1, 3] {
                        let u = flags & 1 == 1;
                        let g = flags & 2 == 2;
                        let package = PackagePick::new(hours, price).unwrap();
                        let breakdown =
                            compute_breakdown(&package, &addons(u, g, waiting)).unwrap();

                        let expected = price
                            + if u { hours * 60 } else { 0 }
                            + if g { 75 } else { 0 }
                            + if waiting > 0 { waiting * 50 } else { 0 };
                        assert_eq!(breakdown.total(), expected);
                        assert_eq!(
                            breakdown.total(),
                            breakdown.base_price()
                                + breakdown.unlimited_prints_price()
                                + breakdown.glam_booth_price()
                                + breakdown.waiting_time_price()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_addons_costs_base_price() {
        let package = PackagePick::new(3, 650).unwrap();
        let breakdown = compute_breakdown(&package, &AddonSelection::default()).unwrap();
        assert_eq!(breakdown.total(), 650);
        assert!(describe_addons(&AddonSelection::default(), &breakdown).is_empty());
    }

    #[test]
    fn test_describe_addons_fixed_order() {
        let package = PackagePick::new(3, 650).unwrap();
        let selection = addons(true, true, 2);
        let breakdown = compute_breakdown(&package, &selection).unwrap();

        assert_eq!(
            describe_addons(&selection, &breakdown),
            vec![
                "Unlimited Prints - $180".to_string(),
                "Glam Booth - $75".to_string(),
                "Waiting Time (2 hours) - $100".to_string(),
            ]
        );
    }

    #[test]
    fn test_describe_single_waiting_hour() {
        let package = PackagePick::new(2, 450).unwrap();
        let selection = addons(false, false, 1);
        let breakdown = compute_breakdown(&package, &selection).unwrap();
        assert_eq!(
            describe_addons(&selection, &breakdown),
            vec!["Waiting Time (1 hours) - $50".to_string()]
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let package = PackagePick::new(u32::MAX, 1).unwrap();
        assert_eq!(
            compute_breakdown(&package, &addons(true, false, 0)),
            Err(ValidationError::PriceOverflow)
        );

        let package = PackagePick::new(1, u32::MAX).unwrap();
        assert_eq!(
            compute_breakdown(&package, &addons(false, true, 0)),
            Err(ValidationError::PriceOverflow)
        );
    }
}
