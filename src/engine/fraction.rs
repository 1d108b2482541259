/// Best small-fraction approximation of a decimal in [0, 1).
///
/// A brute-force scan over denominators `1..=max_denominator` in increasing
/// order. The first candidate with a strictly smaller error wins, so ties keep
/// the smaller denominator. Candidates whose rounded numerator exceeds
/// [`MAX_NUMERATOR`] are skipped rather than scored.
use crate::models::Fraction;

/// Largest numerator a candidate may have.
pub const MAX_NUMERATOR: u32 = 99;

/// Denominator bound used by the age calculator.
pub const DEFAULT_MAX_DENOMINATOR: u32 = 99;

/// Greatest common divisor; `gcd(0, n) == n`.
pub fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Find the fraction `p/q` (`1 <= q <= max_denominator`) closest to `value`,
/// reduced to lowest terms.
///
/// A `max_denominator` of 0 is treated as 1. A `NaN` value never improves on
/// the initial candidate and yields `0/1`.
pub fn best_fraction(value: f64, max_denominator: u32) -> Fraction {
    let max_denominator = max_denominator.max(1);

    let mut best = Fraction::ZERO;
    let mut best_error = f64::INFINITY;

    for denominator in 1..=max_denominator {
        let numerator = (value * f64::from(denominator)).round();
        if numerator > f64::from(MAX_NUMERATOR) {
            continue;
        }
        // Saturates negative inputs to 0.
        let numerator = numerator as u32;

        let error = (value - f64::from(numerator) / f64::from(denominator)).abs();
        if error < best_error {
            best_error = error;
            best = Fraction {
                numerator,
                denominator,
            };
        }
    }

    reduce(best)
}

fn reduce(fraction: Fraction) -> Fraction {
    if fraction.numerator == 0 {
        return Fraction::ZERO;
    }
    let divisor = gcd(fraction.numerator, fraction.denominator);
    Fraction {
        numerator: fraction.numerator / divisor,
        denominator: fraction.denominator / divisor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(numerator: u32, denominator: u32) -> Fraction {
        Fraction {
            numerator,
            denominator,
        }
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
    }

    #[test]
    fn test_zero_is_years_exactly() {
        assert_eq!(best_fraction(0.0, DEFAULT_MAX_DENOMINATOR), frac(0, 1));
    }

    #[test]
    fn test_simple_values() {
        assert_eq!(best_fraction(0.5, DEFAULT_MAX_DENOMINATOR), frac(1, 2));
        assert_eq!(best_fraction(1.0 / 3.0, DEFAULT_MAX_DENOMINATOR), frac(1, 3));
        assert_eq!(best_fraction(0.375, DEFAULT_MAX_DENOMINATOR), frac(3, 8));
        assert_eq!(best_fraction(0.75, DEFAULT_MAX_DENOMINATOR), frac(3, 4));
    }

    #[test]
    fn test_small_value_uses_largest_denominator() {
        assert_eq!(best_fraction(0.0101, DEFAULT_MAX_DENOMINATOR), frac(1, 99));
    }

    #[test]
    fn test_value_near_one_rounds_to_whole() {
        assert_eq!(best_fraction(0.999, DEFAULT_MAX_DENOMINATOR), frac(1, 1));
    }

    #[test]
    fn test_denominator_bound_limits_precision() {
        assert_eq!(best_fraction(1.0 / 7.0, 6), frac(1, 6));
        assert_eq!(best_fraction(0.3, 0), frac(0, 1));
    }

    #[test]
    fn test_candidates_over_numerator_bound_are_skipped() {
        // 100/101 is exact but its numerator is out of bounds.
        assert_eq!(best_fraction(100.0 / 101.0, 101), frac(99, 100));
    }

    #[test]
    fn test_nan_yields_zero() {
        assert_eq!(best_fraction(f64::NAN, DEFAULT_MAX_DENOMINATOR), frac(0, 1));
    }

    #[test]
    fn test_result_is_reduced_and_no_scanned_candidate_is_strictly_better() {
        for step in 0..1000 {
            let value = f64::from(step) / 1000.0;
            let found = best_fraction(value, DEFAULT_MAX_DENOMINATOR);

            assert!(found.numerator <= MAX_NUMERATOR, "{value}: {found}");
            assert!((1..=DEFAULT_MAX_DENOMINATOR).contains(&found.denominator));
            if found.numerator == 0 {
                assert_eq!(found.denominator, 1, "{value}: {found}");
            } else {
                assert_eq!(gcd(found.numerator, found.denominator), 1, "{value}: {found}");
            }

            let found_error = (value - found.value()).abs();
            for q in 1..=DEFAULT_MAX_DENOMINATOR {
                let p = (value * f64::from(q)).round();
                if p > f64::from(MAX_NUMERATOR) {
                    continue;
                }
                let error = (value - p / f64::from(q)).abs();
                assert!(
                    error >= found_error - 1e-12,
                    "{value}: {p}/{q} beats {found}"
                );
            }
        }
    }
}
