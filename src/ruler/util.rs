use std::fmt;

use num_traits::Float;

/// Floor modulo: `((n % d) + d) % d`.
///
/// Unlike the truncating `%` operator the result takes the sign of `d`, so
/// for a positive divisor it is always in `[0, d)`. Non-finite divisors
/// propagate: `floor_mod(n, inf)` is `NaN` for any finite `n`.
///
/// # Examples
///
/// ```
/// use ruler::ruler::util::floor_mod;
///
/// assert_eq!(floor_mod(-30.0, 100.0), 70.0);
/// assert_eq!(floor_mod(130.0, 100.0), 30.0);
/// assert_eq!(floor_mod(-200.0, 100.0), 0.0);
/// ```
pub fn floor_mod<T: Float>(n: T, d: T) -> T {
    ((n % d) + d) % d
}

/// Formats an `f64` the way markup consumers expect to read coordinates.
///
/// Integral values print without a fractional part (`50`, not `50.0`),
/// everything else prints its shortest round-trip form. Magnitudes at or
/// above `1e21` and below `1e-6` switch to exponent notation with an
/// explicit sign (`1e+21`, `1e-7`), negative zero prints as `0`, and the
/// non-finite values print as `Infinity`, `-Infinity` and `NaN`.
#[derive(Debug, Clone, Copy)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if v == 0.0 {
            return f.write_str("0");
        }

        let abs = v.abs();
        if (1e-6..1e21).contains(&abs) {
            return write!(f, "{v}");
        }

        let exp = format!("{v:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{mantissa}e+{power}"),
            _ => f.write_str(&exp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_mod_positive_divisor_is_non_negative() {
        for n in (-500..500).step_by(10) {
            let r = floor_mod(n as f64, 100.0);
            assert!((0.0..100.0).contains(&r), "floor_mod({n}, 100) = {r}");
        }
    }

    #[test]
    fn test_floor_mod_fractional_divisor() {
        // zoom = 3 gives a major spacing of 33.33..
        let d = 100.0 / 3.0;
        let r = floor_mod(-10.0, d);
        assert!((r - (d - 10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_floor_mod_infinite_divisor_is_nan() {
        assert!(floor_mod(10.0_f64, f64::INFINITY).is_nan());
        assert!(floor_mod(-10.0_f32, f32::INFINITY).is_nan());
    }

    #[test]
    fn test_num_integral_values() {
        assert_eq!(Num(50.0).to_string(), "50");
        assert_eq!(Num(-49950.0).to_string(), "-49950");
        assert_eq!(Num(-0.0).to_string(), "0");
    }

    #[test]
    fn test_num_fractional_values() {
        assert_eq!(Num(60.5).to_string(), "60.5");
        assert_eq!(Num(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn test_num_exponent_and_non_finite() {
        assert_eq!(Num(1e21).to_string(), "1e+21");
        assert_eq!(Num(1.5e22).to_string(), "1.5e+22");
        assert_eq!(Num(1e-7).to_string(), "1e-7");
        assert_eq!(Num(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Num(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Num(f64::NAN).to_string(), "NaN");
    }
}
