//! Numeric invariants guarding every component write
//!
//! The permissive dialect lets ±infinity through and only rejects NaN.
//! Building with the `strict` feature also rejects non-finite values.

use crate::ve2_error::Ve2Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Permissive,
    Strict,
}

impl Dialect {
    /// dialect this build was compiled with
    pub const fn current() -> Dialect {
        if cfg!(feature = "strict") {
            Dialect::Strict
        } else {
            Dialect::Permissive
        }
    }

    pub fn allows_infinite(self) -> bool {
        self == Dialect::Permissive
    }
}

/// check a value about to be written as an x or y component
pub(crate) fn check_component(v: f64) -> Result<f64, Ve2Error> {
    if v.is_nan() {
        return Err(invariant_err!("x and y components cannot be NaN"));
    }
    if v.is_infinite() && !Dialect::current().allows_infinite() {
        return Err(invariant_err!(&format!(
            "x and y components must be finite (found {})",
            v
        )));
    }
    Ok(v)
}

/// check both components before either is written
pub(crate) fn check_pair(x: f64, y: f64) -> Result<(f64, f64), Ve2Error> {
    Ok((check_component(x)?, check_component(y)?))
}

pub(crate) fn check_divisor(v: f64) -> Result<(), Ve2Error> {
    let hole = if v.is_nan() {
        "NaN"
    } else if v == 0.0 {
        "zero"
    } else if v.is_infinite() && !Dialect::current().allows_infinite() {
        "infinite"
    } else {
        return Ok(());
    };
    Err(invariant_err!(&format!(
        "denominator for division cannot be {}",
        hole
    )))
}

pub(crate) fn check_sqrt_domain(v: f64) -> Result<(), Ve2Error> {
    if v < 0.0 {
        return Err(invariant_err!(&format!(
            "cannot take sqrt of a negative number ({})",
            v
        )));
    }
    Ok(())
}

pub(crate) fn check_range(min: f64, max: f64) -> Result<(), Ve2Error> {
    // also false when either bound is NaN
    if !(min <= max) {
        return Err(invariant_err!(&format!(
            "clamp range is empty: min {} is not below max {}",
            min, max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod test_ve2_invariant {
    use super::*;
    use crate::ve2_error::ErrorKind;

    #[test]
    fn test_nan_rejected() {
        assert_eq!(
            check_component(f64::NAN).unwrap_err().kind(),
            ErrorKind::Invariant
        );
        assert_eq!(check_component(-2.5).unwrap(), -2.5);
        assert!(check_pair(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_divisor() {
        assert!(check_divisor(0.0).is_err());
        assert!(check_divisor(-0.0).is_err());
        assert!(check_divisor(f64::NAN).is_err());
        assert!(check_divisor(1e-300).is_ok());
        assert_eq!(
            check_divisor(f64::INFINITY).is_ok(),
            Dialect::current().allows_infinite()
        );
    }

    #[test]
    fn test_domain_checks() {
        assert!(check_sqrt_domain(-1.0).is_err());
        assert!(check_sqrt_domain(0.0).is_ok());
        assert!(check_range(1.0, 1.0).is_ok());
        assert!(check_range(2.0, 1.0).is_err());
        assert!(check_range(f64::NAN, 1.0).is_err());
    }

    #[cfg(not(feature = "strict"))]
    #[test]
    fn test_permissive_infinity() {
        assert_eq!(Dialect::current(), Dialect::Permissive);
        assert_eq!(check_component(f64::INFINITY).unwrap(), f64::INFINITY);
        assert_eq!(
            check_component(f64::NEG_INFINITY).unwrap(),
            f64::NEG_INFINITY
        );
    }

    #[cfg(feature = "strict")]
    #[test]
    fn test_strict_infinity() {
        assert_eq!(Dialect::current(), Dialect::Strict);
        assert!(check_component(f64::INFINITY).is_err());
        assert!(check_divisor(f64::NEG_INFINITY).is_err());
    }
}
