//! Argument normalizer
//!
//! Collapses a vector-like call (primary argument plus optional secondary
//! argument) into a plain `(x, y)` pair.

use std::borrow::Cow;

use crate::ve2_args::{Arg, Fields};
use crate::ve2_error::Ve2Error;
use crate::ve2_model::Vector;

/// Resolve `primary`/`secondary` to an `(x, y)` pair, first match wins:
///
/// 1. a sequence takes index 0 and 1, missing entries are 0
/// 2. an object takes its x and y fields, missing fields are 0
/// 3. a number pairs with a numeric secondary, or alone is an angle in
///    radians giving a unit vector
/// 4. a vector gives its components
/// 5. nothing at all gives (0, 0)
///
/// Sequences and objects ignore `secondary`.
pub fn normalize(primary: Option<&Arg>, secondary: Option<&Arg>) -> Result<(f64, f64), Ve2Error> {
    match (primary, secondary) {
        (Some(Arg::Seq(items)), _) => Ok((
            items.first().copied().unwrap_or(0.0),
            items.get(1).copied().unwrap_or(0.0),
        )),
        (Some(Arg::Fields(fields)), _) => from_fields(fields),
        (Some(Arg::Num(a)), Some(Arg::Num(b))) => Ok((*a, *b)),
        (Some(Arg::Num(rads)), None) => Ok((rads.cos(), rads.sin())),
        (Some(Arg::Num(_)), Some(other)) => Err(shape_err!(
            other.type_name(),
            &format!(
                "cannot convert given arguments to vector, unknown second argument of type {}",
                other.type_name()
            )
        )),
        (Some(Arg::Vector(v)), _) => Ok((v.x(), v.y())),
        (None, None) => Ok((0.0, 0.0)),
        (None, Some(_)) => Err(shape_err!(
            "absent",
            "cannot convert given argument to vector, received no first argument"
        )),
        (Some(other), _) => Err(shape_err!(
            other.type_name(),
            &format!(
                "cannot convert given argument to vector, received value of type {}",
                other.type_name()
            )
        )),
    }
}

fn from_fields(fields: &Fields) -> Result<(f64, f64), Ve2Error> {
    Ok((field(&fields.x, "x")?, field(&fields.y, "y")?))
}

fn field(value: &Option<Arg>, name: &str) -> Result<f64, Ve2Error> {
    match value {
        None => Ok(0.0),
        Some(Arg::Num(v)) => Ok(*v),
        Some(other) => Err(shape_err!(
            other.type_name(),
            &format!(
                "object has an invalid {} field of type {}, it should be a number or absent",
                name,
                other.type_name()
            )
        )),
    }
}

/// Borrow `primary` when it already is a vector, otherwise build one.
pub fn lift<'a>(
    primary: Option<&'a Arg>,
    secondary: Option<&'a Arg>,
) -> Result<Cow<'a, Vector>, Ve2Error> {
    match primary {
        Some(Arg::Vector(v)) => Ok(Cow::Borrowed(v)),
        _ => {
            let (x, y) = normalize(primary, secondary)?;
            Ok(Cow::Owned(Vector::new(x, y)?))
        }
    }
}

#[cfg(test)]
mod test_ve2_normalize {
    use super::*;
    use crate::ve2_args::Args;
    use crate::ve2_error::ErrorKind;
    use std::f64::consts::PI;

    fn norm_args<A: Into<Args>>(args: A) -> Result<(f64, f64), Ve2Error> {
        let args = args.into();
        normalize(args.get(0), args.get(1))
    }

    #[test]
    fn test_sequence() {
        assert_eq!(norm_args(Vec::<f64>::new()).unwrap(), (0.0, 0.0));
        assert_eq!(norm_args(vec![5.0]).unwrap(), (5.0, 0.0));
        assert_eq!(norm_args([5.0, 7.0]).unwrap(), (5.0, 7.0));
        assert_eq!(norm_args([5.0, 7.0, 9.0]).unwrap(), (5.0, 7.0));
        // secondary is ignored, even when it is not numeric
        assert_eq!(norm_args(([1.0, 2.0], "x")).unwrap(), (1.0, 2.0));
    }

    #[test]
    fn test_fields() {
        assert_eq!(norm_args(Fields::new().x(3.0)).unwrap(), (3.0, 0.0));
        assert_eq!(norm_args(Fields::new().y(4.0)).unwrap(), (0.0, 4.0));
        assert_eq!(norm_args(Fields::new().x(12.0).y(34.0)).unwrap(), (12.0, 34.0));
        assert_eq!(norm_args(Fields::new()).unwrap(), (0.0, 0.0));
        assert_eq!(norm_args((Fields::new().x(1.0), 9.0)).unwrap(), (1.0, 0.0));

        let err = norm_args(Fields::new().x("3")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentShape);
        assert_eq!(err.type_name(), Some("string"));
        assert!(norm_args(Fields::new().x(1.0).y(false)).is_err());
    }

    #[test]
    fn test_numbers() {
        assert_eq!(norm_args((84.0, 22.0)).unwrap(), (84.0, 22.0));
        // explicit zero is a y component, not a missing argument
        assert_eq!(norm_args((PI, 0.0)).unwrap(), (PI, 0.0));
        assert_eq!(norm_args(PI / 6.0).unwrap(), ((PI / 6.0).cos(), (PI / 6.0).sin()));

        let err = norm_args((1.0, "abc")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentShape);
        assert_eq!(err.type_name(), Some("string"));
    }

    #[test]
    fn test_vector_and_empty() {
        let v = Vector::new(1.5, -2.0).unwrap();
        assert_eq!(norm_args(&v).unwrap(), (1.5, -2.0));
        assert_eq!(norm_args(()).unwrap(), (0.0, 0.0));
    }

    #[test]
    fn test_unsupported() {
        let err = norm_args(true).unwrap_err();
        assert_eq!(err.type_name(), Some("boolean"));
        let err = norm_args("woeifj").unwrap_err();
        assert_eq!(err.type_name(), Some("string"));
        let err = normalize(None, Some(&Arg::Num(1.0))).unwrap_err();
        assert_eq!(err.type_name(), Some("absent"));
    }

    #[test]
    fn test_lift() {
        let v = Vector::new(3.0, 4.0).unwrap();
        let arg = Arg::from(&v);
        assert!(matches!(lift(Some(&arg), None).unwrap(), Cow::Borrowed(_)));

        let (a, b) = (Arg::Num(3.0), Arg::Num(4.0));
        let lifted = lift(Some(&a), Some(&b)).unwrap();
        assert!(matches!(lifted, Cow::Owned(_)));
        assert_eq!(*lifted, v);

        let nan = Arg::Num(f64::NAN);
        assert_eq!(
            lift(Some(&nan), Some(&b)).unwrap_err().kind(),
            ErrorKind::Invariant
        );
    }
}
