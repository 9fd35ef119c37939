//! ve2 error type

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which family a [`Ve2Error`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ArgumentShape,
    Invariant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Ve2Error {
    /// call arguments match none of the accepted vector-like shapes,
    /// `type_name` names the offending value's type
    ArgumentShape { type_name: String, err: String },
    /// a component would become NaN (or non-finite in the strict dialect),
    /// or a domain precondition failed
    Invariant { err: String },
}

impl Ve2Error {
    pub fn argument_shape(type_name: &str, err: &str) -> Ve2Error {
        Ve2Error::ArgumentShape {
            type_name: type_name.to_string(),
            err: err.to_string(),
        }
    }

    pub fn invariant(err: &str) -> Ve2Error {
        Ve2Error::Invariant {
            err: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Ve2Error::ArgumentShape { .. } => ErrorKind::ArgumentShape,
            Ve2Error::Invariant { .. } => ErrorKind::Invariant,
        }
    }

    /// type name of the rejected value, only set for shape errors
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Ve2Error::ArgumentShape { type_name, .. } => Some(type_name),
            Ve2Error::Invariant { .. } => None,
        }
    }
}

impl Display for Ve2Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Ve2Error::ArgumentShape { err, .. } => write!(f, "[ArgumentShapeError]: {}", err),
            Ve2Error::Invariant { err } => write!(f, "[InvariantError]: {}", err),
        }
    }
}

impl Error for Ve2Error {}

#[macro_export]
macro_rules! shape_err {
    ( $t:expr, $x:expr ) => {{
        $crate::ve2_error::Ve2Error::argument_shape(
            $t,
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}

#[macro_export]
macro_rules! invariant_err {
    ( $x:expr ) => {{
        $crate::ve2_error::Ve2Error::invariant(format!("{}:{} : {}", file!(), line!(), $x).as_str())
    }};
}

#[cfg(test)]
mod test_ve2_error {
    use super::*;

    #[test]
    fn test_error_kind() {
        let err = shape_err!("string", "unknown second argument");
        assert_eq!(err.kind(), ErrorKind::ArgumentShape);
        assert_eq!(err.type_name(), Some("string"));
        assert!(err.to_string().starts_with("[ArgumentShapeError]: "));
        assert!(err.to_string().ends_with("unknown second argument"));

        let err = invariant_err!("components cannot be NaN");
        assert_eq!(err.kind(), ErrorKind::Invariant);
        assert_eq!(err.type_name(), None);
        assert!(err.to_string().contains("ve2_error.rs"));
    }
}
