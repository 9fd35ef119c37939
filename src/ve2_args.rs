//! Vector-like call arguments
//!
//! Every shape a caller may pass where a vector is expected is one variant
//! of [`Arg`]. Conversions happen at the call boundary through `From`, so
//! `v.add(2.0)`, `v.add((2.0, 3.0))`, `v.add([2.0, 3.0])` and `v.add(&w)`
//! all reach the same normalizer.

use crate::ve2_model::{Point, Vector};

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// a number, or an angle in radians when given alone
    Num(f64),
    /// up to two numbers, missing entries read as 0
    Seq(Vec<f64>),
    /// object-like value with optional x and y fields
    Fields(Box<Fields>),
    Vector(Vector),
    Text(String),
    Bool(bool),
}

impl Arg {
    /// name used in shape errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Num(_) => "number",
            Arg::Seq(_) => "sequence",
            Arg::Fields(_) => "object",
            Arg::Vector(_) => "Vector",
            Arg::Text(_) => "string",
            Arg::Bool(_) => "boolean",
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Arg::Num(v) => Some(*v),
            _ => None,
        }
    }
}

/// object-like operand, absent fields default to 0
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    pub x: Option<Arg>,
    pub y: Option<Arg>,
}

impl Fields {
    pub fn new() -> Self {
        Fields::default()
    }

    pub fn x<T: Into<Arg>>(mut self, x: T) -> Self {
        self.x = Some(x.into());
        self
    }

    pub fn y<T: Into<Arg>>(mut self, y: T) -> Self {
        self.y = Some(y.into());
        self
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Num(v)
    }
}

impl From<Vec<f64>> for Arg {
    fn from(v: Vec<f64>) -> Self {
        Arg::Seq(v)
    }
}

impl From<&[f64]> for Arg {
    fn from(v: &[f64]) -> Self {
        Arg::Seq(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Arg {
    fn from(v: [f64; N]) -> Self {
        Arg::Seq(v.to_vec())
    }
}

impl From<Fields> for Arg {
    fn from(v: Fields) -> Self {
        Arg::Fields(Box::new(v))
    }
}

impl From<Point> for Arg {
    fn from(p: Point) -> Self {
        Fields::new().x(p.x).y(p.y).into()
    }
}

impl From<Vector> for Arg {
    fn from(v: Vector) -> Self {
        Arg::Vector(v)
    }
}

impl From<&Vector> for Arg {
    fn from(v: &Vector) -> Self {
        Arg::Vector(v.clone())
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Text(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::Text(v)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Arg::Bool(v)
    }
}

/// positional argument list of a call, `get` returns `None` for a missing
/// position, which is different from an explicit `Num(0.0)`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(Vec<Arg>);

impl Args {
    pub fn new(args: Vec<Arg>) -> Self {
        Args(args)
    }

    pub fn get(&self, idx: usize) -> Option<&Arg> {
        self.0.get(idx)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Arg>> for Args {
    fn from(v: Vec<Arg>) -> Self {
        Args(v)
    }
}

impl From<()> for Args {
    fn from(_: ()) -> Self {
        Args(Vec::new())
    }
}

// a lone value becomes a single positional argument
macro_rules! impl_single_args {
    ( $( $t:ty ),* ) => {
        $(
            impl From<$t> for Args {
                fn from(v: $t) -> Self {
                    Args(vec![Arg::from(v)])
                }
            }
        )*
    };
}

impl_single_args!(f64, Vec<f64>, &[f64], Fields, Point, Vector, &Vector, &str, String, bool);

impl From<Arg> for Args {
    fn from(v: Arg) -> Self {
        Args(vec![v])
    }
}

impl<const N: usize> From<[f64; N]> for Args {
    fn from(v: [f64; N]) -> Self {
        Args(vec![Arg::from(v)])
    }
}

impl<A: Into<Arg>> From<(A,)> for Args {
    fn from(v: (A,)) -> Self {
        Args(vec![v.0.into()])
    }
}

impl<A: Into<Arg>, B: Into<Arg>> From<(A, B)> for Args {
    fn from(v: (A, B)) -> Self {
        Args(vec![v.0.into(), v.1.into()])
    }
}

impl<A: Into<Arg>, B: Into<Arg>, C: Into<Arg>> From<(A, B, C)> for Args {
    fn from(v: (A, B, C)) -> Self {
        Args(vec![v.0.into(), v.1.into(), v.2.into()])
    }
}

#[cfg(test)]
mod test_ve2_args {
    use super::*;

    #[test]
    fn test_call_shapes() {
        assert!(Args::from(()).is_empty());
        assert_eq!(Args::from(2.0).get(0), Some(&Arg::Num(2.0)));
        assert_eq!(Args::from(2.0).get(1), None);

        let pair = Args::from((3.0, 0.0));
        assert_eq!(pair.len(), 2);
        assert_eq!(pair.get(1), Some(&Arg::Num(0.0)));

        let seq = Args::from([5.0, 7.0]);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.get(0), Some(&Arg::Seq(vec![5.0, 7.0])));

        let lerp = Args::from((vec![1.0, 2.0], 0.5));
        assert_eq!(lerp.get(0).map(Arg::type_name), Some("sequence"));
        assert_eq!(lerp.get(1).and_then(Arg::as_num), Some(0.5));
    }

    #[test]
    fn test_fields_builder() {
        let f = Fields::new().x(3.0);
        assert_eq!(f.x, Some(Arg::Num(3.0)));
        assert_eq!(f.y, None);

        let arg = Arg::from(Fields::new().y("abc"));
        assert_eq!(arg.type_name(), "object");
        assert_eq!(Arg::from(true).type_name(), "boolean");
        assert_eq!(Arg::from("abc").type_name(), "string");
    }
}
