use float_cmp::{ApproxEq, F64Margin};
use std::fmt::{Display, Formatter};
use std::ops::Index;

use super::Point;
use crate::ve2_args::Args;
use crate::ve2_error::Ve2Error;
use crate::ve2_invariant::{check_component, check_pair};
use crate::ve2_normalize::{lift, normalize};
use crate::ve2_ops;

/// mathmatic 2D vector
///
/// Components are never NaN; in the strict dialect they are also finite.
/// The only way to change them is a checked setter or an in-place operation.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Result<Self, Ve2Error> {
        let (x, y) = check_pair(x, y)?;
        Ok(Vector { x, y })
    }

    /// build from any vector-like call shape
    ///
    /// ```
    /// use ve2::{Fields, Vector};
    ///
    /// assert_eq!(Vector::from_args((3.0, 4.0)).unwrap().to_array(), [3.0, 4.0]);
    /// assert_eq!(Vector::from_args(vec![5.0]).unwrap().to_array(), [5.0, 0.0]);
    /// assert_eq!(Vector::from_args(Fields::new().y(4.0)).unwrap().to_array(), [0.0, 4.0]);
    /// assert_eq!(Vector::from_args(()).unwrap(), Vector::zero());
    /// ```
    pub fn from_args<A: Into<Args>>(args: A) -> Result<Self, Ve2Error> {
        let args = args.into();
        let (x, y) = normalize(args.get(0), args.get(1))?;
        Vector::new(x, y)
    }

    pub fn zero() -> Self {
        Vector { x: 0.0, y: 0.0 }
    }

    pub fn one() -> Self {
        Vector { x: 1.0, y: 1.0 }
    }

    /// unit vector at `radians`, scaled by `magnitude`
    pub fn from_angle(radians: f64, magnitude: f64) -> Result<Self, Ve2Error> {
        Vector::from_args(radians)?.mul(magnitude)
    }

    pub fn distance<A: Into<Args>, B: Into<Args>>(a: A, b: B) -> Result<f64, Ve2Error> {
        let a = a.into();
        lift(a.get(0), a.get(1))?.dist(b)
    }

    pub(crate) fn magnitude(x: f64, y: f64) -> f64 {
        x.hypot(y)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) -> Result<(), Ve2Error> {
        self.x = check_component(x)?;
        Ok(())
    }

    pub fn set_y(&mut self, y: f64) -> Result<(), Ve2Error> {
        self.y = check_component(y)?;
        Ok(())
    }

    /// write both components, or neither if one fails the check
    pub fn set(&mut self, x: f64, y: f64) -> Result<(), Ve2Error> {
        let (x, y) = check_pair(x, y)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    pub fn mag(&self) -> f64 {
        Vector::magnitude(self.x, self.y)
    }

    /// angle from the positive x axis, in radians
    pub fn dir(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn dist<A: Into<Args>>(&self, args: A) -> Result<f64, Ve2Error> {
        let args = args.into();
        let other = lift(args.get(0), args.get(1))?.into_owned();
        Ok(self.sub(other)?.mag())
    }

    pub fn dot<A: Into<Args>>(&self, args: A) -> Result<f64, Ve2Error> {
        let args = args.into();
        let other = lift(args.get(0), args.get(1))?;
        Ok(self.x * other.x + self.y * other.y)
    }

    /// exact component equality
    pub fn equals<A: Into<Args>>(&self, args: A) -> Result<bool, Ve2Error> {
        let args = args.into();
        let other = lift(args.get(0), args.get(1))?;
        Ok(self.x == other.x && self.y == other.y)
    }

    /// component equality within a float-cmp margin, e.g. `(1e-12, 4)` or
    /// `F64Margin::default()`
    pub fn approx_equals<A: Into<Args>, M: Into<F64Margin>>(
        &self,
        args: A,
        margin: M,
    ) -> Result<bool, Ve2Error> {
        let args = args.into();
        let other = lift(args.get(0), args.get(1))?;
        let margin = margin.into();
        Ok(self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin))
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn to_object(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        match idx {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("vector component index {} out of range", idx),
        }
    }
}

// Generate the pure and in-place method for each operation. Both go through
// the same table entry, the pure one being derived from the in-place one.
macro_rules! dual_ops {
    ( $(
        $(#[$meta:meta])*
        $op:ident => $pure:ident / $in_place:ident ( $( $p:ident : $t:ty ),* );
    )* ) => {
        impl Vector {
            $(
                $(#[$meta])*
                pub fn $pure(&self, $( $p: $t ),*) -> Result<Vector, Ve2Error> {
                    ve2_ops::$op.pure(self, &Args::from(( $( $p, )* )))
                }

                #[doc = concat!(
                    "In-place [`Vector::", stringify!($pure), "`], returns the receiver."
                )]
                pub fn $in_place(&mut self, $( $p: $t ),*) -> Result<&mut Vector, Ve2Error> {
                    ve2_ops::$op.in_place(self, &Args::from(( $( $p, )* )))
                }
            )*
        }
    };
}

// Same, for operations taking a vector-like argument list.
macro_rules! dual_ops_vector_like {
    ( $( $(#[$meta:meta])* $op:ident => $pure:ident / $in_place:ident; )* ) => {
        impl Vector {
            $(
                $(#[$meta])*
                pub fn $pure<A: Into<Args>>(&self, args: A) -> Result<Vector, Ve2Error> {
                    ve2_ops::$op.pure(self, &args.into())
                }

                #[doc = concat!(
                    "In-place [`Vector::", stringify!($pure), "`], returns the receiver."
                )]
                pub fn $in_place<A: Into<Args>>(
                    &mut self,
                    args: A,
                ) -> Result<&mut Vector, Ve2Error> {
                    ve2_ops::$op.in_place(self, &args.into())
                }
            )*
        }
    };
}

dual_ops! {
    /// (x, y) to (y, x)
    SWAP => swap / swap_mut();
    /// unit vector in the same direction, (0, 0) stays (0, 0)
    NORM => norm / norm_mut();
    NEG_X => neg_x / neg_x_mut();
    NEG_Y => neg_y / neg_y_mut();
    /// bound both components into `[min, max]`, an empty range is an error
    CLAMP => clamp / clamp_mut(min: f64, max: f64);
    CLAMP_X => clamp_x / clamp_x_mut(min: f64, max: f64);
    CLAMP_Y => clamp_y / clamp_y_mut(min: f64, max: f64);
    /// rotate by `radians`, keeping the magnitude
    ROT => rot / rot_mut(radians: f64);
    /// rounds halves toward +infinity
    ROUND => round / round_mut();
    FLOOR => floor / floor_mut();
    CEIL => ceil / ceil_mut();
    /// fails when a component is negative
    SQRT => sqrt / sqrt_mut();
    ABS => abs / abs_mut();
    NEG => neg / neg_mut();
}

dual_ops_vector_like! {
    /// move toward a target by fraction `p`, called as `(target, p)` or
    /// `(x, y, p)`
    LERP => lerp / lerp_mut;
    ADD => add / add_mut;
    SUB => sub / sub_mut;
    MUL => mul / mul_mut;
    /// fails on a zero or NaN divisor component
    DIV => div / div_mut;
    MAX => max / max_mut;
    MIN => min / min_mut;
}
