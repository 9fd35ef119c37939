//! Operation table
//!
//! Each mutating capability is written once as a transform from the current
//! components (plus call arguments) to the new components. [`Operation`]
//! turns a transform into an in-place entry point, and derives the pure one
//! from it by running the in-place form on a clone.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::ve2_args::{Arg, Args};
use crate::ve2_error::Ve2Error;
use crate::ve2_invariant::{check_divisor, check_range, check_sqrt_domain};
use crate::ve2_model::Vector;
use crate::ve2_normalize::{lift, normalize};

type Transform = fn(f64, f64, &Args) -> Result<(f64, f64), Ve2Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// hand written transform
    Mutator,
    /// component-wise against a vector-like operand
    Binary,
    /// component-wise unary function
    Map,
}

#[derive(Clone, Copy)]
pub struct Operation {
    name: &'static str,
    in_place_name: &'static str,
    family: Family,
    transform: Transform,
}

impl Debug for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("in_place_name", &self.in_place_name)
            .field("family", &self.family)
            .finish()
    }
}

impl Operation {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn in_place_name(&self) -> &'static str {
        self.in_place_name
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Apply to `v` and return it. Both new components are checked before
    /// either is written, so on error `v` is left untouched.
    pub fn in_place<'v>(&self, v: &'v mut Vector, args: &Args) -> Result<&'v mut Vector, Ve2Error> {
        let (x, y) = (self.transform)(v.x(), v.y(), args)?;
        v.set(x, y)?;
        Ok(v)
    }

    /// Same result as [`Operation::in_place`], on a copy of `v`
    pub fn pure(&self, v: &Vector, args: &Args) -> Result<Vector, Ve2Error> {
        let mut out = v.clone();
        self.in_place(&mut out, args)?;
        Ok(out)
    }
}

macro_rules! operation {
    ( $family:ident $name:ident / $in_place:ident => $transform:expr ) => {
        Operation {
            name: stringify!($name),
            in_place_name: stringify!($in_place),
            family: Family::$family,
            transform: $transform,
        }
    };
}

pub(crate) const SWAP: Operation = operation!(Mutator swap / swap_mut => swap);
pub(crate) const NORM: Operation = operation!(Mutator norm / norm_mut => norm);
pub(crate) const NEG_X: Operation =
    operation!(Mutator neg_x / neg_x_mut => |x, y, _| Ok((-x, y)));
pub(crate) const NEG_Y: Operation =
    operation!(Mutator neg_y / neg_y_mut => |x, y, _| Ok((x, -y)));
pub(crate) const CLAMP: Operation = operation!(Mutator clamp / clamp_mut => clamp);
pub(crate) const CLAMP_X: Operation = operation!(Mutator clamp_x / clamp_x_mut => clamp_x);
pub(crate) const CLAMP_Y: Operation = operation!(Mutator clamp_y / clamp_y_mut => clamp_y);
pub(crate) const ROT: Operation = operation!(Mutator rot / rot_mut => rot);
pub(crate) const LERP: Operation = operation!(Mutator lerp / lerp_mut => lerp);

pub(crate) const ADD: Operation =
    operation!(Binary add / add_mut => |x, y, args| binary(x, y, args, |a, b| a + b, None));
pub(crate) const SUB: Operation =
    operation!(Binary sub / sub_mut => |x, y, args| binary(x, y, args, |a, b| a - b, None));
pub(crate) const MUL: Operation =
    operation!(Binary mul / mul_mut => |x, y, args| binary(x, y, args, |a, b| a * b, None));
pub(crate) const DIV: Operation = operation!(Binary div / div_mut => |x, y, args| {
    binary(x, y, args, |a, b| a / b, Some(check_divisor))
});
pub(crate) const MAX: Operation =
    operation!(Binary max / max_mut => |x, y, args| binary(x, y, args, nan_max, None));
pub(crate) const MIN: Operation =
    operation!(Binary min / min_mut => |x, y, args| binary(x, y, args, nan_min, None));

pub(crate) const ROUND: Operation =
    operation!(Map round / round_mut => |x, y, _| Ok((round_half_up(x), round_half_up(y))));
pub(crate) const FLOOR: Operation =
    operation!(Map floor / floor_mut => |x, y, _| Ok((x.floor(), y.floor())));
pub(crate) const CEIL: Operation =
    operation!(Map ceil / ceil_mut => |x, y, _| Ok((x.ceil(), y.ceil())));
pub(crate) const SQRT: Operation = operation!(Map sqrt / sqrt_mut => sqrt);
pub(crate) const ABS: Operation =
    operation!(Map abs / abs_mut => |x, y, _| Ok((x.abs(), y.abs())));
pub(crate) const NEG: Operation = operation!(Map neg / neg_mut => |x, y, _| Ok((-x, -y)));

static OPERATIONS: &[Operation] = &[
    SWAP, NORM, NEG_X, NEG_Y, CLAMP, CLAMP_X, CLAMP_Y, ROT, LERP, ADD, SUB, MUL, DIV, MAX, MIN,
    ROUND, FLOOR, CEIL, SQRT, ABS, NEG,
];

lazy_static! {
    // both the pure and the in-place name point at the same entry
    static ref OPERATION_INDEX: HashMap<&'static str, &'static Operation> = {
        let mut index = HashMap::new();
        for op in OPERATIONS {
            index.insert(op.name, op);
            index.insert(op.in_place_name, op);
        }
        index
    };
}

/// every operation that has a pure and an in-place variant
pub fn operations() -> &'static [Operation] {
    OPERATIONS
}

/// look an operation up by its pure or in-place name
pub fn operation(name: &str) -> Option<&'static Operation> {
    OPERATION_INDEX.get(name).copied()
}

fn swap(x: f64, y: f64, _: &Args) -> Result<(f64, f64), Ve2Error> {
    Ok((y, x))
}

fn norm(x: f64, y: f64, _: &Args) -> Result<(f64, f64), Ve2Error> {
    let mag = Vector::magnitude(x, y);
    if mag == 0.0 {
        return Ok((0.0, 0.0));
    }
    Ok((x / mag, y / mag))
}

fn clamp(x: f64, y: f64, args: &Args) -> Result<(f64, f64), Ve2Error> {
    let (min, max) = bounds(args)?;
    Ok((x.clamp(min, max), y.clamp(min, max)))
}

fn clamp_x(x: f64, y: f64, args: &Args) -> Result<(f64, f64), Ve2Error> {
    let (min, max) = bounds(args)?;
    Ok((x.clamp(min, max), y))
}

fn clamp_y(x: f64, y: f64, args: &Args) -> Result<(f64, f64), Ve2Error> {
    let (min, max) = bounds(args)?;
    Ok((x, y.clamp(min, max)))
}

fn rot(x: f64, y: f64, args: &Args) -> Result<(f64, f64), Ve2Error> {
    let rads = number(args, 0, "rotation angle")?;
    let dir = y.atan2(x) + rads;
    let mag = Vector::magnitude(x, y);
    Ok((dir.cos() * mag, dir.sin() * mag))
}

/// accepts `(vector_like, p)` and `(x, y, p)`
fn lerp(x: f64, y: f64, args: &Args) -> Result<(f64, f64), Ve2Error> {
    let (target, p) = match args.get(2) {
        Some(Arg::Num(_)) => (lift(args.get(0), args.get(1))?, args.get(2)),
        _ => (lift(args.get(0), None)?, args.get(1)),
    };
    let p = match p {
        Some(Arg::Num(p)) => *p,
        other => {
            let type_name = other.map_or("absent", Arg::type_name);
            return Err(shape_err!(
                type_name,
                &format!("lerp fraction must be a number, found {}", type_name)
            ));
        }
    };
    Ok((x + (target.x() - x) * p, y + (target.y() - y) * p))
}

/// A lone argument doubles as the secondary one, so a single scalar applies
/// to both components instead of being read as an angle.
fn binary(
    x: f64,
    y: f64,
    args: &Args,
    op: fn(f64, f64) -> f64,
    check: Option<fn(f64) -> Result<(), Ve2Error>>,
) -> Result<(f64, f64), Ve2Error> {
    let primary = args.get(0);
    let (x2, y2) = normalize(primary, args.get(1).or(primary))?;
    if let Some(check) = check {
        check(x2)?;
        check(y2)?;
    }
    Ok((op(x, x2), op(y, y2)))
}

// f64::max and f64::min drop a NaN operand, these keep it so the result
// check rejects it
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

// halves go toward +infinity, so -2.5 rounds to -2 and 2.5 to 3
fn round_half_up(v: f64) -> f64 {
    let r = v.floor();
    if v - r >= 0.5 {
        r + 1.0
    } else {
        r
    }
}

fn sqrt(x: f64, y: f64, _: &Args) -> Result<(f64, f64), Ve2Error> {
    check_sqrt_domain(x)?;
    check_sqrt_domain(y)?;
    Ok((x.sqrt(), y.sqrt()))
}

fn bounds(args: &Args) -> Result<(f64, f64), Ve2Error> {
    let min = number(args, 0, "clamp min")?;
    let max = number(args, 1, "clamp max")?;
    check_range(min, max)?;
    Ok((min, max))
}

fn number(args: &Args, idx: usize, what: &str) -> Result<f64, Ve2Error> {
    match args.get(idx) {
        Some(Arg::Num(v)) => Ok(*v),
        other => {
            let type_name = other.map_or("absent", Arg::type_name);
            Err(shape_err!(
                type_name,
                &format!("{} must be a number, found {}", what, type_name)
            ))
        }
    }
}
