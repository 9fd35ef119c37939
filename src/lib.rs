//! 2D vector value type with a fluent, checked arithmetic API
//!
//! Build vectors from pairs, angles, sequences, objects or other vectors,
//! then transform them with operations that each come as a pure method
//! (`v.add(..)`, returns a new vector) and an in-place one (`v.add_mut(..)`,
//! mutates and returns the receiver).
//!
//! ```
//! use ve2::{ve2, Vector};
//!
//! let mut v = ve2((3.0, 4.0)).unwrap();
//! assert_eq!(v.mag(), 5.0);
//! assert_eq!(v.add(1.0).unwrap().to_array(), [4.0, 5.0]);
//! v.mul_mut([2.0, 0.5]).unwrap().swap_mut().unwrap();
//! assert_eq!(v.to_string(), "(2, 6)");
//! assert!(v.div(0.0).is_err());
//! assert_eq!(Vector::zero().dist((3.0, 4.0)).unwrap(), 5.0);
//! ```

#[macro_use]
pub mod ve2_error;
pub mod ve2_args;
pub mod ve2_invariant;
pub mod ve2_model;
mod ve2_normalize;
mod ve2_ops;

pub use ve2_args::{Arg, Args, Fields};
pub use ve2_error::{ErrorKind, Ve2Error};
pub use ve2_invariant::Dialect;
pub use ve2_model::{Point, Vector};
pub use ve2_normalize::{lift, normalize};
pub use ve2_ops::{operation, operations, Family, Operation};

/// construct a vector from any vector-like call shape
pub fn ve2<A: Into<Args>>(args: A) -> Result<Vector, Ve2Error> {
    Vector::from_args(args)
}
