mod points;
mod vector;

pub use self::points::*;
pub use self::vector::*;

#[cfg(test)]
mod test_ve2_model {
    use super::*;
    use crate::ve2_args::Fields;

    #[test]
    fn test_object_round_trip() {
        let v = Vector::new(12.0, -34.5).unwrap();
        let p = v.to_object();
        assert_eq!(p, Point::new(12.0, -34.5));
        assert_eq!(Vector::from_args(p).unwrap(), v);
        assert_eq!(
            Vector::from_args(Fields::new().x(p.x).y(p.y)).unwrap(),
            v
        );
    }
}
