use std::error::Error;
use std::f64::consts::PI;
use ve2::*;

// walk a point around a square, steering toward each corner in turn
fn main() -> Result<(), Box<dyn Error>> {
    println!("dialect: {:?}", Dialect::current());

    let corners = [[10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]];
    let mut pos = Vector::zero();
    for corner in corners {
        for _ in 0..4 {
            pos.lerp_mut((corner, 0.5))?;
        }
        pos.round_mut()?;
        println!("reached {} (distance to corner {})", pos, pos.dist(corner)?);
    }

    // heading vector, a quarter turn at a time
    let mut heading = Vector::from_angle(0.0, 2.0)?;
    for _ in 0..4 {
        heading.rot_mut(PI / 2.0)?;
        println!(
            "heading {:.3} rad, magnitude {:.3}",
            heading.dir(),
            heading.mag()
        );
    }

    // every operation has a pure and an in-place form
    let v = ve2(Fields::new().x(3.0).y(4.0))?;
    for op in operations() {
        println!("{:>8} / {:<12} {:?}", op.name(), op.in_place_name(), op.family());
    }
    println!("{} normalized is {}", v, v.norm()?);

    // bad input fails fast and leaves the receiver alone
    let mut w = v.clone();
    match w.div_mut((2.0, 0.0)) {
        Ok(_) => println!("unexpected division success"),
        Err(err) => eprintln!("div failed: {}", err),
    }
    match ve2((1.0, "two")) {
        Ok(v) => println!("unexpected vector {}", v),
        Err(err) => eprintln!("construct failed: {}", err),
    }
    println!("after failed division: {}", w);

    Ok(())
}
