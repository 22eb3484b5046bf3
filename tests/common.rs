use lattice::point::Point;
use rand::Rng;

// Keeps every sum of two or three of these points inside the i32 range.
const SMALL: i32 = i32::MAX / 4;

pub fn rand_small_point<R: Rng + ?Sized>(rng: &mut R) -> Point {
    Point::new(rng.gen_range(-SMALL..=SMALL), rng.gen_range(-SMALL..=SMALL))
}
