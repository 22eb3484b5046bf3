use log::debug;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use static_assertions::{assert_eq_size, assert_impl_all};
use std::fmt;

/// A two-dimensional integer coordinate.
///
/// Points are plain values: every operation returns a new `Point` and
/// leaves its operands untouched.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

assert_eq_size!(Point, u64);
assert_impl_all!(Point: Copy, Send, Sync);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverflowError {
    #[error("{axis} coordinate overflowed: {lhs} + {rhs}")]
    Overflow { axis: Axis, lhs: i32, rhs: i32 },
}

/// How a component sum outside the `i32` range is handled.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Overflow {
    /// Two's complement wraparound, what `+` does.
    #[default]
    Wrapping,
    /// Clamp to `i32::MIN` / `i32::MAX`.
    Saturating,
    /// Fail with [`OverflowError`].
    Checked,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn wrapping_add(self, other: Self) -> Self {
        Self {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
        }
    }

    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            x: self.x.saturating_add(other.x),
            y: self.y.saturating_add(other.y),
        }
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.try_add(other).ok()
    }

    /// Adds component-wise, reporting the first axis (x before y) whose sum
    /// does not fit in an `i32`.
    pub fn try_add(self, other: Self) -> Result<Self, OverflowError> {
        let x = checked_component(Axis::X, self.x, other.x)?;
        let y = checked_component(Axis::Y, self.y, other.y)?;
        Ok(Self { x, y })
    }

    pub fn add_with(self, other: Self, policy: Overflow) -> Result<Self, OverflowError> {
        match policy {
            Overflow::Wrapping => Ok(self.wrapping_add(other)),
            Overflow::Saturating => Ok(self.saturating_add(other)),
            Overflow::Checked => self.try_add(other),
        }
    }
}

fn checked_component(axis: Axis, lhs: i32, rhs: i32) -> Result<i32, OverflowError> {
    lhs.checked_add(rhs).ok_or_else(|| {
        debug!("{axis} overflow adding {lhs} and {rhs}");
        OverflowError::Overflow { axis, lhs, rhs }
    })
}

/// Wrapping component-wise addition.
impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }
}

impl std::convert::From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Distribution<Point> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(rng.gen(), rng.gen())
    }
}

#[test]
fn test_point_new() {
    let p = Point::new(2, 3);
    assert_eq!(p.x, 2);
    assert_eq!(p.y, 3);
    assert_eq!(Point::from((2, 3)), p);
}

#[test]
fn test_point_add() {
    assert_eq!(Point::new(2, 3) + Point::new(4, 5), Point::new(6, 8));
    assert_eq!(Point::new(-1, -1) + Point::new(1, 1), Point::ORIGIN);
    assert_eq!(Point::new(0, 0) + Point::new(0, 0), Point::new(0, 0));
}

#[test]
fn test_origin_is_default() {
    assert_eq!(Point::default(), Point::ORIGIN);
}

#[test]
fn test_add_wraps() {
    assert_eq!(
        Point::new(i32::MAX, 0) + Point::new(1, 0),
        Point::new(i32::MIN, 0)
    );
    assert_eq!(
        Point::new(0, i32::MIN) + Point::new(0, -1),
        Point::new(0, i32::MAX)
    );
}

#[test]
fn test_saturating_add() {
    assert_eq!(
        Point::new(i32::MAX, i32::MIN).saturating_add(Point::new(1, -1)),
        Point::new(i32::MAX, i32::MIN)
    );
    assert_eq!(
        Point::new(2, 3).saturating_add(Point::new(4, 5)),
        Point::new(6, 8)
    );
}

#[test]
fn test_checked_add() {
    assert_eq!(Point::new(i32::MAX, 0).checked_add(Point::new(1, 0)), None);
    assert_eq!(
        Point::new(2, 3).checked_add(Point::new(4, 5)),
        Some(Point::new(6, 8))
    );
}

#[test]
fn test_try_add_reports_axis() {
    assert_eq!(
        Point::new(i32::MAX, 0).try_add(Point::new(1, 0)),
        Err(OverflowError::Overflow {
            axis: Axis::X,
            lhs: i32::MAX,
            rhs: 1
        })
    );
    assert_eq!(
        Point::new(0, i32::MIN).try_add(Point::new(0, -1)),
        Err(OverflowError::Overflow {
            axis: Axis::Y,
            lhs: i32::MIN,
            rhs: -1
        })
    );
    // x is checked first
    let err = Point::new(i32::MAX, i32::MAX)
        .try_add(Point::new(1, 1))
        .unwrap_err();
    assert_eq!(err.to_string(), "x coordinate overflowed: 2147483647 + 1");
}

#[test]
fn test_add_with() {
    let p = Point::new(i32::MAX, 7);
    let q = Point::new(1, 1);
    assert_eq!(p.add_with(q, Overflow::Wrapping), Ok(p + q));
    assert_eq!(
        p.add_with(q, Overflow::Saturating),
        Ok(Point::new(i32::MAX, 8))
    );
    assert!(p.add_with(q, Overflow::Checked).is_err());
    assert_eq!(
        Point::new(2, 3).add_with(Point::new(4, 5), Overflow::Checked),
        Ok(Point::new(6, 8))
    );
}
