use num_traits::ToPrimitive;
use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Integer 2D point, also used for pixel sizes (`x` = width, `y` = height).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    /// Build a point from any numeric type. Values that do not fit in an
    /// `i32` become 0.
    pub fn new<T: ToPrimitive>(x: T, y: T) -> Self {
        Self {
            x: x.to_i32().unwrap_or(0),
            y: y.to_i32().unwrap_or(0),
        }
    }

    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// True when either axis is zero or negative, i.e. nothing can be drawn.
    pub fn is_empty(&self) -> bool {
        self.x <= 0 || self.y <= 0
    }
}

impl From<PhysicalSize<u32>> for Point2 {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<PhysicalPosition<i32>> for Point2 {
    fn from(pos: PhysicalPosition<i32>) -> Self {
        Self { x: pos.x, y: pos.y }
    }
}

impl From<(i32, i32)> for Point2 {
    fn from(tuple: (i32, i32)) -> Self {
        Self {
            x: tuple.0,
            y: tuple.1,
        }
    }
}

impl From<Point2> for PhysicalSize<u32> {
    fn from(point: Point2) -> Self {
        PhysicalSize::new(point.x.max(0) as u32, point.y.max(0) as u32)
    }
}

impl From<Point2> for PhysicalPosition<i32> {
    fn from(point: Point2) -> Self {
        PhysicalPosition::new(point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_saturates_out_of_range_to_zero() {
        assert_eq!(Point2::new(u64::MAX, 5), Point2 { x: 0, y: 5 });
        assert_eq!(Point2::new(12.9f32, -3.2f32), Point2 { x: 12, y: -3 });
    }

    #[test]
    fn empty_sizes() {
        assert!(Point2::new(0, 600).is_empty());
        assert!(Point2::new(800, -1).is_empty());
        assert!(!Point2::new(800, 600).is_empty());
    }

    #[test]
    fn physical_size_round_trip_clamps_negative() {
        let size: PhysicalSize<u32> = Point2::new(-4, 10).into();
        assert_eq!(size, PhysicalSize::new(0, 10));
        assert_eq!(Point2::from(PhysicalSize::new(800u32, 600u32)), Point2::new(800, 600));
    }
}
