use super::Point2;

/// Axis-aligned integer rectangle. `w`/`h` of zero or less is an empty rect.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn with_size(w: i32, h: i32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    pub fn pos(&self) -> Point2 {
        Point2 { x: self.x, y: self.y }
    }

    pub fn size(&self) -> Point2 {
        Point2 { x: self.w, y: self.h }
    }

    /// Integer center, rounding toward the top-left like `x + w / 2`.
    /// Saturates at the `i32` range.
    pub fn center(&self) -> Point2 {
        Point2 {
            x: self.x.saturating_add(self.w / 2),
            y: self.y.saturating_add(self.h / 2),
        }
    }

    pub fn contains(&self, point: Point2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Overlapping area of both rects, or `None` when they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= x || bottom <= y {
            return None;
        }

        Some(Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_clips_to_overlap() {
        let screen = Rect::with_size(800, 600);
        let rect = Rect::new(750, -20, 100, 100);

        assert_eq!(screen.intersect(&rect), Some(Rect::new(750, 0, 50, 80)));
    }

    #[test]
    fn intersect_disjoint_or_touching_is_none() {
        let a = Rect::new(0, 0, 10, 10);

        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
        assert_eq!(a.intersect(&Rect::new(20, 20, 5, 5)), None);
        assert_eq!(a.intersect(&Rect::new(0, 0, 0, 5)), None);
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(100, 100, 200, 100);

        assert!(rect.contains(Point2::new(100, 100)));
        assert!(rect.contains(Point2::new(299, 199)));
        assert!(!rect.contains(Point2::new(300, 150)));
        assert!(!rect.contains(Point2::new(150, 200)));
    }

    #[test]
    fn center_uses_integer_halves() {
        assert_eq!(Rect::new(10, 20, 31, 11).center(), Point2::new(25, 25));
    }

    #[test]
    fn center_saturates_at_i32_edge() {
        let rect = Rect::new(i32::MAX - 10, i32::MIN, 40, -40);

        assert_eq!(rect.center(), Point2::new(i32::MAX, i32::MIN));
    }
}
