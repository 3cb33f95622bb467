use std::iter::FusedIterator;

use crate::math::Point2;

/// Midpoint circle rasterizer.
///
/// Walks one octant with an integer error term and yields the eight mirrored
/// points of every step, so the output is an unfilled outline. Points are
/// yielded in step order, eight per step; where octants meet (e.g. on the
/// axes) the same point may come out more than once.
///
/// A radius of zero or less yields nothing.
#[derive(Clone, Debug)]
pub struct MidpointCircle {
    center: Point2,
    diameter: i32,
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    err: i32,
    octant: u8,
}

impl MidpointCircle {
    pub fn new(center: Point2, radius: i32) -> Self {
        let diameter = radius.saturating_mul(2);

        Self {
            center,
            diameter,
            x: radius.saturating_sub(1),
            y: 0,
            dx: 1,
            dy: 1,
            err: 1i32.saturating_sub(diameter),
            octant: 0,
        }
    }

    fn step(&mut self) {
        if self.err <= 0 {
            self.y += 1;
            self.err += self.dy;
            self.dy += 2;
        }

        // Not `else`: both adjustments can happen in one step.
        if self.err > 0 {
            self.x -= 1;
            self.dx += 2;
            self.err += self.dx - self.diameter;
        }
    }
}

impl Iterator for MidpointCircle {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        if self.x < self.y {
            return None;
        }

        let Point2 { x: cx, y: cy } = self.center;
        let (x, y) = (self.x, self.y);

        // Saturate so far off-canvas circles clip instead of wrapping.
        let point = match self.octant {
            0 => (cx.saturating_add(x), cy.saturating_add(y)),
            1 => (cx.saturating_add(y), cy.saturating_add(x)),
            2 => (cx.saturating_sub(y), cy.saturating_add(x)),
            3 => (cx.saturating_sub(x), cy.saturating_add(y)),
            4 => (cx.saturating_sub(x), cy.saturating_sub(y)),
            5 => (cx.saturating_sub(y), cy.saturating_sub(x)),
            6 => (cx.saturating_add(y), cy.saturating_sub(x)),
            _ => (cx.saturating_add(x), cy.saturating_sub(y)),
        };

        self.octant += 1;
        if self.octant == 8 {
            self.octant = 0;
            self.step();
        }

        Some(Point2::from(point))
    }
}

impl FusedIterator for MidpointCircle {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn offsets(center: Point2, radius: i32) -> BTreeSet<(i32, i32)> {
        MidpointCircle::new(center, radius)
            .map(|p| (p.x - center.x, p.y - center.y))
            .collect()
    }

    fn mirrored(octant: &[(i32, i32)]) -> BTreeSet<(i32, i32)> {
        octant
            .iter()
            .flat_map(|&(x, y)| {
                [
                    (x, y),
                    (y, x),
                    (-y, x),
                    (-x, y),
                    (-x, -y),
                    (-y, -x),
                    (y, -x),
                    (x, -y),
                ]
            })
            .collect()
    }

    #[test]
    fn radius_five_outline() {
        let center = Point2::new(50, 40);

        assert_eq!(
            offsets(center, 5),
            mirrored(&[(4, 0), (4, 1), (4, 2), (4, 3)])
        );
        assert_eq!(MidpointCircle::new(center, 5).count(), 4 * 8);
    }

    #[test]
    fn radius_ten_outline() {
        assert_eq!(
            offsets(Point2::ZERO, 10),
            mirrored(&[
                (9, 0),
                (9, 1),
                (9, 2),
                (9, 3),
                (9, 4),
                (8, 5),
                (8, 6),
                (7, 7),
            ])
        );
    }

    #[test]
    fn outline_is_symmetric_in_every_octant() {
        for radius in 1..60 {
            let points = offsets(Point2::ZERO, radius);

            for &(x, y) in &points {
                for mirror in [(y, x), (-x, y), (x, -y), (-y, -x)] {
                    assert!(points.contains(&mirror), "r={radius}: missing {mirror:?}");
                }
            }
        }
    }

    #[test]
    fn outline_stays_within_radius() {
        for radius in 2..60 {
            for (x, y) in offsets(Point2::ZERO, radius) {
                let dist2 = x * x + y * y;

                assert!(dist2 <= radius * radius, "r={radius}: ({x}, {y}) is outside");
                assert!(dist2 >= (radius - 2) * (radius - 2), "r={radius}: ({x}, {y}) is inside");
            }
        }
    }

    #[test]
    fn outline_is_not_filled() {
        assert!(!offsets(Point2::ZERO, 20).contains(&(0, 0)));
    }

    #[test]
    fn saturates_near_i32_edge() {
        let center = Point2::new(i32::MAX - 5, i32::MIN + 5);
        let points: Vec<Point2> = MidpointCircle::new(center, 20).collect();

        assert_eq!(points.len(), MidpointCircle::new(Point2::ZERO, 20).count());
        assert!(points.iter().any(|p| p.x == i32::MAX));
        assert!(points.iter().any(|p| p.y == i32::MIN));
    }

    #[test]
    fn degenerate_radii() {
        assert_eq!(MidpointCircle::new(Point2::ZERO, 0).count(), 0);
        assert_eq!(MidpointCircle::new(Point2::ZERO, -3).count(), 0);
        assert_eq!(offsets(Point2::new(7, 7), 1), BTreeSet::from([(0, 0)]));
    }
}
