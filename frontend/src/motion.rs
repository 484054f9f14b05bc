//! Backdrop drift for the hero: an idle wobble added to the pointer position.

use std::ops::Add;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Pointer value while the cursor is outside the hero.
    pub const IDLE: Point = Point { x: -10_000.0, y: -10_000.0 };

    pub fn is_idle(self) -> bool {
        self.x <= Self::IDLE.x || self.y <= Self::IDLE.y
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point { x: self.x + other.x, y: self.y + other.y }
    }
}

pub fn wobble(elapsed_ms: f64) -> Point {
    Point {
        x: 24.0 * (elapsed_ms * 0.0008).sin() + 12.0 * (elapsed_ms * 0.0013).cos(),
        y: 18.0 * (elapsed_ms * 0.0007).cos() + 10.0 * (elapsed_ms * 0.0011).sin(),
    }
}

/// Offset published to the stylesheet for one frame.
pub fn follow_offset(pointer: Point, width: f64, height: f64, elapsed_ms: f64) -> Point {
    let anchor = if pointer.is_idle() {
        Point { x: width / 2.0, y: height / 2.0 }
    } else {
        pointer
    };
    anchor + wobble(elapsed_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wobble_starts_at_cosine_peaks() {
        let start = wobble(0.0);
        assert!((start.x - 12.0).abs() < 1e-9);
        assert!((start.y - 18.0).abs() < 1e-9);
    }

    #[test]
    fn wobble_stays_bounded() {
        for step in 0..2_000 {
            let p = wobble(step as f64 * 16.7);
            assert!(p.x.abs() <= 36.0);
            assert!(p.y.abs() <= 28.0);
        }
    }

    #[test]
    fn idle_pointer_recentres() {
        let offset = follow_offset(Point::IDLE, 800.0, 600.0, 0.0);
        assert!((offset.x - 412.0).abs() < 1e-9);
        assert!((offset.y - 318.0).abs() < 1e-9);
    }

    #[test]
    fn tracked_pointer_leads() {
        let pointer = Point { x: 100.0, y: 40.0 };
        let offset = follow_offset(pointer, 800.0, 600.0, 1234.0);
        let drift = wobble(1234.0);
        assert_eq!(offset, Point { x: 100.0 + drift.x, y: 40.0 + drift.y });
    }

    #[test]
    fn sentinel_detection() {
        assert!(Point::IDLE.is_idle());
        assert!(!Point { x: 0.0, y: 0.0 }.is_idle());
        assert!(!Point { x: -20.0, y: 5.0 }.is_idle());
    }
}
