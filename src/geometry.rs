//! Pixel geometry for carets and selection highlights.
//!
//! The host editor reports bounding boxes in viewport coordinates; the
//! overlay positions its visuals relative to the editor container, so every
//! rectangle is translated by the container's own bounding box before use.

/// An axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the rectangle covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Translate this rectangle into the coordinate space of `container`.
    #[must_use]
    pub fn relative_to(&self, container: &Rect) -> Self {
        Self {
            left: self.left - container.left,
            top: self.top - container.top,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
        assert!(!rect.is_empty());
        assert!(Rect::new(1.0, 1.0, 0.0, 5.0).is_empty());
    }

    #[test]
    fn test_relative_to() {
        let container = Rect::new(100.0, 50.0, 800.0, 600.0);
        let rect = Rect::new(120.0, 80.0, 40.0, 16.0);
        let relative = rect.relative_to(&container);
        assert_eq!(relative, Rect::new(20.0, 30.0, 40.0, 16.0));
    }
}
