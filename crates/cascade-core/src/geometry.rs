#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Anchors and floating panels are rectangles in terminal coordinates
//! (0-indexed, origin at top-left). All arithmetic saturates so extreme
//! coordinates never panic.

/// A rectangle for anchor bounds, panel bounds, and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// The smallest rectangle containing both this rectangle and another.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }
}

/// A width/height pair, used for panel size hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn contains_edges() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 5));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::new(5, 5, 0, 3);
        assert!(r.is_empty());
        assert!(!r.contains(5, 5));
    }

    #[test]
    fn intersection_of_disjoint_is_none() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, 5, 2, 2);
        assert_eq!(a.intersection_opt(&b), None);
    }

    #[test]
    fn union_contains_both() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, 5, 2, 2);
        let u = a.union(&b);
        assert!(u.contains(0, 0));
        assert!(u.contains(6, 6));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (0u16..=500, 0u16..=500, 0u16..=500, 0u16..=500)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn intersection_commutative(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(a.intersection_opt(&b), b.intersection_opt(&a));
        }

        #[test]
        fn point_in_intersection_is_in_both(
            a in rect_strategy(),
            b in rect_strategy(),
            x in 0u16..=1000,
            y in 0u16..=1000,
        ) {
            let both = a.contains(x, y) && b.contains(x, y);
            let in_inter = a
                .intersection_opt(&b)
                .is_some_and(|i| i.contains(x, y));
            prop_assert_eq!(both, in_inter);
        }

        #[test]
        fn no_panic_on_extremes(x in any::<u16>(), y in any::<u16>(), w in any::<u16>(), h in any::<u16>()) {
            let r = Rect::new(x, y, w, h);
            let _ = r.right();
            let _ = r.bottom();
            let _ = r.contains(u16::MAX, u16::MAX);
            let _ = r.union(&Rect::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX));
        }
    }
}
