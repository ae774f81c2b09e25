//! Integer rectangles and the adjacency rules used to merge hot pixels.

/// Axis-aligned rectangle with a positive width and height.
///
/// `x`/`y` address the top-left cell; `right()` and `bottom()` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

/// How two regions have to relate before they are fused into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjacency {
    /// Overlap, shared edge or shared corner (8-connectivity).
    #[default]
    EdgeOrCorner,
    /// Overlap or shared edge only; corner-only contact keeps regions apart
    /// (4-connectivity).
    EdgeOnly,
}

impl Rect {
    /// Returns `None` for an empty rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { x, y, width, height })
    }

    /// The 1×1 rectangle covering a single pixel.
    pub fn cell(x: u32, y: u32) -> Self {
        Self { x, y, width: 1, height: 1 }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && (x as u64) < self.right() && y >= self.y && (y as u64) < self.bottom()
    }

    /// Smallest rectangle containing both operands.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect {
            x,
            y,
            width: (right - x as u64) as u32,
            height: (bottom - y as u64) as u32,
        }
    }

    /// True when the two rectangles share at least one cell.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (ox, oy) = self.overlap(other);
        ox > 0 && oy > 0
    }

    /// True when the rectangles overlap or touch according to `adjacency`.
    pub fn is_adjacent(&self, other: &Rect, adjacency: Adjacency) -> bool {
        let (ox, oy) = self.overlap(other);
        if ox < 0 || oy < 0 {
            return false;
        }
        match adjacency {
            Adjacency::EdgeOrCorner => true,
            Adjacency::EdgeOnly => !(ox == 0 && oy == 0),
        }
    }

    /// Maps the rectangle from an image of size `from` onto one of size `to`.
    ///
    /// The result always covers at least one cell.
    pub fn scaled(&self, from: (u32, u32), to: (u32, u32)) -> Rect {
        let scale = |v: u64, from: u32, to: u32| -> u64 {
            if from == 0 { v } else { v * to as u64 / from as u64 }
        };
        let x = scale(self.x as u64, from.0, to.0);
        let y = scale(self.y as u64, from.1, to.1);
        let right = scale(self.right(), from.0, to.0).max(x + 1);
        let bottom = scale(self.bottom(), from.1, to.1).max(y + 1);
        Rect {
            x: x as u32,
            y: y as u32,
            width: (right - x) as u32,
            height: (bottom - y) as u32,
        }
    }

    /// Signed overlap along each axis: positive overlap, zero contact,
    /// negative gap.
    fn overlap(&self, other: &Rect) -> (i64, i64) {
        let ox = self.right().min(other.right()) as i64 - self.x.max(other.x) as i64;
        let oy = self.bottom().min(other.bottom()) as i64 - self.y.max(other.y) as i64;
        (ox, oy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u32, y: u32, w: u32, h: u32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    #[test]
    fn test_empty_rect_rejected() {
        assert!(Rect::new(0, 0, 0, 3).is_none());
        assert!(Rect::new(0, 0, 3, 0).is_none());
    }

    #[test]
    fn test_union_bounds() {
        let a = rect(2, 5, 3, 1);
        let b = rect(0, 6, 1, 4);
        let u = a.union(&b);
        assert_eq!(u, rect(0, 5, 5, 5));
        assert_eq!(u, b.union(&a));
    }

    #[test]
    fn test_edge_contact_is_adjacent_but_not_intersecting() {
        let a = Rect::cell(1, 1);
        let b = Rect::cell(2, 1);
        assert!(!a.intersects(&b));
        assert!(a.is_adjacent(&b, Adjacency::EdgeOrCorner));
        assert!(a.is_adjacent(&b, Adjacency::EdgeOnly));
    }

    #[test]
    fn test_corner_contact_depends_on_policy() {
        let a = Rect::cell(1, 1);
        let b = Rect::cell(2, 2);
        assert!(a.is_adjacent(&b, Adjacency::EdgeOrCorner));
        assert!(!a.is_adjacent(&b, Adjacency::EdgeOnly));
    }

    #[test]
    fn test_gap_is_not_adjacent() {
        let a = Rect::cell(0, 0);
        let b = Rect::cell(2, 0);
        assert!(!a.is_adjacent(&b, Adjacency::EdgeOrCorner));
    }

    #[test]
    fn test_overlap_is_adjacent_under_both_policies() {
        let a = rect(0, 0, 3, 3);
        let b = rect(2, 2, 3, 3);
        assert!(a.intersects(&b));
        assert!(a.is_adjacent(&b, Adjacency::EdgeOnly));
    }

    #[test]
    fn test_contains() {
        let r = rect(1, 1, 2, 2);
        assert!(r.contains(1, 1));
        assert!(r.contains(2, 2));
        assert!(!r.contains(3, 2));
        assert!(!r.contains(0, 1));
    }

    #[test]
    fn test_scaled_to_double_resolution() {
        let r = rect(3, 4, 1, 1);
        assert_eq!(r.scaled((10, 10), (20, 20)), rect(6, 8, 2, 2));
    }

    #[test]
    fn test_scaled_down_keeps_one_cell() {
        let r = Rect::cell(7, 7);
        assert_eq!(r.scaled((100, 100), (10, 10)), Rect::cell(0, 0));
    }
}
