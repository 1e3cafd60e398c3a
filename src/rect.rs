use core::fmt;

use crate::coord::{MapPoint, max_of, min_of, nearly_equal};

/// An axis-aligned rectangle: the 2D footprint of spatial data.
///
/// Bounds are stored exactly as given; constructors and setters never reorder
/// them, so an inverted range is legal until [`normalize`](Rect::normalize) is
/// called. Degenerate states are observable rather than rejected: see
/// [`is_null`](Rect::is_null) and [`is_empty`](Rect::is_empty).
///
/// Equality is exact, field by field. (Contrast [`Box3D`](crate::Box3D),
/// whose vertical bounds compare with tolerance.)
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Rect {
    /// The sentinel "no extent yet" rectangle: minimum bounds at `f64::MAX`
    /// and maximum bounds at `-f64::MAX`, so that combining it with anything
    /// yields that thing. See [`Rect::set_minimal`].
    pub const MINIMAL: Rect = Rect {
        x_min: f64::MAX,
        y_min: f64::MAX,
        x_max: -f64::MAX,
        y_max: -f64::MAX,
    };

    /// Constructs a `Rect` from individual bounds, stored verbatim.
    #[inline]
    pub const fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Minimum X bound.
    #[inline]
    pub const fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Minimum Y bound.
    #[inline]
    pub const fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Maximum X bound.
    #[inline]
    pub const fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Maximum Y bound.
    #[inline]
    pub const fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Sets the minimum X bound. No reordering is performed.
    #[inline]
    pub fn set_x_min(&mut self, x: f64) {
        self.x_min = x;
    }

    /// Sets the minimum Y bound. No reordering is performed.
    #[inline]
    pub fn set_y_min(&mut self, y: f64) {
        self.y_min = y;
    }

    /// Sets the maximum X bound. No reordering is performed.
    #[inline]
    pub fn set_x_max(&mut self, x: f64) {
        self.x_max = x;
    }

    /// Sets the maximum Y bound. No reordering is performed.
    #[inline]
    pub fn set_y_max(&mut self, y: f64) {
        self.y_max = y;
    }

    /// The X span of the rectangle; negative if the X bounds are inverted.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// The Y span of the rectangle; negative if the Y bounds are inverted.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Resets to [`Rect::MINIMAL`], the seed of a combine-accumulation loop.
    #[inline]
    pub fn set_minimal(&mut self) {
        *self = Rect::MINIMAL;
    }

    /// Whether this rectangle has never been assigned real bounds: either all
    /// bounds are (nearly) zero, the default value, or they match the
    /// minimal sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        (nearly_equal(self.x_min, 0.0)
            && nearly_equal(self.x_max, 0.0)
            && nearly_equal(self.y_min, 0.0)
            && nearly_equal(self.y_max, 0.0))
            || (nearly_equal(self.x_min, f64::MAX)
                && nearly_equal(self.y_min, f64::MAX)
                && nearly_equal(self.x_max, -f64::MAX)
                && nearly_equal(self.y_max, -f64::MAX))
    }

    /// Whether the rectangle spans no area: inverted on either axis, or of
    /// (nearly) zero width or height.
    ///
    /// Note that null and empty are distinct: the bounding rectangle of a
    /// single point is empty yet carries real coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_max < self.x_min
            || self.y_max < self.y_min
            || nearly_equal(self.x_max, self.x_min)
            || nearly_equal(self.y_max, self.y_min)
    }

    /// Reorders the bounds so that minimum ≤ maximum on each axis.
    ///
    /// A null rectangle is left untouched, so the minimal sentinel survives
    /// normalization. NaN bounds are never reordered.
    pub fn normalize(&mut self) {
        if self.is_null() {
            return;
        }
        if self.x_min > self.x_max {
            core::mem::swap(&mut self.x_min, &mut self.x_max);
        }
        if self.y_min > self.y_max {
            core::mem::swap(&mut self.y_min, &mut self.y_max);
        }
    }

    /// Consuming form of [`normalize`](Rect::normalize), for use at
    /// construction: `Rect::new(...).normalized()`.
    #[inline]
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Whether `self` and `other` share any point, boundaries included.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        let x1 = if self.x_min > other.x_min {
            self.x_min
        } else {
            other.x_min
        };
        let x2 = if self.x_max < other.x_max {
            self.x_max
        } else {
            other.x_max
        };
        if x1 > x2 {
            return false;
        }
        let y1 = if self.y_min > other.y_min {
            self.y_min
        } else {
            other.y_min
        };
        let y2 = if self.y_max < other.y_max {
            self.y_max
        } else {
            other.y_max
        };
        y1 <= y2
    }

    /// The overlap of the two rectangles, or the default (zero) rectangle if
    /// they do not intersect. Touching boundaries yield a degenerate
    /// rectangle of zero width or height.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Rect {
        let mut result = Rect::default();
        if self.intersects(other) {
            result = Rect::new(
                max_of(self.x_min, other.x_min),
                max_of(self.y_min, other.y_min),
                min_of(self.x_max, other.x_max),
                min_of(self.y_max, other.y_max),
            );
        }
        result
    }

    /// Whether `other` lies entirely within `self`, boundaries included.
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x_min >= self.x_min
            && other.x_max <= self.x_max
            && other.y_min >= self.y_min
            && other.y_max <= self.y_max
    }

    /// Whether the coordinate pair lies within `self`, boundaries included.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
    }

    /// Whether the point's X and Y lie within `self`; Z is not consulted.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: MapPoint) -> bool {
        self.contains(point.x, point.y)
    }

    /// Grows `self` so that it covers both its original extent and `other`.
    ///
    /// A null receiver adopts `other` wholesale (this is what makes
    /// [`Rect::MINIMAL`] a working accumulation seed); a null argument is
    /// ignored.
    pub fn combine_extent_with(&mut self, other: &Rect) {
        if self.is_null() {
            *self = *other;
        } else if !other.is_null() {
            self.x_min = min_of(self.x_min, other.x_min);
            self.x_max = max_of(self.x_max, other.x_max);
            self.y_min = min_of(self.y_min, other.y_min);
            self.y_max = max_of(self.y_max, other.y_max);
        }
    }

    /// Grows `self` so that it covers both its original extent and the
    /// coordinate pair.
    pub fn combine_extent_with_coords(&mut self, x: f64, y: f64) {
        if self.is_null() {
            *self = Rect::new(x, y, x, y);
        } else {
            self.x_min = min_of(self.x_min, x);
            self.x_max = max_of(self.x_max, x);
            self.y_min = min_of(self.y_min, y);
            self.y_max = max_of(self.y_max, y);
        }
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rect")
            .field(&(self.x_min..=self.x_max))
            .field(&(self.y_min..=self.y_max))
            .finish()
    }
}
