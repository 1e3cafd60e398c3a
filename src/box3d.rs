use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::coord::{MapPoint, MapVector, max_of, min_of, nearly_equal};
use crate::rect::Rect;

/// An axis-aligned box in three-dimensional space, used as a bounding volume
/// for spatial data.
///
/// A `Box3D` is a [`Rect`] footprint plus a vertical range. As with [`Rect`],
/// bounds are stored exactly as given and never implicitly reordered; call
/// [`normalize`](Box3D::normalize) when ordering matters. The default box has
/// every bound at zero: it is empty and 2D, but not null.
///
/// Three special states are distinguished, and consumers are expected to
/// branch on them rather than on errors:
///
/// * [`is_null`](Box3D::is_null): the box has never been assigned real
///   extents (all bounds NaN, or the [`MINIMAL`](Box3D::MINIMAL) sentinel).
/// * [`is_2d`](Box3D::is_2d): the vertical range is collapsed, inverted, or
///   NaN. Such a box acts as unbounded along Z: [`intersects`](Box3D::intersects)
///   and [`contains_box`](Box3D::contains_box) ignore the Z axis whenever
///   either operand is 2D.
/// * [`is_empty`](Box3D::is_empty): bounds are present but span no volume.
///
/// Null and empty are independent predicates; a null box happens to also be
/// empty, but an empty box is usually not null.
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Box3D {
    bounds_2d: Rect,
    z_min: f64,
    z_max: f64,
}

impl Box3D {
    /// The sentinel "no extent yet" box: minimum bounds at `f64::MAX` and
    /// maximum bounds at `-f64::MAX`, so that combining it with any box or
    /// point yields that operand's bounds. A minimal box
    /// [`is_null`](Box3D::is_null).
    pub const MINIMAL: Box3D = Box3D {
        bounds_2d: Rect::MINIMAL,
        z_min: f64::MAX,
        z_max: -f64::MAX,
    };

    /// Constructs a box from individual bounds, stored verbatim.
    ///
    /// Inverted ranges are legal; no validation is performed. Chain
    /// [`normalized`](Box3D::normalized) to reorder at construction.
    ///
    /// ```
    /// use geoextent::Box3D;
    ///
    /// let b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
    /// assert!(b.is_3d() && !b.is_empty());
    /// ```
    #[inline]
    pub const fn new(
        x_min: f64,
        y_min: f64,
        z_min: f64,
        x_max: f64,
        y_max: f64,
        z_max: f64,
    ) -> Self {
        Box3D {
            bounds_2d: Rect::new(x_min, y_min, x_max, y_max),
            z_min,
            z_max,
        }
    }

    /// Constructs a box spanning two corner points, stored verbatim: `p1`
    /// supplies the minimum corner and `p2` the maximum, whether or not the
    /// coordinates are actually ordered that way.
    ///
    /// ```
    /// use geoextent::{Box3D, euclid::point3};
    ///
    /// let a = Box3D::from_corners(point3(10.0, 0.0, 10.0), point3(0.0, 10.0, 0.0)).normalized();
    /// assert_eq!(a, Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0));
    /// ```
    #[inline]
    pub fn from_corners(p1: MapPoint, p2: MapPoint) -> Self {
        Box3D::new(p1.x, p1.y, p1.z, p2.x, p2.y, p2.z)
    }

    /// Constructs a box from a 2D footprint and a vertical range.
    #[inline]
    pub const fn from_rect(rect: Rect, z_min: f64, z_max: f64) -> Self {
        Box3D {
            bounds_2d: rect,
            z_min,
            z_max,
        }
    }

    /// Minimum X bound.
    #[inline]
    pub const fn x_min(&self) -> f64 {
        self.bounds_2d.x_min()
    }

    /// Minimum Y bound.
    #[inline]
    pub const fn y_min(&self) -> f64 {
        self.bounds_2d.y_min()
    }

    /// Minimum Z bound.
    #[inline]
    pub const fn z_min(&self) -> f64 {
        self.z_min
    }

    /// Maximum X bound.
    #[inline]
    pub const fn x_max(&self) -> f64 {
        self.bounds_2d.x_max()
    }

    /// Maximum Y bound.
    #[inline]
    pub const fn y_max(&self) -> f64 {
        self.bounds_2d.y_max()
    }

    /// Maximum Z bound.
    #[inline]
    pub const fn z_max(&self) -> f64 {
        self.z_max
    }

    /// Sets the minimum X bound. No reordering is performed.
    #[inline]
    pub fn set_x_min(&mut self, x: f64) {
        self.bounds_2d.set_x_min(x);
    }

    /// Sets the maximum X bound. No reordering is performed.
    #[inline]
    pub fn set_x_max(&mut self, x: f64) {
        self.bounds_2d.set_x_max(x);
    }

    /// Sets the minimum Y bound. No reordering is performed.
    #[inline]
    pub fn set_y_min(&mut self, y: f64) {
        self.bounds_2d.set_y_min(y);
    }

    /// Sets the maximum Y bound. No reordering is performed.
    #[inline]
    pub fn set_y_max(&mut self, y: f64) {
        self.bounds_2d.set_y_max(y);
    }

    /// Sets the minimum Z bound. No reordering is performed.
    #[inline]
    pub fn set_z_min(&mut self, z: f64) {
        self.z_min = z;
    }

    /// Sets the maximum Z bound. No reordering is performed.
    #[inline]
    pub fn set_z_max(&mut self, z: f64) {
        self.z_max = z;
    }

    /// The 2D footprint of the box, by value.
    #[inline]
    #[must_use]
    pub const fn to_rectangle(&self) -> Rect {
        self.bounds_2d
    }

    /// The X span of the box; negative if the X bounds are inverted.
    #[inline]
    pub fn width(&self) -> f64 {
        self.bounds_2d.width()
    }

    /// The Y span of the box; negative if the Y bounds are inverted.
    #[inline]
    pub fn height(&self) -> f64 {
        self.bounds_2d.height()
    }

    /// The Z span of the box; negative if the Z bounds are inverted.
    #[inline]
    pub fn depth(&self) -> f64 {
        self.z_max - self.z_min
    }

    /// The volume of the box, the product of its three spans.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.width() * self.height() * self.depth()
    }

    /// The center of the box: the midpoint of each axis's extent.
    ///
    /// ```
    /// use geoextent::{Box3D, euclid::point3};
    ///
    /// let b = Box3D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    /// assert_eq!(b.center(), point3(2.5, 3.5, 4.5));
    /// ```
    #[inline]
    pub fn center(&self) -> MapPoint {
        MapPoint::new(
            (self.x_min() + self.x_max()) / 2.0,
            (self.y_min() + self.y_max()) / 2.0,
            (self.z_min + self.z_max) / 2.0,
        )
    }

    /// Resets to [`Box3D::MINIMAL`], the seed for accumulating bounds over
    /// many boxes or points with [`combine_with`](Box3D::combine_with).
    #[inline]
    pub fn set_minimal(&mut self) {
        *self = Box3D::MINIMAL;
    }

    /// Reorders each axis's bounds so that minimum ≤ maximum.
    ///
    /// The Z bounds are reordered by taking the minimum and maximum of the
    /// pair rather than conditionally swapping: a NaN `z_min` therefore
    /// spreads to both bounds, while a NaN `z_max` collapses both to `z_min`.
    pub fn normalize(&mut self) {
        self.bounds_2d.normalize();
        let min_tmp = min_of(self.z_min, self.z_max);
        self.z_max = max_of(self.z_min, self.z_max);
        self.z_min = min_tmp;
    }

    /// Consuming form of [`normalize`](Box3D::normalize), for use at
    /// construction.
    ///
    /// ```
    /// use geoextent::Box3D;
    ///
    /// assert_eq!(
    ///     Box3D::new(10.0, 10.0, 10.0, 0.0, 0.0, 0.0).normalized(),
    ///     Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0),
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Whether the vertical range is degenerate: collapsed (within
    /// tolerance), inverted, or NaN at either bound. A 2D box acts as
    /// unbounded along Z for [`intersects`](Box3D::intersects) and
    /// [`contains_box`](Box3D::contains_box).
    ///
    /// This is independent of X/Y extents and of nullness (a null box is
    /// also 2D).
    #[must_use]
    pub fn is_2d(&self) -> bool {
        nearly_equal(self.z_min, self.z_max)
            || (self.z_min > self.z_max)
            || self.z_min.is_nan()
            || self.z_max.is_nan()
    }

    /// Whether the box carries a real vertical extent: not 2D and not null.
    #[inline]
    #[must_use]
    pub fn is_3d(&self) -> bool {
        !self.is_2d() && !self.is_null()
    }

    /// Whether the box has never been assigned real extents: all six bounds
    /// NaN, or all six exactly matching the minimal sentinel.
    ///
    /// The sentinel comparison is exact, not tolerance-based, so a box that
    /// is merely very large is not null. Note the asymmetry with
    /// [`is_2d`](Box3D::is_2d): a box whose Z bounds alone are NaN is 2D but
    /// not null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        (self.x_min().is_nan()
            && self.x_max().is_nan()
            && self.y_min().is_nan()
            && self.y_max().is_nan()
            && self.z_min.is_nan()
            && self.z_max.is_nan())
            || (self.x_min() == f64::MAX
                && self.y_min() == f64::MAX
                && self.z_min == f64::MAX
                && self.x_max() == -f64::MAX
                && self.y_max() == -f64::MAX
                && self.z_max == -f64::MAX)
    }

    /// Whether the box spans no volume: an inverted or collapsed vertical
    /// range, or an empty 2D footprint.
    ///
    /// Null and empty are distinct predicates: the bounding box of a single
    /// point is empty but not null.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.z_max < self.z_min
            || nearly_equal(self.z_max, self.z_min)
            || self.bounds_2d.is_empty()
    }

    /// Whether `self` and `other` share any point, boundaries included.
    ///
    /// If either box is 2D, the Z axis is ignored entirely: a 2D box
    /// intersects every 3D box whose footprint it overlaps, whatever their
    /// Z ranges.
    ///
    /// ```
    /// use geoextent::Box3D;
    ///
    /// let a = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
    /// let b = Box3D::new(2.0, 2.0, 5.0, 8.0, 8.0, 5.0); // collapsed Z
    /// assert!(b.is_2d());
    /// assert!(a.intersects(&b) && a.contains_box(&b));
    /// ```
    #[must_use]
    pub fn intersects(&self, other: &Box3D) -> bool {
        if !self.bounds_2d.intersects(&other.bounds_2d) {
            return false;
        }

        if other.is_2d() || self.is_2d() {
            true
        } else {
            let z1 = if self.z_min > other.z_min {
                self.z_min
            } else {
                other.z_min
            };
            let z2 = if self.z_max < other.z_max {
                self.z_max
            } else {
                other.z_max
            };
            z1 <= z2
        }
    }

    /// Whether `other` lies entirely within `self`, boundaries included.
    ///
    /// If either box is 2D, only the footprints are compared.
    #[must_use]
    pub fn contains_box(&self, other: &Box3D) -> bool {
        if !self.bounds_2d.contains_rect(&other.bounds_2d) {
            return false;
        }

        if other.is_2d() || self.is_2d() {
            true
        } else {
            other.z_min >= self.z_min && other.z_max <= self.z_max
        }
    }

    /// Whether the point lies within `self`, boundaries included.
    ///
    /// For a 3D box this tests all three coordinates; for a 2D or null box
    /// the point's Z is ignored entirely.
    #[must_use]
    pub fn contains_point(&self, point: MapPoint) -> bool {
        if self.is_3d() {
            self.contains(point.x, point.y, point.z)
        } else {
            self.bounds_2d.contains_point(point)
        }
    }

    /// Whether the coordinate triple lies within `self`, boundaries included.
    ///
    /// The Z test is skipped when `z` is NaN or the box is 2D.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        if !self.bounds_2d.contains(x, y) {
            return false;
        }

        if z.is_nan() || self.is_2d() {
            true
        } else {
            self.z_min <= z && z <= self.z_max
        }
    }

    /// The overlap of the two boxes.
    ///
    /// The result is built verbatim from the per-axis overlaps and is not
    /// normalized: when the Z ranges do not overlap it carries an inverted
    /// vertical range and reports [`is_empty`](Box3D::is_empty). The
    /// footprint is [`Rect::intersection`], which is the zero rectangle when
    /// the footprints are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Box3D) -> Box3D {
        let footprint = self.bounds_2d.intersection(&other.bounds_2d);
        let z_min = max_of(self.z_min, other.z_min);
        let z_max = min_of(self.z_max, other.z_max);
        Box3D::new(
            footprint.x_min(),
            footprint.y_min(),
            z_min,
            footprint.x_max(),
            footprint.y_max(),
            z_max,
        )
    }

    /// Grows `self` so that it covers both its original extent and `other`.
    ///
    /// Each axis widens independently in both directions; the operands' own
    /// ranges must already be ordered for the union to be meaningful.
    pub fn combine_with(&mut self, other: &Box3D) {
        self.bounds_2d.combine_extent_with(&other.bounds_2d);
        self.z_min = min_of(self.z_min, other.z_min);
        self.z_max = max_of(self.z_max, other.z_max);
    }

    /// Grows `self` so that it covers both its original extent and the point.
    ///
    /// ```
    /// use geoextent::{Box3D, euclid::point3};
    ///
    /// let mut bounds = Box3D::MINIMAL;
    /// bounds.combine_with_point(point3(1.0, 2.0, 3.0));
    /// bounds.combine_with_point(point3(-1.0, 5.0, 0.0));
    /// assert_eq!(bounds, Box3D::new(-1.0, 2.0, 0.0, 1.0, 5.0, 3.0));
    /// ```
    pub fn combine_with_point(&mut self, point: MapPoint) {
        self.bounds_2d.combine_extent_with_coords(point.x, point.y);
        self.z_min = min_of(self.z_min, point.z);
        self.z_max = max_of(self.z_max, point.z);
    }

    /// The distance from `point` to the nearest face, edge, or corner of the
    /// box, or zero if the point lies inside it.
    ///
    /// For a 2D box, or when the point's Z is NaN, this is the planar
    /// distance to the footprint; otherwise the full 3D distance.
    ///
    /// ```
    /// use geoextent::{Box3D, euclid::point3};
    ///
    /// let b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
    /// assert_eq!(b.distance_to(point3(15.0, 5.0, 5.0)), 5.0);
    /// assert_eq!(b.distance_to(point3(15.0, 5.0, f64::NAN)), 5.0);
    /// assert_eq!(b.distance_to(point3(5.0, 5.0, 5.0)), 0.0);
    /// ```
    #[must_use]
    pub fn distance_to(&self, point: MapPoint) -> f64 {
        let dx = max_of(self.x_min() - point.x, max_of(0.0, point.x - self.x_max()));
        let dy = max_of(self.y_min() - point.y, max_of(0.0, point.y - self.y_max()));
        if self.is_2d() || point.z.is_nan() {
            dx.hypot(dy)
        } else {
            let dz = max_of(self.z_min - point.z, max_of(0.0, point.z - self.z_max));
            dx.hypot(dy).hypot(dz)
        }
    }

    /// Scales each axis's bounds by `factor` about the box's center.
    ///
    /// ```
    /// use geoextent::Box3D;
    ///
    /// let mut b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
    /// b.scale(2.0);
    /// assert_eq!(b, Box3D::new(-5.0, -5.0, -5.0, 15.0, 15.0, 15.0));
    /// ```
    #[inline]
    pub fn scale(&mut self, factor: f64) {
        let center = self.center();
        self.scale_about(factor, center);
    }

    /// Scales each axis's bounds by `factor` about an explicit center, which
    /// need not lie inside the box.
    ///
    /// Each bound moves to `center + (bound − center) × factor`,
    /// independently per axis. A negative factor inverts each axis's
    /// ordering; call [`normalize`](Box3D::normalize) afterwards if ordering
    /// matters.
    pub fn scale_about(&mut self, factor: f64, center: MapPoint) {
        self.set_x_min(center.x + (self.x_min() - center.x) * factor);
        self.set_x_max(center.x + (self.x_max() - center.x) * factor);

        self.set_y_min(center.y + (self.y_min() - center.y) * factor);
        self.set_y_max(center.y + (self.y_max() - center.y) * factor);

        self.set_z_min(center.z + (self.z_min() - center.z) * factor);
        self.set_z_max(center.z + (self.z_max() - center.z) * factor);
    }

    /// Digits used by [`Display`](fmt::Display) when the caller does not
    /// give a precision: 0, unless both footprint spans are positive and
    /// either is below 10, in which case enough digits to resolve the
    /// narrower span, capped at 20.
    fn auto_precision(&self) -> usize {
        let w = self.width();
        let h = self.height();
        if (w < 10.0 || h < 10.0) && (w > 0.0 && h > 0.0) {
            let digits = (-min_of(w, h).log10()).ceil() as i32 + 1;
            digits.min(20) as usize
        } else {
            0
        }
    }
}

/// Boxes are equal when their footprints are exactly equal and their Z
/// bounds are equal within [`COORD_EPSILON`](crate::COORD_EPSILON).
impl PartialEq for Box3D {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bounds_2d == other.bounds_2d
            && nearly_equal(self.z_min, other.z_min)
            && nearly_equal(self.z_max, other.z_max)
    }
}

impl fmt::Debug for Box3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Box3D")
            .field(&(self.x_min()..=self.x_max()))
            .field(&(self.y_min()..=self.y_max()))
            .field(&(self.z_min..=self.z_max))
            .finish()
    }
}

/// Formats as `"xmin,ymin,zmin : xmax,ymax,zmax"` in fixed-point notation,
/// or as `"Null"`/`"Empty"` for boxes in those states (null takes priority).
///
/// An explicit formatter precision is honored; without one, a precision is
/// chosen automatically: zero, or, for footprints narrower than ten units,
/// enough digits to resolve the narrower span. The output is
/// locale-independent and intended for diagnostics, not round-tripping.
///
/// ```
/// use geoextent::Box3D;
///
/// let b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
/// assert_eq!(b.to_string(), "0,0,0 : 10,10,10");
/// assert_eq!(format!("{b:.1}"), "0.0,0.0,0.0 : 10.0,10.0,10.0");
/// assert_eq!(Box3D::MINIMAL.to_string(), "Null");
/// ```
impl fmt::Display for Box3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or_else(|| self.auto_precision());

        let rep = if self.is_null() {
            String::from("Null")
        } else if self.is_empty() {
            String::from("Empty")
        } else {
            format!(
                "{:.p$},{:.p$},{:.p$} : {:.p$},{:.p$},{:.p$}",
                self.x_min(),
                self.y_min(),
                self.z_min,
                self.x_max(),
                self.y_max(),
                self.z_max,
                p = precision,
            )
        };

        log::trace!("extents: {rep}");

        f.write_str(&rep)
    }
}

impl Add<MapVector> for Box3D {
    type Output = Box3D;

    /// Translates the box by `offset`.
    #[inline]
    fn add(self, offset: MapVector) -> Box3D {
        Box3D::new(
            self.x_min() + offset.x,
            self.y_min() + offset.y,
            self.z_min + offset.z,
            self.x_max() + offset.x,
            self.y_max() + offset.y,
            self.z_max + offset.z,
        )
    }
}

impl AddAssign<MapVector> for Box3D {
    #[inline]
    fn add_assign(&mut self, offset: MapVector) {
        *self = *self + offset;
    }
}

impl Sub<MapVector> for Box3D {
    type Output = Box3D;

    /// Translates the box by the negation of `offset`.
    #[inline]
    fn sub(self, offset: MapVector) -> Box3D {
        self + (-offset)
    }
}

impl SubAssign<MapVector> for Box3D {
    #[inline]
    fn sub_assign(&mut self, offset: MapVector) {
        *self = *self - offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::{point3, vec3};
    use pretty_assertions::assert_eq;
    use rand::{Rng as _, SeedableRng as _};
    use rand_xoshiro::Xoshiro256Plus;

    /// Compare every bound exactly, sidestepping the tolerant `PartialEq`.
    fn assert_bounds(b: &Box3D, expected: [f64; 6]) {
        assert_eq!(
            [
                b.x_min(),
                b.y_min(),
                b.z_min(),
                b.x_max(),
                b.y_max(),
                b.z_max()
            ],
            expected,
        );
    }

    #[test]
    fn new_stores_verbatim() {
        let b = Box3D::new(10.0, 20.0, 30.0, -1.0, -2.0, -3.0);
        assert_bounds(&b, [10.0, 20.0, 30.0, -1.0, -2.0, -3.0]);
    }

    #[test]
    fn normalize_matches_ordered_construction() {
        let b = Box3D::new(10.0, 20.0, 30.0, -1.0, -2.0, -3.0).normalized();
        assert_eq!(b, Box3D::new(-1.0, -2.0, -3.0, 10.0, 20.0, 30.0));

        let mut c = Box3D::new(0.0, 5.0, 9.0, 4.0, 2.0, 1.0);
        c.normalize();
        assert_bounds(&c, [0.0, 2.0, 1.0, 4.0, 5.0, 9.0]);
    }

    #[test]
    fn from_corners_any_order() {
        let expected = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let corners = [
            (point3(0.0, 0.0, 0.0), point3(10.0, 10.0, 10.0)),
            (point3(10.0, 10.0, 10.0), point3(0.0, 0.0, 0.0)),
            (point3(10.0, 0.0, 10.0), point3(0.0, 10.0, 0.0)),
            (point3(0.0, 10.0, 0.0), point3(10.0, 0.0, 10.0)),
        ];
        for (p1, p2) in corners {
            assert_eq!(Box3D::from_corners(p1, p2).normalized(), expected);
        }
    }

    #[test]
    fn normalize_z_with_nan() {
        // NaN z_min spreads to both bounds
        let b = Box3D::new(0.0, 0.0, f64::NAN, 10.0, 10.0, 5.0).normalized();
        assert!(b.z_min().is_nan() && b.z_max().is_nan());

        // NaN z_max collapses both bounds to z_min
        let b = Box3D::new(0.0, 0.0, 5.0, 10.0, 10.0, f64::NAN).normalized();
        assert_eq!((b.z_min(), b.z_max()), (5.0, 5.0));
    }

    #[test]
    fn normalize_destroys_z_sentinel_of_null_box() {
        // The footprint's sentinel survives (null rectangles are not
        // reordered) but the Z sentinel is, so the box stops being null.
        let b = Box3D::MINIMAL.normalized();
        assert!(!b.is_null());
        assert_eq!(b.x_min(), f64::MAX);
        assert_eq!((b.z_min(), b.z_max()), (-f64::MAX, f64::MAX));
        assert!(b.is_empty());
    }

    #[test]
    fn minimal_is_null_and_empty() {
        let mut b = Box3D::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        b.set_minimal();
        assert!(b.is_null());
        assert!(b.is_empty());
        assert!(b.is_2d());
        assert!(!b.is_3d());
    }

    #[test]
    fn default_box_is_empty_but_not_null() {
        let b = Box3D::default();
        assert!(!b.is_null());
        assert!(b.is_empty());
        assert!(b.is_2d());
    }

    #[test]
    fn collapsed_z_is_2d_regardless_of_footprint() {
        let b = Box3D::new(0.0, 0.0, 5.0, 1000.0, 1000.0, 5.0);
        assert!(b.is_2d());
        assert!(!b.is_3d());
        assert!(b.is_empty());
        assert!(!b.is_null());

        // inverted Z is 2D too
        assert!(Box3D::new(0.0, 0.0, 9.0, 10.0, 10.0, 1.0).is_2d());
    }

    #[test]
    fn nan_z_is_2d_but_not_null() {
        let b = Box3D::new(0.0, 0.0, f64::NAN, 10.0, 10.0, f64::NAN);
        assert!(b.is_2d());
        assert!(!b.is_null());
        assert!(!b.is_3d());
    }

    #[test]
    fn all_nan_box_is_null() {
        let nan = f64::NAN;
        let b = Box3D::new(nan, nan, nan, nan, nan, nan);
        assert!(b.is_null());
        assert!(!b.is_3d());
    }

    #[test]
    fn near_sentinel_is_not_null() {
        // the sentinel check is exact; a very large box is not null
        let b = Box3D::new(
            f64::MAX / 2.0,
            f64::MAX,
            f64::MAX,
            -f64::MAX,
            -f64::MAX,
            -f64::MAX,
        );
        assert!(!b.is_null());
    }

    #[test]
    fn two_dimensional_fallback_for_intersects_and_contains() {
        let a = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let b = Box3D::new(2.0, 2.0, 5.0, 8.0, 8.0, 5.0); // 2D, z = 5
        assert!(b.is_2d());
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.contains_box(&b));

        // even a Z far outside `a` is ignored for a 2D operand
        let c = Box3D::new(2.0, 2.0, 50.0, 8.0, 8.0, 50.0);
        assert!(a.intersects(&c));
        assert!(a.contains_box(&c));
    }

    #[test]
    fn three_dimensional_intersects() {
        let a = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let b = Box3D::new(5.0, 5.0, 5.0, 15.0, 15.0, 15.0);
        assert!(a.intersects(&b));

        // same footprint, disjoint Z
        let c = Box3D::new(0.0, 0.0, 20.0, 10.0, 10.0, 30.0);
        assert!(!a.intersects(&c));

        // touching Z ranges intersect
        let d = Box3D::new(0.0, 0.0, 10.0, 10.0, 10.0, 20.0);
        assert!(a.intersects(&d));

        // disjoint footprints never intersect, whatever the Z
        let e = Box3D::new(20.0, 20.0, 0.0, 30.0, 30.0, 10.0);
        assert!(!a.intersects(&e));
    }

    #[test]
    fn three_dimensional_contains() {
        let a = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        assert!(a.contains_box(&Box3D::new(2.0, 2.0, 2.0, 8.0, 8.0, 8.0)));
        assert!(a.contains_box(&a));
        // footprint inside but Z sticking out
        assert!(!a.contains_box(&Box3D::new(2.0, 2.0, 2.0, 8.0, 8.0, 12.0)));
    }

    #[test]
    fn contains_coordinates() {
        let a = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        assert!(a.contains(5.0, 5.0, 5.0));
        assert!(a.contains(0.0, 10.0, 10.0)); // boundaries included
        assert!(!a.contains(5.0, 5.0, 11.0));
        assert!(!a.contains(11.0, 5.0, 5.0));

        // NaN z skips the Z test entirely...
        assert!(a.contains(5.0, 5.0, f64::NAN));
        // ...but not the footprint test
        assert!(!a.contains(11.0, 5.0, f64::NAN));
    }

    #[test]
    fn contains_point_ignores_z_for_2d_boxes() {
        let flat = Box3D::new(2.0, 2.0, 5.0, 8.0, 8.0, 5.0);
        assert!(flat.contains_point(point3(5.0, 5.0, 999.0)));
        assert!(!flat.contains_point(point3(9.0, 5.0, 5.0)));

        let solid = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        assert!(solid.contains_point(point3(5.0, 5.0, 5.0)));
        assert!(!solid.contains_point(point3(5.0, 5.0, 999.0)));
    }

    #[test]
    fn intersection_overlapping() {
        let a = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let b = Box3D::new(5.0, 5.0, 5.0, 15.0, 15.0, 15.0);
        let i = a.intersection(&b);
        assert_bounds(&i, [5.0, 5.0, 5.0, 10.0, 10.0, 10.0]);
        assert!(!i.is_empty());
    }

    #[test]
    fn intersection_of_z_disjoint_boxes_is_inverted_and_empty() {
        let a = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let c = Box3D::new(0.0, 0.0, 20.0, 10.0, 10.0, 30.0);
        let i = a.intersection(&c);
        assert_bounds(&i, [0.0, 0.0, 20.0, 10.0, 10.0, 10.0]);
        assert!(i.is_empty());
    }

    #[test]
    fn combine_accumulates_points_from_minimal() {
        let mut acc = Box3D::MINIMAL;
        for p in [
            point3(1.0, 2.0, 3.0),
            point3(4.0, 5.0, 6.0),
            point3(-1.0, 0.0, 10.0),
        ] {
            acc.combine_with_point(p);
        }
        assert!(!acc.is_null());
        assert_bounds(&acc, [-1.0, 0.0, 3.0, 4.0, 5.0, 10.0]);
    }

    #[test]
    fn combine_with_box_from_minimal_adopts_it() {
        let mut acc = Box3D::MINIMAL;
        let b = Box3D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        acc.combine_with(&b);
        assert_bounds(&acc, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn combine_widens_both_directions() {
        let mut a = Box3D::new(0.0, 0.0, 0.0, 5.0, 5.0, 5.0);
        a.combine_with(&Box3D::new(-5.0, 2.0, -1.0, 2.0, 9.0, 7.0));
        assert_bounds(&a, [-5.0, 0.0, -1.0, 5.0, 9.0, 7.0]);
    }

    fn random_box(rng: &mut impl rand::Rng) -> Box3D {
        let mut c = || rng.random_range(-100.0..=100.0);
        Box3D::from_corners(point3(c(), c(), c()), point3(c(), c(), c())).normalized()
    }

    #[test]
    fn combine_is_order_independent() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0);
        for _ in 0..50 {
            let boxes: Vec<Box3D> = (0..6).map(|_| random_box(&mut rng)).collect();

            let mut forward = Box3D::MINIMAL;
            for b in &boxes {
                forward.combine_with(b);
            }
            let mut reverse = Box3D::MINIMAL;
            for b in boxes.iter().rev() {
                reverse.combine_with(b);
            }
            assert_bounds(
                &reverse,
                [
                    forward.x_min(),
                    forward.y_min(),
                    forward.z_min(),
                    forward.x_max(),
                    forward.y_max(),
                    forward.z_max(),
                ],
            );
            // and the result covers every input
            for b in &boxes {
                assert!(forward.contains_box(b));
            }
        }
    }

    #[test]
    fn distance_to_clamps_per_axis() {
        let b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        assert_eq!(b.distance_to(point3(15.0, 5.0, 5.0)), 5.0);
        assert_eq!(b.distance_to(point3(5.0, 5.0, 5.0)), 0.0);
        assert_eq!(b.distance_to(point3(0.0, 10.0, 3.0)), 0.0); // boundary

        // off one corner: 3-4-12 gives 13
        let d = b.distance_to(point3(13.0, 14.0, 22.0));
        assert!((d - 13.0).abs() < 1e-12);
    }

    #[test]
    fn distance_to_falls_back_to_planar() {
        let b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        // NaN query Z: planar distance
        assert_eq!(b.distance_to(point3(15.0, 5.0, f64::NAN)), 5.0);

        // 2D box: Z never contributes
        let flat = Box3D::new(0.0, 0.0, 5.0, 10.0, 10.0, 5.0);
        assert_eq!(flat.distance_to(point3(15.0, 5.0, 500.0)), 5.0);
    }

    #[test]
    fn scale_about_own_center() {
        let mut b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        b.scale(2.0);
        assert_bounds(&b, [-5.0, -5.0, -5.0, 15.0, 15.0, 15.0]);

        let mut shrunk = Box3D::new(-5.0, -5.0, -5.0, 15.0, 15.0, 15.0);
        shrunk.scale(0.5);
        assert_bounds(&shrunk, [0.0, 0.0, 0.0, 10.0, 10.0, 10.0]);
    }

    #[test]
    fn scale_about_external_center() {
        let mut b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        b.scale_about(2.0, point3(0.0, 0.0, 0.0));
        assert_bounds(&b, [0.0, 0.0, 0.0, 20.0, 20.0, 20.0]);
    }

    #[test]
    fn negative_scale_inverts_ordering() {
        let mut b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        b.scale_about(-1.0, point3(0.0, 0.0, 0.0));
        assert_bounds(&b, [0.0, 0.0, 0.0, -10.0, -10.0, -10.0]);
        b.normalize();
        assert_bounds(&b, [-10.0, -10.0, -10.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn equality_is_tolerant_in_z_only() {
        let a = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);

        // a sub-epsilon nudge in Z still compares equal
        let b = Box3D::new(0.0, 0.0, 2.0 * f64::EPSILON, 10.0, 10.0, 10.0);
        assert_eq!(a, b);

        // the same nudge in X does not
        let c = Box3D::new(2.0 * f64::EPSILON, 0.0, 0.0, 10.0, 10.0, 10.0);
        assert_ne!(a, c);

        // a visible difference in Z does not either
        let d = Box3D::new(0.0, 0.0, 1e-9, 10.0, 10.0, 10.0);
        assert_ne!(a, d);
    }

    #[test]
    fn display_auto_precision() {
        assert_eq!(
            Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0).to_string(),
            "0,0,0 : 10,10,10"
        );
        // footprint below 10 units: one digit
        assert_eq!(
            Box3D::new(0.0, 0.0, 0.0, 1.5, 2.5, 3.5).to_string(),
            "0.0,0.0,0.0 : 1.5,2.5,3.5"
        );
        // narrower still: more digits
        assert_eq!(
            Box3D::new(0.0, 0.0, 0.0, 0.04, 20.0, 3.5).to_string(),
            "0.000,0.000,0.000 : 0.040,20.000,3.500"
        );
    }

    #[test]
    fn display_explicit_precision() {
        let b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        assert_eq!(format!("{b:.2}"), "0.00,0.00,0.00 : 10.00,10.00,10.00");
        assert_eq!(format!("{b:.0}"), "0,0,0 : 10,10,10");
    }

    #[test]
    fn display_null_takes_priority_over_empty() {
        assert_eq!(Box3D::MINIMAL.to_string(), "Null");
        let nan = f64::NAN;
        assert_eq!(Box3D::new(nan, nan, nan, nan, nan, nan).to_string(), "Null");

        // empty but not null
        assert_eq!(
            Box3D::new(0.0, 0.0, 5.0, 10.0, 10.0, 5.0).to_string(),
            "Empty"
        );
        assert_eq!(Box3D::default().to_string(), "Empty");
    }

    #[test]
    fn debug_format() {
        let b = Box3D::new(1.5, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(format!("{b:?}"), "Box3D(1.5..=4.0, 2.0..=5.0, 3.0..=6.0)");
    }

    #[test]
    fn measures() {
        let b = Box3D::new(1.0, 2.0, 3.0, 5.0, 10.0, 4.0);
        assert_eq!(b.width(), 4.0);
        assert_eq!(b.height(), 8.0);
        assert_eq!(b.depth(), 1.0);
        assert_eq!(b.volume(), 32.0);
        assert_eq!(b.center(), point3(3.0, 6.0, 3.5));
        assert_eq!(b.to_rectangle(), Rect::new(1.0, 2.0, 5.0, 10.0));
    }

    #[test]
    fn setters_do_not_reorder() {
        let mut b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        b.set_z_min(50.0);
        assert_bounds(&b, [0.0, 0.0, 50.0, 10.0, 10.0, 10.0]);
        assert!(b.is_2d()); // inverted Z
        b.set_x_max(-3.0);
        assert_eq!(b.x_max(), -3.0);
        assert!(b.is_empty());
    }

    #[test]
    fn translation_operators() {
        let b = Box3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let moved = b + vec3(1.0, 2.0, 3.0);
        assert_bounds(&moved, [1.0, 2.0, 3.0, 11.0, 12.0, 13.0]);
        assert_eq!(moved - vec3(1.0, 2.0, 3.0), b);

        let mut c = b;
        c += vec3(1.0, 2.0, 3.0);
        assert_eq!(c, moved);
        c -= vec3(1.0, 2.0, 3.0);
        assert_eq!(c, b);
    }
}
