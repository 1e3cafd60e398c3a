//! Axis-aligned bounding extents for spatial data.
//!
//! This library defines two value types: [`Rect`], a 2D rectangle, and
//! [`Box3D`], a 3D box composed of a [`Rect`] footprint plus a vertical
//! range. They serve as bounding volumes for spatial data (geometries,
//! tiles, scenes), and most of their job is the bookkeeping of the
//! degenerate states such data produces:
//!
//! * a **null** extent has never been assigned bounds; this is the state
//!   produced by [`Box3D::set_minimal()`], which seeds a combine-accumulation
//!   loop;
//! * an **empty** extent carries bounds, but of zero or negative measure;
//! * a **2D** box has a collapsed, inverted, or NaN vertical range, and
//!   behaves as unbounded along Z for intersection and containment tests.
//!
//! Every operation is total over its floating-point inputs: NaN and
//! infinities flow through rather than being rejected, and callers branch
//! on the classification predicates ([`Box3D::is_null`], [`Box3D::is_2d`],
//! [`Box3D::is_empty`]) instead of handling errors.
//!
//! ```
//! use geoextent::{Box3D, euclid::point3};
//!
//! let mut bounds = Box3D::MINIMAL;
//! assert!(bounds.is_null());
//!
//! for p in [point3(2.0, 3.0, -1.0), point3(7.0, 1.0, 4.0)] {
//!     bounds.combine_with_point(p);
//! }
//! assert!(!bounds.is_null());
//! assert_eq!(bounds, Box3D::new(2.0, 1.0, -1.0, 7.0, 3.0, 4.0));
//! ```

mod box3d;
pub use box3d::*;
mod coord;
pub use coord::*;
mod rect;
pub use rect::*;

// reexport for convenience of callers and our own doctests
pub use euclid;
