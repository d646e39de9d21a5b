/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! `fresco_geometry` provides the 2D geometry that the fresco drawing crates are built on
//!
//! It's part of a set of companion crates that make up a small 2D graphics teaching system.
//!
//! * `fresco_geometry` is this crate: points, affine transforms, bounding rectangles,
//!   polygon analysis and segment intersection
//! * `fresco_raster` rasterizes lines, triangles and filled regions into pixel buffers
//! * `fresco_fractal` generates point sequences from L-systems and midpoint displacement
//!
//! The central type is [`Coord2`], a plain 2D point. Affine transformations are
//! represented by [`Transform2D`], a 3x3 matrix in the row-vector convention: points
//! multiply on the left (`point' = point * matrix`), so transforms compose left-to-right
//! in the order they apply. [`Polygon`] stores an ordered cyclic vertex list and answers
//! the usual analysis queries: signed area, centroid, convexity, point containment (by
//! the half-plane test for convex shapes and the even-odd ray-crossing test otherwise),
//! and edge picking for interactive editing.
//!

pub mod consts;
pub mod geo;
pub mod line;
pub mod polygon;

pub use self::consts::*;
pub use self::geo::*;
pub use self::line::*;
pub use self::polygon::*;
