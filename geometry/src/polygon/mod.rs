/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Polygons and polygon analysis
//!
//! A [`Polygon`] is an ordered, cyclic vertex list: the boundary runs through the
//! vertices in insertion order and closes back to the first vertex. The type itself only
//! stores the vertices; everything else is derived on demand. `analysis` supplies the
//! signed area, centroid and convexity queries, `contains` the two point-membership
//! algorithms along with the [`EdgeSide`] classification they are built on, and
//! `edge_pick` the point-to-segment projection used to hit-test edges when editing.
//!

mod analysis;
mod contains;
mod edge_pick;
mod polygon;

pub use self::contains::*;
pub use self::edge_pick::*;
pub use self::polygon::*;
