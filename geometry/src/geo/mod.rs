/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric definitions
//!
//! This provides the fundamental types the rest of the library is written in terms of.
//! [`Coord2`] is a 2D point or vector with the usual arithmetic operations. It converts
//! to and from homogeneous `[x, y, 1]` triples so that [`Transform2D`], a 3x3 affine
//! matrix, can transform it by plain matrix multiplication. [`Bounds`] is an axis-aligned
//! rectangle used wherever a drawing needs to be measured or fitted to a viewport.
//!

mod bounds;
mod coord2;
mod transform;

pub use self::bounds::*;
pub use self::coord2::*;
pub use self::transform::*;
