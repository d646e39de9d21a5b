/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Region filling and boundary tracing
//!
//! These operations work on connected regions of an `RgbBuffer` rather than on
//! geometry. `flood_fill` recolors the region of uniformly-colored pixels around a
//! seed, one horizontal run at a time, and `flood_fill_pattern` does the same but
//! paints each pixel from a tiled pattern buffer instead of a single color.
//! `trace_boundary` walks the border of a region and reports the border pixels in the
//! order it visits them.
//!
//! All three keep their pending work on an explicit stack: a fill covering a large
//! image descends thousands of rows, which is far deeper than the call stack can be
//! trusted to go.
//!

pub use boundary::*;
pub use flood::*;
pub use pattern::*;

mod boundary;
mod flood;
mod pattern;
