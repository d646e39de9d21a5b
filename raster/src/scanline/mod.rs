/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use bresenham::*;
pub use line::*;
pub use plot::*;
pub use triangle::*;
pub use wu::*;

mod bresenham;
mod line;
mod plot;
mod triangle;
mod wu;
