/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use buffer::*;
pub use color::*;
pub use histogram::*;
pub use hsv::*;

mod buffer;
mod color;
mod histogram;
mod hsv;
