/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Line segments
//!
//! Intersection queries for line segments given as pairs of endpoints, on their own or
//! against every edge of a polygon.
//!

mod intersection;

pub use self::intersection::*;
