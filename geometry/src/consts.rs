/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Length we consider a small distance (points closer to an edge than this are treated as on it)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Cross products with a magnitude below this treat the corner as collinear rather than as a turn
pub const COLLINEAR_EPSILON: f64 = 0.0001;

/// Denominators with a magnitude below this indicate parallel segments in intersection tests
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// Signed areas with a magnitude below this are degenerate for the purposes of computing a centroid
pub const ZERO_AREA_EPSILON: f64 = 1e-12;
