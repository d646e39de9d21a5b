/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::geo::*;
use crate::polygon::*;

use smallvec::{smallvec, SmallVec};

///
/// The point where two line segments cross, if they cross at all
///
/// Solves the parametric system for the segments `a1 -> a2` and `b1 -> b2`. The
/// intersection point must lie within both segments, so both parameters are required to
/// be in [0, 1]. Parallel segments return `None`, including collinear overlapping ones,
/// as there is no single crossing point to report.
///
pub fn segment_intersect(a1: Coord2, a2: Coord2, b1: Coord2, b2: Coord2) -> Option<Coord2> {
    let along_a = a2 - a1;
    let along_b = b2 - b1;

    let denominator = along_a.cross(&along_b);
    if denominator.abs() < PARALLEL_EPSILON {
        return None;
    }

    let offset = b1 - a1;
    let t = offset.cross(&along_b) / denominator;
    let u = offset.cross(&along_a) / denominator;

    if t >= 0.0 && t <= 1.0 && u >= 0.0 && u <= 1.0 {
        Some(a1 + along_a * t)
    } else {
        None
    }
}

///
/// Every point where a segment crosses an edge of a polygon
///
/// Returns `(edge index, crossing point)` pairs in boundary order, using the same edge
/// indexing as `Polygon::find_edge_near`.
///
pub fn edge_intersections(
    polygon: &Polygon,
    from: Coord2,
    to: Coord2,
) -> SmallVec<[(usize, Coord2); 4]> {
    let mut crossings = smallvec![];

    for (edge_idx, (edge_from, edge_to)) in polygon.edges().enumerate() {
        if let Some(point) = segment_intersect(from, to, edge_from, edge_to) {
            crossings.push((edge_idx, point));
        }
    }

    crossings
}
