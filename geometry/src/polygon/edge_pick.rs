/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::polygon::*;
use crate::geo::*;

///
/// The distance from a point to the nearest point of a line segment
///
/// The projection parameter is clamped to the segment, so points beyond either end
/// measure their distance to the corresponding endpoint. A zero-length segment is
/// treated as a single point.
///
pub fn distance_to_segment(from: Coord2, to: Coord2, point: Coord2) -> f64 {
    let along = to - from;
    let length_squared = along.dot(&along);

    if length_squared == 0.0 {
        return from.distance_to(&point);
    }

    let t = ((point - from).dot(&along) / length_squared).max(0.0).min(1.0);
    let nearest = from + along * t;

    nearest.distance_to(&point)
}

impl Polygon {
    ///
    /// The index of the first edge lying within `tolerance` of a point, if there is one
    ///
    /// Edge `i` runs from vertex `i` to the following vertex (wrapping back to vertex 0
    /// for the closing edge), so the returned index identifies both the edge and its
    /// starting vertex. This is the hit test used to pick an edge with a pointer.
    ///
    pub fn find_edge_near(&self, point: Coord2, tolerance: f64) -> Option<usize> {
        self.edges()
            .enumerate()
            .find(|(_, (from, to))| distance_to_segment(*from, *to, point) <= tolerance)
            .map(|(edge_idx, _)| edge_idx)
    }
}
