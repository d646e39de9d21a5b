/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::polygon::*;
use crate::consts::*;
use crate::geo::*;

///
/// Which side of a directed edge a point lies on
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EdgeSide {
    /// The side reached by rotating the edge direction counter-clockwise (in a y-up frame)
    Left,

    /// The side reached by rotating the edge direction clockwise
    Right,

    /// On the line through the edge, within a small tolerance
    On,
}

///
/// Classifies a point against the infinite line through a directed edge
///
/// Points whose cross product with the edge direction has a magnitude below
/// `COLLINEAR_EPSILON` are reported as `On`. Note that this classifies against the whole
/// line: a point beyond either end of the edge can still be `On`.
///
pub fn edge_side(from: Coord2, to: Coord2, point: Coord2) -> EdgeSide {
    let cross = (to - from).cross(&(point - from));

    if cross.abs() < COLLINEAR_EPSILON {
        EdgeSide::On
    } else if cross > 0.0 {
        EdgeSide::Left
    } else {
        EdgeSide::Right
    }
}

impl Polygon {
    ///
    /// True if a point is inside this polygon
    ///
    /// Convex polygons are tested with the half-plane walk and all others with the
    /// even-odd ray-crossing rule. Points within `SMALL_DISTANCE` of the boundary count
    /// as contained for both strategies. Polygons with fewer than 3 vertices have no
    /// interior and contain nothing.
    ///
    pub fn contains(&self, point: Coord2) -> bool {
        if self.len() < 3 {
            return false;
        }

        if self.find_edge_near(point, SMALL_DISTANCE).is_some() {
            return true;
        }

        if self.is_convex() {
            self.contains_half_plane(point)
        } else {
            self.contains_ray_crossing(point)
        }
    }

    ///
    /// Half-plane point-membership test (only correct for convex polygons)
    ///
    /// The point is inside when every edge sees it on the same side. Edges that report
    /// `On` do not vote, so points on the boundary are contained while points on an
    /// edge's extension beyond the polygon are rejected by the remaining edges.
    ///
    pub fn contains_half_plane(&self, point: Coord2) -> bool {
        let mut shared_side = None;

        for (from, to) in self.edges() {
            match edge_side(from, to, point) {
                EdgeSide::On => {}

                side => match shared_side {
                    None => {
                        shared_side = Some(side);
                    }
                    Some(existing) => {
                        if existing != side {
                            return false;
                        }
                    }
                },
            }
        }

        true
    }

    ///
    /// Even-odd point-membership test (works for any simple polygon, convex or not)
    ///
    /// Casts a ray from the point toward +x and counts the boundary edges it crosses:
    /// an odd count means the point is inside. The half-open vertex rule (an edge spans
    /// the ray only when its endpoints straddle `point.y` strictly on one side) counts
    /// each vertex crossing once and skips horizontal edges entirely.
    ///
    pub fn contains_ray_crossing(&self, point: Coord2) -> bool {
        let mut inside = false;

        for (from, to) in self.edges() {
            if (from.y() > point.y()) != (to.y() > point.y()) {
                debug_assert!((to.y() - from.y()).abs() > 0.0);

                let crossing_x =
                    from.x() + (point.y() - from.y()) / (to.y() - from.y()) * (to.x() - from.x());

                if crossing_x > point.x() {
                    inside = !inside;
                }
            }
        }

        inside
    }
}
