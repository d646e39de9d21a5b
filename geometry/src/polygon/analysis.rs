/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::polygon::*;
use crate::consts::*;
use crate::geo::*;

impl Polygon {
    ///
    /// The signed area of this polygon, by the shoelace formula
    ///
    /// The sign encodes the winding order: positive for counter-clockwise vertices in a
    /// y-up frame. Polygons with fewer than 3 vertices have an area of 0.
    ///
    pub fn signed_area(&self) -> f64 {
        if self.len() < 3 {
            return 0.0;
        }

        let twice_area: f64 = self.edges().map(|(start, end)| start.cross(&end)).sum();

        twice_area / 2.0
    }

    ///
    /// The centroid of this polygon
    ///
    /// A single vertex is its own centroid and a 2-vertex polygon yields the midpoint.
    /// With 3 or more vertices this is the area-weighted centroid, which has no value
    /// when the signed area is 0 (collinear or self-cancelling vertex lists), so those
    /// polygons return `None`, as does the empty polygon.
    ///
    pub fn centroid(&self) -> Option<Coord2> {
        match self.points() {
            [] => None,
            [point] => Some(*point),
            [start, end] => Some(Coord2(
                (start.x() + end.x()) / 2.0,
                (start.y() + end.y()) / 2.0,
            )),

            _ => {
                let area = self.signed_area();
                if area.abs() < ZERO_AREA_EPSILON {
                    return None;
                }

                let mut centroid_x = 0.0;
                let mut centroid_y = 0.0;

                for (start, end) in self.edges() {
                    let cross = start.cross(&end);
                    centroid_x += (start.x() + end.x()) * cross;
                    centroid_y += (start.y() + end.y()) * cross;
                }

                Some(Coord2(
                    centroid_x / (6.0 * area),
                    centroid_y / (6.0 * area),
                ))
            }
        }
    }

    ///
    /// True if this polygon is convex
    ///
    /// Walks the cross products of consecutive edge pairs: the polygon is convex when
    /// every turn goes the same way. Cross products with a magnitude below
    /// `COLLINEAR_EPSILON` are collinear corners and do not count as a turn in either
    /// direction. Polygons with fewer than 4 vertices are always convex.
    ///
    pub fn is_convex(&self) -> bool {
        let points = self.points();
        let num_points = points.len();

        if num_points < 4 {
            return true;
        }

        let mut turn_direction = 0.0f64;

        for idx in 0..num_points {
            let p1 = points[idx];
            let p2 = points[(idx + 1) % num_points];
            let p3 = points[(idx + 2) % num_points];

            let cross = (p2 - p1).cross(&(p3 - p2));

            if cross.abs() < COLLINEAR_EPSILON {
                continue;
            }

            if turn_direction == 0.0 {
                turn_direction = cross.signum();
            } else if cross.signum() != turn_direction {
                return false;
            }
        }

        true
    }
}
