/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;

///
/// An axis-aligned bounding rectangle
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds {
    min: Coord2,
    max: Coord2,
}

impl Bounds {
    ///
    /// The bounds containing a single point
    ///
    #[inline]
    pub fn from_point(point: Coord2) -> Bounds {
        Bounds {
            min: point,
            max: point,
        }
    }

    ///
    /// The smallest bounds enclosing every point in a list (`None` if the list is empty)
    ///
    pub fn bounds_for_points(points: impl IntoIterator<Item = Coord2>) -> Option<Bounds> {
        let mut points = points.into_iter();
        let mut bounds = Bounds::from_point(points.next()?);

        for point in points {
            bounds.include(point);
        }

        Some(bounds)
    }

    ///
    /// Grows these bounds to include a point
    ///
    pub fn include(&mut self, point: Coord2) {
        self.min = Coord2(self.min.x().min(point.x()), self.min.y().min(point.y()));
        self.max = Coord2(self.max.x().max(point.x()), self.max.y().max(point.y()));
    }

    #[inline]
    pub fn min(&self) -> Coord2 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Coord2 {
        self.max
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }
}
