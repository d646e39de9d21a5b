/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use itertools::Itertools;

use std::iter;

///
/// An ordered, cyclic sequence of vertices
///
/// The boundary passes through the vertices in insertion order, with an implicit closing
/// edge from the last vertex back to the first. A polygon with fewer than 3 vertices has
/// no interior.
///
#[derive(Clone, PartialEq, Debug)]
pub struct Polygon {
    points: Vec<Coord2>,
}

impl Polygon {
    ///
    /// Creates a polygon with no vertices
    ///
    pub fn new() -> Polygon {
        Polygon { points: vec![] }
    }

    ///
    /// Creates a polygon from a list of vertices in boundary order
    ///
    pub fn from_points(points: Vec<Coord2>) -> Polygon {
        Polygon { points }
    }

    ///
    /// Appends a vertex to the end of the boundary
    ///
    #[inline]
    pub fn push(&mut self, point: Coord2) {
        self.points.push(point);
    }

    ///
    /// Removes every vertex
    ///
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    ///
    /// The vertices in boundary order
    ///
    #[inline]
    pub fn points(&self) -> &[Coord2] {
        &self.points
    }

    ///
    /// The edges in boundary order, ending with the closing edge from the last vertex
    /// back to the first
    ///
    /// A 2-vertex polygon has a single edge (the would-be closing edge retraces it), and
    /// fewer vertices than that produce no edges at all.
    ///
    pub fn edges<'a>(&'a self) -> impl 'a + Iterator<Item = (Coord2, Coord2)> {
        let num_edges = match self.points.len() {
            0 | 1 => 0,
            2 => 1,
            num_points => num_points,
        };

        self.points
            .iter()
            .cycle()
            .take(self.points.len() + 1)
            .tuple_windows()
            .map(|(start, end)| (*start, *end))
            .take(num_edges)
    }

    ///
    /// Applies an affine transformation to every vertex in place
    ///
    pub fn transform(&mut self, transform: &Transform2D) {
        for point in self.points.iter_mut() {
            *point = transform.apply(*point);
        }
    }
}

impl Default for Polygon {
    fn default() -> Polygon {
        Polygon::new()
    }
}

impl iter::FromIterator<Coord2> for Polygon {
    fn from_iter<T: IntoIterator<Item = Coord2>>(points: T) -> Polygon {
        Polygon {
            points: points.into_iter().collect(),
        }
    }
}
