/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;

///
/// A 2D affine transformation, stored as a 3x3 matrix
///
/// Points transform in the row-vector convention, `point' = point * matrix`, which puts
/// the translation components in the bottom row. Transforms made by the constructors
/// here always have `[0, 0, 1]` as their final column, so transformed points stay in the
/// `w = 1` plane.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Transform2D(pub [[f64; 3]; 3]);

impl Transform2D {
    ///
    /// The transform that leaves every point where it is
    ///
    pub fn identity() -> Transform2D {
        Transform2D([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// A transform that moves points by `(dx, dy)`
    ///
    pub fn translate(dx: f64, dy: f64) -> Transform2D {
        Transform2D([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [dx, dy, 1.0]])
    }

    ///
    /// A transform that rotates counter-clockwise about the origin, in a y-up frame
    ///
    pub fn rotate(radians: f64) -> Transform2D {
        let (sin, cos) = radians.sin_cos();

        Transform2D([[cos, sin, 0.0], [-sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// A transform that rotates counter-clockwise about the origin, with the angle given
    /// in degrees
    ///
    #[inline]
    pub fn rotate_degrees(degrees: f64) -> Transform2D {
        Self::rotate(degrees.to_radians())
    }

    ///
    /// A transform that scales by `(sx, sy)` about the origin
    ///
    pub fn scale(sx: f64, sy: f64) -> Transform2D {
        Transform2D([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// The transform that applies this transform first, then `next`
    ///
    /// In the row-vector convention this is the matrix product `self * next`.
    ///
    pub fn then(&self, next: &Transform2D) -> Transform2D {
        let a = &self.0;
        let b = &next.0;
        let mut product = [[0.0; 3]; 3];

        for (row, product_row) in product.iter_mut().enumerate() {
            for (col, value) in product_row.iter_mut().enumerate() {
                *value = a[row][0] * b[0][col] + a[row][1] * b[1][col] + a[row][2] * b[2][col];
            }
        }

        Transform2D(product)
    }

    ///
    /// The transform that applies `transform` relative to a pivot point instead of the
    /// origin (by moving the pivot to the origin, transforming, and moving it back)
    ///
    pub fn about(pivot: Coord2, transform: &Transform2D) -> Transform2D {
        Transform2D::translate(-pivot.x(), -pivot.y())
            .then(transform)
            .then(&Transform2D::translate(pivot.x(), pivot.y()))
    }

    ///
    /// Applies this transform to a point
    ///
    pub fn apply(&self, point: Coord2) -> Coord2 {
        let coords = point.to_homogeneous();
        let mut transformed = [0.0; 3];

        for (col, value) in transformed.iter_mut().enumerate() {
            for (row, coord) in coords.iter().enumerate() {
                *value += coord * self.0[row][col];
            }
        }

        Coord2::from_homogeneous(transformed)
    }
}
