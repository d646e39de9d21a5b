/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Add, Mul, Neg, Sub};

///
/// A point or vector in 2D space
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Coord2(pub f64, pub f64);

impl Coord2 {
    ///
    /// The origin point (0, 0)
    ///
    #[inline]
    pub fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// The dot product of this vector with another
    ///
    #[inline]
    pub fn dot(&self, other: &Coord2) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    ///
    /// The 2D cross product of this vector with another (the z component of the 3D cross
    /// product, so positive when `other` lies counter-clockwise of this vector)
    ///
    #[inline]
    pub fn cross(&self, other: &Coord2) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    ///
    /// The length of this vector
    ///
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    ///
    /// The distance between this point and another
    ///
    #[inline]
    pub fn distance_to(&self, target: &Coord2) -> f64 {
        (*target - *self).magnitude()
    }

    ///
    /// This point as a homogeneous coordinate triple, ready to be multiplied by a 3x3
    /// transformation matrix
    ///
    #[inline]
    pub fn to_homogeneous(&self) -> [f64; 3] {
        [self.0, self.1, 1.0]
    }

    ///
    /// The point described by a homogeneous coordinate triple
    ///
    /// Affine transforms leave the w component at 1, so it is dropped rather than
    /// divided through.
    ///
    #[inline]
    pub fn from_homogeneous(coords: [f64; 3]) -> Coord2 {
        Coord2(coords[0], coords[1])
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}
