/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bresenham::*;
use super::plot::*;
use super::wu::*;
use crate::pixel::*;

///
/// The rasterization strategies available for drawing a line
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LineAlgorithm {
    /// Integer stepping, one fully-covered pixel per major-axis step
    Bresenham,

    /// Floating-point stepping, coverage split across pixel pairs for anti-aliasing
    Wu,
}

///
/// Draws a gradient line with the chosen algorithm
///
/// This is a convenience for callers that pick the algorithm at runtime (interactive
/// demos usually hand the choice straight from a UI toggle): it just forwards to
/// [`bresenham_line`] or [`wu_line`].
///
#[inline]
pub fn draw_line(
    from: (i32, i32),
    to: (i32, i32),
    from_color: Rgba,
    to_color: Rgba,
    algorithm: LineAlgorithm,
    plot: &mut impl Plot,
) {
    match algorithm {
        LineAlgorithm::Bresenham => bresenham_line(from, to, from_color, to_color, plot),
        LineAlgorithm::Wu => wu_line(from, to, from_color, to_color, plot),
    }
}
