/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::line::*;
use super::plot::*;
use crate::pixel::*;

use fresco_geometry::*;

///
/// A triangle corner: a position with the color the fill fades toward at that corner
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ShadedVertex {
    pub position: Coord2,
    pub color: Rgba,
}

impl ShadedVertex {
    pub fn new(position: Coord2, color: Rgba) -> ShadedVertex {
        ShadedVertex { position, color }
    }
}

///
/// The position and color on the edge `from -> to` at height `y`
///
/// The edge must not be horizontal: callers guarantee `y` lies strictly within a y-range
/// that the edge spans.
///
fn interpolate_vertex(y: f64, from: &ShadedVertex, to: &ShadedVertex) -> ShadedVertex {
    let t = (y - from.position.y()) / (to.position.y() - from.position.y());

    ShadedVertex {
        position: Coord2(
            from.position.x() + t * (to.position.x() - from.position.x()),
            y,
        ),
        color: from.color.lerp(&to.color, t as f32),
    }
}

///
/// Fills a triangle with a Gouraud shade: each corner holds its own color and the fill
/// blends them across the interior
///
/// The corners are sorted by y (a stable sort, so corners of a flat edge keep their
/// order) and the triangle is rasterized one horizontal span at a time. At each integer
/// scanline the fill interpolates a position and color along the long edge (top corner
/// to bottom corner) and along whichever short edge spans that scanline, then draws the
/// span between them as a gradient line with the chosen algorithm.
///
/// A y-range that contains no scanline is skipped, so flat-topped, flat-bottomed and
/// completely degenerate (collinear or zero-height) triangles fall out naturally
/// instead of dividing by the zero height.
///
pub fn fill_gradient_triangle(
    v0: ShadedVertex,
    v1: ShadedVertex,
    v2: ShadedVertex,
    algorithm: LineAlgorithm,
    plot: &mut impl Plot,
) {
    let mut corners = [v0, v1, v2];
    corners.sort_by(|a, b| a.position.y().total_cmp(&b.position.y()));
    let [top, mid, bot] = corners;

    let mut draw_span = |from: ShadedVertex, to: ShadedVertex| {
        let start = (
            from.position.x().round() as i32,
            from.position.y().round() as i32,
        );
        let end = (to.position.x().round() as i32, to.position.y().round() as i32);

        draw_line(start, end, from.color, to.color, algorithm, plot);
    };

    // Scanlines stay on the integer lattice from the first row at or below the top corner
    let mut y = top.position.y().ceil();

    while y < mid.position.y() {
        let short = interpolate_vertex(y, &top, &mid);
        let long = interpolate_vertex(y, &top, &bot);
        draw_span(short, long);

        y += 1.0;
    }

    while y < bot.position.y() {
        let short = interpolate_vertex(y, &mid, &bot);
        let long = interpolate_vertex(y, &top, &bot);
        draw_span(short, long);

        y += 1.0;
    }
}
