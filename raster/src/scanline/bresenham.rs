/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::plot::*;
use crate::pixel::*;

///
/// Draws a line with Bresenham's integer algorithm, fading the color from `from_color`
/// at the start to `to_color` at the end
///
/// The line steps along its major axis, so exactly `max(|dx|, |dy|) + 1` pixels are
/// plotted and consecutive pixels always touch (8-connectivity). Lines with `|dy| <=
/// |dx|` step along x, everything steeper along y: the comparison is done on the
/// integer magnitudes, so vertical lines take the y-major branch without any slope
/// arithmetic. Every pixel is plotted at full coverage.
///
pub fn bresenham_line(
    from: (i32, i32),
    to: (i32, i32),
    from_color: Rgba,
    to_color: Rgba,
    plot: &mut impl Plot,
) {
    let (mut x, mut y) = from;
    let (to_x, to_y) = to;

    let dx = (to_x - x).abs();
    let dy = (to_y - y).abs();
    let x_step = if x < to_x { 1 } else { -1 };
    let y_step = if y < to_y { 1 } else { -1 };

    if dy <= dx {
        // x-major (this branch also takes |slope| == 1 and the single-pixel case)
        let segments = dx;
        let mut d = 2 * dy - dx;

        for segment in 0..=segments {
            let t = if segments == 0 {
                0.0
            } else {
                segment as f32 / segments as f32
            };
            plot.plot(x, y, from_color.lerp(&to_color, t), 1.0);

            if d < 0 {
                d += 2 * dy;
            } else {
                y += y_step;
                d += 2 * (dy - dx);
            }
            x += x_step;
        }
    } else {
        // y-major
        let segments = dy;
        let mut d = 2 * dx - dy;

        for segment in 0..=segments {
            let t = segment as f32 / segments as f32;
            plot.plot(x, y, from_color.lerp(&to_color, t), 1.0);

            if d < 0 {
                d += 2 * dx;
            } else {
                x += x_step;
                d += 2 * (dx - dy);
            }
            y += y_step;
        }
    }
}
