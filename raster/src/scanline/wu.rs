/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::plot::*;
use crate::pixel::*;

use std::mem;

///
/// Draws an anti-aliased line with Wu's algorithm, fading the color from `from_color`
/// at the start to `to_color` at the end
///
/// Both endpoints are plotted at full coverage. Every interior step along the major
/// axis plots the two pixels straddling the ideal line, splitting the coverage between
/// them by the fractional part of the minor coordinate, so the coverage plotted per
/// step always sums to 1. The endpoints and colors are swapped together when the line
/// runs against the major axis direction, which keeps the gradient anchored to the
/// caller's endpoints.
///
pub fn wu_line(
    from: (i32, i32),
    to: (i32, i32),
    from_color: Rgba,
    to_color: Rgba,
    plot: &mut impl Plot,
) {
    let (mut x0, mut y0) = from;
    let (mut x1, mut y1) = to;
    let (mut c0, mut c1) = (from_color, to_color);

    if x0 == x1 && y0 == y1 {
        plot.plot(x0, y0, c0, 1.0);
        return;
    }

    if (y1 - y0).abs() <= (x1 - x0).abs() {
        // x-major: canonicalize so x increases
        if x0 > x1 {
            mem::swap(&mut x0, &mut x1);
            mem::swap(&mut y0, &mut y1);
            mem::swap(&mut c0, &mut c1);
        }

        let gradient = (y1 - y0) as f32 / (x1 - x0) as f32;

        plot.plot(x0, y0, c0, 1.0);

        let mut y = y0 as f32 + gradient;
        for x in (x0 + 1)..x1 {
            let t = (x - x0) as f32 / (x1 - x0) as f32;
            let color = c0.lerp(&c1, t);
            let row = y.floor();
            let fraction = y - row;

            plot.plot(x, row as i32, color, 1.0 - fraction);
            plot.plot(x, row as i32 + 1, color, fraction);

            y += gradient;
        }

        plot.plot(x1, y1, c1, 1.0);
    } else {
        // y-major: canonicalize so y increases
        if y0 > y1 {
            mem::swap(&mut x0, &mut x1);
            mem::swap(&mut y0, &mut y1);
            mem::swap(&mut c0, &mut c1);
        }

        let gradient = (x1 - x0) as f32 / (y1 - y0) as f32;

        plot.plot(x0, y0, c0, 1.0);

        let mut x = x0 as f32 + gradient;
        for y in (y0 + 1)..y1 {
            let t = (y - y0) as f32 / (y1 - y0) as f32;
            let color = c0.lerp(&c1, t);
            let column = x.floor();
            let fraction = x - column;

            plot.plot(column as i32, y, color, 1.0 - fraction);
            plot.plot(column as i32 + 1, y, color, fraction);

            x += gradient;
        }

        plot.plot(x1, y1, c1, 1.0);
    }
}
