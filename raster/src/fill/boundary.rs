/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::pixel::*;

/// The 8 Moore neighbourhood steps, counter-clockwise from +x, cardinals on the even
/// indices and diagonals on the odd ones
const MOORE_STEPS: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

///
/// Follows the contour of `border_color` pixels reachable from a start point, returning
/// the border pixels in the order they are visited
///
/// The contour is found by scanning along the start row, first toward +x and then (if
/// that leaves the buffer without a hit) toward -x; if neither scan finds a border
/// pixel the result is empty. From there a Moore-neighbour walk follows the border in
/// 8-connectivity: the cursor steps in its current direction, turns two compass steps
/// one way when it lands on a border pixel (recording it) and four the other way when
/// it doesn't, and stops when it arrives back at the starting border pixel. Probes
/// outside the buffer count as off-border, so contours touching the buffer edge trace
/// cleanly.
///
/// The walk is additionally capped at `8 * width * height` steps, which is far beyond
/// any real contour and stops the cursor bouncing forever on pixel arrangements the
/// turn rule can't escape.
///
pub fn trace_boundary(buffer: &RgbBuffer, start: (i32, i32), border_color: Rgb) -> Vec<(i32, i32)> {
    let (start_x, start_y) = start;

    let scan_row = |mut x: i32, step: i32| -> Option<i32> {
        loop {
            match buffer.get(x, start_y) {
                Some(pixel) if pixel == border_color => return Some(x),
                Some(_) => x += step,
                None => return None,
            }
        }
    };

    let border_start = match scan_row(start_x, 1).or_else(|| scan_row(start_x, -1)) {
        Some(border_x) => (border_x, start_y),
        None => return vec![],
    };

    let mut boundary = vec![border_start];
    let (mut x, mut y) = border_start;
    let mut direction = 6;
    let step_cap = 8 * buffer.width() * buffer.height();

    for _ in 0..step_cap {
        let (step_x, step_y) = MOORE_STEPS[direction];
        x += step_x;
        y += step_y;

        if (x, y) == border_start {
            break;
        }

        if buffer.get(x, y) == Some(border_color) {
            boundary.push((x, y));
            direction = (direction + 6) % 8;
        } else {
            direction = (direction + 4) % 8;
        }
    }

    boundary
}
