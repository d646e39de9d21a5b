/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::pixel::*;

use log::warn;

///
/// Recolors the connected region of `old_color` pixels around a seed point
///
/// This is a scanline fill: each pending pixel is expanded into the longest horizontal
/// run of `old_color` pixels containing it, the whole run is recolored at once, and the
/// pixels directly above and below the run become the new pending work. Both ends of
/// the run are found by the same bounds-checked scan, so the fill stops cleanly at the
/// buffer edges on either side.
///
/// Filling with the color that is already there would re-discover every filled run
/// forever, so `new_color == old_color` is a no-op. A seed outside the buffer, or on a
/// pixel that doesn't match `old_color`, fills nothing.
///
pub fn flood_fill(buffer: &mut RgbBuffer, seed: (i32, i32), new_color: Rgb, old_color: Rgb) {
    if new_color == old_color {
        return;
    }

    if buffer.get(seed.0, seed.1).is_none() {
        warn!(
            "Flood fill seed ({}, {}) is outside the {}x{} buffer",
            seed.0,
            seed.1,
            buffer.width(),
            buffer.height()
        );
        return;
    }

    let mut pending = vec![seed];

    while let Some((x, y)) = pending.pop() {
        if buffer.get(x, y) != Some(old_color) {
            continue;
        }

        // Expand to the full run of old_color pixels on this row
        let mut x_left = x;
        while buffer.get(x_left - 1, y) == Some(old_color) {
            x_left -= 1;
        }

        let mut x_right = x;
        while buffer.get(x_right + 1, y) == Some(old_color) {
            x_right += 1;
        }

        for fill_x in x_left..=x_right {
            buffer.set(fill_x, y, new_color);
        }

        for fill_x in x_left..=x_right {
            pending.push((fill_x, y - 1));
            pending.push((fill_x, y + 1));
        }
    }
}
