/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::pixel::*;

use log::warn;

///
/// Fills the connected region of `old_color` pixels around a seed point with a tiled
/// pattern
///
/// The region is discovered by the same scanline expansion as [`flood_fill`], but each
/// pixel takes its color from the pattern buffer instead of a fill color. The pattern
/// is read toroidally: the pixel at `pattern_origin` lands on the seed, and moving
/// through the image moves through the pattern with both axes wrapping, so the pattern
/// tiles seamlessly over regions of any size.
///
/// The pattern may well contain `old_color` itself, so recoloring alone can't mark a
/// pixel as done; a visited mask tracks the filled pixels and guarantees the fill
/// terminates.
///
/// [`flood_fill`]: super::flood_fill
///
pub fn flood_fill_pattern(
    buffer: &mut RgbBuffer,
    seed: (i32, i32),
    old_color: Rgb,
    pattern: &RgbBuffer,
    pattern_origin: (i32, i32),
) {
    if pattern.width() == 0 || pattern.height() == 0 {
        return;
    }

    if buffer.get(seed.0, seed.1).is_none() {
        warn!(
            "Pattern fill seed ({}, {}) is outside the {}x{} buffer",
            seed.0,
            seed.1,
            buffer.width(),
            buffer.height()
        );
        return;
    }

    let width = buffer.width() as i32;
    let pattern_width = pattern.width() as i32;
    let pattern_height = pattern.height() as i32;

    // Valid only for in-bounds coordinates, which buffer.get establishes first
    let mask_index = |x: i32, y: i32| (x + y * width) as usize;

    let mut visited = vec![false; buffer.width() * buffer.height()];
    let mut pending = vec![seed];

    while let Some((x, y)) = pending.pop() {
        if buffer.get(x, y) != Some(old_color) || visited[mask_index(x, y)] {
            continue;
        }

        let mut x_left = x;
        while buffer.get(x_left - 1, y) == Some(old_color) && !visited[mask_index(x_left - 1, y)] {
            x_left -= 1;
        }

        let mut x_right = x;
        while buffer.get(x_right + 1, y) == Some(old_color) && !visited[mask_index(x_right + 1, y)]
        {
            x_right += 1;
        }

        let pattern_y = (pattern_origin.1 + (y - seed.1)).rem_euclid(pattern_height);
        for fill_x in x_left..=x_right {
            let pattern_x = (pattern_origin.0 + (fill_x - seed.0)).rem_euclid(pattern_width);

            if let Some(pattern_pixel) = pattern.get(pattern_x, pattern_y) {
                buffer.set(fill_x, y, pattern_pixel);
            }
            visited[mask_index(fill_x, y)] = true;
        }

        for fill_x in x_left..=x_right {
            pending.push((fill_x, y - 1));
            pending.push((fill_x, y + 1));
        }
    }
}
