/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::color::*;

///
/// A fixed-size 2D grid of RGB pixels, stored row-major as byte triples
///
/// Coordinates are signed so that rasterizers can pass through out-of-range positions
/// safely: reads outside the buffer return `None` and writes outside it are ignored.
/// Pixel `(x, y)` lives at byte offset `(x + y * width) * 3`.
///
#[derive(Clone, PartialEq, Debug)]
pub struct RgbBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbBuffer {
    ///
    /// Creates a buffer filled with a background color
    ///
    pub fn new(width: usize, height: usize, background: Rgb) -> RgbBuffer {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..(width * height) {
            data.push(background.0);
            data.push(background.1);
            data.push(background.2);
        }

        RgbBuffer {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// The raw pixel bytes in row-major order
    ///
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            None
        } else {
            Some(((x as usize) + (y as usize) * self.width) * 3)
        }
    }

    ///
    /// The color of a pixel, or `None` if the coordinates are outside the buffer
    ///
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index_of(x, y)
            .map(|idx| Rgb(self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }

    ///
    /// Sets the color of a pixel (writes outside the buffer are skipped)
    ///
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(idx) = self.index_of(x, y) {
            self.data[idx] = color.0;
            self.data[idx + 1] = color.1;
            self.data[idx + 2] = color.2;
        }
    }

    ///
    /// The number of pixels whose color matches
    ///
    pub fn count_pixels(&self, color: Rgb) -> usize {
        self.data
            .chunks_exact(3)
            .filter(|pixel| pixel[0] == color.0 && pixel[1] == color.1 && pixel[2] == color.2)
            .count()
    }
}
