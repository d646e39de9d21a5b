/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::buffer::*;
use super::color::*;

use itertools::Itertools;

///
/// One of the three channels of an RGB buffer
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

///
/// Weights for reducing an RGB pixel to a single luminance value
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GrayscaleWeights {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl GrayscaleWeights {
    /// The ITU-R BT.601 luma weights
    pub const BT_601: GrayscaleWeights = GrayscaleWeights {
        red: 0.299,
        green: 0.587,
        blue: 0.114,
    };

    /// The ITU-R BT.709 luma weights
    pub const BT_709: GrayscaleWeights = GrayscaleWeights {
        red: 0.2126,
        green: 0.7152,
        blue: 0.0722,
    };

    ///
    /// The luminance byte for a pixel under these weights
    ///
    #[inline]
    pub fn luminance(&self, pixel: Rgb) -> u8 {
        let luminance =
            self.red * pixel.0 as f32 + self.green * pixel.1 as f32 + self.blue * pixel.2 as f32;

        luminance.round().max(0.0).min(255.0) as u8
    }
}

///
/// A copy of a buffer with one channel kept and the other two zeroed
///
pub fn extract_channel(buffer: &RgbBuffer, channel: Channel) -> RgbBuffer {
    let mut extracted = RgbBuffer::new(buffer.width(), buffer.height(), Rgb(0, 0, 0));

    for y in 0..buffer.height() as i32 {
        for x in 0..buffer.width() as i32 {
            if let Some(Rgb(r, g, b)) = buffer.get(x, y) {
                let kept = match channel {
                    Channel::Red => Rgb(r, 0, 0),
                    Channel::Green => Rgb(0, g, 0),
                    Channel::Blue => Rgb(0, 0, b),
                };
                extracted.set(x, y, kept);
            }
        }
    }

    extracted
}

///
/// Population counts of the byte values of every pixel, one histogram per channel
/// (indexed red, green, blue)
///
pub fn channel_histograms(buffer: &RgbBuffer) -> [[u32; 256]; 3] {
    let mut histograms = [[0u32; 256]; 3];

    for (r, g, b) in buffer.data().iter().tuples() {
        histograms[0][*r as usize] += 1;
        histograms[1][*g as usize] += 1;
        histograms[2][*b as usize] += 1;
    }

    histograms
}

///
/// Population counts of the luminance of every pixel under the given weights
///
pub fn luminance_histogram(buffer: &RgbBuffer, weights: GrayscaleWeights) -> [u32; 256] {
    let mut histogram = [0u32; 256];

    for (r, g, b) in buffer.data().iter().tuples() {
        let luminance = weights.luminance(Rgb(*r, *g, *b));
        histogram[luminance as usize] += 1;
    }

    histogram
}

///
/// A grayscale copy of a buffer, with every channel of a pixel set to its weighted
/// luminance
///
pub fn to_grayscale(buffer: &RgbBuffer, weights: GrayscaleWeights) -> RgbBuffer {
    let mut grayscale = RgbBuffer::new(buffer.width(), buffer.height(), Rgb(0, 0, 0));

    for y in 0..buffer.height() as i32 {
        for x in 0..buffer.width() as i32 {
            if let Some(pixel) = buffer.get(x, y) {
                let luminance = weights.luminance(pixel);
                grayscale.set(x, y, Rgb(luminance, luminance, luminance));
            }
        }
    }

    grayscale
}

///
/// The absolute per-channel difference of two buffers of the same size
///
/// Returns `None` when the buffer dimensions differ.
///
pub fn difference_image(first: &RgbBuffer, second: &RgbBuffer) -> Option<RgbBuffer> {
    if first.width() != second.width() || first.height() != second.height() {
        return None;
    }

    let mut difference = RgbBuffer::new(first.width(), first.height(), Rgb(0, 0, 0));

    for y in 0..first.height() as i32 {
        for x in 0..first.width() as i32 {
            if let (Some(a), Some(b)) = (first.get(x, y), second.get(x, y)) {
                let delta = Rgb(
                    (a.0 as i16 - b.0 as i16).abs() as u8,
                    (a.1 as i16 - b.1 as i16).abs() as u8,
                    (a.2 as i16 - b.2 as i16).abs() as u8,
                );
                difference.set(x, y, delta);
            }
        }
    }

    Some(difference)
}
