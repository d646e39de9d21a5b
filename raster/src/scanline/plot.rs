/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::pixel::*;

///
/// A sink for the pixels produced by a rasterizer
///
/// The rasterizers never write to a buffer themselves: they call `plot` once per pixel
/// and leave the effect up to the caller, so the same algorithm can draw to a buffer,
/// record its output for inspection, or feed another rasterizer. `coverage` is the
/// fraction of the pixel the ideal line covers, in the 0-1 range: the Bresenham
/// rasterizer always reports full coverage, while the Wu rasterizer splits it between
/// two neighbouring pixels.
///
pub trait Plot {
    ///
    /// Receives one rasterized pixel
    ///
    fn plot(&mut self, x: i32, y: i32, color: Rgba, coverage: f32);
}

impl<TFn> Plot for TFn
where
    TFn: FnMut(i32, i32, Rgba, f32),
{
    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Rgba, coverage: f32) {
        self(x, y, color, coverage)
    }
}

///
/// A plot sink that composites pixels into an `RgbBuffer`
///
/// Coverage behaves like an extra alpha: the new color is blended over whatever the
/// buffer already holds, weighted by `coverage * color.a()`. Full coverage with an
/// opaque color replaces the pixel outright, which is how anti-aliased lines get their
/// soft edges against any background. Out-of-bounds pixels are dropped by the buffer.
///
pub struct BufferPlot<'a> {
    buffer: &'a mut RgbBuffer,
}

impl<'a> BufferPlot<'a> {
    pub fn new(buffer: &'a mut RgbBuffer) -> BufferPlot<'a> {
        BufferPlot { buffer }
    }
}

impl<'a> Plot for BufferPlot<'a> {
    fn plot(&mut self, x: i32, y: i32, color: Rgba, coverage: f32) {
        if let Some(existing) = self.buffer.get(x, y) {
            let alpha = (coverage * color.a()).max(0.0).min(1.0);
            let blended = existing.to_rgba().lerp(&color, alpha);

            self.buffer.set(x, y, blended.quantize());
        }
    }
}

///
/// A pixel as reported to a `Plot` sink
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PlottedPixel {
    pub x: i32,
    pub y: i32,
    pub color: Rgba,
    pub coverage: f32,
}

///
/// A plot sink that records every pixel it receives, in order
///
/// Nothing is drawn anywhere: this exists so that the exact output of a rasterizer can
/// be inspected, mostly by tests.
///
pub struct PixelRecorder {
    pixels: Vec<PlottedPixel>,
}

impl PixelRecorder {
    pub fn new() -> PixelRecorder {
        PixelRecorder { pixels: vec![] }
    }

    ///
    /// The pixels recorded so far, in the order they were plotted
    ///
    #[inline]
    pub fn pixels(&self) -> &[PlottedPixel] {
        &self.pixels
    }
}

impl Default for PixelRecorder {
    fn default() -> PixelRecorder {
        PixelRecorder::new()
    }
}

impl Plot for PixelRecorder {
    fn plot(&mut self, x: i32, y: i32, color: Rgba, coverage: f32) {
        self.pixels.push(PlottedPixel {
            x,
            y,
            color,
            coverage,
        });
    }
}
