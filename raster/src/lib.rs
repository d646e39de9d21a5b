/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! `fresco_raster` rasterizes 2D geometry into in-memory pixel buffers
//!
//! The buffer type is [`pixel::RgbBuffer`], a plain row-major grid of RGB byte triples
//! with bounds-checked reads and writes. Nothing in this crate knows how a buffer gets
//! on screen: a host application uploads it as a texture, saves it, or inspects it.
//!
//! The `scanline` module holds the rasterizers. Lines can be drawn with the integer
//! Bresenham algorithm or the anti-aliased Wu algorithm, both fading a color gradient
//! from one endpoint to the other, and both driving a caller-supplied [`scanline::Plot`]
//! sink rather than writing pixels themselves. Triangles are filled Gouraud-style by
//! interpolating the edges and drawing a line per scanline.
//!
//! The `fill` module works at the region level: scanline flood fill with a uniform
//! color or a tiled pattern, and Moore-neighbor boundary tracing. All of them use
//! explicit work stacks, so large images cannot exhaust the call stack.
//!
//! The `pixel` module also provides the pixel-level image operations shared by the
//! drawing demos: HSV conversion and recoloring, channel extraction, histograms,
//! grayscale reduction and image differencing.
//!

pub mod fill;
pub mod pixel;
pub mod scanline;
