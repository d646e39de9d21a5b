/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// An RGB color as stored in a pixel buffer, one byte per channel
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    ///
    /// This color with the channels brought into the 0-1 range and an opaque alpha
    ///
    #[inline]
    pub fn to_rgba(self) -> Rgba {
        Rgba(
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            1.0,
        )
    }
}

///
/// An RGBA color with floating-point channels in the 0-1 range
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Rgba(pub f32, pub f32, pub f32, pub f32);

impl Rgba {
    ///
    /// An opaque color from red, green and blue channels
    ///
    #[inline]
    pub fn rgb(r: f32, g: f32, b: f32) -> Rgba {
        Rgba(r, g, b, 1.0)
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.0
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.1
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.2
    }

    #[inline]
    pub fn a(&self) -> f32 {
        self.3
    }

    ///
    /// The color a fraction `t` of the way from this color to another, interpolating
    /// every channel linearly
    ///
    /// Evaluated as `self * (1 - t) + other * t`, so `t = 0` returns this color exactly
    /// and `t = 1` returns `other` exactly.
    ///
    pub fn lerp(&self, other: &Rgba, t: f32) -> Rgba {
        let inverse = 1.0 - t;

        Rgba(
            self.0 * inverse + other.0 * t,
            self.1 * inverse + other.1 * t,
            self.2 * inverse + other.2 * t,
            self.3 * inverse + other.3 * t,
        )
    }

    ///
    /// Quantizes the color channels to bytes, dropping the alpha channel
    ///
    /// Channels are clamped to the 0-1 range first, so out-of-range results of color
    /// arithmetic still produce valid bytes.
    ///
    pub fn quantize(&self) -> Rgb {
        let to_byte = |channel: f32| (channel.max(0.0).min(1.0) * 255.0).round() as u8;

        Rgb(to_byte(self.0), to_byte(self.1), to_byte(self.2))
    }
}
