/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::buffer::*;
use super::color::*;

/// Channel differences with a magnitude below this are treated as equal when converting to HSV
const CHANNEL_EPSILON: f32 = 0.0001;

///
/// A color in hue-saturation-value form
///
/// Hue is in degrees; saturation and value are in the 0-1 range. Hues outside [0, 360)
/// wrap around when converting back to RGB, so shifting a hue never needs a range check.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    ///
    /// The RGB form of this color (opaque alpha)
    ///
    /// Uses the usual sector decomposition: the hue picks one of six 60 degree sectors
    /// and the channel values come from the `p`/`q`/`t` interpolants for that sector.
    ///
    pub fn to_rgba(&self) -> Rgba {
        let hue = self.hue.rem_euclid(360.0);
        let sector = (hue / 60.0).floor();
        let sector_fraction = hue / 60.0 - sector;

        let v = self.value;
        let p = v * (1.0 - self.saturation);
        let q = v * (1.0 - sector_fraction * self.saturation);
        let t = v * (1.0 - (1.0 - sector_fraction) * self.saturation);

        let (r, g, b) = match (sector as i32) % 6 {
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            5 => (v, p, q),
            _ => (v, t, p),
        };

        Rgba(r, g, b, 1.0)
    }
}

impl Rgba {
    ///
    /// The HSV form of this color (the alpha channel is ignored)
    ///
    /// Black reports a hue and saturation of 0, and grays a hue of 0, so the conversion
    /// is total even where hue is geometrically undefined.
    ///
    pub fn to_hsv(&self) -> Hsv {
        let Rgba(r, g, b, _) = *self;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let value = max;
        if max.abs() < CHANNEL_EPSILON {
            return Hsv {
                hue: 0.0,
                saturation: 0.0,
                value: 0.0,
            };
        }

        let saturation = 1.0 - min / max;
        let spread = max - min;
        if spread.abs() < CHANNEL_EPSILON {
            return Hsv {
                hue: 0.0,
                saturation,
                value,
            };
        }

        let hue = if (g - max).abs() < CHANNEL_EPSILON {
            60.0 * (b - r) / spread + 120.0
        } else if (b - max).abs() < CHANNEL_EPSILON {
            60.0 * (r - g) / spread + 240.0
        } else {
            let hue = 60.0 * (g - b) / spread;
            if g < b {
                hue + 360.0
            } else {
                hue
            }
        };

        Hsv {
            hue,
            saturation,
            value,
        }
    }
}

///
/// Recolors a whole buffer in HSV space
///
/// Every pixel has `hue_shift` degrees added to its hue (wrapping around the color
/// wheel), and its saturation and value scaled by the given factors and clamped back to
/// the 0-1 range. A shift of 0 with scales of 1 leaves the image as close to unchanged
/// as byte quantization allows.
///
pub fn adjust_hsv(buffer: &mut RgbBuffer, hue_shift: f32, saturation_scale: f32, value_scale: f32) {
    for y in 0..buffer.height() as i32 {
        for x in 0..buffer.width() as i32 {
            if let Some(pixel) = buffer.get(x, y) {
                let hsv = pixel.to_rgba().to_hsv();

                let adjusted = Hsv {
                    hue: (hsv.hue + hue_shift).rem_euclid(360.0),
                    saturation: (hsv.saturation * saturation_scale).max(0.0).min(1.0),
                    value: (hsv.value * value_scale).max(0.0).min(1.0),
                };

                buffer.set(x, y, adjusted.to_rgba().quantize());
            }
        }
    }
}
