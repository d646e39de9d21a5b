/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use fresco_raster::pixel::*;

fn approx_equal(c1: Rgba, c2: Rgba) -> bool {
    (c1.r() - c2.r()).abs() < 1e-4
        && (c1.g() - c2.g()).abs() < 1e-4
        && (c1.b() - c2.b()).abs() < 1e-4
}

#[test]
fn primaries_have_the_expected_hues() {
    let red = Rgba::rgb(1.0, 0.0, 0.0).to_hsv();
    let green = Rgba::rgb(0.0, 1.0, 0.0).to_hsv();
    let blue = Rgba::rgb(0.0, 0.0, 1.0).to_hsv();

    assert!((red.hue - 0.0).abs() < 1e-4);
    assert!((green.hue - 120.0).abs() < 1e-4);
    assert!((blue.hue - 240.0).abs() < 1e-4);

    for primary in [red, green, blue] {
        assert!((primary.saturation - 1.0).abs() < 1e-4);
        assert!((primary.value - 1.0).abs() < 1e-4);
    }
}

#[test]
fn grays_have_no_saturation() {
    let gray = Rgba::rgb(0.5, 0.5, 0.5).to_hsv();

    assert!(gray.saturation == 0.0);
    assert!((gray.value - 0.5).abs() < 1e-6);
}

#[test]
fn black_converts_without_dividing_by_zero() {
    let black = Rgba::rgb(0.0, 0.0, 0.0).to_hsv();

    assert!(black.hue == 0.0);
    assert!(black.saturation == 0.0);
    assert!(black.value == 0.0);
}

#[test]
fn colors_survive_the_round_trip_through_hsv() {
    let samples = vec![
        Rgba::rgb(1.0, 0.0, 0.0),
        Rgba::rgb(0.0, 1.0, 0.0),
        Rgba::rgb(0.0, 0.0, 1.0),
        Rgba::rgb(1.0, 1.0, 0.0),
        Rgba::rgb(0.0, 1.0, 1.0),
        Rgba::rgb(1.0, 0.0, 1.0),
        Rgba::rgb(0.3, 0.6, 0.9),
        Rgba::rgb(0.8, 0.2, 0.4),
    ];

    for color in samples {
        assert!(
            approx_equal(color.to_hsv().to_rgba(), color),
            "round trip changed {:?}",
            color
        );
    }
}

#[test]
fn hues_wrap_around_the_color_wheel() {
    let green = Hsv {
        hue: 120.0,
        saturation: 1.0,
        value: 1.0,
    };
    let wrapped_forward = Hsv {
        hue: 480.0,
        ..green
    };
    let wrapped_backward = Hsv {
        hue: -240.0,
        ..green
    };

    assert!(approx_equal(wrapped_forward.to_rgba(), green.to_rgba()));
    assert!(approx_equal(wrapped_backward.to_rgba(), green.to_rgba()));
}

#[test]
fn hue_shift_recolors_a_buffer() {
    let mut buffer = RgbBuffer::new(4, 4, Rgb(255, 0, 0));

    adjust_hsv(&mut buffer, 120.0, 1.0, 1.0);

    assert!(buffer.count_pixels(Rgb(0, 255, 0)) == 16);
}

#[test]
fn identity_adjustment_leaves_pixels_alone() {
    let mut buffer = RgbBuffer::new(4, 4, Rgb(255, 0, 0));
    buffer.set(1, 1, Rgb(0, 0, 255));
    buffer.set(2, 2, Rgb(128, 128, 128));
    let original = buffer.clone();

    adjust_hsv(&mut buffer, 0.0, 1.0, 1.0);

    for y in 0..4 {
        for x in 0..4 {
            let before = original.get(x, y);
            let after = buffer.get(x, y);
            match (before, after) {
                (Some(before), Some(after)) => {
                    assert!((before.0 as i16 - after.0 as i16).abs() <= 1);
                    assert!((before.1 as i16 - after.1 as i16).abs() <= 1);
                    assert!((before.2 as i16 - after.2 as i16).abs() <= 1);
                }
                _ => panic!("pixel disappeared at ({}, {})", x, y),
            }
        }
    }
}

#[test]
fn value_scale_darkens_the_image() {
    let mut buffer = RgbBuffer::new(2, 2, Rgb(200, 100, 50));

    adjust_hsv(&mut buffer, 0.0, 1.0, 0.5);

    match buffer.get(0, 0) {
        Some(Rgb(r, g, b)) => {
            assert!((r as i16 - 100).abs() <= 1);
            assert!((g as i16 - 50).abs() <= 1);
            assert!((b as i16 - 25).abs() <= 1);
        }
        None => panic!("pixel missing"),
    }
}

#[test]
fn saturation_scale_of_zero_washes_out_to_gray() {
    let mut buffer = RgbBuffer::new(2, 2, Rgb(255, 0, 0));

    adjust_hsv(&mut buffer, 0.0, 0.0, 1.0);

    match buffer.get(0, 0) {
        Some(Rgb(r, g, b)) => {
            assert!(r == g && g == b, "expected gray, got ({}, {}, {})", r, g, b);
        }
        None => panic!("pixel missing"),
    }
}
