/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use fresco_geometry::*;
use fresco_raster::pixel::*;
use fresco_raster::scanline::*;

fn record(
    v0: ShadedVertex,
    v1: ShadedVertex,
    v2: ShadedVertex,
    algorithm: LineAlgorithm,
) -> Vec<PlottedPixel> {
    let mut recorder = PixelRecorder::new();
    fill_gradient_triangle(v0, v1, v2, algorithm, &mut recorder);

    recorder.pixels().to_vec()
}

#[test]
fn right_triangle_covers_its_base_and_every_row() {
    let red = Rgba::rgb(1.0, 0.0, 0.0);
    let pixels = record(
        ShadedVertex::new(Coord2(0.0, 0.0), red),
        ShadedVertex::new(Coord2(10.0, 0.0), red),
        ShadedVertex::new(Coord2(0.0, 10.0), red),
        LineAlgorithm::Bresenham,
    );

    assert!(!pixels.is_empty());

    // The base row spans the full width
    assert!(pixels.iter().any(|pixel| (pixel.x, pixel.y) == (0, 0)));
    assert!(pixels.iter().any(|pixel| (pixel.x, pixel.y) == (10, 0)));

    // A scanline is drawn for every row the triangle spans
    for y in 0..10 {
        assert!(pixels.iter().any(|pixel| pixel.y == y), "no span at row {}", y);
    }
}

#[test]
fn pixels_stay_inside_the_bounding_box() {
    let red = Rgba::rgb(1.0, 0.0, 0.0);
    let pixels = record(
        ShadedVertex::new(Coord2(3.0, 1.0), red),
        ShadedVertex::new(Coord2(14.0, 6.0), red),
        ShadedVertex::new(Coord2(5.0, 12.0), red),
        LineAlgorithm::Bresenham,
    );

    assert!(!pixels.is_empty());
    assert!(pixels
        .iter()
        .all(|pixel| pixel.x >= 3 && pixel.x <= 14 && pixel.y >= 1 && pixel.y <= 12));
}

#[test]
fn uniform_corner_colors_fill_with_that_color() {
    let green = Rgba::rgb(0.0, 1.0, 0.0);
    let pixels = record(
        ShadedVertex::new(Coord2(0.0, 0.0), green),
        ShadedVertex::new(Coord2(12.0, 2.0), green),
        ShadedVertex::new(Coord2(4.0, 9.0), green),
        LineAlgorithm::Bresenham,
    );

    assert!(!pixels.is_empty());
    for pixel in &pixels {
        assert!((pixel.color.r() - 0.0).abs() < 1e-4);
        assert!((pixel.color.g() - 1.0).abs() < 1e-4);
        assert!((pixel.color.b() - 0.0).abs() < 1e-4);
    }
}

#[test]
fn corner_pixels_take_their_corner_colors() {
    let red = Rgba::rgb(1.0, 0.0, 0.0);
    let green = Rgba::rgb(0.0, 1.0, 0.0);
    let blue = Rgba::rgb(0.0, 0.0, 1.0);

    let pixels = record(
        ShadedVertex::new(Coord2(0.0, 0.0), red),
        ShadedVertex::new(Coord2(10.0, 0.0), green),
        ShadedVertex::new(Coord2(0.0, 10.0), blue),
        LineAlgorithm::Bresenham,
    );

    let at_origin = pixels.iter().find(|pixel| (pixel.x, pixel.y) == (0, 0)).unwrap();
    let at_base_end = pixels.iter().find(|pixel| (pixel.x, pixel.y) == (10, 0)).unwrap();

    assert!((at_origin.color.r() - 1.0).abs() < 1e-4);
    assert!((at_base_end.color.g() - 1.0).abs() < 1e-4);
}

#[test]
fn shade_blends_toward_the_far_corner() {
    let red = Rgba::rgb(1.0, 0.0, 0.0);
    let blue = Rgba::rgb(0.0, 0.0, 1.0);

    let pixels = record(
        ShadedVertex::new(Coord2(0.0, 0.0), red),
        ShadedVertex::new(Coord2(10.0, 0.0), red),
        ShadedVertex::new(Coord2(5.0, 10.0), blue),
        LineAlgorithm::Bresenham,
    );

    // Rows nearer the blue apex carry more blue
    let blue_at_row = |y: i32| {
        let row: Vec<_> = pixels.iter().filter(|pixel| pixel.y == y).collect();
        row.iter().map(|pixel| pixel.color.b()).sum::<f32>() / row.len() as f32
    };

    assert!(blue_at_row(1) < blue_at_row(5));
    assert!(blue_at_row(5) < blue_at_row(9));
}

#[test]
fn collinear_horizontal_triangle_plots_nothing() {
    let red = Rgba::rgb(1.0, 0.0, 0.0);
    let pixels = record(
        ShadedVertex::new(Coord2(0.0, 5.0), red),
        ShadedVertex::new(Coord2(5.0, 5.0), red),
        ShadedVertex::new(Coord2(10.0, 5.0), red),
        LineAlgorithm::Bresenham,
    );

    assert!(pixels.is_empty());
}

#[test]
fn flat_top_triangle_skips_its_empty_upper_range() {
    let red = Rgba::rgb(1.0, 0.0, 0.0);
    let pixels = record(
        ShadedVertex::new(Coord2(0.0, 0.0), red),
        ShadedVertex::new(Coord2(10.0, 0.0), red),
        ShadedVertex::new(Coord2(5.0, 5.0), red),
        LineAlgorithm::Bresenham,
    );

    assert!(!pixels.is_empty());
    assert!(pixels.iter().all(|pixel| pixel.y >= 0 && pixel.y < 5));
}

#[test]
fn wu_spans_fill_the_same_region_with_soft_edges() {
    let red = Rgba::rgb(1.0, 0.0, 0.0);
    let pixels = record(
        ShadedVertex::new(Coord2(0.0, 0.0), red),
        ShadedVertex::new(Coord2(10.0, 0.0), red),
        ShadedVertex::new(Coord2(0.0, 10.0), red),
        LineAlgorithm::Wu,
    );

    assert!(!pixels.is_empty());
    assert!(pixels.iter().all(|pixel| pixel.coverage >= 0.0 && pixel.coverage <= 1.0));
}
