/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Midpoint-displacement terrain
//!
//! Refines a single segment into a fractal polyline by repeatedly splitting every
//! segment at its midpoint and nudging the new point vertically by a bounded random
//! amount. The jaggedness is controlled by the roughness parameter and the level of
//! detail by the refinement depth; a seeded random generator reproduces the same
//! terrain exactly.
//!

use fresco_geometry::*;

use rand::Rng;

/// The deepest refinement level allowed: beyond this a single polyline runs past
/// 260,000 points, well past anything a drawing can show
pub const MAX_DEPTH: usize = 18;

///
/// Refines the segment from `start` to `end` into a fractal polyline
///
/// Each refinement level splits every segment at its horizontal midpoint, placing the
/// new point at the average height of the segment's endpoints plus a random offset
/// drawn uniformly from `±(roughness * segment length)`. Shorter segments therefore
/// get smaller perturbations, which is what keeps the result looking like terrain at
/// every scale. After `depth` levels the polyline has exactly `2^depth + 1` points,
/// and the first and last are the original endpoints, untouched.
///
/// The levels are expanded iteratively, so deep refinements cost memory but never
/// stack. `depth` is clamped to [`MAX_DEPTH`] and `roughness` to the 0-1 range; all of
/// the randomness comes from the caller's `rng`, so tests (or anyone wanting
/// repeatable terrain) can pass a seeded generator.
///
pub fn midpoint_displacement(
    start: Coord2,
    end: Coord2,
    depth: usize,
    roughness: f64,
    rng: &mut impl Rng,
) -> Vec<Coord2> {
    let depth = depth.min(MAX_DEPTH);
    let roughness = roughness.max(0.0).min(1.0);

    let mut points = vec![start, end];

    for _ in 0..depth {
        let mut refined = Vec::with_capacity(points.len() * 2 - 1);

        for pair in points.windows(2) {
            let (from, to) = (pair[0], pair[1]);

            let amplitude = roughness * from.distance_to(&to);
            let offset = if amplitude > 0.0 {
                rng.gen_range(-amplitude..=amplitude)
            } else {
                0.0
            };

            refined.push(from);
            refined.push(Coord2(
                (from.x() + to.x()) / 2.0,
                (from.y() + to.y()) / 2.0 + offset,
            ));
        }

        if let Some(end) = points.last() {
            refined.push(*end);
        }

        points = refined;
    }

    points
}

///
/// The polyline as it looked `level` refinement levels in: every `2^(depth - level)`th
/// point of a fully-refined polyline, endpoints included
///
/// This is the step-by-step view of a refinement: level 0 is just the two endpoints,
/// and each following level doubles the number of segments until the full polyline is
/// reached. Asking for more detail than the polyline holds returns every point.
///
pub fn select_detail_level(points: &[Coord2], level: usize) -> Vec<Coord2> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let num_segments = points.len() - 1;
    let requested_segments = 1usize << level.min(MAX_DEPTH);
    let stride = num_segments / requested_segments;

    if stride <= 1 {
        return points.to_vec();
    }

    points.iter().step_by(stride).copied().collect()
}
