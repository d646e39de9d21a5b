/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! `fresco_fractal` generates fractal geometry as point and segment sequences
//!
//! It's part of a set of companion crates that make up a small 2D graphics teaching
//! system, alongside `fresco_geometry` (the core geometry types) and `fresco_raster`
//! (which can rasterize the sequences this crate produces).
//!
//! Two generators are provided. [`LSystem`] is a string-rewriting grammar: an axiom is
//! expanded through a set of productions for a fixed number of rounds, and the result
//! is interpreted as turtle-graphics commands to produce line segments, scaled to fit
//! a canvas. [`midpoint_displacement`] refines a single segment into a jagged polyline
//! by repeatedly perturbing segment midpoints with bounded randomness, the classic
//! one-dimensional terrain generator.
//!
//! Everything here is deterministic given its inputs: the L-system is a pure rewrite,
//! and midpoint displacement draws all of its randomness from a caller-supplied `Rng`,
//! so a seeded generator reproduces the same terrain.
//!

pub mod lsystem;
pub mod midpoint;

pub use self::lsystem::*;
pub use self::midpoint::*;
