/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # L-systems
//!
//! An [`LSystem`] holds the grammar: an axiom, per-symbol productions, a turn angle,
//! an initial heading and an iteration count. `rules` implements the string rewriting,
//! `parser` reads the line-oriented description format the grammars are stored in, and
//! `turtle` interprets an expanded string as turtle-graphics commands to produce line
//! segments fitted to a canvas.
//!

pub use parser::*;
pub use rules::*;
pub use turtle::*;

mod parser;
mod rules;
mod turtle;
