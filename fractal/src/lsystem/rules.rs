/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

///
/// A Lindenmayer system: a string-rewriting grammar plus the parameters needed to
/// interpret its output as a drawing
///
/// The grammar part is the axiom (the starting string) and the productions (what each
/// symbol rewrites to). The drawing part is the turn angle applied by `+` and `-`
/// commands, the initial heading of the turtle, and how many rewriting rounds to run.
/// Constructing one doesn't compute anything: [`generate`](LSystem::generate) expands
/// the string and [`trace`](LSystem::trace) turns it into segments.
///
#[derive(Clone, PartialEq, Debug)]
pub struct LSystem {
    axiom: String,
    productions: HashMap<char, String>,
    turn_angle: f64,
    initial_heading: f64,
    iterations: usize,
}

impl LSystem {
    ///
    /// Creates an L-system with no productions
    ///
    /// Angles are in degrees. Productions are added with
    /// [`add_production`](LSystem::add_production); without any, the system just
    /// reproduces its axiom.
    ///
    pub fn new(
        axiom: impl Into<String>,
        turn_angle: f64,
        initial_heading: f64,
        iterations: usize,
    ) -> LSystem {
        LSystem {
            axiom: axiom.into(),
            productions: HashMap::new(),
            turn_angle,
            initial_heading,
            iterations,
        }
    }

    ///
    /// Sets the replacement string for a symbol (replacing any earlier production for
    /// the same symbol)
    ///
    pub fn add_production(&mut self, symbol: char, replacement: impl Into<String>) {
        self.productions.insert(symbol, replacement.into());
    }

    #[inline]
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// The angle in degrees that `+` and `-` turn the turtle by
    #[inline]
    pub fn turn_angle(&self) -> f64 {
        self.turn_angle
    }

    /// The direction in degrees the turtle starts out facing
    #[inline]
    pub fn initial_heading(&self) -> f64 {
        self.initial_heading
    }

    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub(super) fn production(&self, symbol: char) -> Option<&str> {
        self.productions.get(&symbol).map(|replacement| replacement.as_str())
    }

    ///
    /// Expands the axiom by running every rewriting round
    ///
    /// Each round replaces every symbol that has a production with its replacement
    /// string, in a single simultaneous pass; symbols without a production are copied
    /// through unchanged. Zero iterations (or zero productions) return the axiom as-is.
    ///
    pub fn generate(&self) -> String {
        let mut expanded = self.axiom.clone();

        for _ in 0..self.iterations {
            let mut next = String::with_capacity(expanded.len());

            for symbol in expanded.chars() {
                match self.production(symbol) {
                    Some(replacement) => next.push_str(replacement),
                    None => next.push(symbol),
                }
            }

            expanded = next;
        }

        expanded
    }
}
