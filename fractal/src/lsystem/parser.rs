/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::rules::*;

use std::error::Error;
use std::fmt;
use std::str::FromStr;

///
/// Error produced when an L-system description can't be parsed
///
#[derive(Clone, PartialEq, Debug)]
pub enum LSystemParseError {
    /// The description ended before the named field was read
    MissingField(&'static str),

    /// The named field held something that isn't a number
    InvalidNumber(&'static str, String),

    /// A production's symbol was not a single character
    InvalidSymbol(String),
}

impl fmt::Display for LSystemParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LSystemParseError::MissingField(field) => {
                write!(formatter, "L-system description ended before the {} field", field)
            }
            LSystemParseError::InvalidNumber(field, token) => {
                write!(formatter, "'{}' is not a valid {} value", token, field)
            }
            LSystemParseError::InvalidSymbol(token) => {
                write!(formatter, "'{}' is not a single-character production symbol", token)
            }
        }
    }
}

impl Error for LSystemParseError {}

///
/// The next whitespace-separated token parsed as a number
///
fn numeric_field<'a, T>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<T, LSystemParseError>
where
    T: FromStr,
{
    let token = tokens
        .next()
        .ok_or(LSystemParseError::MissingField(field))?;

    token
        .parse()
        .map_err(|_| LSystemParseError::InvalidNumber(field, token.to_string()))
}

impl LSystem {
    ///
    /// Parses the textual description format the L-system grammars are stored in
    ///
    /// The fields appear in a fixed order: the axiom, the turn angle in degrees, the
    /// initial heading in degrees, the number of rules, that many symbol/replacement
    /// pairs, and finally the iteration count. Fields are separated by any whitespace,
    /// so descriptions read the same whether they put one field or one rule per line.
    ///
    /// For example, the Koch curve:
    ///
    /// ```text
    /// F 60 0
    /// 1
    /// F F+F--F+F
    /// 4
    /// ```
    ///
    pub fn from_description(description: &str) -> Result<LSystem, LSystemParseError> {
        let mut tokens = description.split_whitespace();

        let axiom = tokens
            .next()
            .ok_or(LSystemParseError::MissingField("axiom"))?
            .to_string();
        let turn_angle = numeric_field(&mut tokens, "turn angle")?;
        let initial_heading = numeric_field(&mut tokens, "initial heading")?;
        let num_rules: usize = numeric_field(&mut tokens, "rule count")?;

        let mut rules = vec![];
        for _ in 0..num_rules {
            let symbol_token = tokens
                .next()
                .ok_or(LSystemParseError::MissingField("rule symbol"))?;
            let mut symbol_chars = symbol_token.chars();
            let symbol = match (symbol_chars.next(), symbol_chars.next()) {
                (Some(symbol), None) => symbol,
                _ => return Err(LSystemParseError::InvalidSymbol(symbol_token.to_string())),
            };

            let replacement = tokens
                .next()
                .ok_or(LSystemParseError::MissingField("rule replacement"))?;
            rules.push((symbol, replacement.to_string()));
        }

        let iterations = numeric_field(&mut tokens, "iteration count")?;

        let mut system = LSystem::new(axiom, turn_angle, initial_heading, iterations);
        for (symbol, replacement) in rules {
            system.add_production(symbol, replacement);
        }

        Ok(system)
    }
}
