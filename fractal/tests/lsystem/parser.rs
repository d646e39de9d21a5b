/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use fresco_fractal::*;

const KOCH: &str = "\
F 60 0
1
F F+F--F+F
4
";

#[test]
fn parses_the_koch_description() {
    let system = LSystem::from_description(KOCH).unwrap();

    assert!(system.axiom() == "F");
    assert!(system.turn_angle() == 60.0);
    assert!(system.initial_heading() == 0.0);
    assert!(system.iterations() == 4);
}

#[test]
fn parsed_productions_drive_the_rewrite() {
    let mut system = LSystem::from_description(KOCH).unwrap();

    // Same grammar, fewer rounds (descriptions fix the iteration count at parse time)
    assert!(system.generate().len() > 8);

    system = LSystem::from_description("F 60 0 1 F F+F--F+F 1").unwrap();
    assert!(system.generate() == "F+F--F+F");
}

#[test]
fn field_layout_is_whitespace_insensitive() {
    let one_line = LSystem::from_description("F 60 0 1 F F+F--F+F 4").unwrap();
    let spread_out = LSystem::from_description("F\n\n  60\t0\n1\n  F\tF+F--F+F\n\n4\n").unwrap();

    assert!(one_line == spread_out);
    assert!(one_line == LSystem::from_description(KOCH).unwrap());
}

#[test]
fn parses_multiple_rules() {
    let system = LSystem::from_description("FX 90 0 2 X X+YF+ Y -FX-Y 10").unwrap();

    assert!(system.axiom() == "FX");
    assert!(system.iterations() == 10);
}

#[test]
fn empty_description_is_missing_its_axiom() {
    assert!(LSystem::from_description("") == Err(LSystemParseError::MissingField("axiom")));
    assert!(LSystem::from_description("  \n ") == Err(LSystemParseError::MissingField("axiom")));
}

#[test]
fn truncated_descriptions_name_the_missing_field() {
    assert!(
        LSystem::from_description("F 60 0 1 F F+F--F+F")
            == Err(LSystemParseError::MissingField("iteration count"))
    );
    assert!(
        LSystem::from_description("F 60 0 1 F")
            == Err(LSystemParseError::MissingField("rule replacement"))
    );
    assert!(
        LSystem::from_description("F 60 0 1")
            == Err(LSystemParseError::MissingField("rule symbol"))
    );
    assert!(LSystem::from_description("F 60") == Err(LSystemParseError::MissingField("initial heading")));
}

#[test]
fn non_numeric_fields_are_rejected_with_the_offending_token() {
    let error = LSystem::from_description("F sixty 0 0 0").unwrap_err();

    assert!(error == LSystemParseError::InvalidNumber("turn angle", "sixty".to_string()));
}

#[test]
fn multi_character_rule_symbols_are_rejected() {
    let error = LSystem::from_description("F 60 0 1 AB F+F 2").unwrap_err();

    assert!(error == LSystemParseError::InvalidSymbol("AB".to_string()));
}

#[test]
fn parse_errors_describe_themselves() {
    let message = LSystem::from_description("F 60")
        .unwrap_err()
        .to_string();

    assert!(message.contains("initial heading"));
}
