/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::rules::*;

use fresco_geometry::*;

use log::warn;
use smallvec::SmallVec;

impl LSystem {
    ///
    /// Interprets a command string as turtle graphics and returns the line segments the
    /// turtle draws, scaled to fit a square canvas
    ///
    /// `F` moves the turtle forward one unit and draws a segment, `+` and `-` turn it
    /// by the system's turn angle, `[` saves the position and heading and `]` restores
    /// the most recently saved pair. A `]` with nothing saved is ignored (and logged):
    /// grammar files with unbalanced brackets still draw everything else. Any other
    /// symbol moves nothing, so markers like `X` that exist only to drive productions
    /// are free.
    ///
    /// The drawing is measured in a first walk over the commands, working at one unit
    /// per step, and the second walk emits segments scaled uniformly so the whole
    /// drawing lands inside `canvas_size` minus `margin` on every side. Both walks run
    /// the same interpreter over the same commands, so scaling never changes which
    /// segments exist, only where they sit.
    ///
    /// Commands that never draw (no `F` at all) produce no segments.
    ///
    pub fn trace(&self, commands: &str, canvas_size: f64, margin: f64) -> Vec<(Coord2, Coord2)> {
        let mut bounds = Bounds::from_point(Coord2::origin());
        self.walk(commands, 1.0, Coord2::origin(), |_from, to| {
            bounds.include(to)
        });

        let extent = bounds.width().max(bounds.height());
        if extent <= 0.0 {
            return vec![];
        }

        let available = (canvas_size - 2.0 * margin).max(0.0);
        let scale = available / extent;

        let origin = Coord2(
            margin - bounds.min().x() * scale,
            margin - bounds.min().y() * scale,
        );

        let mut segments = vec![];
        self.walk(commands, scale, origin, |from, to| segments.push((from, to)));

        segments
    }

    ///
    /// Runs the turtle over a command string, calling `emit` with the endpoints of
    /// every segment it draws
    ///
    fn walk(
        &self,
        commands: &str,
        scale: f64,
        origin: Coord2,
        mut emit: impl FnMut(Coord2, Coord2),
    ) {
        let turn_left = Transform2D::rotate_degrees(self.turn_angle());
        let turn_right = Transform2D::rotate_degrees(-self.turn_angle());

        let mut position = origin;
        let mut direction =
            Transform2D::rotate_degrees(self.initial_heading()).apply(Coord2(1.0, 0.0));
        let mut saved: SmallVec<[(Coord2, Coord2); 8]> = SmallVec::new();

        for command in commands.chars() {
            match command {
                '+' => direction = turn_left.apply(direction),
                '-' => direction = turn_right.apply(direction),

                '[' => saved.push((position, direction)),
                ']' => match saved.pop() {
                    Some((saved_position, saved_direction)) => {
                        position = saved_position;
                        direction = saved_direction;
                    }
                    None => warn!("Ignoring ']' with no matching '[' in L-system commands"),
                },

                'F' => {
                    let next = position + direction * scale;
                    emit(position, next);
                    position = next;
                }

                _ => {}
            }
        }
    }
}
