/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use fresco_geometry::*;

fn unit_square() -> Polygon {
    Polygon::from_points(vec![
        Coord2(0.0, 0.0),
        Coord2(1.0, 0.0),
        Coord2(1.0, 1.0),
        Coord2(0.0, 1.0),
    ])
}

#[test]
fn push_and_clear() {
    let mut polygon = Polygon::new();

    assert!(polygon.is_empty());

    polygon.push(Coord2(1.0, 2.0));
    polygon.push(Coord2(3.0, 4.0));

    assert!(polygon.len() == 2);
    assert!(polygon.points() == &[Coord2(1.0, 2.0), Coord2(3.0, 4.0)]);

    polygon.clear();

    assert!(polygon.is_empty());
}

#[test]
fn edges_close_the_boundary() {
    let edges = unit_square().edges().collect::<Vec<_>>();

    assert!(edges.len() == 4);
    assert!(edges[0] == (Coord2(0.0, 0.0), Coord2(1.0, 0.0)));
    assert!(edges[3] == (Coord2(0.0, 1.0), Coord2(0.0, 0.0)));
}

#[test]
fn two_vertices_have_a_single_edge() {
    let mut polygon = Polygon::new();
    polygon.push(Coord2(0.0, 0.0));
    polygon.push(Coord2(5.0, 0.0));

    let edges = polygon.edges().collect::<Vec<_>>();

    assert!(edges == vec![(Coord2(0.0, 0.0), Coord2(5.0, 0.0))]);
}

#[test]
fn fewer_than_two_vertices_have_no_edges() {
    let mut polygon = Polygon::new();
    assert!(polygon.edges().count() == 0);

    polygon.push(Coord2(1.0, 1.0));
    assert!(polygon.edges().count() == 0);
}

#[test]
fn transform_applies_to_every_vertex() {
    let mut polygon = unit_square();

    polygon.transform(&Transform2D::translate(10.0, 20.0));

    assert!(polygon.points()[0].distance_to(&Coord2(10.0, 20.0)) < 1e-9);
    assert!(polygon.points()[2].distance_to(&Coord2(11.0, 21.0)) < 1e-9);
}

#[test]
fn collect_from_point_iterator() {
    let polygon = vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(0.0, 1.0)]
        .into_iter()
        .collect::<Polygon>();

    assert!(polygon.len() == 3);
}
