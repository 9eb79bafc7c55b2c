use std::f64::consts::{PI, SQRT_2};
use std::time::Instant;

use nalgebra::Vector2;
use proptest::prelude::*;

use super::*;
use crate::geom2::rand::{draw_polygon, ReplayToken, RingCfg};
use crate::geom2::{Polygon, Region};
use crate::Error;

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

fn square(side: f64) -> Polygon {
    Polygon::new(vec![vec![
        v(0.0, 0.0),
        v(side, 0.0),
        v(side, side),
        v(0.0, side),
    ]])
    .unwrap()
}

fn regular_ngon(n: usize, radius: f64) -> Polygon {
    let ring = (0..n)
        .map(|k| {
            let th = 2.0 * PI * k as f64 / n as f64;
            v(radius * th.cos(), radius * th.sin())
        })
        .collect();
    Polygon::new(vec![ring]).unwrap()
}

#[test]
fn square_pole_is_the_center() {
    let pole = find_pole(&square(10.0), &SearchCfg::with_tolerance(0.1)).unwrap();
    assert!(pole.converged);
    assert!((pole.x - 5.0).abs() < 1e-9);
    assert!((pole.y - 5.0).abs() < 1e-9);
    assert!((pole.distance - 5.0).abs() <= 0.1);
}

#[test]
fn zero_width_polygon_returns_its_centroid() {
    let line = Polygon::new(vec![vec![v(0.0, 0.0), v(0.0, 4.0), v(0.0, 8.0)]]).unwrap();
    let pole = find_pole(&line, &SearchCfg::default()).unwrap();
    assert!(pole.converged);
    assert!((pole.x - 0.0).abs() < 1e-12);
    assert!((pole.y - 4.0).abs() < 1e-12);
    assert!(pole.distance.abs() < 1e-12);
}

#[test]
fn negligible_area_returns_the_centroid() {
    // A 10 x 1e-6 sliver: the tolerance cannot resolve anything inside it.
    let sliver = Polygon::new(vec![vec![
        v(0.0, 0.0),
        v(10.0, 0.0),
        v(10.0, 1e-6),
        v(0.0, 1e-6),
    ]])
    .unwrap();
    let pole = find_pole(&sliver, &SearchCfg::with_tolerance(1e-3)).unwrap();
    assert!(pole.converged);
    assert!((pole.x - 5.0).abs() < 1e-9);
    assert!(pole.distance.abs() < 1e-5);
}

#[test]
fn l_shape_avoids_the_notch() {
    // 10 x 10 square with the top-left 5 x 5 quadrant removed. The optimum
    // sits on the symmetry diagonal x + y = 10 at distance 5(2 - sqrt(2)),
    // limited by the reentrant corner at (5, 5).
    let l_shape = Polygon::new(vec![vec![
        v(0.0, 0.0),
        v(10.0, 0.0),
        v(10.0, 10.0),
        v(5.0, 10.0),
        v(5.0, 5.0),
        v(0.0, 5.0),
    ]])
    .unwrap();
    let expected = 5.0 * (2.0 - SQRT_2);
    let pole = find_pole(&l_shape, &SearchCfg::with_tolerance(0.01)).unwrap();
    assert!(pole.converged);
    assert!(!(pole.x < 5.0 && pole.y > 5.0), "pole in the removed quadrant");
    assert!(l_shape.signed_distance(pole.point()) > 0.0);
    assert!(pole.distance <= expected + 1e-9);
    assert!(expected - pole.distance <= 0.01 + 1e-9);
    assert!(pole.distance < 5.0);
}

#[test]
fn concentric_hole_pushes_the_pole_into_the_ring() {
    // Outer side 10, hole side 4, both centered on (5, 5). The widest spot
    // of the remaining ring is near an outer corner on its diagonal, at
    // distance 3(2 - sqrt(2)); every mid-edge point is capped at 1.5.
    let p = Polygon::from_exterior(vec![
        v(0.0, 0.0),
        v(10.0, 0.0),
        v(10.0, 10.0),
        v(0.0, 10.0),
    ])
    .unwrap()
    .with_hole(vec![v(3.0, 3.0), v(7.0, 3.0), v(7.0, 7.0), v(3.0, 7.0)])
    .unwrap();
    let expected = 3.0 * (2.0 - SQRT_2);
    let pole = find_pole(&p, &SearchCfg::with_tolerance(0.01)).unwrap();
    assert!(pole.converged);
    let inside_hole = pole.x > 3.0 && pole.x < 7.0 && pole.y > 3.0 && pole.y < 7.0;
    assert!(!inside_hole, "pole landed inside the hole");
    assert!(p.signed_distance(pole.point()) > 0.0);
    assert!(pole.distance <= expected + 1e-9);
    assert!(expected - pole.distance <= 0.01 + 1e-9);
    assert!(pole.distance < 5.0, "hole boundary was ignored");
}

#[test]
fn regular_polygon_pole_is_the_center_at_apothem_distance() {
    let n = 64;
    let p = regular_ngon(n, 1.0);
    let apothem = (PI / n as f64).cos();
    let pole = find_pole(&p, &SearchCfg::with_tolerance(1e-3)).unwrap();
    assert!(pole.converged);
    assert!((pole.distance - apothem).abs() <= 1e-3);
    assert!(pole.point().norm() < 0.05);
}

#[test]
fn finer_tolerance_refines_but_never_degrades() {
    let p = square(10.0);
    let coarse = find_pole(&p, &SearchCfg::with_tolerance(0.5)).unwrap();
    let fine = find_pole(&p, &SearchCfg::with_tolerance(1e-4)).unwrap();
    assert!((coarse.distance - 5.0).abs() <= 0.5);
    assert!((fine.distance - 5.0).abs() <= 1e-4);
    // Same optimum from both budgets.
    assert!((coarse.x - fine.x).abs() < 1e-9);
    assert!((coarse.y - fine.y).abs() < 1e-9);
}

#[test]
fn rejects_bad_tolerances() {
    let p = square(1.0);
    for t in [0.0, -1.0, f64::NAN] {
        match find_pole(&p, &SearchCfg::with_tolerance(t)) {
            Err(Error::InvalidTolerance(_)) => {}
            other => panic!("expected InvalidTolerance, got {other:?}"),
        }
    }
}

#[test]
fn iteration_cap_returns_best_so_far() {
    let cfg = SearchCfg {
        tolerance: 1e-9,
        max_iterations: Some(3),
        deadline: None,
    };
    let pole = find_pole(&square(10.0), &cfg).unwrap();
    assert!(!pole.converged);
    // The centroid seed is already optimal here, cap or not.
    assert!((pole.distance - 5.0).abs() < 1e-9);
}

#[test]
fn expired_deadline_returns_best_so_far() {
    let cfg = SearchCfg {
        tolerance: 1e-9,
        max_iterations: None,
        deadline: Some(Instant::now()),
    };
    let pole = find_pole(&square(10.0), &cfg).unwrap();
    assert!(!pole.converged);
    assert!((pole.distance - 5.0).abs() < 1e-9);
}

#[test]
fn srs_tag_round_trips_into_the_result() {
    let p = square(10.0).with_srs("EPSG:32633");
    let pole = pole_of_inaccessibility(&p, 0.1).unwrap();
    assert_eq!(pole.srs.as_deref(), Some("EPSG:32633"));
    let via_method = p.pole(0.1).unwrap();
    assert_eq!(pole, via_method);
    // find_pole itself is tag-agnostic.
    let bare = find_pole(&p, &SearchCfg::with_tolerance(0.1)).unwrap();
    assert_eq!(bare.srs, None);
}

proptest! {
    #[test]
    fn found_pole_dominates_the_centroid(seed in 0u64..48) {
        let tok = ReplayToken { seed, index: 0 };
        let poly = draw_polygon(RingCfg::default(), tok).unwrap();
        let pole = find_pole(&poly, &SearchCfg::with_tolerance(1e-2)).unwrap();
        let centroid_d = poly.signed_distance(poly.centroid());
        prop_assert!(pole.converged);
        prop_assert!(pole.distance >= centroid_d);
        prop_assert!(pole.distance > 0.0);
        // The reported distance is the oracle value at the reported point.
        prop_assert!((poly.signed_distance(pole.point()) - pole.distance).abs() < 1e-12);
    }

    #[test]
    fn repeated_runs_are_bit_identical(seed in 0u64..24, index in 0u64..2) {
        let tok = ReplayToken { seed, index };
        let poly = draw_polygon(RingCfg::default(), tok).unwrap();
        let cfg = SearchCfg::with_tolerance(1e-3);
        let a = find_pole(&poly, &cfg).unwrap();
        let b = find_pole(&poly, &cfg).unwrap();
        prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
        prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
        prop_assert_eq!(a.distance.to_bits(), b.distance.to_bits());
    }
}
