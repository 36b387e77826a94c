use super::*;
use nalgebra::Vector2;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

#[test]
fn basic_measures() {
    assert!((distance(v(0.0, 0.0), v(3.0, 4.0)) - 5.0).abs() < 1e-12);
    assert_eq!(midpoint(v(0.0, 0.0), v(4.0, 6.0)), v(2.0, 3.0));
    let c = centroid(v(0.0, 0.0), v(6.0, 0.0), v(0.0, 6.0));
    assert!((c - v(2.0, 2.0)).norm() < 1e-12);
    // 3-4-5 right triangle has area 6.
    assert!((triangle_area(v(0.0, 0.0), v(3.0, 0.0), v(0.0, 4.0)) - 6.0).abs() < 1e-12);
}

#[test]
fn finite_point_gate() {
    assert!(is_finite_point(v(1.0, -2.5)));
    assert!(!is_finite_point(v(f64::NAN, 0.0)));
    assert!(!is_finite_point(v(0.0, f64::INFINITY)));
    assert!(!is_finite_point(v(f64::NEG_INFINITY, f64::NAN)));
}

#[test]
fn collinearity_gate() {
    // Shared y coordinate: zero area, gate refuses.
    assert!(!is_non_collinear(v(0.0, 5.0), v(10.0, 5.0), v(-3.0, 5.0), 1e-6));
    // Shared x coordinate likewise.
    assert!(!is_non_collinear(v(2.0, 0.0), v(2.0, 9.0), v(2.0, -4.0), 1e-6));
    // The fallback triangle is a real triangle.
    let t = Triangle::default();
    assert!(is_non_collinear(t.a, t.b, t.c, 1e-6));
    assert_eq!(t.a, v(100.0, 100.0));
    assert_eq!(t.b, v(700.0, 120.0));
    assert_eq!(t.c, v(420.0, 650.0));
}

#[test]
fn right_angle_at_vertex() {
    let ang = angle_at(v(0.0, 0.0), v(5.0, 0.0), v(0.0, 3.0));
    assert!((ang - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn clamped_cosine_survives_drift() {
    // Nearly collinear, pointing the same way: cosine lands at 1 ± drift.
    let ang = angle_at(v(0.0, 0.0), v(1.0, 0.0), v(1e16, 1e-3));
    assert!(ang.is_finite());
    assert!(ang >= 0.0 && ang <= PI);
}

#[test]
fn side_classification_literals() {
    let eps = 1e-6;
    assert_eq!(side_type(5.0, 5.0, 5.0, eps), SideKind::Equilateral);
    assert_eq!(side_type(5.0, 5.0, 8.0, eps), SideKind::Isosceles);
    assert_eq!(side_type(3.0, 4.0, 5.0, eps), SideKind::Scalene);
    // Two pairs tying transitively resolve to Equilateral, not Isosceles.
    assert_eq!(
        side_type(1.0, 1.0 + 5e-7, 1.0 - 5e-7, 1e-6),
        SideKind::Equilateral
    );
}

#[test]
fn angle_classification_literals() {
    let eps = 1e-6;
    assert_eq!(angle_type(3.0, 4.0, 5.0, eps), AngleKind::Right);
    assert_eq!(angle_type(2.0, 2.0, 2.0, eps), AngleKind::Acute);
    assert_eq!(angle_type(2.0, 2.0, 3.9, eps), AngleKind::Obtuse);
    // Argument order is irrelevant: longest side found by sorting.
    assert_eq!(angle_type(5.0, 3.0, 4.0, eps), AngleKind::Right);
}

#[test]
fn triangle_methods_agree_with_free_functions() {
    let t = Triangle::new(v(0.0, 0.0), v(3.0, 0.0), v(0.0, 4.0));
    let cfg = TriCfg::default();
    assert!((t.area() - 6.0).abs() < 1e-12);
    assert!((t.perimeter() - 12.0).abs() < 1e-12);
    let [bc, ca, ab] = t.side_lengths();
    assert!((bc - 5.0).abs() < 1e-12); // opposite A
    assert!((ca - 4.0).abs() < 1e-12); // opposite B
    assert!((ab - 3.0).abs() < 1e-12); // opposite C
    assert_eq!(t.side_kind(cfg), SideKind::Scalene);
    assert_eq!(t.angle_kind(cfg), AngleKind::Right);
    assert!(t.is_finite());
    assert!(t.is_non_collinear(cfg));
    assert!((t.angles()[0] - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn arc_endpoints_at_radius() {
    let vert = v(10.0, 20.0);
    let arc = arc_path_at(vert, v(30.0, 20.0), v(10.0, 50.0), 8.0, 1e-3).expect("arc");
    assert!(((arc.start - vert).norm() - 8.0).abs() < 1e-12);
    assert!(((arc.end - vert).norm() - 8.0).abs() < 1e-12);
    assert_eq!(arc.radius, 8.0);
    // Right angle: chord length is r·√2.
    let chord = (arc.end - arc.start).norm();
    assert!((chord - 8.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
}

#[test]
fn arc_sweep_is_positive_regardless_of_neighbor_order() {
    let vert = v(0.0, 0.0);
    let a1 = arc_path_at(vert, v(1.0, 0.0), v(0.0, 1.0), 1.0, 1e-3).expect("arc");
    let a2 = arc_path_at(vert, v(0.0, 1.0), v(1.0, 0.0), 1.0, 1e-3).expect("arc");
    // Swapping neighbors swaps nothing: same positively-swept arc.
    assert!((a1.start - a2.start).norm() < 1e-12);
    assert!((a1.end - a2.end).norm() < 1e-12);
}

#[test]
fn near_zero_sweep_yields_no_arc() {
    let vert = v(0.0, 0.0);
    // Two directions 1e-4 rad apart: below the 1e-3 threshold.
    let n1 = v(1.0, 0.0);
    let n2 = v((1e-4f64).cos(), (1e-4f64).sin());
    assert!(arc_path_at(vert, n1, n2, 5.0, 1e-3).is_none());
    // Identical directions as well.
    assert!(arc_path_at(vert, n1, v(2.0, 0.0), 5.0, 1e-3).is_none());
}

#[test]
fn bisector_splits_right_angle() {
    // Unequal neighbor distances must not matter: directions are unit-normalized.
    let p = bisector_point(v(0.0, 0.0), v(9.0, 0.0), v(0.0, 2.0), 10.0);
    let expect = 10.0 * 0.5f64.sqrt();
    assert!((p.x - expect).abs() < 1e-9);
    assert!((p.y - expect).abs() < 1e-9);
}

#[test]
fn bisector_of_antiparallel_directions_is_undefined() {
    // Known-undefined input: opposite unit directions sum to the zero vector
    // and normalization produces NaN. Documented, not special-cased.
    let p = bisector_point(v(0.0, 0.0), v(1.0, 0.0), v(-1.0, 0.0), 5.0);
    assert!(p.x.is_nan() || p.y.is_nan());
}

#[test]
fn query_build_format() {
    let q = build_display_query(v(100.0, 100.0), v(700.0, 120.0), v(420.0, 650.0));
    assert_eq!(q, "?a=100,100&b=700,120&c=420,650");
}

#[test]
fn query_parse_tolerates_malformed_keys() {
    // Missing c, malformed b (three tokens): only a resolves.
    let q = parse_display_query("?a=1.5,-2&b=3,4,5");
    assert_eq!(q.a, Some(v(1.5, -2.0)));
    assert_eq!(q.b, None);
    assert_eq!(q.c, None);
    // One token, non-numeric, non-finite: all absent.
    let q = parse_display_query("?a=7&b=x,y&c=inf,0");
    assert_eq!(q, QueryPoints::default());
    // Leading '?' optional; unknown keys ignored; bare words skipped.
    let q = parse_display_query("a=2,3&zoom=5&junk");
    assert_eq!(q.a, Some(v(2.0, 3.0)));
}

#[test]
fn query_parse_empty_input() {
    assert_eq!(parse_display_query(""), QueryPoints::default());
    assert_eq!(parse_display_query("?"), QueryPoints::default());
}

fn coord() -> impl Strategy<Value = f64> {
    -1.0e4..1.0e4f64
}

fn point() -> impl Strategy<Value = Vector2<f64>> {
    (coord(), coord()).prop_map(|(x, y)| Vector2::new(x, y))
}

proptest! {
    #[test]
    fn angle_sum_is_pi(a in point(), b in point(), c in point()) {
        // Near-sliver triangles amplify acos error; gate well above the
        // production eps so the 1e-6 tolerance holds.
        prop_assume!(is_non_collinear(a, b, c, 1.0));
        let t = Triangle::new(a, b, c);
        let sum: f64 = t.angles().iter().sum();
        prop_assert!((sum - PI).abs() < 1e-6);
    }

    #[test]
    fn area_invariant_under_relabeling(a in point(), b in point(), c in point()) {
        let base = triangle_area(a, b, c);
        prop_assert!((triangle_area(b, c, a) - base).abs() < 1e-9);
        prop_assert!((triangle_area(c, a, b) - base).abs() < 1e-9);
        prop_assert!((triangle_area(a, c, b) - base).abs() < 1e-9);
        prop_assert!((triangle_area(c, b, a) - base).abs() < 1e-9);
    }

    #[test]
    fn query_round_trips(a in point(), b in point(), c in point()) {
        let q = parse_display_query(&build_display_query(a, b, c));
        // Shortest float formatting round-trips exactly.
        prop_assert_eq!(q.a, Some(a));
        prop_assert_eq!(q.b, Some(b));
        prop_assert_eq!(q.c, Some(c));
    }

    #[test]
    fn arc_endpoints_lie_on_circle(
        vert in point(),
        n1 in point(),
        n2 in point(),
        radius in 1.0..100.0f64,
    ) {
        prop_assume!(is_non_collinear(vert, n1, n2, 1e-3));
        if let Some(arc) = arc_path_at(vert, n1, n2, radius, 1e-3) {
            prop_assert!(((arc.start - vert).norm() - radius).abs() < 1e-9);
            prop_assert!(((arc.end - vert).norm() - radius).abs() < 1e-9);
        }
    }
}
