//! Classification of a triangle by its three side lengths.
//!
//! Both functions assume the lengths come from a real triangle (the triangle
//! inequality is not re-checked here; callers only classify past the
//! collinearity gate).

/// Classification by side equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideKind {
    Equilateral,
    Isosceles,
    Scalene,
}

/// Classification by the largest interior angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleKind {
    Right,
    Acute,
    Obtuse,
}

/// Equilateral if all three pairwise lengths agree within `eps`, Isosceles if
/// any one pair does, else Scalene.
///
/// Equilateral is checked first so near-ties that satisfy two separate pair
/// equalities transitively resolve to Equilateral, not Isosceles.
pub fn side_type(la: f64, lb: f64, lc: f64, eps: f64) -> SideKind {
    let ab = (la - lb).abs() <= eps;
    let bc = (lb - lc).abs() <= eps;
    let ca = (lc - la).abs() <= eps;
    if ab && bc && ca {
        SideKind::Equilateral
    } else if ab || bc || ca {
        SideKind::Isosceles
    } else {
        SideKind::Scalene
    }
}

/// Pythagorean comparison of the longest side against the two shorter ones:
/// `long²` vs `short1² + short2²`, Right within `eps`.
pub fn angle_type(la: f64, lb: f64, lc: f64, eps: f64) -> AngleKind {
    let mut s = [la, lb, lc];
    s.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let long2 = s[2] * s[2];
    let sum2 = s[0] * s[0] + s[1] * s[1];
    if (long2 - sum2).abs() <= eps {
        AngleKind::Right
    } else if long2 < sum2 {
        AngleKind::Acute
    } else {
        AngleKind::Obtuse
    }
}
