//! Compact query-string codec for three points.
//!
//! Wire format: `?a=<x>,<y>&b=<x>,<y>&c=<x>,<y>` with plain decimal numbers
//! (no URL escaping needed). Building and parsing round-trip exactly through
//! Rust's shortest-representation float formatting.
//!
//! Parsing is tolerant: each key resolves independently, and a missing or
//! malformed key yields `None` for that slot rather than an error. Callers
//! substitute defaults for absent points.

use nalgebra::Vector2;

/// Per-key parse result; any subset of a/b/c may be present.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QueryPoints {
    pub a: Option<Vector2<f64>>,
    pub b: Option<Vector2<f64>>,
    pub c: Option<Vector2<f64>>,
}

/// Serialize three points as `?a=x,y&b=x,y&c=x,y`.
pub fn build_display_query(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> String {
    format!(
        "?a={},{}&b={},{}&c={},{}",
        a.x, a.y, b.x, b.y, c.x, c.y
    )
}

/// Parse the query string back into up-to-three points.
///
/// A key is present only when its value splits into exactly two
/// comma-separated finite numbers. Unknown keys are ignored; a repeated key
/// keeps its last occurrence.
pub fn parse_display_query(text: &str) -> QueryPoints {
    let body = text.strip_prefix('?').unwrap_or(text);
    let mut out = QueryPoints::default();
    for pair in body.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "a" => out.a = parse_point(value),
            "b" => out.b = parse_point(value),
            "c" => out.c = parse_point(value),
            _ => {}
        }
    }
    out
}

fn parse_point(value: &str) -> Option<Vector2<f64>> {
    let mut it = value.split(',');
    let x: f64 = it.next()?.trim().parse().ok()?;
    let y: f64 = it.next()?.trim().parse().ok()?;
    if it.next().is_some() {
        return None; // more than two tokens
    }
    if !(x.is_finite() && y.is_finite()) {
        return None;
    }
    Some(Vector2::new(x, y))
}
