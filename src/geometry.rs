//! Pure Bézier math: degree elevation and de Casteljau evaluation.
//!
//! Every function here reads its input and returns fresh output; nothing
//! mutates the caller's points. Preconditions (at least two points for
//! sampling and elevation) are guarded at the call sites, matching the
//! defensive, non-throwing error model of the rest of the tool.

use kurbo::Point;

/// Elevate the degree of a Bézier control polygon by one.
///
/// For input P₀..Pₙ the output Q₀..Qₙ₊₁ is
/// Q₀ = P₀, Qᵢ = (i/(n+1))·Pᵢ₋₁ + ((n+1-i)/(n+1))·Pᵢ, Qₙ₊₁ = Pₙ.
/// The elevated polygon describes the identical curve, one degree higher.
///
/// Requires at least one input point.
pub fn degree_elevate(points: &[Point]) -> Vec<Point> {
    let n = points.len() - 1;
    let mut elevated = Vec::with_capacity(points.len() + 1);
    elevated.push(points[0]);
    for i in 1..=n {
        let alpha = i as f64 / (n + 1) as f64;
        // lerp(Pᵢ, Pᵢ₋₁, alpha) = (1 - alpha)·Pᵢ + alpha·Pᵢ₋₁
        elevated.push(points[i].lerp(points[i - 1], alpha));
    }
    elevated.push(points[n]);
    elevated
}

/// Evaluate a Bézier curve at parameter `t` with de Casteljau's algorithm.
///
/// Runs the lerp pyramid on a private copy of the control points; each
/// round blends neighbouring points until a single point remains. Convex
/// combinations only, so evaluation is numerically stable for t in [0, 1].
///
/// Requires at least one input point.
pub fn de_casteljau(points: &[Point], t: f64) -> Point {
    let mut scratch = points.to_vec();
    let n = scratch.len();
    for round in 1..n {
        for i in 0..n - round {
            scratch[i] = scratch[i].lerp(scratch[i + 1], t);
        }
    }
    scratch[0]
}

/// Sample the curve at `samples + 1` uniformly spaced parameter values.
///
/// Uniform in parameter, not arc length, and the resolution is independent
/// of the polygon's degree. Callers guard the preconditions: at least two
/// control points and `samples >= 1`.
pub fn sample_curve(points: &[Point], samples: usize) -> Vec<Point> {
    let mut curve = Vec::with_capacity(samples + 1);
    for i in 0..=samples {
        let t = i as f64 / samples as f64;
        curve.push(de_casteljau(points, t));
    }
    curve
}

/// The control polygon followed by up to `steps` degree-elevated generations.
///
/// Generation 0 is the input polygon itself, so a full run yields
/// `steps + 1` polygons. Negative step counts clamp to 0, and the run stops
/// early (without error) if a generation has fewer than two points.
pub fn elevation_sequence(points: &[Point], steps: i32) -> Vec<Vec<Point>> {
    let mut current = points.to_vec();
    let mut generations = vec![current.clone()];
    for _ in 0..steps.max(0) {
        if current.len() < 2 {
            break;
        }
        current = degree_elevate(&current);
        generations.push(current.clone());
    }
    generations
}
