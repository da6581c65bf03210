//! Piecewise-linear interpolation for sampling color gradients
//!
//! Colormaps are stored as evenly spaced RGB stops; sampling a position in
//! `[0, 1]` blends the two neighbouring stops channel by channel.

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}

/// Sample an evenly spaced RGB gradient at position `t`
///
/// `t` is clamped to `[0, 1]`. An empty gradient samples as black and a
/// single stop is returned unchanged.
pub fn sample_gradient(stops: &[[u8; 3]], t: f64) -> [u8; 3] {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0, 0, 0];
    };
    if stops.len() == 1 || t.is_nan() || t <= 0.0 {
        return *first;
    }
    if t >= 1.0 {
        return *last;
    }

    let scaled = t * (stops.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let fraction = scaled - lower as f64;

    let (Some(from), Some(to)) = (stops.get(lower), stops.get(lower + 1)) else {
        return *last;
    };

    let mut out = [0u8; 3];
    for ((channel, &a), &b) in out.iter_mut().zip(from).zip(to) {
        *channel = lerp(f64::from(a), f64::from(b), fraction)
            .round()
            .clamp(0.0, 255.0) as u8;
    }
    out
}

/// Evenly spaced sample positions for `count` colors
///
/// Positions run from 0 to 1 inclusive; a single color sits at the midpoint.
pub fn sample_positions(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.5],
        _ => {
            let denominator = (count - 1) as f64;
            (0..count).map(|i| i as f64 / denominator).collect()
        }
    }
}
