//! Linear interpolation between numeric intervals.

use log::trace;

/// Map `value` from `domain` onto `range`.
///
/// The affine map sends `domain[0]` to `range[0]` and `domain[1]` to `range[1]`.
/// Either interval may be reversed. Values outside the domain extrapolate unless
/// `clamp` is set, in which case the normalized position is held to `0.0..=1.0`.
///
/// A zero-width domain has no defined mapping and returns `value` unchanged.
#[expect(
    clippy::suboptimal_flops,
    reason = "product and sum are rounded separately"
)]
pub fn linear_map(value: f64, domain: [f64; 2], range: [f64; 2], clamp: bool) -> f64 {
    let [domain_start, domain_end] = domain;
    let [range_start, range_end] = range;

    let span = domain_end - domain_start;
    if span == 0.0 {
        trace!("linear_map: degenerate domain {domain:?}, passing {value} through");
        return value;
    }

    let mut position = (value - domain_start) / span;
    if clamp {
        position = position.clamp(0.0, 1.0);
    }
    position * (range_end - range_start) + range_start
}
