/// Predict a monthly salary from a vacancy's bounds. A bound that is
/// absent or zero counts as unspecified: a lone lower bound is scaled
/// up by 1.2, a lone upper bound down by 0.8, and two real bounds
/// average out. No rounding happens here.
pub(crate) fn estimate(low: Option<u64>, high: Option<u64>) -> Option<f64> {
    let low = low.filter(|&v| v != 0);
    let high = high.filter(|&v| v != 0);
    match (low, high) {
        (None, None) => None,
        (Some(low), None) => Some(low as f64 * 1.2),
        (None, Some(high)) => Some(high as f64 * 0.8),
        (Some(low), Some(high)) => Some((low + high) as f64 / 2.0),
    }
}
