/// Re-maps `x` from `[in_min, in_max]` to `[out_min, out_max]` linearly.
pub(crate) fn map_range(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Confidence in `[0, 100]` from the number of accepted slope samples.
///
/// `height * percent_of_samples_needed` samples map to 100; more saturate.
/// A non-positive requirement (zero-height frame or zero fraction) yields 0.
pub fn confidence(valid_samples: usize, height: usize, percent_of_samples_needed: f64) -> f64 {
    let samples_needed = height as f64 * percent_of_samples_needed;
    if samples_needed.is_nan() || samples_needed <= 0.0 {
        return 0.0;
    }
    let valid = (valid_samples as f64).min(samples_needed);
    map_range(valid, 0.0, samples_needed, 0.0, 100.0)
}
