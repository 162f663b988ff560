/// `n` evenly spaced samples from `start` to `stop`, both endpoints
/// included. Callers must pass `n >= 2`; the last sample is pinned to
/// `stop` exactly rather than trusting `start + (n-1)*step` to land there.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / (n - 1) as f64;
    let mut samples: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    samples[n - 1] = stop;
    samples
}
