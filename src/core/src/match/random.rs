use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Generator used for every draw of a single game simulation.
pub type GameRng = ChaCha8Rng;

/// Gaussian sample with the given mean and standard deviation.
pub fn gauss<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + std_dev * z
}

/// Uniform sample in `[0, 1)`.
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.r#gen::<f64>()
}

/// Uniform sample in `[low, high)`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + (high - low) * unit(rng)
}

/// Truncates toward zero and floors negative samples at zero.
pub fn floor_count(value: f64) -> u32 {
    value.trunc().max(0.0) as u32
}

/// Rounds to the nearest integer and floors negative samples at zero.
pub fn round_count(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
