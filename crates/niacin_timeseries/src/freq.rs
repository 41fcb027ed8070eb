//! Frequency-domain transforms.
//!
//! Each transform moves the series into the frequency domain with a real
//! FFT, perturbs the half-spectrum, and inverts back. The inverse rebuilds
//! the Hermitian-symmetric full spectrum, so output length always equals
//! input length.

use rand::{Rng, RngCore};
use rustfft::{num_complex::Complex32, FftPlanner};

/// Forward real FFT: the first `n / 2 + 1` components of the spectrum.
fn rfft(x: &[f32]) -> Vec<Complex32> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }
    let mut buffer: Vec<Complex32> = x.iter().map(|&v| Complex32::new(v, 0.0)).collect();
    FftPlanner::new().plan_fft_forward(n).process(&mut buffer);
    buffer.truncate(n / 2 + 1);
    buffer
}

/// Inverse of [`rfft`] for a signal of length `n`.
fn irfft(fx: &[Complex32], n: usize) -> Vec<f32> {
    if n == 0 {
        return Vec::new();
    }
    let mut buffer = vec![Complex32::new(0.0, 0.0); n];
    let half = fx.len().min(n);
    buffer[..half].copy_from_slice(&fx[..half]);
    for k in 1..n.div_ceil(2) {
        buffer[n - k] = buffer[k].conj();
    }
    FftPlanner::new().plan_fft_inverse(n).process(&mut buffer);
    buffer.into_iter().map(|c| c.re / n as f32).collect()
}

/// The largest component magnitude in the spectrum.
fn spectral_peak(fx: &[Complex32]) -> f32 {
    fx.iter().map(|c| c.norm()).fold(0.0, f32::max)
}

/// A standard complex Gaussian deviate via the Box-Muller transform.
fn gaussian_complex(rng: &mut dyn RngCore) -> Complex32 {
    let u1: f32 = rng.gen();
    let u2: f32 = rng.gen();
    // 1 - u1 lies in (0, 1], so the log is finite
    let r = (-2.0 * (1.0 - u1).ln()).sqrt();
    let theta = 2.0 * std::f32::consts::PI * u2;
    Complex32::new(r * theta.cos(), r * theta.sin())
}

/// Shift each frequency component with probability `p` by a distance of
/// `round(len(spectrum) * m)` steps.
///
/// For each component, with probability `p`, swap it with the component
/// that many steps away in a random direction (clamped to the spectrum).
/// Swapped components are tagged so that none moves twice, and the 0 Hz
/// component is never touched.
pub fn add_discrete_phase_shifts(x: &[f32], p: f32, m: f32, rng: &mut dyn RngCore) -> Vec<f32> {
    let mut fx = rfft(x);
    if fx.is_empty() {
        return Vec::new();
    }
    let step = (fx.len() as f32 * m).round() as i64;
    let mut hits: Vec<i8> = (0..fx.len())
        .map(|_| i8::from(rng.gen::<f32>() < p))
        .collect();
    let signs: Vec<i64> = (0..fx.len())
        .map(|_| if rng.gen::<f32>() < 0.5 { 1 } else { -1 })
        .collect();
    for i in 1..fx.len() {
        if hits[i] == 1 {
            let j = (i as i64 + signs[i] * step).clamp(0, fx.len() as i64 - 1) as usize;
            if hits[j] == 1 {
                fx.swap(i, j);
                hits[i] = -1;
                hits[j] = -1;
            }
        }
    }
    irfft(&fx, x.len())
}

/// Add Gaussian noise to each frequency component with probability `p` and
/// magnitude `m * max |spectrum|`. The 0 Hz component is untouched.
pub fn add_random_frequency_noise(x: &[f32], p: f32, m: f32, rng: &mut dyn RngCore) -> Vec<f32> {
    let mut fx = rfft(x);
    if fx.is_empty() {
        return Vec::new();
    }
    let scale = m * spectral_peak(&fx);
    for component in fx.iter_mut().skip(1) {
        if rng.gen::<f32>() < p {
            *component += gaussian_complex(rng) * scale;
        }
    }
    irfft(&fx, x.len())
}

/// Add Gaussian noise to the single highest frequency component, with
/// probability `p` and magnitude `m * max |spectrum|`.
pub fn add_high_frequency_noise(x: &[f32], p: f32, m: f32, rng: &mut dyn RngCore) -> Vec<f32> {
    let mut fx = rfft(x);
    if fx.len() < 2 {
        return x.to_vec();
    }
    if rng.gen::<f32>() < p {
        let scale = m * spectral_peak(&fx);
        let last = fx.len() - 1;
        fx[last] += gaussian_complex(rng) * scale;
    }
    irfft(&fx, x.len())
}

/// Remove each frequency component with probability `p`.
pub fn remove_random_frequency(x: &[f32], p: f32, rng: &mut dyn RngCore) -> Vec<f32> {
    let mut fx = rfft(x);
    if fx.is_empty() {
        return Vec::new();
    }
    for component in fx.iter_mut() {
        if rng.gen::<f32>() < p {
            *component = Complex32::new(0.0, 0.0);
        }
    }
    irfft(&fx, x.len())
}
