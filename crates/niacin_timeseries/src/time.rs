//! Time-domain transforms.

use rand::seq::index;
use rand::{Rng, RngCore};

/// Population standard deviation, ignoring NaN entries.
fn nan_std(x: &[f32]) -> f32 {
    let mut count = 0usize;
    let mut sum = 0.0f32;
    for &v in x {
        if !v.is_nan() {
            count += 1;
            sum += v;
        }
    }
    if count == 0 {
        return f32::NAN;
    }
    let mean = sum / count as f32;
    let var = x
        .iter()
        .filter(|v| !v.is_nan())
        .map(|&v| (v - mean) * (v - mean))
        .sum::<f32>()
        / count as f32;
    var.sqrt()
}

/// Evaluate the series at fractional position `t` in `[0, 1]` over a
/// uniform grid, with linear interpolation between adjacent entries.
fn sample_linear(x: &[f32], t: f32) -> f32 {
    if x.len() == 1 {
        return x[0];
    }
    let pos = t * (x.len() - 1) as f32;
    let low = pos.floor() as usize;
    let high = (low + 1).min(x.len() - 1);
    let frac = pos - pos.floor();
    x[low] * (1.0 - frac) + x[high] * frac
}

/// Random sign with probability 0.5 each way.
fn random_sign(rng: &mut dyn RngCore) -> f32 {
    if rng.gen::<f32>() < 0.5 {
        1.0
    } else {
        -1.0
    }
}

/// Add a linear trend, with probability `p` and magnitude `m * std(x)`.
///
/// The probability refers to the entire trend: either it is added, or the
/// original series is left alone. The direction of the trend is chosen
/// randomly with probability 0.5. The trend starts at zero, so the first
/// entry is never changed.
pub fn add_slope_trend(x: &[f32], p: f32, m: f32, rng: &mut dyn RngCore) -> Vec<f32> {
    if x.is_empty() || rng.gen::<f32>() >= p {
        return x.to_vec();
    }
    let s = nan_std(x);
    let end = random_sign(rng) * m * s;
    let last = (x.len() - 1).max(1) as f32;
    x.iter()
        .enumerate()
        .map(|(i, &v)| v + end * i as f32 / last)
        .collect()
}

/// At each entry, add a spike with probability `p` and magnitude
/// `m * std(x)`.
///
/// The direction of each spike (up or down) is determined randomly with
/// probability 0.5.
pub fn add_spike(x: &[f32], p: f32, m: f32, rng: &mut dyn RngCore) -> Vec<f32> {
    let s = nan_std(x);
    x.iter()
        .map(|&v| {
            let hit = rng.gen::<f32>() < p;
            let sign = random_sign(rng);
            if hit {
                v + sign * m * s
            } else {
                v
            }
        })
        .collect()
}

/// Add a stepwise trend, where each entry has probability `p` of a step
/// change of magnitude `m * std(x)`.
///
/// The direction is chosen once for the entire trend: if the first step is
/// upward, every subsequent step is also upward. Steps accumulate.
pub fn add_step_trend(x: &[f32], p: f32, m: f32, rng: &mut dyn RngCore) -> Vec<f32> {
    let s = nan_std(x);
    let step = random_sign(rng) * m * s;
    let mut offset = 0.0f32;
    x.iter()
        .map(|&v| {
            if rng.gen::<f32>() < p {
                offset += step;
            }
            v + offset
        })
        .collect()
}

/// Warp the distances between points in a time series.
///
/// With probability `p`, upsample the timeline by a factor of
/// `round(len * m)`, then keep `len` points chosen uniformly without
/// replacement (in time order), reading values off the original series by
/// linear interpolation. A stretch factor below 2 leaves no extra space to
/// warp into, so the series is returned unchanged.
pub fn add_warp(x: &[f32], p: f32, m: f32, rng: &mut dyn RngCore) -> Vec<f32> {
    let old_size = x.len();
    let step = (old_size as f32 * m).round() as usize;
    if step < 2 {
        return x.to_vec();
    }
    if rng.gen::<f32>() >= p {
        return x.to_vec();
    }
    let stretch_size = old_size * step;
    let mut picks = index::sample(rng, stretch_size, old_size).into_vec();
    picks.sort_unstable();
    picks
        .into_iter()
        .map(|i| sample_linear(x, i as f32 / (stretch_size - 1) as f32))
        .collect()
}

/// Crop a series and stretch the remaining entries back to the original
/// size.
///
/// With probability `p`, crop to `round((1 - m) * len)` entries at a random
/// offset, then stretch back to `len` by linear interpolation (larger `m`
/// keeps fewer entries). When the crop would be empty or would cover the
/// whole series, the input is returned unchanged.
pub fn crop_and_stretch(x: &[f32], p: f32, m: f32, rng: &mut dyn RngCore) -> Vec<f32> {
    let old_size = x.len();
    let crop_size = ((1.0 - m) * old_size as f32).round() as usize;
    if crop_size < 1 || crop_size >= old_size {
        return x.to_vec();
    }
    if rng.gen::<f32>() >= p {
        return x.to_vec();
    }
    let start = rng.gen_range(0..old_size - crop_size);
    let crop = &x[start..start + crop_size];
    let last = (old_size - 1) as f32;
    (0..old_size)
        .map(|t| sample_linear(crop, t as f32 / last))
        .collect()
}

/// Flip the series around the origin with probability `p`.
pub fn flip(x: &[f32], p: f32, rng: &mut dyn RngCore) -> Vec<f32> {
    if rng.gen::<f32>() < p {
        x.iter().map(|&v| -v).collect()
    } else {
        x.to_vec()
    }
}

/// Reverse the order of the series with probability `p`.
pub fn reverse(x: &[f32], p: f32, rng: &mut dyn RngCore) -> Vec<f32> {
    if rng.gen::<f32>() < p {
        x.iter().rev().copied().collect()
    } else {
        x.to_vec()
    }
}
