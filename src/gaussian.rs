//! Approximately normal samples from sums of uniforms.
//!
//! A sum of `n` independent uniforms on `[0, 1)` follows the Irwin-Hall
//! distribution with mean `n / 2` and variance `n / 12`. By the central limit
//! theorem it approaches a normal distribution as `n` grows, so rescaling the
//! sum gives approximately standard normal values. `n` is the caller's
//! accuracy/cost knob: every sample costs `n` uniform draws.

use log::debug;
use rand::Rng;
use rand_distr::Distribution;

use crate::error::{Result, SynthError};
use crate::rng::SampleRng;
use crate::trend::Point;

/// How the raw Irwin-Hall sum is scaled back to unit spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rescale {
    /// Divide by the true deviation `sqrt(n / 12)`.
    #[default]
    Standard,
    /// Divide by the variance `n / 12` instead of its square root.
    ///
    /// Matches the output of the earlier generator that downstream data may
    /// have been built with. Only identical to `Standard` when `n == 12`.
    Legacy,
}

/// Sum of `iterations` uniform draws on `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrwinHall {
    iterations: usize,
}

impl IrwinHall {
    pub fn new(iterations: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(SynthError::ZeroIterations);
        }
        Ok(IrwinHall { iterations })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn mean(&self) -> f64 {
        self.iterations as f64 / 2.0
    }

    pub fn std_dev(&self, rescale: Rescale) -> f64 {
        let variance = self.iterations as f64 / 12.0;
        match rescale {
            Rescale::Standard => variance.sqrt(),
            Rescale::Legacy => variance,
        }
    }
}

impl Distribution<f64> for IrwinHall {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        (0..self.iterations).map(|_| rng.random::<f64>()).sum()
    }
}

#[derive(Debug, Clone)]
pub struct SamplerParams {
    pub iteration_count: usize,
    pub rescale: Rescale,
}

impl Default for SamplerParams {
    fn default() -> Self {
        SamplerParams {
            iteration_count: 12,
            rescale: Rescale::Standard,
        }
    }
}

impl SamplerParams {
    pub fn with_iterations(iteration_count: usize) -> Self {
        SamplerParams {
            iteration_count,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct GaussianSampler {
    dist: IrwinHall,
    mean: f64,
    std_dev: f64,
}

impl GaussianSampler {
    pub fn new(params: &SamplerParams) -> Result<Self> {
        let dist = IrwinHall::new(params.iteration_count)?;
        Ok(GaussianSampler {
            dist,
            mean: dist.mean(),
            std_dev: dist.std_dev(params.rescale),
        })
    }

    pub fn sample(&self, rng: &mut SampleRng) -> f64 {
        (self.dist.sample(rng) - self.mean) / self.std_dev
    }

    pub fn sample_vec(&self, len: usize, rng: &mut SampleRng) -> Vec<f64> {
        (0..len).map(|_| self.sample(rng)).collect()
    }
}

/// Generates `sample_size` approximately standard normal values.
///
/// Each value is the sum of `iteration_count` uniform draws, rescaled with
/// [`Rescale::Standard`]. With `seed` the output is reproducible; without it
/// the generator is seeded from OS entropy.
///
/// # Errors
///
/// Returns [`SynthError::ZeroIterations`] if `iteration_count` is 0.
pub fn generate(sample_size: usize, iteration_count: usize, seed: Option<u64>) -> Result<Vec<f64>> {
    let params = SamplerParams::with_iterations(iteration_count);
    let sampler = GaussianSampler::new(&params)?;
    let mut rng = SampleRng::new(seed);

    debug!("generating {sample_size} samples from {iteration_count} uniforms each (seeded: {})", seed.is_some());
    Ok(sampler.sample_vec(sample_size, &mut rng))
}

/// Like [`generate`], drawing from a caller-owned generator with explicit params.
pub fn generate_with(sample_size: usize, params: &SamplerParams, rng: &mut SampleRng) -> Result<Vec<f64>> {
    let sampler = GaussianSampler::new(params)?;

    debug!(
        "generating {sample_size} samples from {} uniforms each ({:?} rescale)",
        params.iteration_count, params.rescale
    );
    Ok(sampler.sample_vec(sample_size, rng))
}

/// Builds `count` points whose `dims` coordinates are independent samples.
pub fn gaussian_points(count: usize, dims: usize, params: &SamplerParams, rng: &mut SampleRng) -> Result<Vec<Point>> {
    let sampler = GaussianSampler::new(params)?;

    debug!("generating {count} gaussian points of dimension {dims}");
    Ok((0..count)
        .map(|_| Point::from(sampler.sample_vec(dims, rng)))
        .collect())
}
