//! Synthetic data generation.
//!
//! Two independent building blocks:
//!
//! - [`gaussian`]: approximately normal samples from sums of uniform draws
//!   (the Irwin-Hall approximation), rescaled to zero mean and unit variance.
//! - [`trend`]: appends a deterministic linear trend to a set of points as
//!   one extra coordinate.

pub mod error;
pub mod gaussian;
pub mod rng;
pub mod trend;

pub use error::{Result, SynthError};
pub use gaussian::{GaussianSampler, IrwinHall, Rescale, SamplerParams, gaussian_points, generate, generate_with};
pub use rng::SampleRng;
pub use trend::{Point, TrendDirection, inject};
