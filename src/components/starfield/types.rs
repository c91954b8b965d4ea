//! Shared value types for the starfield entities.

use rand::Rng;

/// Drawing-surface extent used by boundary checks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl Bounds {
	/// Negative or NaN sizes collapse to an empty surface.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
		}
	}
}

/// Uniform sample from `[min, max)`. An empty range yields `min`, so a
/// zero-sized surface never panics the sampler.
pub fn uniform<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
	if max > min {
		rng.random_range(min..max)
	} else {
		min
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn uniform_stays_in_half_open_range() {
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..1000 {
			let v = uniform(&mut rng, -0.2, 0.2);
			assert!((-0.2..0.2).contains(&v));
		}
	}

	#[test]
	fn uniform_empty_range_returns_lower_bound() {
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(uniform(&mut rng, 0.0, 0.0), 0.0);
		assert_eq!(uniform(&mut rng, 5.0, 1.0), 5.0);
	}

	#[test]
	fn bounds_clamp_negative_sizes() {
		let b = Bounds::new(-10.0, 20.0);
		assert_eq!(b.width, 0.0);
		assert_eq!(b.height, 20.0);
	}
}
