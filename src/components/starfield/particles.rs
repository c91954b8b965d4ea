//! Ambient drifting particles that shimmer and rise toward the top edge.

use rand::Rng;

use super::types::{Bounds, uniform};

/// Lowest opacity a particle shimmers down to.
pub const ALPHA_MIN: f64 = 0.3;
/// Highest opacity a particle shimmers up to.
pub const ALPHA_MAX: f64 = 1.0;
/// Opacity change per frame.
pub const ALPHA_STEP: f64 = 0.005;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position; grows downward.
	pub y: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Horizontal speed per frame.
	pub speed_x: f64,
	/// Upward speed; positive values move toward the top edge.
	pub speed_y: f64,
	/// Current opacity, within [`ALPHA_MIN`, `ALPHA_MAX`].
	pub alpha: f64,
	/// +1.0 while brightening, -1.0 while fading.
	pub direction: f64,
}

impl Particle {
	/// Draws every attribute from the initialization distribution.
	pub fn random<R: Rng>(rng: &mut R, bounds: Bounds) -> Self {
		Self {
			x: uniform(rng, 0.0, bounds.width),
			y: uniform(rng, 0.0, bounds.height),
			size: uniform(rng, 0.5, 2.0),
			speed_x: uniform(rng, -0.2, 0.2),
			speed_y: uniform(rng, -0.1, 0.5),
			alpha: uniform(rng, ALPHA_MIN, ALPHA_MAX),
			direction: if rng.random_bool(0.5) { 1.0 } else { -1.0 },
		}
	}

	fn out_of_bounds(&self, bounds: Bounds) -> bool {
		self.y < 0.0 || self.x < 0.0 || self.x > bounds.width
	}
}

/// Advances one particle by a frame.
///
/// Opacity follows a triangular wave between [`ALPHA_MIN`] and [`ALPHA_MAX`]:
/// a step that crosses a threshold is reflected back inside and flips the
/// direction. A particle leaving through the top or either side is redrawn
/// from scratch and re-enters from the bottom edge.
pub fn update_particle<R: Rng>(p: &mut Particle, bounds: Bounds, rng: &mut R) {
	p.x += p.speed_x;
	p.y -= p.speed_y;

	p.alpha += ALPHA_STEP * p.direction;
	if p.alpha >= ALPHA_MAX {
		p.alpha = 2.0 * ALPHA_MAX - p.alpha;
		p.direction = -1.0;
	} else if p.alpha <= ALPHA_MIN {
		p.alpha = 2.0 * ALPHA_MIN - p.alpha;
		p.direction = 1.0;
	}

	if p.out_of_bounds(bounds) {
		*p = Particle::random(rng, bounds);
		p.y = bounds.height;
	}
}
