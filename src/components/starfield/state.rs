//! Animator state: the entity collections and the bounds they live in.
//!
//! Owned by the canvas component and mutated once per frame. Every entity is
//! updated independently of the others, so the result of a frame does not
//! depend on iteration order.

use log::debug;
use rand::rngs::StdRng;
use serde::Deserialize;

use super::particles::{Particle, update_particle};
use super::shooting::{ShootingStar, update_shooting_star};
use super::stars::{Star, update_star};
use super::types::Bounds;
use crate::config::StarfieldConfig;

/// Which entity set the background animates.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
	/// Rising, shimmering particles plus periodic shooting stars.
	#[default]
	Drift,
	/// Stars bouncing off the edges.
	Bounce,
}

/// Everything one frame reads and writes.
pub struct AnimatorState {
	/// Entity set chosen at construction.
	pub preset: Preset,
	/// Current surface size used by the boundary checks.
	pub bounds: Bounds,
	/// Fixed-size particle pool. Empty for [`Preset::Bounce`].
	pub particles: Vec<Particle>,
	/// Fixed-size star pool. Empty for [`Preset::Drift`].
	pub stars: Vec<Star>,
	/// Live shooting stars, oldest first. Retired stars are dropped each frame.
	pub shooting: Vec<ShootingStar>,
	rng: StdRng,
}

impl AnimatorState {
	/// Populates the fixed entity pool for the configured preset.
	pub fn new(config: &StarfieldConfig, width: f64, height: f64, mut rng: StdRng) -> Self {
		let bounds = Bounds::new(width, height);
		let (particles, stars) = match config.preset {
			Preset::Drift => (
				(0..config.particle_count)
					.map(|_| Particle::random(&mut rng, bounds))
					.collect(),
				Vec::new(),
			),
			Preset::Bounce => (
				Vec::new(),
				(0..config.star_count)
					.map(|_| Star::random(&mut rng, bounds))
					.collect(),
			),
		};

		Self {
			preset: config.preset,
			bounds,
			particles,
			stars,
			shooting: Vec::new(),
			rng,
		}
	}

	/// Whether this preset spawns shooting stars.
	pub fn has_shooting_stars(&self) -> bool {
		self.preset == Preset::Drift
	}

	/// Advances every entity by one frame and drops shooting stars that
	/// burned out.
	pub fn advance_frame(&mut self) {
		let bounds = self.bounds;
		for p in &mut self.particles {
			update_particle(p, bounds, &mut self.rng);
		}
		for s in &mut self.stars {
			update_star(s, bounds);
		}
		for s in &mut self.shooting {
			update_shooting_star(s);
		}
		self.shooting.retain(|s| s.active);
	}

	/// Adds one shooting star at a random spot in the upper half.
	pub fn spawn_shooting_star(&mut self) {
		let star = ShootingStar::random(&mut self.rng, self.bounds);
		debug!(
			"portfolio-fx: shooting star at ({:.0}, {:.0}), {} live",
			star.x,
			star.y,
			self.shooting.len() + 1
		);
		self.shooting.push(star);
	}

	/// Updates the bounds used by the next boundary checks. Live entities are
	/// left where they are.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.bounds = Bounds::new(width, height);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;

	fn config(preset: Preset) -> StarfieldConfig {
		StarfieldConfig {
			preset,
			..StarfieldConfig::default()
		}
	}

	fn drift() -> AnimatorState {
		AnimatorState::new(
			&config(Preset::Drift),
			800.0,
			600.0,
			StdRng::seed_from_u64(21),
		)
	}

	#[test]
	fn drift_preset_populates_particles_only() {
		let state = drift();
		assert_eq!(state.particles.len(), 150);
		assert!(state.stars.is_empty());
		assert!(state.shooting.is_empty());
		assert!(state.has_shooting_stars());
	}

	#[test]
	fn bounce_preset_populates_stars_only() {
		let state = AnimatorState::new(
			&config(Preset::Bounce),
			800.0,
			600.0,
			StdRng::seed_from_u64(1),
		);
		assert_eq!(state.stars.len(), 120);
		assert!(state.particles.is_empty());
		assert!(!state.has_shooting_stars());
	}

	#[test]
	fn pool_size_is_constant_across_frames() {
		let mut state = drift();
		for _ in 0..3000 {
			state.advance_frame();
		}
		assert_eq!(state.particles.len(), 150);
	}

	#[test]
	fn shooting_star_retires_after_fifty_frames() {
		let mut state = drift();
		state.spawn_shooting_star();
		for _ in 0..49 {
			state.advance_frame();
		}
		assert_eq!(state.shooting.len(), 1);
		state.advance_frame();
		assert!(state.shooting.is_empty());
	}

	#[test]
	fn retiring_a_star_leaves_neighbors_untouched() {
		let mut state = drift();
		state.spawn_shooting_star();
		for _ in 0..20 {
			state.advance_frame();
		}
		state.spawn_shooting_star();
		for _ in 0..10 {
			state.advance_frame();
		}
		state.spawn_shooting_star();
		assert_eq!(state.shooting.len(), 3);

		let alphas_before: Vec<f64> = state.shooting.iter().map(|s| s.alpha).collect();
		// The oldest star has 20 frames left; the next two have 40 and 50.
		for _ in 0..20 {
			state.advance_frame();
		}
		assert_eq!(state.shooting.len(), 2);
		for (s, before) in state.shooting.iter().zip(&alphas_before[1..]) {
			assert!((before - s.alpha - 0.4).abs() < 1e-9);
		}
	}

	#[test]
	fn resize_keeps_entities_in_place() {
		let mut state = drift();
		let before = state.particles.clone();
		state.resize(400.0, 300.0);
		assert_eq!(state.bounds, Bounds::new(400.0, 300.0));
		assert_eq!(state.particles, before);
	}

	#[test]
	fn zero_sized_surface_animates_without_panicking() {
		let mut state = AnimatorState::new(
			&config(Preset::Drift),
			0.0,
			0.0,
			StdRng::seed_from_u64(3),
		);
		state.spawn_shooting_star();
		for _ in 0..100 {
			state.advance_frame();
		}
		assert_eq!(state.particles.len(), 150);
	}

	#[test]
	fn empty_pools_are_fine() {
		let mut state = AnimatorState::new(
			&StarfieldConfig {
				particle_count: 0,
				..StarfieldConfig::default()
			},
			800.0,
			600.0,
			StdRng::seed_from_u64(0),
		);
		state.advance_frame();
		assert!(state.particles.is_empty());
	}
}
