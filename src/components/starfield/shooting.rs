//! Transient shooting stars streaking across the upper half of the surface.

use std::f64::consts::PI;

use rand::Rng;

use super::types::{Bounds, uniform};

/// Opacity lost per frame.
pub const FADE_PER_FRAME: f64 = 0.02;

/// A streak that moves along a fixed heading and fades out over fifty frames.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
	/// Head, horizontal.
	pub x: f64,
	/// Head, vertical.
	pub y: f64,
	/// Heading in radians; the trail is drawn opposite to it.
	pub angle: f64,
	/// Trail length in pixels.
	pub length: f64,
	/// Distance travelled per frame.
	pub speed: f64,
	/// Opacity, `1 - 0.02` per frame lived.
	pub alpha: f64,
	/// Cleared once opacity reaches zero; the animator then drops the star.
	pub active: bool,
	// Frames lived. Alpha is derived from it so fifty frames land on exactly 0.
	age: u32,
}

impl ShootingStar {
	/// A fresh star in the upper half of the surface, heading down and right.
	pub fn random<R: Rng>(rng: &mut R, bounds: Bounds) -> Self {
		Self {
			x: uniform(rng, 0.0, bounds.width),
			y: uniform(rng, 0.0, bounds.height / 2.0),
			angle: uniform(rng, PI / 4.0, PI / 3.0),
			length: uniform(rng, 80.0, 150.0),
			speed: uniform(rng, 6.0, 12.0),
			alpha: 1.0,
			active: true,
			age: 0,
		}
	}

	/// End of the trail, `length` behind the head along the heading.
	pub fn tail(&self) -> (f64, f64) {
		(
			self.x - self.length * self.angle.cos(),
			self.y - self.length * self.angle.sin(),
		)
	}
}

/// Moves a shooting star along its heading and fades it. Once opacity reaches
/// zero the star is marked inactive and stays that way.
pub fn update_shooting_star(star: &mut ShootingStar) {
	if !star.active {
		return;
	}
	star.x += star.speed * star.angle.cos();
	star.y += star.speed * star.angle.sin();

	star.age += 1;
	star.alpha = (1.0 - FADE_PER_FRAME * star.age as f64).max(0.0);
	if star.alpha <= 0.0 {
		star.active = false;
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn star() -> ShootingStar {
		let mut rng = StdRng::seed_from_u64(11);
		ShootingStar::random(&mut rng, Bounds::new(1000.0, 800.0))
	}

	#[test]
	fn spawns_in_upper_half_with_full_opacity() {
		let mut rng = StdRng::seed_from_u64(2);
		for _ in 0..200 {
			let s = ShootingStar::random(&mut rng, Bounds::new(1000.0, 800.0));
			assert!((0.0..400.0).contains(&s.y));
			assert!((PI / 4.0..PI / 3.0).contains(&s.angle));
			assert!((80.0..150.0).contains(&s.length));
			assert!((6.0..12.0).contains(&s.speed));
			assert_eq!(s.alpha, 1.0);
			assert!(s.active);
		}
	}

	#[test]
	fn opacity_decreases_by_fixed_step() {
		let mut s = star();
		let mut previous = s.alpha;
		for _ in 0..49 {
			update_shooting_star(&mut s);
			assert!((previous - s.alpha - FADE_PER_FRAME).abs() < 1e-9);
			assert!(s.active);
			previous = s.alpha;
		}
	}

	#[test]
	fn fifty_frames_reach_zero_and_deactivate() {
		let mut s = star();
		for _ in 0..50 {
			update_shooting_star(&mut s);
		}
		assert_eq!(s.alpha, 0.0);
		assert!(!s.active);
	}

	#[test]
	fn moves_along_heading() {
		let mut s = star();
		let (x0, y0) = (s.x, s.y);
		update_shooting_star(&mut s);
		let (dx, dy) = (s.x - x0, s.y - y0);
		assert!((dx.hypot(dy) - s.speed).abs() < 1e-9);
		assert!((dy.atan2(dx) - s.angle).abs() < 1e-9);
	}

	#[test]
	fn tail_trails_behind_head() {
		let s = star();
		let (tx, ty) = s.tail();
		assert!(tx < s.x && ty < s.y);
		assert!(((s.x - tx).hypot(s.y - ty) - s.length).abs() < 1e-9);
	}

	#[test]
	fn inactive_star_is_frozen() {
		let mut s = star();
		for _ in 0..50 {
			update_shooting_star(&mut s);
		}
		let frozen = s.clone();
		update_shooting_star(&mut s);
		assert_eq!(s, frozen);
	}
}
