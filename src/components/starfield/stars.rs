//! Slow stars that bounce elastically off the surface edges.

use rand::Rng;

use super::types::{Bounds, uniform};

/// A star with constant speed, reflected at the edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	/// Position; may sit one step outside the bounds after a bounce.
	pub x: f64,
	/// See [`x`](Self::x).
	pub y: f64,
	/// Disc radius in pixels.
	pub radius: f64,
	/// Horizontal velocity per frame.
	pub dx: f64,
	/// Vertical velocity per frame.
	pub dy: f64,
}

impl Star {
	/// Random position inside `bounds` with a slow random velocity.
	pub fn random<R: Rng>(rng: &mut R, bounds: Bounds) -> Self {
		Self {
			x: uniform(rng, 0.0, bounds.width),
			y: uniform(rng, 0.0, bounds.height),
			radius: uniform(rng, 0.0, 1.5),
			dx: uniform(rng, -0.25, 0.25),
			dy: uniform(rng, -0.25, 0.25),
		}
	}
}

/// Advances one star by a frame.
///
/// Position is never clamped, so a star may overshoot an edge for a frame.
/// The crossed velocity component is pointed back inward, which for a star
/// moving outward is a plain sign flip, and which also walks a star back
/// inside after the surface shrinks underneath it.
pub fn update_star(star: &mut Star, bounds: Bounds) {
	star.x += star.dx;
	star.y += star.dy;

	if star.x < 0.0 {
		star.dx = star.dx.abs();
	} else if star.x > bounds.width {
		star.dx = -star.dx.abs();
	}
	if star.y < 0.0 {
		star.dy = star.dy.abs();
	} else if star.y > bounds.height {
		star.dy = -star.dy.abs();
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn bounds() -> Bounds {
		Bounds::new(300.0, 200.0)
	}

	#[test]
	fn velocity_flips_when_crossing_right_edge() {
		let mut s = Star {
			x: 299.9,
			y: 100.0,
			radius: 1.0,
			dx: 0.2,
			dy: 0.0,
		};
		update_star(&mut s, bounds());
		assert!(s.x > 300.0, "overshoot is kept for one frame");
		assert_eq!(s.dx, -0.2);

		update_star(&mut s, bounds());
		assert!(s.x <= 300.0);
	}

	#[test]
	fn velocity_flips_when_crossing_top_edge() {
		let mut s = Star {
			x: 10.0,
			y: 0.1,
			radius: 1.0,
			dx: 0.0,
			dy: -0.2,
		};
		update_star(&mut s, bounds());
		assert_eq!(s.dy, 0.2);
	}

	#[test]
	fn velocity_unchanged_inside_bounds() {
		let mut s = Star {
			x: 150.0,
			y: 100.0,
			radius: 1.0,
			dx: -0.1,
			dy: 0.15,
		};
		update_star(&mut s, bounds());
		assert_eq!((s.dx, s.dy), (-0.1, 0.15));
	}

	#[test]
	fn stars_stay_within_one_step_of_bounds() {
		let mut rng = StdRng::seed_from_u64(5);
		let b = bounds();
		let mut stars: Vec<Star> = (0..120).map(|_| Star::random(&mut rng, b)).collect();
		for _ in 0..5000 {
			for s in &mut stars {
				update_star(s, b);
				assert!(s.x >= -0.25 && s.x <= b.width + 0.25);
				assert!(s.y >= -0.25 && s.y <= b.height + 0.25);
			}
		}
	}

	#[test]
	fn stars_return_inside_after_shrink() {
		let mut s = Star {
			x: 500.0,
			y: 100.0,
			radius: 1.0,
			dx: 0.25,
			dy: 0.0,
		};
		let small = bounds();
		for _ in 0..2000 {
			update_star(&mut s, small);
		}
		assert!(s.x <= small.width);
	}
}
