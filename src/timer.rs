//! Repeating timers with explicit cancellation.
//!
//! [`Countdown`] is the pure state machine: feed it elapsed milliseconds and
//! it reports how many times it fired. [`RepeatingTask`] drives a countdown
//! from `setTimeout` in the browser and cancels its pending timeout when
//! dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::warn;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::components::starfield::uniform;

/// Delays shorter than this are raised to it, so a zero delay cannot spin.
const MIN_DELAY_MS: f64 = 1.0;

/// Source of the wait before each firing.
pub trait Delay {
	/// Milliseconds until the next firing.
	fn next_delay_ms(&mut self) -> f64;
}

impl<D: Delay + ?Sized> Delay for Box<D> {
	fn next_delay_ms(&mut self) -> f64 {
		(**self).next_delay_ms()
	}
}

/// The same delay every time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fixed(pub f64);

impl Delay for Fixed {
	fn next_delay_ms(&mut self) -> f64 {
		self.0
	}
}

/// A fresh uniform delay from `[min_ms, max_ms)` for every firing.
#[derive(Clone, Debug)]
pub struct Jittered {
	/// Shortest delay.
	pub min_ms: f64,
	/// Upper bound, exclusive.
	pub max_ms: f64,
	rng: StdRng,
}

impl Jittered {
	/// Draws delays from `rng`.
	pub fn new(min_ms: f64, max_ms: f64, rng: StdRng) -> Self {
		Self { min_ms, max_ms, rng }
	}
}

impl Delay for Jittered {
	fn next_delay_ms(&mut self) -> f64 {
		uniform(&mut self.rng, self.min_ms, self.max_ms)
	}
}

/// Simulated-time repeating timer.
#[derive(Clone, Debug)]
pub struct Countdown<D> {
	delay: D,
	remaining_ms: f64,
}

impl<D: Delay> Countdown<D> {
	/// Arms the countdown with its first delay.
	pub fn new(mut delay: D) -> Self {
		let remaining_ms = delay.next_delay_ms().max(MIN_DELAY_MS);
		Self {
			delay,
			remaining_ms,
		}
	}

	/// Time left until the next firing.
	pub fn remaining_ms(&self) -> f64 {
		self.remaining_ms
	}

	/// Lets `elapsed_ms` pass and returns how many times the timer fired.
	/// Each firing re-arms with the next delay.
	pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
		self.remaining_ms -= elapsed_ms.max(0.0);
		let mut fired = 0;
		while self.remaining_ms <= 0.0 {
			fired += 1;
			self.remaining_ms += self.delay.next_delay_ms().max(MIN_DELAY_MS);
		}
		fired
	}

	/// Discards elapsed time and re-arms with a fresh delay.
	pub fn restart(&mut self) {
		self.remaining_ms = self.delay.next_delay_ms().max(MIN_DELAY_MS);
	}
}

struct TaskInner {
	countdown: Countdown<Box<dyn Delay>>,
	handle: Option<i32>,
	tick: Option<Closure<dyn FnMut()>>,
}

impl TaskInner {
	fn clear(&mut self) {
		if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
			window.clear_timeout_with_handle(handle);
		}
	}

	fn schedule(&mut self) {
		self.clear();
		let (Some(window), Some(tick)) = (web_sys::window(), self.tick.as_ref()) else {
			return;
		};
		match window.set_timeout_with_callback_and_timeout_and_arguments_0(
			tick.as_ref().unchecked_ref(),
			self.countdown.remaining_ms().ceil() as i32,
		) {
			Ok(handle) => self.handle = Some(handle),
			Err(e) => warn!("portfolio-fx: failed to schedule timer: {:?}", e),
		}
	}
}

/// Browser timer that calls back on every firing of a [`Countdown`] until it
/// is cancelled or dropped.
pub struct RepeatingTask {
	inner: Rc<RefCell<TaskInner>>,
}

impl RepeatingTask {
	/// Schedules the first firing right away. The task runs until it is
	/// cancelled or dropped.
	pub fn start(delay: impl Delay + 'static, mut callback: impl FnMut() + 'static) -> Self {
		let inner = Rc::new(RefCell::new(TaskInner {
			countdown: Countdown::new(Box::new(delay) as Box<dyn Delay>),
			handle: None,
			tick: None,
		}));

		let weak: Weak<RefCell<TaskInner>> = Rc::downgrade(&inner);
		let tick = Closure::<dyn FnMut()>::new(move || {
			let Some(inner) = weak.upgrade() else {
				return;
			};
			let fired = {
				let mut inner = inner.borrow_mut();
				inner.handle = None;
				let due = inner.countdown.remaining_ms();
				inner.countdown.advance(due)
			};
			for _ in 0..fired {
				callback();
			}
			inner.borrow_mut().schedule();
		});

		{
			let mut inner = inner.borrow_mut();
			inner.tick = Some(tick);
			inner.schedule();
		}
		Self { inner }
	}

	/// Cancels the pending firing and starts a full new delay.
	pub fn restart(&self) {
		let mut inner = self.inner.borrow_mut();
		inner.countdown.restart();
		inner.schedule();
	}

	/// Stops the task. A cancelled task can be revived with [`restart`](Self::restart).
	pub fn cancel(&self) {
		self.inner.borrow_mut().clear();
	}
}

impl Drop for RepeatingTask {
	fn drop(&mut self) {
		let mut inner = self.inner.borrow_mut();
		inner.clear();
		inner.tick = None;
	}
}

/// Runs `f` once after `ms` milliseconds. Fire-and-forget.
pub fn after(ms: i32, f: impl FnOnce() + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let cb = Closure::once_into_js(f);
	if let Err(e) =
		window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
	{
		warn!("portfolio-fx: failed to schedule timeout: {:?}", e);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;

	#[test]
	fn fixed_fires_once_per_period() {
		let mut c = Countdown::new(Fixed(5000.0));
		assert_eq!(c.advance(4999.0), 0);
		assert_eq!(c.advance(1.0), 1);
		assert_eq!(c.advance(5000.0), 1);
		assert_eq!(c.advance(12_500.0), 2);
		assert_eq!(c.remaining_ms(), 2500.0);
	}

	#[test]
	fn frame_sized_steps_fire_once_per_period() {
		let mut c = Countdown::new(Fixed(5000.0));
		let fired: u32 = (0..1500).map(|_| c.advance(10.0)).sum();
		assert_eq!(fired, 3);
	}

	#[test]
	fn restart_discards_elapsed_time() {
		let mut c = Countdown::new(Fixed(5000.0));
		assert_eq!(c.advance(4000.0), 0);
		c.restart();
		assert_eq!(c.advance(4000.0), 0);
		assert_eq!(c.advance(999.0), 0);
		assert_eq!(c.advance(1.0), 1);
	}

	#[test]
	fn jittered_delays_stay_in_range() {
		let mut d = Jittered::new(3000.0, 7000.0, StdRng::seed_from_u64(8));
		for _ in 0..500 {
			let ms = d.next_delay_ms();
			assert!((3000.0..7000.0).contains(&ms));
		}
	}

	#[test]
	fn jittered_countdown_fires_between_bounds() {
		let mut c = Countdown::new(Jittered::new(3000.0, 7000.0, StdRng::seed_from_u64(4)));
		let mut since_last = 0.0;
		for _ in 0..10_000 {
			since_last += 10.0;
			if c.advance(10.0) > 0 {
				assert!((2990.0..=7010.0).contains(&since_last), "gap {}", since_last);
				since_last = 0.0;
			}
		}
	}

	#[test]
	fn zero_delay_does_not_spin() {
		let mut c = Countdown::new(Fixed(0.0));
		assert_eq!(c.advance(5.0), 5);
	}

	#[test]
	fn negative_elapsed_is_ignored() {
		let mut c = Countdown::new(Fixed(100.0));
		assert_eq!(c.advance(-50.0), 0);
		assert_eq!(c.remaining_ms(), 100.0);
	}
}
