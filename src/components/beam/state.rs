//! Timing of the dots that travel along the beams.

const BASE_DURATION_MS: f64 = 2500.0;
const DURATION_STEP_MS: f64 = 300.0;
const DELAY_STEP_MS: f64 = 400.0;
const FADE_EDGE: f64 = 0.05;

/// Loop timing of the dot on beam `index`. Later beams loop slower and start
/// later so dots never move in lockstep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotSchedule {
	/// Length of one loop.
	pub duration_ms: f64,
	/// Offset before the first loop starts.
	pub delay_ms: f64,
}

impl DotSchedule {
	/// Schedule of the dot on beam `index`.
	pub fn for_index(index: usize) -> Self {
		let i = index as f64;
		Self {
			duration_ms: BASE_DURATION_MS + i * DURATION_STEP_MS,
			delay_ms: i * DELAY_STEP_MS,
		}
	}

	/// Fraction of the loop completed `elapsed_ms` after the dot's first
	/// frame, in `[0, 1)`.
	pub fn progress(&self, elapsed_ms: f64) -> f64 {
		let phase = (elapsed_ms - self.delay_ms).rem_euclid(self.duration_ms);
		// rem_euclid rounds tiny negative phases up to the divisor itself
		if phase >= self.duration_ms {
			0.0
		} else {
			phase / self.duration_ms
		}
	}

	/// Position and visibility `elapsed_ms` after the first frame.
	pub fn frame(&self, elapsed_ms: f64) -> DotFrame {
		let progress = self.progress(elapsed_ms);
		DotFrame {
			progress,
			opacity: opacity(progress),
		}
	}
}

/// Dots are hidden for the first and last 5% of each loop.
pub fn opacity(progress: f64) -> f64 {
	if progress > FADE_EDGE && progress < 1.0 - FADE_EDGE {
		1.0
	} else {
		0.0
	}
}

/// One rendered dot state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotFrame {
	/// Fraction of the beam travelled.
	pub progress: f64,
	/// Either 0 or 1.
	pub opacity: f64,
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn schedule_staggers_by_index() {
		assert_eq!(
			DotSchedule::for_index(0),
			DotSchedule {
				duration_ms: 2500.0,
				delay_ms: 0.0
			}
		);
		assert_eq!(
			DotSchedule::for_index(3),
			DotSchedule {
				duration_ms: 3400.0,
				delay_ms: 1200.0
			}
		);
	}

	#[test]
	fn delay_wraps_backwards() {
		let s = DotSchedule::for_index(1);
		// 0ms elapsed is 400ms before the dot's own start: 2400/2800 through.
		assert!((s.progress(0.0) - 2400.0 / 2800.0).abs() < 1e-12);
		assert_eq!(s.progress(400.0), 0.0);
		assert!((s.progress(1800.0) - 0.5).abs() < 1e-12);
	}

	#[test]
	fn fades_at_loop_edges() {
		assert_eq!(opacity(0.0), 0.0);
		assert_eq!(opacity(0.05), 0.0);
		assert_eq!(opacity(0.5), 1.0);
		assert_eq!(opacity(0.95), 0.0);
		assert_eq!(opacity(0.99), 0.0);
	}

	proptest! {
		#[test]
		fn progress_stays_in_unit_interval(index in 0usize..6, elapsed in 0.0f64..1.0e7) {
			let p = DotSchedule::for_index(index).progress(elapsed);
			prop_assert!((0.0..1.0).contains(&p));
		}

		#[test]
		fn later_beams_are_slower(index in 0usize..5) {
			let (a, b) = (DotSchedule::for_index(index), DotSchedule::for_index(index + 1));
			prop_assert!(b.duration_ms > a.duration_ms);
			prop_assert!(b.delay_ms > a.delay_ms);
		}
	}
}
