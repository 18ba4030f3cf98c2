//! Field Regression Tests
//!
//! Long-run invariants of the particle field: particles never drift further
//! than one frame of velocity beyond the surface, reflection conserves speed,
//! and resizing never changes the particle count.
//!
//! # Running tests
//! ```bash
//! cargo test field_regression
//! ```

use portfolio_fx::{ConstellationStyle, Field};

/// Frames to simulate per scenario.
const FRAMES: usize = 10_000;

/// Allowed overshoot: one frame of maximum per-axis velocity.
fn assert_bounded(field: &Field, style: &ConstellationStyle) {
	let (w, h) = (field.width(), field.height());
	for p in &field.particles {
		assert!(
			p.x >= -style.speed && p.x <= w + style.speed,
			"x={} outside [{}..{}] (+/- {})",
			p.x,
			0.0,
			w,
			style.speed
		);
		assert!(
			p.y >= -style.speed && p.y <= h + style.speed,
			"y={} outside [{}..{}] (+/- {})",
			p.y,
			0.0,
			h,
			style.speed
		);
	}
}

#[test]
fn particles_stay_bounded_over_long_runs() {
	for style in [ConstellationStyle::nebula(), ConstellationStyle::midnight()] {
		let mut field = Field::new(&style, 1280.0, 720.0);
		let speeds: Vec<(f64, f64)> = field
			.particles
			.iter()
			.map(|p| (p.vx.abs(), p.vy.abs()))
			.collect();

		for _ in 0..FRAMES {
			field.step();
			assert_bounded(&field, &style);
		}

		// Elastic bounces: per-axis speed is conserved forever.
		for (p, (sx, sy)) in field.particles.iter().zip(speeds) {
			assert!((p.vx.abs() - sx).abs() < 1e-12, "{}", style.name);
			assert!((p.vy.abs() - sy).abs() < 1e-12, "{}", style.name);
		}
	}
}

#[test]
fn resize_storm_keeps_count_and_bounds() {
	let style = ConstellationStyle::nebula();
	let mut field = Field::new(&style, 1920.0, 1080.0);
	let count = field.particles.len();

	let sizes = [
		(800.0, 600.0),
		(400.0, 300.0),
		(1920.0, 1080.0),
		(1024.0, 768.0),
		(320.0, 480.0),
	];
	for (w, h) in sizes {
		field.on_resize(w, h);
		assert_eq!(field.particles.len(), count);
		for p in &field.particles {
			assert!(p.x <= w && p.y <= h);
		}
		for _ in 0..500 {
			field.step();
			assert_bounded(&field, &style);
		}
		assert_eq!(field.particles.len(), count);
	}
}

#[test]
fn pointer_updates_never_disturb_particles() {
	let style = ConstellationStyle::nebula();
	let mut field = Field::new(&style, 1280.0, 720.0);

	field.step();
	let snapshot: Vec<(f64, f64)> = field.particles.iter().map(|p| (p.x, p.y)).collect();

	field.on_pointer_move(10.0, 10.0);
	field.on_pointer_move(1270.0, 700.0);
	assert_eq!(field.pointer(), (1270.0, 700.0));

	for (p, (x, y)) in field.particles.iter().zip(snapshot) {
		assert_eq!((p.x, p.y), (x, y));
	}
}
