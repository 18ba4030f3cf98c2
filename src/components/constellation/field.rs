//! Particle field simulation: positions, velocities, and link math.
//!
//! All mutable state lives in [`Field`], created once when the canvas mounts
//! and stepped by the animation loop. The event wiring feeds it pointer and
//! resize updates; rendering reads it immutably.

use super::theme::ConstellationStyle;

/// A single animated point.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
}

/// The full particle collection plus shared pointer/dimension state.
pub struct Field {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	pointer: (f64, f64),
}

impl Field {
	/// Populate a field sized to the given surface.
	///
	/// Count scales with area (one particle per `area_per_particle` square
	/// units) up to the style's cap, and stays fixed for the lifetime of the
	/// field; resizes only clamp existing particles back inside bounds.
	pub fn new(style: &ConstellationStyle, width: f64, height: f64) -> Self {
		let count = particle_count(style, width, height);
		let mut particles = Vec::with_capacity(count);

		for i in 0..count {
			// Use deterministic pseudo-random based on index for consistent look
			let seed = i as f64;
			particles.push(Particle {
				x: pseudo_random(seed * 1.1) * width,
				y: pseudo_random(seed * 2.3) * height,
				vx: (pseudo_random(seed * 3.7) - 0.5) * 2.0 * style.speed,
				vy: (pseudo_random(seed * 4.1) - 0.5) * 2.0 * style.speed,
				radius: style.radius_min
					+ pseudo_random(seed * 5.3) * (style.radius_max - style.radius_min),
				opacity: style.opacity_min
					+ pseudo_random(seed * 6.7) * (style.opacity_max - style.opacity_min),
			});
		}

		Self {
			particles,
			width,
			height,
			pointer: (width / 2.0, height / 2.0),
		}
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn pointer(&self) -> (f64, f64) {
		self.pointer
	}

	/// Advance every particle by one frame.
	///
	/// Plain Euler step with an elastic axis-aligned bounce: crossing a bound
	/// negates that axis velocity without correcting the position, so a
	/// particle may sit just outside for a single frame before the reflected
	/// velocity brings it back.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;
			if p.x < 0.0 || p.x > self.width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > self.height {
				p.vy = -p.vy;
			}
		}
	}

	/// Adopt new surface dimensions, clamping stranded particles back to the
	/// new edge. Velocities are untouched and the count is never recomputed.
	pub fn on_resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		for p in &mut self.particles {
			if p.x > width {
				p.x = width;
			}
			if p.y > height {
				p.y = height;
			}
		}
	}

	/// Record the latest pointer position. No smoothing.
	pub fn on_pointer_move(&mut self, x: f64, y: f64) {
		self.pointer = (x, y);
	}
}

/// Particle count for a surface: `min(floor(w*h / area), cap)`.
pub fn particle_count(style: &ConstellationStyle, width: f64, height: f64) -> usize {
	(((width * height) / style.area_per_particle).floor() as usize).min(style.max_count)
}

/// Alpha for a link of the given length: linear fade from `max_alpha` at
/// distance zero down to nothing at `max_dist`. `None` means no link.
pub fn link_alpha(dist: f64, max_dist: f64, max_alpha: f64) -> Option<f64> {
	if dist < max_dist {
		Some((1.0 - dist / max_dist) * max_alpha)
	} else {
		None
	}
}

/// Simple pseudo-random function (deterministic)
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn style() -> ConstellationStyle {
		ConstellationStyle::nebula()
	}

	#[test]
	fn count_scales_with_area() {
		assert_eq!(particle_count(&style(), 1200.0, 800.0), 80);
	}

	#[test]
	fn count_is_capped() {
		assert_eq!(particle_count(&style(), 3000.0, 2000.0), 120);
	}

	#[test]
	fn init_respects_style_ranges() {
		let field = Field::new(&style(), 1200.0, 800.0);
		assert_eq!(field.particles.len(), 80);
		for p in &field.particles {
			assert!((0.0..1200.0).contains(&p.x));
			assert!((0.0..800.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.2 && p.vy.abs() <= 0.2);
			assert!((0.5..=2.3).contains(&p.radius));
			assert!((0.15..=0.65).contains(&p.opacity));
		}
		assert_eq!(field.pointer(), (600.0, 400.0));
	}

	#[test]
	fn step_integrates_position() {
		let mut field = Field::new(&style(), 800.0, 600.0);
		field.particles[0] = Particle {
			x: 100.0,
			y: 200.0,
			vx: 0.1,
			vy: -0.05,
			radius: 1.0,
			opacity: 0.3,
		};
		field.step();
		let p = &field.particles[0];
		assert!((p.x - 100.1).abs() < 1e-12);
		assert!((p.y - 199.95).abs() < 1e-12);
		assert_eq!((p.vx, p.vy), (0.1, -0.05));
	}

	#[test]
	fn crossing_right_edge_reflects_vx_only() {
		let mut field = Field::new(&style(), 800.0, 600.0);
		field.particles[0] = Particle {
			x: 799.95,
			y: 300.0,
			vx: 0.1,
			vy: 0.05,
			radius: 1.0,
			opacity: 0.3,
		};
		field.step();
		let p = &field.particles[0];
		// One frame of overshoot is allowed before the bounce takes effect.
		assert!(p.x > 800.0);
		assert_eq!(p.vx, -0.1);
		assert_eq!(p.vy, 0.05);
		field.step();
		assert!(field.particles[0].x <= 800.0);
	}

	#[test]
	fn crossing_top_edge_reflects_vy_only() {
		let mut field = Field::new(&style(), 800.0, 600.0);
		field.particles[0] = Particle {
			x: 400.0,
			y: 0.02,
			vx: 0.05,
			vy: -0.1,
			radius: 1.0,
			opacity: 0.3,
		};
		field.step();
		let p = &field.particles[0];
		assert!(p.y < 0.0);
		assert_eq!(p.vy, 0.1);
		assert_eq!(p.vx, 0.05);
	}

	#[test]
	fn velocity_unchanged_while_inside_bounds() {
		let mut field = Field::new(&style(), 800.0, 600.0);
		for p in &mut field.particles {
			p.x = p.x.clamp(1.0, 799.0);
			p.y = p.y.clamp(1.0, 599.0);
		}
		let before: Vec<(f64, f64)> = field.particles.iter().map(|p| (p.vx, p.vy)).collect();
		field.step();
		for (p, (vx, vy)) in field.particles.iter().zip(before) {
			if (0.0..=800.0).contains(&p.x) {
				assert_eq!(p.vx, vx);
			}
			if (0.0..=600.0).contains(&p.y) {
				assert_eq!(p.vy, vy);
			}
		}
	}

	#[test]
	fn resize_clamps_without_touching_velocity() {
		let mut field = Field::new(&style(), 800.0, 600.0);
		field.particles[0] = Particle {
			x: 700.0,
			y: 500.0,
			vx: 0.1,
			vy: 0.2,
			radius: 1.0,
			opacity: 0.3,
		};
		field.on_resize(400.0, 300.0);
		let p = &field.particles[0];
		assert_eq!((p.x, p.y), (400.0, 300.0));
		assert_eq!((p.vx, p.vy), (0.1, 0.2));
	}

	#[test]
	fn resize_never_changes_count() {
		let mut field = Field::new(&style(), 800.0, 600.0);
		let count = field.particles.len();
		for (w, h) in [(400.0, 300.0), (1920.0, 1080.0), (100.0, 100.0)] {
			field.on_resize(w, h);
			assert_eq!(field.particles.len(), count);
		}
	}

	#[test]
	fn pointer_move_stores_latest() {
		let mut field = Field::new(&style(), 800.0, 600.0);
		field.on_pointer_move(12.5, 640.0);
		assert_eq!(field.pointer(), (12.5, 640.0));
	}

	#[test]
	fn link_alpha_fades_linearly() {
		assert_eq!(link_alpha(140.0, 140.0, 0.15), None);
		assert_eq!(link_alpha(200.0, 140.0, 0.15), None);
		let at_zero = link_alpha(0.0, 140.0, 0.15).unwrap();
		assert!((at_zero - 0.15).abs() < 1e-12);
		let half = link_alpha(70.0, 140.0, 0.15).unwrap();
		assert!((half - 0.075).abs() < 1e-12);
		// Strictly decreasing in distance.
		let mut prev = at_zero;
		for d in 1..140 {
			let a = link_alpha(d as f64, 140.0, 0.15).unwrap();
			assert!(a < prev);
			prev = a;
		}
	}
}
