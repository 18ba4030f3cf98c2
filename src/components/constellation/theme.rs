//! Visual configuration for the constellation field.
//!
//! Groups every tunable constant (density, motion ranges, link thresholds,
//! colors) into one style struct with named presets.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Complete visual style for the constellation canvas.
///
/// Particle count is derived from surface area: one particle per
/// `area_per_particle` square units, capped at `max_count`.
#[derive(Clone, Debug)]
pub struct ConstellationStyle {
	pub name: &'static str,
	/// Surface area (in square units) budgeted per particle.
	pub area_per_particle: f64,
	/// Hard cap on particle count regardless of surface size.
	pub max_count: usize,
	/// Maximum per-axis particle speed in units/frame.
	pub speed: f64,
	/// Minimum particle radius.
	pub radius_min: f64,
	/// Maximum particle radius.
	pub radius_max: f64,
	/// Minimum particle opacity.
	pub opacity_min: f64,
	/// Maximum particle opacity.
	pub opacity_max: f64,
	/// Particle fill color (alpha comes from each particle).
	pub particle_color: Color,
	/// Particle-to-particle link color.
	pub link_color: Color,
	/// Maximum distance at which two particles are linked.
	pub link_distance: f64,
	/// Link alpha at distance zero; fades linearly to 0 at `link_distance`.
	pub link_alpha: f64,
	pub link_width: f64,
	/// Particle-to-pointer link color.
	pub pointer_color: Color,
	/// Maximum distance at which a particle links to the pointer.
	pub pointer_distance: f64,
	/// Pointer link alpha at distance zero.
	pub pointer_alpha: f64,
	pub pointer_width: f64,
}

impl ConstellationStyle {
	/// Violet constellation on dark ground (default).
	pub fn nebula() -> Self {
		Self {
			name: "nebula",
			area_per_particle: 12_000.0,
			max_count: 120,
			speed: 0.2,
			radius_min: 0.5,
			radius_max: 2.3,
			opacity_min: 0.15,
			opacity_max: 0.65,
			particle_color: Color::rgb(124, 92, 252),
			link_color: Color::rgb(124, 92, 252),
			link_distance: 140.0,
			link_alpha: 0.15,
			link_width: 0.6,
			pointer_color: Color::rgb(0, 229, 199),
			pointer_distance: 200.0,
			pointer_alpha: 0.25,
			pointer_width: 0.8,
		}
	}

	/// Sparser, slower variant in cool blues.
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			area_per_particle: 16_000.0,
			max_count: 90,
			speed: 0.15,
			radius_min: 0.5,
			radius_max: 2.0,
			opacity_min: 0.1,
			opacity_max: 0.5,
			particle_color: Color::rgb(100, 140, 220),
			link_color: Color::rgb(100, 140, 220),
			link_distance: 120.0,
			link_alpha: 0.12,
			link_width: 0.5,
			pointer_color: Color::rgb(140, 200, 255),
			pointer_distance: 180.0,
			pointer_alpha: 0.2,
			pointer_width: 0.7,
		}
	}
}

impl Default for ConstellationStyle {
	fn default() -> Self {
		Self::nebula()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_color_renders_as_hex() {
		assert_eq!(Color::rgb(124, 92, 252).to_css(), "#7c5cfc");
	}

	#[test]
	fn translucent_color_renders_as_rgba() {
		assert_eq!(
			Color::rgb(0, 229, 199).with_alpha(0.25).to_css(),
			"rgba(0, 229, 199, 0.25)"
		);
	}

	#[test]
	fn presets_keep_opacity_range_ordered() {
		for style in [ConstellationStyle::nebula(), ConstellationStyle::midnight()] {
			assert!(style.opacity_min < style.opacity_max, "{}", style.name);
			assert!(style.radius_min < style.radius_max, "{}", style.name);
			assert!(style.max_count > 0, "{}", style.name);
		}
	}
}
