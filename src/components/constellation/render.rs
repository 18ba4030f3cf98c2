//! Canvas rendering for the constellation field.
//!
//! The surface is cleared and fully redrawn each frame in three passes:
//! particles, particle-to-particle links, and particle-to-pointer links.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::{Field, link_alpha};
use super::theme::ConstellationStyle;

/// Renders one frame of the field to the canvas.
pub fn draw(field: &Field, ctx: &CanvasRenderingContext2d, style: &ConstellationStyle) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	draw_particles(field, ctx, style);
	draw_links(field, ctx, style);
}

fn draw_particles(field: &Field, ctx: &CanvasRenderingContext2d, style: &ConstellationStyle) {
	for p in &field.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&style.particle_color.with_alpha(p.opacity).to_css());
		ctx.fill();
	}
}

/// Connective lines: every unordered particle pair within `link_distance`,
/// and every particle within `pointer_distance` of the pointer. The pair scan
/// is O(n²) but n is capped by the style.
fn draw_links(field: &Field, ctx: &CanvasRenderingContext2d, style: &ConstellationStyle) {
	let particles = &field.particles;
	let (px, py) = field.pointer();

	for i in 0..particles.len() {
		for j in (i + 1)..particles.len() {
			let (dx, dy) = (particles[i].x - particles[j].x, particles[i].y - particles[j].y);
			let dist = (dx * dx + dy * dy).sqrt();
			if let Some(alpha) = link_alpha(dist, style.link_distance, style.link_alpha) {
				ctx.begin_path();
				ctx.move_to(particles[i].x, particles[i].y);
				ctx.line_to(particles[j].x, particles[j].y);
				ctx.set_stroke_style_str(&style.link_color.with_alpha(alpha).to_css());
				ctx.set_line_width(style.link_width);
				ctx.stroke();
			}
		}

		let (dx, dy) = (particles[i].x - px, particles[i].y - py);
		let dist = (dx * dx + dy * dy).sqrt();
		if let Some(alpha) = link_alpha(dist, style.pointer_distance, style.pointer_alpha) {
			ctx.begin_path();
			ctx.move_to(particles[i].x, particles[i].y);
			ctx.line_to(px, py);
			ctx.set_stroke_style_str(&style.pointer_color.with_alpha(alpha).to_css());
			ctx.set_line_width(style.pointer_width);
			ctx.stroke();
		}
	}
}
