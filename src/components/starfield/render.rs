//! Canvas rendering for the starfield.
//!
//! The surface is cleared every frame, then entities are drawn in collection
//! order so later entities land on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::shooting::ShootingStar;
use super::state::AnimatorState;
use super::stars::Star;
use super::theme::FieldStyle;

/// Renders the complete field to the canvas.
pub fn render(state: &AnimatorState, ctx: &CanvasRenderingContext2d, style: &FieldStyle) {
	ctx.clear_rect(0.0, 0.0, state.bounds.width, state.bounds.height);

	for p in &state.particles {
		draw_particle(p, ctx, style);
	}

	if !state.stars.is_empty() {
		ctx.set_fill_style_str(&style.star_color.to_css());
		for s in &state.stars {
			draw_star(s, ctx);
		}
	}

	for s in &state.shooting {
		draw_shooting_star(s, ctx, style);
	}
}

/// Fills one particle with its own opacity.
pub fn draw_particle(p: &Particle, ctx: &CanvasRenderingContext2d, style: &FieldStyle) {
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
	ctx.set_fill_style_str(&style.particle_color.with_alpha(p.alpha).to_css_rgba());
	ctx.fill();
}

/// Fill style is set once by the caller for the whole batch.
pub fn draw_star(s: &Star, ctx: &CanvasRenderingContext2d) {
	ctx.begin_path();
	let _ = ctx.arc(s.x, s.y, s.radius, 0.0, PI * 2.0);
	ctx.fill();
}

/// Strokes the trail from the head back to [`ShootingStar::tail`].
pub fn draw_shooting_star(s: &ShootingStar, ctx: &CanvasRenderingContext2d, style: &FieldStyle) {
	if !s.active {
		return;
	}
	let (tail_x, tail_y) = s.tail();

	ctx.save();
	ctx.set_global_alpha(s.alpha);
	ctx.begin_path();
	ctx.move_to(s.x, s.y);
	ctx.line_to(tail_x, tail_y);
	ctx.set_stroke_style_str(&style.trail_color.to_css());
	ctx.set_line_width(style.trail_width);
	ctx.stroke();
	ctx.restore();
}
