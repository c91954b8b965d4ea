//! Visual styling for the starfield background.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque white.
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	/// Opaque color from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with a different opacity.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex for opaque colors, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Always emits `rgba(...)`, even for opaque colors. Used where the alpha
	/// channel changes every frame.
	pub fn to_css_rgba(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// How each entity kind is painted.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Fill for drifting particles; alpha comes from the particle itself.
	pub particle_color: Color,
	/// Fill for bouncing stars.
	pub star_color: Color,
	/// Stroke for shooting-star trails.
	pub trail_color: Color,
	/// Trail stroke width in pixels.
	pub trail_width: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			particle_color: Color::WHITE,
			star_color: Color::WHITE,
			trail_color: Color::WHITE,
			trail_width: 1.5,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::WHITE.to_css(), "#ffffff");
		assert_eq!(Color::rgb(18, 52, 86).to_css(), "#123456");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(Color::WHITE.with_alpha(0.5).to_css(), "rgba(255, 255, 255, 0.5)");
		assert_eq!(Color::WHITE.to_css_rgba(), "rgba(255, 255, 255, 1)");
	}
}
