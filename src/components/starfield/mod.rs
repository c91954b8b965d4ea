//! Animated starfield background.
//!
//! Renders a field of ambient entities on an HTML canvas behind the page:
//! - `Drift`: shimmering particles rising toward the top, re-entering from the
//!   bottom, with shooting stars streaking across every few seconds
//! - `Bounce`: slow stars reflecting off the viewport edges
//!
//! Entity updates are free functions over plain data, so everything except
//! drawing and the component runs without a browser.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::{Preset, StarfieldCanvas, StarfieldConfig};
//!
//! let config = StarfieldConfig { preset: Preset::Bounce, ..Default::default() };
//! view! { <StarfieldCanvas config=config /> }
//! ```

mod component;
pub mod particles;
mod render;
pub mod shooting;
pub mod stars;
mod state;
pub mod theme;
mod types;

pub use component::{CANVAS_CLASS, StarfieldCanvas};
pub use state::{AnimatorState, Preset};
pub use theme::{Color, FieldStyle};
pub use types::{Bounds, uniform};
