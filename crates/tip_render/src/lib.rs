//! tip render: fits normalized triangle frames onto a device-pixel-correct buffer.
mod error;
mod fit;
mod surface;

pub use error::RenderError;
pub use fit::{color_to_rgb8, fit};
pub use surface::{RenderSurface, MAX_BACKING_PIXELS};
