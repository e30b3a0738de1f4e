use std::path::Path;

use tiny_skia::{BlendMode, Color, FillRule, Paint, PathBuilder, Pixmap, Transform};
use tip_core::{ColoredTriangle, Frame};
use tip_logging::{tip_debug, tip_trace, tip_warn};

use crate::fit::{color_to_rgb8, fit};
use crate::RenderError;

/// Largest backing buffer the surface will allocate, in device pixels.
pub const MAX_BACKING_PIXELS: u64 = 8192 * 8192;

/// Drawing target for the live preview.
///
/// Geometry lives in logical units (the fitted size inside the container).
/// The backing buffer is `logical * density` pixels and every draw goes
/// through a scale transform of `density`, so callers never see device pixels.
pub struct RenderSurface {
    container: (f64, f64),
    aspect: f64,
    logical: (f64, f64),
    density: f64,
    transform: Transform,
    pixmap: Pixmap,
    frame: Option<Frame>,
}

impl RenderSurface {
    pub fn new(container_width: f64, container_height: f64) -> Result<Self, RenderError> {
        check_container(container_width, container_height)?;
        let logical = fit(container_width, container_height, 1.0);
        let pixmap = allocate(logical, 1.0)?;
        Ok(Self {
            container: (container_width, container_height),
            aspect: 1.0,
            logical,
            density: 1.0,
            transform: Transform::identity(),
            pixmap,
            frame: None,
        })
    }

    /// Refits the current aspect into a new container size.
    pub fn resize(
        &mut self,
        container_width: f64,
        container_height: f64,
    ) -> Result<(), RenderError> {
        check_container(container_width, container_height)?;
        let previous = self.container;
        self.container = (container_width, container_height);
        if let Err(err) = self.reconfigure() {
            self.container = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Sets the device pixel ratio. Ratios at or below 1 (or non-finite) mean
    /// no scaling. The ratio replaces the previous one; it never compounds.
    pub fn configure_density(&mut self, device_pixel_ratio: f64) -> Result<(), RenderError> {
        let density = if device_pixel_ratio.is_finite() && device_pixel_ratio > 1.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let previous = self.density;
        self.density = density;
        if let Err(err) = self.reconfigure() {
            self.density = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Clears the surface and paints `frame` with additive blending.
    ///
    /// Never fails: an unusable aspect keeps the previous geometry, and
    /// triangles that cannot form a path are skipped.
    pub fn paint(&mut self, frame: Frame) {
        match frame.aspect() {
            Some(aspect) if aspect != self.aspect => {
                let previous = self.aspect;
                self.aspect = aspect;
                if let Err(err) = self.reconfigure() {
                    tip_warn!("Keeping previous surface geometry: {}", err);
                    self.aspect = previous;
                }
            }
            Some(_) => {}
            None => tip_warn!(
                "Frame has unusable size {}x{}; painting with previous geometry",
                frame.width,
                frame.height
            ),
        }

        self.pixmap.fill(Color::TRANSPARENT);

        let mut paint = Paint {
            anti_alias: true,
            blend_mode: BlendMode::Plus,
            ..Paint::default()
        };
        let (width, height) = self.logical;
        let mut skipped = 0usize;
        for colored in &frame.triangles {
            if !self.fill_triangle(colored, width, height, &mut paint) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            tip_debug!(
                "Skipped {} of {} triangles while painting",
                skipped,
                frame.triangles.len()
            );
        }
        tip_trace!(
            "Painted {} triangles at {}x{} (density {})",
            frame.triangles.len() - skipped,
            width,
            height,
            self.density
        );
        self.frame = Some(frame);
    }

    fn fill_triangle(
        &mut self,
        colored: &ColoredTriangle,
        width: f64,
        height: f64,
        paint: &mut Paint<'_>,
    ) -> bool {
        let mapped = colored
            .triangle
            .points
            .map(|p| ((p.x * width).round() as f32, (p.y * height).round() as f32));
        if mapped.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return false;
        }

        let mut builder = PathBuilder::new();
        builder.move_to(mapped[0].0, mapped[0].1);
        builder.line_to(mapped[1].0, mapped[1].1);
        builder.line_to(mapped[2].0, mapped[2].1);
        builder.close();
        let Some(path) = builder.finish() else {
            return false;
        };

        let [r, g, b] = color_to_rgb8(colored.color);
        paint.set_color_rgba8(r, g, b, 255);
        self.pixmap
            .fill_path(&path, paint, FillRule::Winding, self.transform, None);
        true
    }

    fn reconfigure(&mut self) -> Result<(), RenderError> {
        let (container_width, container_height) = self.container;
        let logical = fit(container_width, container_height, self.aspect);
        self.pixmap = allocate(logical, self.density)?;
        self.logical = logical;
        let scale = self.density as f32;
        self.transform = Transform::from_scale(scale, scale);
        tip_debug!(
            "Surface configured: logical {:.1}x{:.1}, backing {}x{}, density {}",
            logical.0,
            logical.1,
            self.pixmap.width(),
            self.pixmap.height(),
            self.density
        );
        Ok(())
    }

    /// Fitted size in logical (CSS) units.
    pub fn logical_size(&self) -> (f64, f64) {
        self.logical
    }

    /// Backing buffer size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Scale applied to every draw call.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The last painted frame.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Straight-alpha RGBA of a backing pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        self.pixmap
            .save_png(path)
            .map_err(|err| RenderError::Snapshot {
                path: path.to_path_buf(),
                message: err.to_string(),
            })
    }
}

fn check_container(width: f64, height: f64) -> Result<(), RenderError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(RenderError::InvalidContainer { width, height })
    }
}

fn allocate(logical: (f64, f64), density: f64) -> Result<Pixmap, RenderError> {
    let width = (logical.0 * density).round().max(1.0);
    let height = (logical.1 * density).round().max(1.0);
    // Casts saturate, so the reported size stays meaningful for huge requests.
    let error = RenderError::Allocation {
        width: width as u32,
        height: height as u32,
    };
    if width * height > MAX_BACKING_PIXELS as f64 {
        return Err(error);
    }
    Pixmap::new(width as u32, height as u32).ok_or(error)
}
