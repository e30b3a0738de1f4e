/// A point in normalized frame coordinates, `[0, 1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub points: [Point; 3],
}

impl Triangle {
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { points: [a, b, c] }
    }
}

/// Flat fill color with normalized channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredTriangle {
    pub triangle: Triangle,
    pub color: Color,
}

/// One render snapshot. `width`/`height` only carry the aspect ratio of the
/// source image; triangles are painted in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub triangles: Vec<ColoredTriangle>,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            triangles: Vec::new(),
        }
    }

    pub fn with_triangle(mut self, triangle: Triangle, color: Color) -> Self {
        self.triangles.push(ColoredTriangle { triangle, color });
        self
    }

    /// Width over height, or `None` when either side is not a positive number.
    pub fn aspect(&self) -> Option<f64> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Some(self.width / self.height)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;

    #[test]
    fn aspect_requires_positive_sides() {
        assert_eq!(Frame::new(400.0, 200.0).aspect(), Some(2.0));
        assert_eq!(Frame::new(0.0, 200.0).aspect(), None);
        assert_eq!(Frame::new(400.0, -1.0).aspect(), None);
        assert_eq!(Frame::new(f64::NAN, 1.0).aspect(), None);
    }
}
