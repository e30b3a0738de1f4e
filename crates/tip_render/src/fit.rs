use tip_core::Color;

/// Largest rectangle with `frame_aspect` (width / height) that fits the container.
pub fn fit(container_width: f64, container_height: f64, frame_aspect: f64) -> (f64, f64) {
    if container_width / container_height > frame_aspect {
        (container_height * frame_aspect, container_height)
    } else {
        (container_width, container_width / frame_aspect)
    }
}

/// Normalized color to 8-bit channels, `round(channel * 255)`.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let channel = |v: f64| {
        if v.is_nan() {
            0
        } else {
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        }
    };
    [channel(color.r), channel(color.g), channel(color.b)]
}
