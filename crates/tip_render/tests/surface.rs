use pretty_assertions::assert_eq;
use tip_core::{Color, Frame, Point, Triangle};
use tip_render::{RenderError, RenderSurface};

const RED: [u8; 4] = [255, 0, 0, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

fn corner_triangle(color: Color) -> Frame {
    Frame::new(1.0, 1.0).with_triangle(
        Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ),
        color,
    )
}

#[test]
fn paints_normalized_triangle_into_pixels() {
    let mut surface = RenderSurface::new(100.0, 100.0).unwrap();
    surface.paint(corner_triangle(Color::new(1.0, 0.0, 0.0)));

    assert_eq!(surface.logical_size(), (100.0, 100.0));
    assert_eq!(surface.backing_size(), (100, 100));
    // Corners of the filled region sit at (0,0), (100,0) and (0,100).
    assert_eq!(surface.pixel(2, 2), Some(RED));
    assert_eq!(surface.pixel(96, 1), Some(RED));
    assert_eq!(surface.pixel(1, 96), Some(RED));
    assert_eq!(surface.pixel(30, 30), Some(RED));
    // Beyond the hypotenuse nothing is drawn.
    assert_eq!(surface.pixel(60, 60), Some(CLEAR));
    assert_eq!(surface.pixel(99, 99), Some(CLEAR));
}

#[test]
fn overlapping_triangles_add_up() {
    let triangle = Triangle::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
    );
    let frame = Frame::new(1.0, 1.0)
        .with_triangle(triangle, Color::new(0.2, 0.0, 0.0))
        .with_triangle(triangle, Color::new(0.2, 0.4, 0.0));
    let mut surface = RenderSurface::new(50.0, 50.0).unwrap();
    surface.paint(frame);

    assert_eq!(surface.pixel(5, 5), Some([102, 102, 0, 255]));
}

#[test]
fn paint_clears_previous_frame() {
    let mut surface = RenderSurface::new(100.0, 100.0).unwrap();
    surface.paint(corner_triangle(Color::new(1.0, 0.0, 0.0)));
    surface.paint(Frame::new(1.0, 1.0));

    assert_eq!(surface.pixel(10, 10), Some(CLEAR));
    assert_eq!(surface.frame().unwrap().triangles.len(), 0);
}

#[test]
fn frame_aspect_refits_surface() {
    let mut surface = RenderSurface::new(800.0, 400.0).unwrap();
    assert_eq!(surface.logical_size(), (400.0, 400.0));

    surface.paint(Frame::new(1600.0, 800.0));
    assert_eq!(surface.logical_size(), (800.0, 400.0));
    assert_eq!(surface.backing_size(), (800, 400));

    surface.paint(Frame::new(300.0, 600.0));
    assert_eq!(surface.logical_size(), (200.0, 400.0));
}

#[test]
fn resize_keeps_frame_aspect() {
    let mut surface = RenderSurface::new(800.0, 400.0).unwrap();
    surface.paint(Frame::new(2.0, 1.0));
    surface.resize(400.0, 400.0).unwrap();

    assert_eq!(surface.logical_size(), (400.0, 200.0));
}

#[test]
fn unusable_frame_size_keeps_geometry() {
    let mut surface = RenderSurface::new(800.0, 400.0).unwrap();
    surface.paint(Frame::new(2.0, 1.0));
    let mut frame = corner_triangle(Color::new(0.0, 1.0, 0.0));
    frame.height = 0.0;
    surface.paint(frame);

    assert_eq!(surface.logical_size(), (800.0, 400.0));
    assert_eq!(surface.pixel(2, 2), Some([0, 255, 0, 255]));
}

#[test]
fn density_scales_backing_buffer_only() {
    let mut surface = RenderSurface::new(100.0, 100.0).unwrap();
    surface.configure_density(2.0).unwrap();

    assert_eq!(surface.logical_size(), (100.0, 100.0));
    assert_eq!(surface.backing_size(), (200, 200));
    assert_eq!(surface.density(), 2.0);

    surface.paint(corner_triangle(Color::new(1.0, 0.0, 0.0)));
    assert_eq!(surface.pixel(190, 4), Some(RED));
    assert_eq!(surface.pixel(150, 150), Some(CLEAR));
}

#[test]
fn density_does_not_compound() {
    let mut surface = RenderSurface::new(100.0, 100.0).unwrap();
    surface.configure_density(2.0).unwrap();
    let transform = surface.transform();
    surface.configure_density(2.0).unwrap();

    assert_eq!(surface.backing_size(), (200, 200));
    assert_eq!(surface.transform(), transform);
    assert_eq!(surface.transform().sx, 2.0);

    // Painting repeatedly must not touch the scale either.
    surface.paint(corner_triangle(Color::new(1.0, 0.0, 0.0)));
    surface.paint(corner_triangle(Color::new(1.0, 0.0, 0.0)));
    assert_eq!(surface.backing_size(), (200, 200));
    assert_eq!(surface.transform().sx, 2.0);
}

#[test]
fn low_density_means_no_scaling() {
    let mut surface = RenderSurface::new(100.0, 100.0).unwrap();
    surface.configure_density(3.0).unwrap();
    surface.configure_density(0.5).unwrap();

    assert_eq!(surface.density(), 1.0);
    assert_eq!(surface.backing_size(), (100, 100));

    surface.configure_density(f64::NAN).unwrap();
    assert_eq!(surface.density(), 1.0);
}

#[test]
fn degenerate_triangles_are_skipped() {
    let frame = Frame::new(1.0, 1.0)
        .with_triangle(
            Triangle::new(
                Point::new(f64::NAN, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
            ),
            Color::new(0.0, 0.0, 1.0),
        )
        .with_triangle(
            Triangle::new(
                Point::new(0.5, 0.5),
                Point::new(0.5, 0.5),
                Point::new(0.5, 0.5),
            ),
            Color::new(0.0, 0.0, 1.0),
        )
        .with_triangle(
            Triangle::new(
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
            ),
            Color::new(1.0, 0.0, 0.0),
        );
    let mut surface = RenderSurface::new(100.0, 100.0).unwrap();
    surface.paint(frame);

    assert_eq!(surface.pixel(10, 10), Some(RED));
}

#[test]
fn rejects_empty_container() {
    assert!(matches!(
        RenderSurface::new(0.0, 100.0),
        Err(RenderError::InvalidContainer { .. })
    ));
    let mut surface = RenderSurface::new(10.0, 10.0).unwrap();
    assert!(surface.resize(f64::INFINITY, 10.0).is_err());
    assert_eq!(surface.logical_size(), (10.0, 10.0));
}

#[test]
fn oversized_buffers_are_refused() {
    assert!(matches!(
        RenderSurface::new(200_000.0, 200_000.0),
        Err(RenderError::Allocation {
            width: 200_000,
            height: 200_000
        })
    ));

    let mut surface = RenderSurface::new(100.0, 100.0).unwrap();
    assert!(matches!(
        surface.resize(200_000.0, 200_000.0),
        Err(RenderError::Allocation { .. })
    ));
    assert!(matches!(
        surface.configure_density(1_000.0),
        Err(RenderError::Allocation { .. })
    ));
    assert_eq!(surface.logical_size(), (100.0, 100.0));
    assert_eq!(surface.backing_size(), (100, 100));
    assert_eq!(surface.density(), 1.0);
}

#[test]
fn rejected_resize_keeps_previous_container() {
    let mut surface = RenderSurface::new(100.0, 100.0).unwrap();
    assert!(surface.resize(200_000.0, 200_000.0).is_err());

    // A new aspect refits into the container that was last accepted.
    surface.paint(Frame::new(2.0, 1.0));
    assert_eq!(surface.logical_size(), (100.0, 50.0));
    assert_eq!(surface.backing_size(), (100, 50));
}

#[test]
fn snapshot_writes_png() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("preview.png");
    let mut surface = RenderSurface::new(40.0, 20.0).unwrap();
    surface.paint(corner_triangle(Color::new(1.0, 1.0, 1.0)));
    surface.save_png(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}
