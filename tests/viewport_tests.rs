// Host-side tests for width-gated resizing and the camera it drives.

use starfield::camera::*;
use starfield::constants::*;
use starfield::viewport::*;

#[derive(Default)]
struct RecordingSurface {
    calls: Vec<(u32, u32)>,
}

impl SurfaceResize for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.calls.push((width, height));
    }
}

#[test]
fn same_width_is_a_no_op() {
    let mut camera = Camera::for_viewport(800, 600);
    let before = camera.clone();
    let mut surface = RecordingSurface::default();
    let mut tracker = ViewportTracker::new(800);

    // Address bar showing/hiding only changes the height
    assert!(!tracker.handle_resize(800, 540, &mut camera, Some(&mut surface)));
    assert!(!tracker.handle_resize(800, 600, &mut camera, Some(&mut surface)));

    assert!(surface.calls.is_empty());
    assert_eq!(camera, before);
    assert_eq!(tracker.width(), 800);
}

#[test]
fn width_change_resizes_once_per_change() {
    let mut camera = Camera::for_viewport(640, 600);
    let mut surface = RecordingSurface::default();
    let mut tracker = ViewportTracker::new(640);

    assert!(tracker.handle_resize(800, 600, &mut camera, Some(&mut surface)));
    assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    assert!(!tracker.handle_resize(800, 600, &mut camera, Some(&mut surface)));

    assert!(tracker.handle_resize(1024, 768, &mut camera, Some(&mut surface)));
    assert!((camera.aspect - 1024.0 / 768.0).abs() < 1e-6);

    assert_eq!(surface.calls, vec![(800, 600), (1024, 768)]);
    assert_eq!(tracker.width(), 1024);
}

#[test]
fn resize_without_surface_still_updates_camera() {
    let mut camera = Camera::for_viewport(800, 600);
    let mut tracker = ViewportTracker::new(800);
    assert!(tracker.handle_resize(400, 800, &mut camera, None::<&mut RecordingSurface>));
    assert!((camera.aspect - 0.5).abs() < 1e-6);
}

#[test]
fn surface_added_later_receives_the_missed_width() {
    let mut camera = Camera::for_viewport(800, 600);
    let mut surface = RecordingSurface::default();
    let mut tracker = ViewportTracker::new(800);

    // Width changes while the renderer is still starting up
    assert!(tracker.handle_resize(1024, 768, &mut camera, None::<&mut RecordingSurface>));
    assert!((camera.aspect - 1024.0 / 768.0).abs() < 1e-6);

    // Renderer arrives; same width but it never saw the change
    assert!(tracker.handle_resize(1024, 768, &mut camera, Some(&mut surface)));
    assert_eq!(surface.calls, vec![(1024, 768)]);

    // Caught up: back to width-gated behavior
    assert!(!tracker.handle_resize(1024, 700, &mut camera, Some(&mut surface)));
    assert_eq!(surface.calls.len(), 1);
}

#[test]
fn surface_added_without_missed_change_is_a_no_op() {
    let mut camera = Camera::for_viewport(800, 600);
    let mut surface = RecordingSurface::default();
    let mut tracker = ViewportTracker::new(800);
    assert!(!tracker.handle_resize(800, 600, &mut camera, None::<&mut RecordingSurface>));
    assert!(!tracker.handle_resize(800, 600, &mut camera, Some(&mut surface)));
    assert!(surface.calls.is_empty());
}

#[test]
fn zero_height_does_not_divide_by_zero() {
    assert_eq!(aspect_of(300, 0), 300.0);
    let camera = Camera::for_viewport(300, 0);
    assert!(camera.projection_matrix().is_finite());
}

#[test]
fn camera_defaults_match_scene_setup() {
    let camera = Camera::new(1.5);
    assert_eq!(camera.position, glam::Vec3::new(0.0, 0.0, CAMERA_Z));
    assert!((camera.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
    assert_eq!(camera.znear, CAMERA_NEAR);
    assert_eq!(camera.zfar, CAMERA_FAR);
}

#[test]
fn view_matrix_moves_world_opposite_to_camera() {
    let mut camera = Camera::new(1.0);
    camera.position.y = -1.5;
    let p = camera.view_matrix().transform_point3(glam::Vec3::ZERO);
    assert!((p - glam::Vec3::new(0.0, 1.5, -CAMERA_Z)).length() < 1e-5);
}

#[test]
fn model_matrix_applies_x_then_y_then_z() {
    let r = glam::Vec3::new(0.3, -0.2, 0.1);
    let expected = glam::Mat4::from_rotation_x(r.x)
        * glam::Mat4::from_rotation_y(r.y)
        * glam::Mat4::from_rotation_z(r.z);
    assert!(model_matrix(r).abs_diff_eq(expected, 1e-5));
}
