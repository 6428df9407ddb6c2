#[cfg(test)]
mod camera {
    use crate::renderer::{Camera, ViewCamera};
    use ultraviolet::Vec2;

    #[test]
    fn viewport_centre_maps_to_camera_position() {
        let mut cam = ViewCamera::new(800, 600);
        cam.pos = Vec2::new(2.0, -1.0);
        let p = cam.view_to_world(400.0, 300.0);
        assert!((p - cam.pos).mag() < 1e-5);
    }

    #[test]
    fn screen_y_grows_downwards_world_y_upwards() {
        let cam = ViewCamera::new(800, 600);
        let top = cam.view_to_world(400.0, 0.0);
        let bottom = cam.view_to_world(400.0, 600.0);
        assert!((top.y - cam.scale).abs() < 1e-5);
        assert!((bottom.y + cam.scale).abs() < 1e-5);
    }

    #[test]
    fn world_to_view_inverts_panned_camera() {
        let mut cam = ViewCamera::new(1024, 768);
        cam.pos = Vec2::new(-3.0, 1.5);
        cam.scale = 2.0;
        let world = Vec2::new(-2.2, 0.4);
        let (sx, sy) = cam.world_to_view(world);
        assert!((cam.view_to_world(sx, sy) - world).mag() < 1e-4);
    }

    #[test]
    fn pan_is_applied_over_updates() {
        let mut cam = ViewCamera::new(800, 600);
        cam.pan(Vec2::new(1.0, 0.0));
        cam.update();
        assert!(cam.pos.x > 0.0 && cam.pos.x < 1.0);
        for _ in 0..64 {
            cam.update();
        }
        assert!((cam.pos.x - 1.0).abs() < 1e-4);
        assert_eq!(cam.pending(), Vec2::zero());
    }

    #[test]
    fn zoom_keeps_cursor_point_fixed() {
        let mut cam = ViewCamera::new(800, 600);
        let before = cam.view_to_world(600.0, 150.0);
        cam.zoom(5.0, 600.0, 150.0);
        let after = cam.view_to_world(600.0, 150.0);
        assert!((before - after).mag() < 1e-4);
        assert!((cam.scale - 2.5).abs() < 1e-5);
    }
}

#[cfg(test)]
mod recorder {
    use crate::renderer::{DrawRecorder, Renderer};
    use ultraviolet::Vec2;

    #[test]
    fn records_and_counts_commands() {
        let mut r = DrawRecorder::new(640, 480);
        r.draw_line(Vec2::zero(), Vec2::one(), true);
        r.draw_line(Vec2::zero(), Vec2::one(), false);
        r.draw_circle(Vec2::zero(), 0.25);
        assert_eq!(r.lines(true), 1);
        assert_eq!(r.lines(false), 1);
        assert_eq!(r.circles(), 1);
        assert_eq!(r.viewport_size(), (640, 480));
        r.clear();
        assert!(r.commands.is_empty());
    }
}
