use crate::constants::{
    CAMERA_GAIN, POINTER_SENSITIVITY, ROTATION_GAIN, SCROLL_SENSITIVITY, Z_DRIFT_PER_FRAME,
};
use glam::Vec3;
use std::f32::consts::TAU;

/// Latest pointer/scroll input, written by event handlers and read once per
/// frame.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct InputState {
    /// Pointer offset from the viewport center, in CSS pixels.
    pub mouse_x: f32,
    pub mouse_y: f32,
    /// Vertical page scroll offset, in CSS pixels.
    pub scroll_y: f32,
}

impl InputState {
    #[inline]
    pub fn set_pointer(&mut self, client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) {
        self.mouse_x = client_x - viewport_w * 0.5;
        self.mouse_y = client_y - viewport_h * 0.5;
    }

    #[inline]
    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
    }
}

/// Instantaneous targets derived from input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionTargets {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub camera_y: f32,
}

/// Smoothed orientation of the star cloud and vertical camera position.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub rotation: Vec3,
    pub camera_y: f32,
}

impl MotionState {
    pub fn targets(input: &InputState) -> MotionTargets {
        MotionTargets {
            rotation_x: input.mouse_y * POINTER_SENSITIVITY,
            rotation_y: input.mouse_x * POINTER_SENSITIVITY,
            camera_y: -(input.scroll_y * SCROLL_SENSITIVITY),
        }
    }

    /// Advance one frame: rotation x/y and camera y move a fixed fraction of
    /// the way to their targets, z drifts by a constant.
    pub fn step(&mut self, input: &InputState) {
        let t = Self::targets(input);
        self.rotation.x += ROTATION_GAIN * (t.rotation_x - self.rotation.x);
        self.rotation.y += ROTATION_GAIN * (t.rotation_y - self.rotation.y);
        self.rotation.z = (self.rotation.z + Z_DRIFT_PER_FRAME).rem_euclid(TAU);
        self.camera_y += CAMERA_GAIN * (t.camera_y - self.camera_y);
    }
}
