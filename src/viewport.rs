//! Width-gated viewport resizing.
//!
//! Mobile browsers change the viewport height when the address bar shows or
//! hides. Re-projecting on those events makes the field jump, so only a width
//! change (rotation, window resize) updates the renderer and the camera.

use crate::camera::Camera;

/// Anything whose output size follows the viewport, in CSS pixels.
pub trait SurfaceResize {
    fn set_size(&mut self, width: u32, height: u32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportTracker {
    width: u32,
    // Width changed while no surface existed; resize it when one shows up
    surface_stale: bool,
}

impl ViewportTracker {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            surface_stale: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns `true` when the camera/surface were updated: on a width
    /// change, or when a surface first arrives after a width change it
    /// missed.
    pub fn handle_resize<S: SurfaceResize + ?Sized>(
        &mut self,
        width: u32,
        height: u32,
        camera: &mut Camera,
        surface: Option<&mut S>,
    ) -> bool {
        let catch_up = self.surface_stale && surface.is_some();
        if width == self.width && !catch_up {
            return false;
        }
        self.width = width;
        match surface {
            Some(s) => {
                s.set_size(width, height);
                self.surface_stale = false;
            }
            None => self.surface_stale = true,
        }
        camera.set_viewport(width, height);
        log::info!("[viewport] resized to {}x{}", width, height);
        true
    }
}
