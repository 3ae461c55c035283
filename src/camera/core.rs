use glam::{Mat4, Vec2, Vec3};

use crate::options::CameraOptions;
use crate::util::tween::lerp_position;

/// A camera position plus a look-at target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
}

impl CameraPose {
    /// Create a pose.
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Whether both vectors are finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.target.is_finite()
    }

    /// Interpolate position and target independently by `t`.
    pub fn lerp(&self, to: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: lerp_position(self.position, to.position, t),
            target: lerp_position(self.target, to.target, t),
        }
    }

    /// Pose looking at `center` from `center + offset`.
    pub fn looking_at(center: Vec3, offset: Vec3) -> CameraPose {
        CameraPose {
            position: center + offset,
            target: center,
        }
    }
}

/// Size of the drawable surface in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero (minimized window).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width / height, or 1.0 for an empty viewport.
    pub fn aspect(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Convert pixel coordinates (origin top-left, y down) to NDC.
    ///
    /// Returns `None` for non-finite input or an empty viewport.
    pub fn pixel_to_ndc(&self, pixel: Vec2) -> Option<Vec2> {
        if self.is_empty() || !pixel.is_finite() {
            return None;
        }
        Some(Vec2::new(
            2.0 * pixel.x / self.width as f32 - 1.0,
            1.0 - 2.0 * pixel.y / self.height as f32,
        ))
    }

    /// Convert NDC to pixel coordinates (origin top-left, y down).
    pub fn ndc_to_pixel(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x * 0.5 + 0.5) * self.width as f32,
            (0.5 - ndc.y * 0.5) * self.height as f32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera for `pose` with projection parameters from `options`.
    pub fn from_pose(
        pose: &CameraPose,
        options: &CameraOptions,
        viewport: Viewport,
    ) -> Self {
        Self {
            eye: pose.position,
            target: pose.target,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the view matrix.
    ///
    /// Falls back to identity when the pose is degenerate (eye on target,
    /// or looking straight along the up vector).
    pub fn build_view(&self) -> Mat4 {
        let forward = self.target - self.eye;
        let len_sq = forward.length_squared();
        if len_sq <= f32::EPSILON {
            return Mat4::IDENTITY;
        }
        let parallel =
            forward.cross(self.up).length_squared() <= f32::EPSILON * len_sq;
        let up = if parallel {
            Vec3::Z
        } else {
            self.up
        };
        Mat4::look_at_rh(self.eye, self.target, up)
    }

    /// Get just the projection matrix.
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses [0,1] depth range (wgpu/Vulkan convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}
