//! Projection and ray-picking math used by the default
//! [`SceneAdapter`](super::SceneAdapter) methods.

use glam::{Vec2, Vec3};

use crate::camera::{Camera, Viewport};
use crate::orbit::BodyId;

/// Clip-space `w` below which a point counts as behind the camera.
const MIN_CLIP_W: f32 = 1e-6;

/// Something the pointer can hit: a sphere standing in for a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickable {
    /// Body the sphere belongs to.
    pub id: BodyId,
    /// World-space center.
    pub center: Vec3,
    /// Hit radius.
    pub radius: f32,
}

/// A ray with unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// Project `world` to viewport pixels (origin top-left, y down).
///
/// Returns `None` for points on or behind the camera plane, where the
/// perspective divide would mirror them onto the screen.
pub fn project_point(
    world: Vec3,
    camera: &Camera,
    viewport: Viewport,
) -> Option<Vec2> {
    if viewport.is_empty() || !world.is_finite() {
        return None;
    }
    let clip = camera.build_matrix() * world.extend(1.0);
    if clip.w.is_nan() || clip.w <= MIN_CLIP_W {
        return None;
    }
    let ndc = clip.truncate().truncate() / clip.w;
    ndc.is_finite().then(|| viewport.ndc_to_pixel(ndc))
}

/// World-space ray through the NDC point `ndc`.
pub fn pick_ray(ndc: Vec2, camera: &Camera) -> Option<Ray> {
    if !ndc.is_finite() {
        return None;
    }
    let inv = camera.build_matrix().inverse();
    // [0,1] depth range: z = 0 is the near plane, z = 1 the far plane
    let near = inv.project_point3(ndc.extend(0.0));
    let far = inv.project_point3(ndc.extend(1.0));
    let direction = (far - near).try_normalize()?;
    near.is_finite().then_some(Ray {
        origin: near,
        direction,
    })
}

/// Distance along `ray` to the first intersection with a sphere, if any.
///
/// Returns `None` when the sphere is missed or lies entirely behind the
/// ray origin. An origin inside the sphere reports distance 0.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    if radius.is_nan() || radius <= 0.0 {
        return None;
    }
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }
    let disc = b * b - c;
    if disc < 0.0 || b > 0.0 {
        return None;
    }
    Some(-b - disc.sqrt())
}

/// Frontmost pickable under the NDC point, or `None`.
pub fn pick_frontmost(
    ndc: Vec2,
    camera: &Camera,
    pickables: &[Pickable],
) -> Option<BodyId> {
    let ray = pick_ray(ndc, camera)?;
    pickables
        .iter()
        .filter_map(|p| ray_sphere(&ray, p.center, p.radius).map(|d| (d, p.id)))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| id)
}
