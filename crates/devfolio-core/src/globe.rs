//! Rotating wireframe globe with tech markers.
//!
//! The scene graph is a handful of static meshes (sphere, great-circle rings,
//! labeled markers, arcs between markers) spun slowly as a whole and projected
//! through a perspective camera onto the 2D [`Surface`].

use std::f64::consts::PI;
use std::ops::{Add, Mul};

use crate::animation::Animation;
use crate::color::Color;
use crate::random::RandomSource;
use crate::surface::{Font, Surface, Viewport};

pub const GLOBE_RADIUS: f64 = 2.0;
/// Arc control points are pushed out to this radius.
pub const ARC_LIFT_RADIUS: f64 = 2.2;
pub const ARC_SEGMENTS: usize = 20;
pub const RING_SEGMENTS: usize = 100;
pub const LONGITUDE_RINGS: usize = 18;
pub const LATITUDE_RINGS: usize = 6;
/// Radians per frame about Y.
pub const SPIN_Y: f64 = 0.001;
/// Radians per frame about X.
pub const SPIN_X: f64 = 0.0002;

const SPHERE_COLOR: u32 = 0x1A_1F2C;
const SPHERE_OPACITY: f64 = 0.8;
const RING_COLOR: u32 = 0x8E_9196;
const RING_OPACITY: f64 = 0.15;
const MARKER_OPACITY: f64 = 0.8;
const ARC_OPACITY: f64 = 0.3;
/// Alpha multiplier for geometry on the far side of the sphere.
const BACKSIDE_FADE: f64 = 0.35;

/// A tech marker: label, color, marker radius in world units.
pub const TECH_MARKERS: [(&str, u32, f64); 12] = [
    ("JavaScript", 0xF7_DF1E, 0.12),
    ("React", 0x61_DAFB, 0.12),
    ("TypeScript", 0x31_78C6, 0.12),
    ("Node.js", 0x33_9933, 0.12),
    ("Python", 0x37_76AB, 0.12),
    ("HTML5", 0xE3_4F26, 0.10),
    ("CSS3", 0x15_72B6, 0.10),
    ("GraphQL", 0xE1_0098, 0.10),
    ("AWS", 0xFF_9900, 0.10),
    ("Docker", 0x24_96ED, 0.10),
    ("MongoDB", 0x47_A248, 0.10),
    ("Git", 0xF0_5032, 0.10),
];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector, or `fallback` when the length is ~0.
    #[must_use]
    pub fn normalize_or(self, fallback: Vec3) -> Self {
        let len = self.length();
        if len < 1e-9 { fallback } else { self * (1.0 / len) }
    }

    #[must_use]
    pub fn rotate_x(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    #[must_use]
    pub fn rotate_y(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }

    /// Point on a sphere from latitude/longitude in degrees.
    pub fn from_lat_lng(lat: f64, lng: f64, radius: f64) -> Self {
        let phi = (90.0 - lat).to_radians();
        let theta = (lng + 180.0).to_radians();
        Self::new(
            -radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Samples a quadratic Bézier into `segments + 1` points.
pub fn quadratic_bezier(start: Vec3, control: Vec3, end: Vec3, segments: usize) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / segments.max(1) as f64;
            let u = 1.0 - t;
            start * (u * u) + control * (2.0 * u * t) + end * (t * t)
        })
        .collect()
}

/// A point projected to surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Pixels per world unit at this depth.
    pub scale: f64,
}

/// Perspective camera on the +Z axis looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub distance: f64,
}

impl PerspectiveCamera {
    pub fn new(aspect: f64) -> Self {
        Self {
            fov_deg: 45.0,
            aspect,
            near: 0.1,
            far: 1000.0,
            distance: 6.0,
        }
    }

    /// Projects a world point, `None` when it falls outside the near/far planes.
    pub fn project(&self, p: Vec3, viewport: Viewport) -> Option<Projected> {
        let depth = self.distance - p.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let focal = 1.0 / (self.fov_deg.to_radians() / 2.0).tan();
        let ndc_x = p.x * focal / self.aspect / depth;
        let ndc_y = p.y * focal / depth;
        Some(Projected {
            x: (ndc_x + 1.0) / 2.0 * viewport.width,
            y: (1.0 - ndc_y) / 2.0 * viewport.height,
            scale: focal / depth * viewport.height / 2.0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub opacity: f64,
}

impl Material {
    fn new(color: u32, opacity: f64) -> Self {
        Self {
            color: Color::from_u32(color),
            opacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Sphere { radius: f64 },
    /// Closed polyline.
    Ring { points: Vec<Vec3> },
    Marker {
        center: Vec3,
        radius: f64,
        label: &'static str,
    },
    /// Open polyline.
    Arc { points: Vec<Vec3> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
}

/// Great circle in the YZ plane, turned about Y then X.
fn great_circle(about_y: f64, about_x: f64) -> Vec<Vec3> {
    (0..=RING_SEGMENTS)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / RING_SEGMENTS as f64 * 2.0 * PI;
            Vec3::new(0.0, GLOBE_RADIUS * t.cos(), GLOBE_RADIUS * t.sin())
                .rotate_y(about_y)
                .rotate_x(about_x)
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    meshes: Vec<Mesh>,
    rotation_x: f64,
    rotation_y: f64,
}

impl Scene {
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn rotation(&self) -> (f64, f64) {
        (self.rotation_x, self.rotation_y)
    }

    /// Applies the scene rotation (Y first, then X).
    pub fn to_world(&self, p: Vec3) -> Vec3 {
        p.rotate_y(self.rotation_y).rotate_x(self.rotation_x)
    }

    /// Drops every mesh. Returns how many were released.
    pub fn dispose(&mut self) -> usize {
        let released = self.meshes.len();
        self.meshes.clear();
        released
    }
}

#[derive(Debug, Clone)]
pub struct Globe {
    scene: Scene,
    camera: PerspectiveCamera,
    viewport: Viewport,
}

impl Globe {
    pub fn spawn(viewport: Viewport, rng: &mut dyn RandomSource) -> Self {
        let mut meshes = vec![Mesh {
            geometry: Geometry::Sphere {
                radius: GLOBE_RADIUS,
            },
            material: Material::new(SPHERE_COLOR, SPHERE_OPACITY),
        }];

        #[allow(clippy::cast_precision_loss)]
        {
            for i in 0..LONGITUDE_RINGS {
                meshes.push(Mesh {
                    geometry: Geometry::Ring {
                        points: great_circle(PI / LONGITUDE_RINGS as f64 * i as f64, 0.0),
                    },
                    material: Material::new(RING_COLOR, RING_OPACITY),
                });
            }
            for i in 0..LATITUDE_RINGS {
                meshes.push(Mesh {
                    geometry: Geometry::Ring {
                        points: great_circle(PI / 2.0, PI / LATITUDE_RINGS as f64 * i as f64),
                    },
                    material: Material::new(RING_COLOR, RING_OPACITY),
                });
            }
        }

        let markers: Vec<(Vec3, u32)> = TECH_MARKERS
            .iter()
            .map(|&(label, color, radius)| {
                let lat = rng.range(-80.0, 80.0);
                let lng = rng.range(-180.0, 180.0);
                let center = Vec3::from_lat_lng(lat, lng, GLOBE_RADIUS);
                meshes.push(Mesh {
                    geometry: Geometry::Marker {
                        center,
                        radius,
                        label,
                    },
                    material: Material::new(color, MARKER_OPACITY),
                });
                (center, color)
            })
            .collect();

        for (i, &(start, color)) in markers.iter().enumerate() {
            for &(end, _) in markers.iter().skip(i + 1).take(2) {
                let control = (start + end).normalize_or(Vec3::Y) * ARC_LIFT_RADIUS;
                meshes.push(Mesh {
                    geometry: Geometry::Arc {
                        points: quadratic_bezier(start, control, end, ARC_SEGMENTS),
                    },
                    material: Material::new(color, ARC_OPACITY),
                });
            }
        }

        tracing::debug!(meshes = meshes.len(), "globe scene built");

        Self {
            scene: Scene {
                meshes,
                ..Scene::default()
            },
            camera: PerspectiveCamera::new(viewport.aspect()),
            viewport,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// Projects a scene-local point; also reports whether it is on the near
    /// side of the sphere's horizon as seen from the camera.
    fn project(&self, p: Vec3) -> Option<(Projected, bool)> {
        let world = self.scene.to_world(p);
        let horizon = GLOBE_RADIUS * GLOBE_RADIUS / self.camera.distance;
        self.camera
            .project(world, self.viewport)
            .map(|proj| (proj, world.z >= horizon))
    }

    /// Splits a polyline into runs on the near or far side of the sphere.
    fn runs(&self, points: &[Vec3], front: bool) -> Vec<Vec<(f64, f64)>> {
        let mut runs = Vec::new();
        let mut current = Vec::new();
        for &p in points {
            match self.project(p) {
                Some((proj, facing)) if facing == front => current.push((proj.x, proj.y)),
                _ => {
                    if current.len() > 1 {
                        runs.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                }
            }
        }
        if current.len() > 1 {
            runs.push(current);
        }
        runs
    }

    fn draw_side(&self, surface: &mut dyn Surface, front: bool) {
        let fade = if front { 1.0 } else { BACKSIDE_FADE };
        for mesh in &self.scene.meshes {
            let alpha = mesh.material.opacity * fade;
            match &mesh.geometry {
                Geometry::Ring { points } | Geometry::Arc { points } => {
                    for run in self.runs(points, front) {
                        surface.stroke_polyline(&run, mesh.material.color.with_opacity(alpha), 1.0);
                    }
                }
                Geometry::Marker {
                    center,
                    radius,
                    label,
                } => {
                    let Some((proj, facing)) = self.project(*center) else {
                        continue;
                    };
                    if facing != front {
                        continue;
                    }
                    let color = mesh.material.color.with_opacity(alpha);
                    let r = radius * proj.scale;
                    surface.fill_circle(proj.x, proj.y, r, color);
                    if front {
                        surface.fill_text(
                            label,
                            proj.x + r * 1.5,
                            proj.y - r * 1.5,
                            &Font::sans(11.0),
                            Color::WHITE.with_opacity(0.7),
                        );
                    }
                }
                Geometry::Sphere { .. } => {}
            }
        }
    }
}

impl Animation for Globe {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    fn step(&mut self, _rng: &mut dyn RandomSource) {
        self.scene.rotation_y += SPIN_Y;
        self.scene.rotation_x += SPIN_X;
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.draw_side(surface, false);
        for mesh in &self.scene.meshes {
            if let Geometry::Sphere { radius } = mesh.geometry {
                if let Some(center) = self.camera.project(Vec3::ZERO, self.viewport) {
                    surface.fill_circle(
                        center.x,
                        center.y,
                        radius * center.scale,
                        mesh.material.color.with_opacity(mesh.material.opacity),
                    );
                }
            }
        }
        self.draw_side(surface, true);
    }

    fn release(&mut self) {
        let released = self.scene.dispose();
        tracing::debug!(released, "globe meshes released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{Scripted, seeded};
    use crate::surface::{DrawOp, RecordingSurface};

    const VIEW: Viewport = Viewport::new(1280.0, 720.0);

    fn marker_centers(globe: &Globe) -> Vec<Vec3> {
        globe
            .scene()
            .meshes()
            .iter()
            .filter_map(|m| match m.geometry {
                Geometry::Marker { center, .. } => Some(center),
                _ => None,
            })
            .collect()
    }

    fn arcs(globe: &Globe) -> Vec<&Vec<Vec3>> {
        globe
            .scene()
            .meshes()
            .iter()
            .filter_map(|m| match &m.geometry {
                Geometry::Arc { points } => Some(points),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_scene_composition() {
        let globe = Globe::spawn(VIEW, &mut seeded(1));
        let meshes = globe.scene().meshes();

        let spheres = meshes
            .iter()
            .filter(|m| matches!(m.geometry, Geometry::Sphere { .. }))
            .count();
        let rings = meshes
            .iter()
            .filter(|m| matches!(m.geometry, Geometry::Ring { .. }))
            .count();

        assert_eq!(spheres, 1);
        assert_eq!(rings, LONGITUDE_RINGS + LATITUDE_RINGS);
        assert_eq!(marker_centers(&globe).len(), TECH_MARKERS.len());
        // each marker links to the next two: 10 * 2 + 1
        assert_eq!(arcs(&globe).len(), 21);
    }

    #[test]
    fn test_markers_sit_on_sphere() {
        let globe = Globe::spawn(VIEW, &mut seeded(2));
        for c in marker_centers(&globe) {
            assert!((c.length() - GLOBE_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn test_arcs_bulge_outward() {
        let globe = Globe::spawn(VIEW, &mut seeded(3));
        for arc in arcs(&globe) {
            assert_eq!(arc.len(), ARC_SEGMENTS + 1);
            let chord_mid = (arc[0] + arc[ARC_SEGMENTS]) * 0.5;
            assert!(arc[ARC_SEGMENTS / 2].length() > chord_mid.length());
        }
    }

    #[test]
    fn test_antipodal_arc_is_finite() {
        let a = Vec3::from_lat_lng(0.0, 0.0, GLOBE_RADIUS);
        let b = Vec3::from_lat_lng(0.0, 180.0, GLOBE_RADIUS);
        let control = (a + b).normalize_or(Vec3::Y) * ARC_LIFT_RADIUS;
        let points = quadratic_bezier(a, control, b, ARC_SEGMENTS);
        assert!(points.iter().all(|p| p.length().is_finite()));
    }

    #[test]
    fn test_lat_lng_poles() {
        let north = Vec3::from_lat_lng(90.0, 0.0, 2.0);
        assert!((north.y - 2.0).abs() < 1e-9);
        assert!(north.x.abs() < 1e-9 && north.z.abs() < 1e-9);
    }

    #[test]
    fn test_camera_projects_origin_to_center() {
        let cam = PerspectiveCamera::new(VIEW.aspect());
        let p = cam.project(Vec3::ZERO, VIEW).unwrap();
        assert!((p.x - 640.0).abs() < 1e-9);
        assert!((p.y - 360.0).abs() < 1e-9);

        let up = cam.project(Vec3::new(0.0, 1.0, 0.0), VIEW).unwrap();
        assert!(up.y < p.y, "+Y is up on screen");

        assert!(cam.project(Vec3::new(0.0, 0.0, 6.0), VIEW).is_none());
    }

    #[test]
    fn test_rotation_is_constant_rate() {
        let mut globe = Globe::spawn(VIEW, &mut seeded(4));
        let mut rng = Scripted::constant(0.5);
        for _ in 0..1000 {
            globe.step(&mut rng);
        }
        let (rx, ry) = globe.scene().rotation();
        assert!((ry - 1.0).abs() < 1e-9);
        assert!((rx - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut globe = Globe::spawn(VIEW, &mut seeded(5));
        globe.resize(Viewport::new(500.0, 1000.0));
        assert!((globe.camera().aspect - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_draw_back_sphere_front() {
        let globe = Globe::spawn(VIEW, &mut seeded(6));
        let mut surface = RecordingSurface::new(VIEW);
        globe.draw(&mut surface);

        let sphere = Color::from_u32(SPHERE_COLOR).with_opacity(SPHERE_OPACITY);
        let sphere_at = surface
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Circle { color, .. } if *color == sphere))
            .unwrap();
        assert!(sphere_at > 0);
        assert!(sphere_at < surface.ops.len() - 1);
        // labels only on the near side
        let labels = surface.count(|op| matches!(op, DrawOp::Text { .. }));
        assert!(labels <= TECH_MARKERS.len());
    }

    #[test]
    fn test_release_disposes_all_meshes() {
        let mut globe = Globe::spawn(VIEW, &mut seeded(7));
        let total = globe.scene().meshes().len();
        assert_eq!(globe.scene.dispose(), total);
        assert!(globe.scene().meshes().is_empty());

        let mut globe = Globe::spawn(VIEW, &mut seeded(7));
        globe.release();
        assert!(globe.scene().meshes().is_empty());
    }
}
