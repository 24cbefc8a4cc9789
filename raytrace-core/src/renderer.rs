//! Drives the pixel grid: generates a primary ray per pixel via
//! [`RenderPlane`], shades it, and writes the RGBA8 result into a
//! caller-owned buffer.

use std::sync::mpsc::channel;
use std::sync::Arc;

use threadpool::ThreadPool;

use crate::camera::Camera;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shader::ray_cast;

/// One bounce of mirror reflection, as fixed by the renderer's public
/// contract (`Renderer::render_into`). Callers that want a different
/// depth use [`ray_cast`] directly.
pub const DEFAULT_MAX_REFLECTIONS: u32 = 1;

/// Maps pixel coordinates to primary-ray origins and directions.
///
/// `pixel_size` introduces a small per-pixel parallax offset to the
/// ray origin (`pixel_size * (right*dx + up*dy)`), making the
/// projection mildly off-pinhole. This is load-bearing: it is part of
/// the rendered image, not an approximation to be "fixed".
struct RenderPlane<'a> {
    camera: &'a Camera,
    width: usize,
    height: usize,
    pixel_size: f64,
}

impl<'a> RenderPlane<'a> {
    fn new(camera: &'a Camera, width: usize, height: usize, pixel_size: f64) -> Self {
        Self {
            camera,
            width,
            height,
            pixel_size,
        }
    }

    fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let max_offset = (self.width.max(self.height) / 2) as f64;
        let mid_x = (self.width / 2) as f64;
        let mid_y = (self.height / 2) as f64;

        let dx = x as f64 - mid_x;
        let dy = mid_y - y as f64;

        let direction = self.camera.direction_at(dx / max_offset, dy / max_offset);
        let origin = self.camera.transform.position
            + self.pixel_size * (self.camera.transform.right() * dx + self.camera.transform.up() * dy);

        Ray::new(origin, direction)
    }
}

fn pixel_size_for_width(width: usize) -> f64 {
    3.0 / width as f64
}

/// Iterates the pixel grid and writes RGBA8 pixels, row-major,
/// top-left origin, into a caller-provided buffer sized
/// `width * height * 4`.
pub struct Renderer;

impl Renderer {
    /// Renders `scene` into `buffer` sequentially, recursing into
    /// mirror reflection up to `max_reflections` bounces per pixel.
    pub fn render_into(
        scene: &Scene,
        buffer: &mut [u8],
        width: usize,
        height: usize,
        max_reflections: u32,
    ) {
        assert_eq!(buffer.len(), width * height * 4, "buffer is not width*height*4 bytes");

        let plane = RenderPlane::new(&scene.camera, width, height, pixel_size_for_width(width));

        log::debug!("rendering {width}x{height} sequentially");
        for y in 0..height {
            log::trace!("row {y}/{height}");
            for x in 0..width {
                let ray = plane.ray_for_pixel(x, y);
                let colour = ray_cast(&ray, scene, max_reflections);
                write_pixel(buffer, width, x, y, colour.to_bytes());
            }
        }
    }

    /// Same contract as [`Renderer::render_into`], but splits the
    /// pixel grid across a [`threadpool::ThreadPool`] of
    /// `num_threads` workers: one task per pixel, results collected
    /// back through an `mpsc` channel. Requires `Scene: Send + Sync`.
    pub fn render_into_parallel(
        scene: Arc<Scene>,
        buffer: &mut [u8],
        width: usize,
        height: usize,
        num_threads: usize,
        max_reflections: u32,
    ) {
        assert_eq!(buffer.len(), width * height * 4, "buffer is not width*height*4 bytes");

        log::debug!("rendering {width}x{height} across {num_threads} threads");
        let pool = ThreadPool::new(num_threads);
        let (tx, rx) = channel();
        let pixel_size = pixel_size_for_width(width);

        for y in 0..height {
            for x in 0..width {
                let tx = tx.clone();
                let scene = Arc::clone(&scene);
                pool.execute(move || {
                    let plane = RenderPlane::new(&scene.camera, width, height, pixel_size);
                    let ray = plane.ray_for_pixel(x, y);
                    let colour = ray_cast(&ray, &scene, max_reflections);
                    tx.send((x, y, colour.to_bytes()))
                        .expect("render worker could not send pixel result");
                });
            }
        }
        drop(tx);

        for (x, y, bytes) in rx.iter().take(width * height) {
            write_pixel(buffer, width, x, y, bytes);
        }
    }
}

fn write_pixel(buffer: &mut [u8], width: usize, x: usize, y: usize, rgb: [u8; 3]) {
    let base = 4 * (y * width + x);
    buffer[base] = rgb[0];
    buffer[base + 1] = rgb[1];
    buffer[base + 2] = rgb[2];
    buffer[base + 3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};
    use crate::material::Material;
    use crate::matrix3::Matrix3;
    use crate::primitive::{Primitive, PrimitiveKind};
    use crate::scene::Scene;
    use crate::transform::Transform;
    use crate::vec3::Vec3;

    fn camera_facing_forward() -> Camera {
        Camera::new(Transform::default(), 60.0)
    }

    #[test]
    fn empty_scene_renders_all_black() {
        let scene = Scene::new(camera_facing_forward(), BLACK, None);
        let (w, h) = (16, 9);
        let mut buf = vec![0u8; w * h * 4];
        Renderer::render_into(&scene, &mut buf, w, h, DEFAULT_MAX_REFLECTIONS);

        for px in buf.chunks(4) {
            assert_eq!(px, [0, 0, 0, 255]);
        }
    }

    #[test]
    fn lit_sphere_centre_is_brighter_than_corner() {
        let mut scene = Scene::new(camera_facing_forward(), WHITE, None);
        scene.add_primitive(Primitive::new(
            PrimitiveKind::Sphere,
            Material::new(1.0, WHITE, BLACK),
            Transform::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(1.0, 1.0, 1.0), Matrix3::identity()),
        ));

        let (w, h) = (16, 9);
        let mut buf = vec![0u8; w * h * 4];
        Renderer::render_into(&scene, &mut buf, w, h, DEFAULT_MAX_REFLECTIONS);

        let centre_idx = 4 * ((h / 2) * w + w / 2);
        let corner_idx = 0;
        assert!(buf[centre_idx] > 0, "sphere silhouette should be lit at centre");
        assert_eq!(&buf[corner_idx..corner_idx + 4], &[0, 0, 0, 255]);
    }

    #[test]
    fn fov_increase_never_grows_silhouette() {
        fn silhouette_radius(fov_deg: f64) -> u32 {
            let camera = Camera::new(Transform::default(), fov_deg);
            let mut scene = Scene::new(camera, BLACK, None);
            scene.add_primitive(Primitive::new(
                PrimitiveKind::Sphere,
                Material::new(1.0, WHITE, BLACK),
                Transform::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(1.0, 1.0, 1.0), Matrix3::identity()),
            ));
            let (w, h) = (64, 36);
            let mut buf = vec![0u8; w * h * 4];
            // Non-black ambient so a hit is visible without lighting.
            scene.ambient = WHITE;
            Renderer::render_into(&scene, &mut buf, w, h, DEFAULT_MAX_REFLECTIONS);

            let mid_y = h / 2;
            let mut radius = 0u32;
            for x in 0..w {
                let idx = 4 * (mid_y * w + x);
                if buf[idx] > 0 || buf[idx + 1] > 0 || buf[idx + 2] > 0 {
                    radius = radius.max((x as i64 - (w / 2) as i64).unsigned_abs() as u32);
                }
            }
            radius
        }

        let r30 = silhouette_radius(30.0);
        let r60 = silhouette_radius(60.0);
        let r120 = silhouette_radius(120.0);
        assert!(r30 <= r60);
        assert!(r60 <= r120);
    }
}
