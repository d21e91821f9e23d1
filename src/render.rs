use glam::Vec2;
use image::{ImageBuffer, Rgb, RgbImage};

use crate::solver::StableFluid;

const VELOCITY_COLOR: Rgb<u8> = Rgb([0, 255, 255]);

/// Rasterises solver fields into RGB images; image row 0 is the top of the domain.
pub struct Renderer {
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Grayscale density, bilinearly shaded between cell centres, clamped to `[0, 1]`.
    pub fn render_density(&self, fluid: &StableFluid) -> RgbImage {
        let grid = fluid.grid();
        let n = grid.n() as f32;
        let density = fluid.density();
        let mut img = ImageBuffer::new(self.width, self.height);

        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let unit = self.to_unit(x, y);
            // Cell i is centred at (i - 0.5) / n.
            let gx = (unit.x * n + 0.5).clamp(0.0, n + 1.0);
            let gy = (unit.y * n + 0.5).clamp(0.0, n + 1.0);
            let value = sample_bilinear(grid.n(), density, gx, gy, |i, j| grid.index(i, j));
            let intensity = (value.clamp(0.0, 1.0) * 255.0) as u8;
            *pixel = Rgb([intensity, intensity, intensity]);
        }

        img
    }

    /// One normalised segment per interior cell, a cell long, on black.
    pub fn render_velocity(&self, fluid: &StableFluid) -> RgbImage {
        let grid = fluid.grid();
        let n = grid.n();
        let h = grid.cell_size();
        let mut img = ImageBuffer::from_pixel(self.width, self.height, Rgb([0, 0, 0]));

        for i in 1..=n {
            for j in 1..=n {
                let start = grid.cell_center(i, j);
                let velocity = fluid.velocity_at(i, j);
                let end = start + velocity.normalize_or_zero() * h;
                self.draw_line(&mut img, start, end, VELOCITY_COLOR);
            }
        }

        img
    }

    fn to_unit(&self, x: u32, y: u32) -> Vec2 {
        Vec2::new(
            (x as f32 + 0.5) / self.width as f32,
            1.0 - (y as f32 + 0.5) / self.height as f32,
        )
    }

    fn to_pixel(&self, unit: Vec2) -> Vec2 {
        Vec2::new(
            unit.x * self.width as f32,
            (1.0 - unit.y) * self.height as f32,
        )
    }

    fn draw_line(&self, img: &mut RgbImage, from: Vec2, to: Vec2, color: Rgb<u8>) {
        let a = self.to_pixel(from);
        let b = self.to_pixel(to);
        let steps = (b - a).abs().max_element().ceil().max(1.0) as usize;

        for step in 0..=steps {
            let p = a.lerp(b, step as f32 / steps as f32);
            if p.x >= 0.0 && p.y >= 0.0 && (p.x as u32) < self.width && (p.y as u32) < self.height {
                img.put_pixel(p.x as u32, p.y as u32, color);
            }
        }
    }
}

/// Bilinear sample of a ghost-bordered field at fractional grid coordinates in `[0, n + 1]`.
fn sample_bilinear(
    n: usize,
    field: &[f32],
    gx: f32,
    gy: f32,
    index: impl Fn(usize, usize) -> usize,
) -> f32 {
    let i0 = (gx as usize).min(n);
    let j0 = (gy as usize).min(n);
    let s = gx - i0 as f32;
    let t = gy - j0 as f32;
    let v00 = field[index(i0, j0)];
    let v10 = field[index(i0 + 1, j0)];
    let v01 = field[index(i0, j0 + 1)];
    let v11 = field[index(i0 + 1, j0 + 1)];
    let bottom = v00 + (v10 - v00) * s;
    let top = v01 + (v11 - v01) * s;
    bottom + (top - bottom) * t
}
