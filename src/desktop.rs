use eframe::egui;
use glam::Vec2;

use crate::config::{SolverConfig, View};
use crate::input::PointerInput;
use crate::solver::StableFluid;

/// Interactive viewer: one solver tick per repaint at the configured fixed timestep.
pub struct DesktopApp {
    simulation: StableFluid,
    config: SolverConfig,
    pointer: PointerInput,
    view: View,
    paused: bool,
    frame_count: usize,
    canvas_size: f32,
}

impl DesktopApp {
    pub fn new(config: SolverConfig) -> Result<Self, crate::SolverError> {
        let simulation = StableFluid::from_config(&config)?;
        Ok(Self {
            simulation,
            pointer: PointerInput::from_config(&config),
            view: config.view,
            paused: false,
            frame_count: 0,
            canvas_size: 640.0,
            config,
        })
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (clear, toggle, pause) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::C),
                i.key_pressed(egui::Key::V),
                i.key_pressed(egui::Key::Space),
            )
        });
        if clear {
            self.simulation.clear();
            self.frame_count = 0;
        }
        if toggle {
            self.view = self.view.toggled();
        }
        if pause {
            self.paused = !self.paused;
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, rect: egui::Rect, hovered: bool) {
        if !hovered {
            return;
        }
        let (pos, primary, secondary) = ctx.input(|i| {
            (
                i.pointer.interact_pos(),
                i.pointer.button_pressed(egui::PointerButton::Primary),
                i.pointer.button_pressed(egui::PointerButton::Secondary),
            )
        });
        let Some(pos) = pos else {
            return;
        };

        // Bottom-left origin, matching the solver's j axis.
        let local = Vec2::new(pos.x - rect.left(), rect.bottom() - pos.y);
        let viewport = Vec2::new(rect.width(), rect.height());

        if primary {
            if let Err(err) = self.pointer.press_velocity(&mut self.simulation, local, viewport) {
                log::warn!("velocity impulse rejected: {err}");
            }
        }
        if secondary {
            if let Err(err) = self.pointer.press_density(&mut self.simulation, local, viewport) {
                log::warn!("density source rejected: {err}");
            }
        }
    }

    fn paint_density(&self, painter: &egui::Painter, rect: egui::Rect) {
        let grid = self.simulation.grid();
        let n = grid.n();
        let h = grid.cell_size();
        let density = self.simulation.density();
        let to_screen = |p: Vec2| egui::pos2(rect.left() + p.x * rect.width(), rect.bottom() - p.y * rect.height());
        let shade = |i: usize, j: usize| {
            let d = density[grid.index(i, j)].clamp(0.0, 1.0);
            egui::Color32::from_gray((d * 255.0) as u8)
        };

        let mut mesh = egui::Mesh::default();
        for i in 0..=n {
            for j in 0..=n {
                let corner = grid.cell_center(i, j);
                let base = mesh.vertices.len() as u32;
                mesh.colored_vertex(to_screen(corner), shade(i, j));
                mesh.colored_vertex(to_screen(corner + Vec2::new(h, 0.0)), shade(i + 1, j));
                mesh.colored_vertex(to_screen(corner + Vec2::new(h, h)), shade(i + 1, j + 1));
                mesh.colored_vertex(to_screen(corner + Vec2::new(0.0, h)), shade(i, j + 1));
                mesh.add_triangle(base, base + 1, base + 2);
                mesh.add_triangle(base, base + 2, base + 3);
            }
        }
        painter.add(egui::Shape::mesh(mesh));
    }

    fn paint_velocity(&self, painter: &egui::Painter, rect: egui::Rect) {
        let grid = self.simulation.grid();
        let n = grid.n();
        let h = grid.cell_size();
        let to_screen = |p: Vec2| egui::pos2(rect.left() + p.x * rect.width(), rect.bottom() - p.y * rect.height());
        let stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0, 255, 255));

        painter.rect_filled(rect, 0.0, egui::Color32::BLACK);
        for i in 1..=n {
            for j in 1..=n {
                let start = grid.cell_center(i, j);
                let direction = self.simulation.velocity_at(i, j).normalize_or_zero();
                let end = start + direction * h;
                painter.line_segment([to_screen(start), to_screen(end)], stroke);
            }
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Pause/Resume").clicked() {
                    self.paused = !self.paused;
                }
                if ui.button("Clear").clicked() {
                    self.simulation.clear();
                    self.frame_count = 0;
                }
                ui.radio_value(&mut self.view, View::Density, "Density");
                ui.radio_value(&mut self.view, View::Velocity, "Velocity");
                ui.add(egui::Slider::new(&mut self.config.diffusion, 0.0..=0.001).text("Diffusion"));
            });

            ui.separator();

            let (rect, response) = ui.allocate_exact_size(
                egui::Vec2::splat(self.canvas_size),
                egui::Sense::click(),
            );
            self.handle_pointer(ctx, rect, response.hovered());

            if !self.paused {
                match self.simulation.tick(self.config.dt, self.config.diffusion) {
                    Ok(()) => self.frame_count += 1,
                    Err(err) => {
                        log::warn!("tick rejected, pausing: {err}");
                        self.paused = true;
                    }
                }
            }

            let painter = ui.painter_at(rect);
            match self.view {
                View::Density => self.paint_density(&painter, rect),
                View::Velocity => self.paint_velocity(&painter, rect),
            }

            ui.label(format!(
                "Frame: {} | Left-click: velocity impulse | Right-click: density | C: clear | V: view | Space: pause",
                self.frame_count
            ));
        });

        ctx.request_repaint();
    }
}
