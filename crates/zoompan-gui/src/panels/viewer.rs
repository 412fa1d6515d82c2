use zoompan_core::geometry::{Bounds, Point};
use zoompan_core::transform::AffineTransform;

use crate::app::ZoompanApp;

pub fn show(ctx: &egui::Context, app: &mut ZoompanApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .viewer
            .texture
            .as_ref()
            .map(|t| (t.id(), t.size()));

        let Some((texture_id, [width, height])) = texture_info else {
            show_placeholder(ui);
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        let bounds = Bounds::from_size(f64::from(rect.width()), f64::from(rect.height()));

        let mut redraw = handle_drag(ui, &response, app, rect);
        redraw |= handle_wheel(ui, &response, app, bounds);

        if response.double_clicked() {
            app.viewer.controller.reset();
            redraw = true;
        }
        if redraw {
            ctx.request_repaint();
        }

        let image_size = egui::vec2(width as f32, height as f32);
        draw_image(ui, texture_id, rect, image_size, &app.viewer.controller.snapshot());
        draw_viewing_label(ui, rect, &app.viewer.viewing_label);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn to_local(pos: egui::Pos2, rect: egui::Rect) -> Point {
    let v = pos - rect.min;
    Point::new(f64::from(v.x), f64::from(v.y))
}

fn handle_drag(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut ZoompanApp,
    rect: egui::Rect,
) -> bool {
    let controller = &mut app.viewer.controller;

    if response.drag_started() {
        // Anchor at the press position, not where the drag threshold was crossed.
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or(response.interact_pointer_pos());
        if let Some(pos) = origin {
            controller.on_drag_start(to_local(pos, rect));
        }
    }

    let mut moved = false;
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            moved = controller.on_drag_move(to_local(pos, rect));
        }
    }

    if response.drag_stopped() {
        controller.on_drag_end();
    }
    moved
}

fn handle_wheel(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut ZoompanApp,
    bounds: Bounds,
) -> bool {
    let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return false;
    }
    // Scrolling up (positive delta) zooms in, i.e. a negative wheel rotation.
    let rotation = if scroll_delta > 0.0 { -1 } else { 1 };
    app.viewer.controller.on_wheel(rotation, bounds)
}

fn draw_image(
    ui: &egui::Ui,
    texture_id: egui::TextureId,
    rect: egui::Rect,
    image_size: egui::Vec2,
    transform: &AffineTransform,
) {
    let corners = [
        (Point::new(0.0, 0.0), egui::pos2(0.0, 0.0)),
        (Point::new(f64::from(image_size.x), 0.0), egui::pos2(1.0, 0.0)),
        (
            Point::new(f64::from(image_size.x), f64::from(image_size.y)),
            egui::pos2(1.0, 1.0),
        ),
        (Point::new(0.0, f64::from(image_size.y)), egui::pos2(0.0, 1.0)),
    ];

    let mut mesh = egui::Mesh::with_texture(texture_id);
    for (corner, uv) in corners {
        let p = transform.apply(corner);
        mesh.vertices.push(egui::epaint::Vertex {
            pos: rect.min + egui::vec2(p.x as f32, p.y as f32),
            uv,
            color: egui::Color32::WHITE,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    ui.painter_at(rect).add(egui::Shape::mesh(mesh));
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
