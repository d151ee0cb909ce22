use crate::app::PreviewApp;

/// Baseline position of the metrics line, in image pixels.
const OVERLAY_ORIGIN: [f32; 2] = [10.0, 20.0];
const OVERLAY_FONT_SIZE: f32 = 13.0;

pub fn show(ctx: &egui::Context, app: &PreviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        if let Some(texture) = &app.texture {
            let tex_size = texture.size_vec2();
            let scale = (rect.width() / tex_size.x).min(rect.height() / tex_size.y);
            let img_rect = egui::Rect::from_center_size(rect.center(), tex_size * scale);

            draw_image(ui, texture.id(), img_rect);
            draw_overlay(ui, img_rect, scale, &app.overlay);
        } else {
            show_placeholder(ui);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().rect_filled(rect, 0.0, egui::Color32::BLACK);
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_overlay(ui: &egui::Ui, img_rect: egui::Rect, scale: f32, text: &str) {
    if text.is_empty() {
        return;
    }
    let pos = img_rect.left_top() + egui::vec2(OVERLAY_ORIGIN[0], OVERLAY_ORIGIN[1]) * scale;
    ui.painter().text(
        pos,
        egui::Align2::LEFT_BOTTOM,
        text,
        egui::FontId::proportional(OVERLAY_FONT_SIZE),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Waiting for camera")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
