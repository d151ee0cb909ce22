use lumen_core::frame::Frame;

/// Convert an RGB Frame to an egui ColorImage.
pub fn frame_to_color_image(frame: &Frame) -> egui::ColorImage {
    let h = frame.height();
    let w = frame.width();
    let data = frame.data();
    let mut pixels = Vec::with_capacity(h * w);

    for row in 0..h {
        for col in 0..w {
            pixels.push(egui::Color32::from_rgb(
                data[[row, col, 0]],
                data[[row, col, 1]],
                data[[row, col, 2]],
            ));
        }
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
