//! 只读信息面板
//!
//! 帧缓冲尺寸、内容缩放比例和窗口边框尺寸。

use egui;

use crate::inspector::state::WindowMirror;

/// 渲染只读信息面板
pub fn render(ui: &mut egui::Ui, state: &WindowMirror) {
    let live = &state.live;

    ui.horizontal(|ui| {
        ui.label("Framebuffer Size");
        ui.label(format!("{}", live.framebuffer.0));
        ui.label(format!("{}", live.framebuffer.1));
    });

    ui.horizontal(|ui| {
        ui.label("Content Scale");
        ui.label(format!("{:.2}", live.scale_factor));
    });

    let (left, top, right, bottom) = live.frame_extents;
    ui.horizontal(|ui| {
        ui.label("Frame Size:");
        ui.label(format!("{}", left));
        ui.label(format!("{}", top));
        ui.label(format!("{}", right));
        ui.label(format!("{}", bottom));
    });
}
