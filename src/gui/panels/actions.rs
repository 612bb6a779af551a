//! 操作按钮面板
//!
//! 全屏切换、最大化、最小化、还原、短暂隐藏，以及跨线程唤醒诊断。

use egui;

use crate::inspector::state::{WindowMirror, WindowRequest};

/// 渲染操作按钮面板
pub fn render(ui: &mut egui::Ui, state: &mut WindowMirror) {
    ui.horizontal_wrapped(|ui| {
        if ui.button("Toggle Fullscreen").clicked() {
            state.push(WindowRequest::ToggleFullscreen);
        }
        if ui.button("Maximize").clicked() {
            state.push(WindowRequest::Maximize);
        }
        if ui.button("Iconify").clicked() {
            state.push(WindowRequest::Iconify);
        }
        if ui.button("Restore").clicked() {
            state.push(WindowRequest::Restore);
        }
        if ui.button("Hide (briefly)").clicked() {
            state.push(WindowRequest::HideBriefly);
        }
        if ui
            .add_enabled(!state.wake_pending, egui::Button::new("Empty Event (3s)"))
            .clicked()
        {
            state.push(WindowRequest::PostWakeTest);
        }
    });

    if state.passthrough {
        ui.vertical_centered(|ui| {
            ui.label("Press H to disable mouse passthrough");
        });
    }

    if state.wake_pending {
        ui.label("Wake event posted, waiting for delivery...");
    } else if state.wake_received > 0 {
        ui.label(format!(
            "Wake events received on main thread: {}",
            state.wake_received
        ));
    }
}
