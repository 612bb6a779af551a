//! 属性面板
//!
//! 不透明度滑块、关闭许可门，以及窗口属性勾选框。可写属性直接
//! 产生变更请求，只读属性以禁用勾选框的形式展示实时状态。

use egui;

use super::value_bool;
use crate::inspector::state::{WindowMirror, WindowRequest};

/// 渲染属性面板
pub fn render(ui: &mut egui::Ui, state: &mut WindowMirror) {
    // 不透明度（合成模式不支持半透明时禁用）
    ui.horizontal(|ui| {
        ui.label(format!("Opacity: {:.3}", state.opacity));
        let response = ui.add_enabled(
            state.opacity_supported,
            egui::Slider::new(&mut state.opacity, 0.0..=1.0).show_value(false),
        );
        if response.changed() {
            let opacity = state.opacity;
            state.push(WindowRequest::SetOpacity(opacity));
        }
    });

    // 关闭控制
    ui.horizontal(|ui| {
        let mut should_close = state.should_close;
        if ui.checkbox(&mut should_close, "Should Close").changed() {
            state.push(WindowRequest::SetShouldClose(should_close));
        }
        ui.checkbox(&mut state.may_close, "May Close");
    });

    ui.vertical_centered(|ui| {
        ui.label("Attributes");
    });

    ui.horizontal_wrapped(|ui| {
        // 有 getter 的可写属性从实时快照读取
        let mut decorated = state.live.decorated;
        if ui.checkbox(&mut decorated, "Decorated").changed() {
            state.push(WindowRequest::SetDecorated(decorated));
        }

        let mut resizable = state.live.resizable;
        if ui.checkbox(&mut resizable, "Resizable").changed() {
            state.push(WindowRequest::SetResizable(resizable));
        }

        // 没有 getter 的属性使用镜像中的影子值
        if ui.checkbox(&mut state.floating, "Floating").changed() {
            let floating = state.floating;
            state.push(WindowRequest::SetFloating(floating));
        }

        if ui.checkbox(&mut state.passthrough, "Mouse Passthrough").changed() {
            let passthrough = state.passthrough;
            state.push(WindowRequest::SetPassthrough(passthrough));
        }

        if ui.checkbox(&mut state.auto_iconify, "Auto Iconify").changed() {
            let auto_iconify = state.auto_iconify;
            state.push(WindowRequest::SetAutoIconify(auto_iconify));
        }
    });

    ui.horizontal_wrapped(|ui| {
        value_bool(ui, "Focused", state.live.focused);
        value_bool(ui, "Hovered", state.live.hovered);
        value_bool(ui, "Visible", state.live.visible);
        value_bool(ui, "Iconified", state.live.iconified);
        value_bool(ui, "Maximized", state.live.maximized);
    });
}
