//! 位置与尺寸面板
//!
//! 窗口位置和客户区尺寸的可编辑字段。按 Enter 提交；外部变化
//! （例如用户拖拽窗口）或失焦未提交时，字段回写为实时值。

use egui;

use super::numeric_edit;
use crate::inspector::state::{WindowMirror, WindowRequest};

/// 渲染位置与尺寸面板
pub fn render(ui: &mut egui::Ui, state: &mut WindowMirror) {
    ui.vertical_centered(|ui| {
        ui.label("Press Enter in a text field to set value");
    });

    if state.position_supported {
        let (live_x, live_y) = state
            .live
            .position
            .unwrap_or((state.pos_x.value(), state.pos_y.value()));

        ui.horizontal(|ui| {
            ui.label("Position");

            let events = numeric_edit(ui, &mut state.pos_x);
            if events.committed {
                if let Some(x) = state.pos_x.commit() {
                    state.push(WindowRequest::SetPosition { x, y: live_y });
                }
            } else {
                state.pos_x.observe(live_x, events.deactivated);
            }

            let events = numeric_edit(ui, &mut state.pos_y);
            if events.committed {
                if let Some(y) = state.pos_y.commit() {
                    state.push(WindowRequest::SetPosition { x: live_x, y });
                }
            } else {
                state.pos_y.observe(live_y, events.deactivated);
            }
        });
    } else {
        ui.label("Position not supported");
    }

    let (live_w, live_h) = state.live.size;

    ui.horizontal(|ui| {
        ui.label("Size");

        let events = numeric_edit(ui, &mut state.size_w);
        if events.committed {
            if let Some(width) = state.size_w.commit_abs() {
                state.push(WindowRequest::SetSize {
                    width: width as u32,
                    height: live_h,
                });
            }
        } else {
            state.size_w.observe(live_w as i32, events.deactivated);
        }

        let events = numeric_edit(ui, &mut state.size_h);
        if events.committed {
            if let Some(height) = state.size_h.commit_abs() {
                state.push(WindowRequest::SetSize {
                    width: live_w,
                    height: height as u32,
                });
            }
        } else {
            state.size_h.observe(live_h as i32, events.deactivated);
        }
    });
}
