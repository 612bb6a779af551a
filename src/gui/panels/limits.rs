//! 尺寸约束面板
//!
//! 宽高比约束和最小/最大尺寸限制。比例项和限制值取绝对值；
//! 勾选框或任一字段提交都会整组重新下发约束。

use egui;

use super::numeric_edit;
use crate::inspector::state::{EditField, WindowMirror, WindowRequest};

/// 渲染尺寸约束面板
pub fn render(ui: &mut egui::Ui, state: &mut WindowMirror) {
    // 宽高比
    let mut update_ratio = false;
    ui.horizontal(|ui| {
        if ui.checkbox(&mut state.aspect_enabled, "Aspect Ratio").changed() {
            update_ratio = true;
        }
        update_ratio |= term_edit(ui, &mut state.aspect_numer);
        update_ratio |= term_edit(ui, &mut state.aspect_denom);
    });
    if update_ratio {
        state.push(WindowRequest::SetAspectRatio);
    }

    // 尺寸限制
    let mut update_limits = false;

    ui.horizontal(|ui| {
        if ui.checkbox(&mut state.min_size.enabled, "Minimum Size").changed() {
            update_limits = true;
        }
        update_limits |= term_edit(ui, &mut state.min_size.width);
        update_limits |= term_edit(ui, &mut state.min_size.height);
    });

    ui.horizontal(|ui| {
        if ui.checkbox(&mut state.max_size.enabled, "Maximum Size").changed() {
            update_limits = true;
        }
        update_limits |= term_edit(ui, &mut state.max_size.width);
        update_limits |= term_edit(ui, &mut state.max_size.height);
    });

    if update_limits {
        state.push(WindowRequest::SetSizeLimits);
    }
}

/// 约束项编辑框：提交返回 true，失焦未提交时回写缓冲
fn term_edit(ui: &mut egui::Ui, field: &mut EditField) -> bool {
    let events = numeric_edit(ui, field);
    if events.committed {
        return field.commit_abs().is_some();
    }
    if events.deactivated {
        field.resync();
    }
    false
}
