//! GUI 面板模块
//!
//! 包含检查面板各分区的实现。每个分区从窗口状态镜像读取，
//! 把用户的提交写回镜像的请求队列。

pub mod actions;
pub mod attributes;
pub mod geometry;
pub mod info;
pub mod limits;

use crate::inspector::state::EditField;

/// 数值编辑框的一帧事件
pub(crate) struct EditEvents {
    /// 按 Enter 提交
    pub committed: bool,
    /// 失焦但未提交
    pub deactivated: bool,
}

/// 绘制一个数值编辑框并报告提交 / 失焦事件
///
/// 提交语义与原始测试工具一致：只有 Enter 视为提交，
/// 其他方式失焦由调用方回写缓冲。
pub(crate) fn numeric_edit(ui: &mut egui::Ui, field: &mut EditField) -> EditEvents {
    let response = ui.add(egui::TextEdit::singleline(&mut field.text).desired_width(70.0));
    let committed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    EditEvents {
        committed,
        deactivated: response.lost_focus() && !committed,
    }
}

/// 绘制一个只读布尔值行
pub(crate) fn value_bool(ui: &mut egui::Ui, label: &str, value: bool) {
    let mut value = value;
    ui.add_enabled(false, egui::Checkbox::new(&mut value, label));
}
