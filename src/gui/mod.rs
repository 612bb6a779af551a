//! GUI 系统模块
//!
//! 基于 egui + wgpu 实现的即时模式检查面板。面板每帧从窗口状态
//! 镜像重建，不保留任何持久化的控件对象。

mod manager;
pub mod panels;

pub use manager::GuiManager;
