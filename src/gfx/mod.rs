//! 图形后端模块
//!
//! 基于 wgpu 封装窗口表面、设备和命令队列。本工具没有场景渲染
//! 管线，表面只用于清屏和绘制 egui 面板。

mod context;

pub use context::GpuContext;
