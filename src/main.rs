//! winprobe - 窗口属性手动测试工具
//!
//! 通过一个即时模式检查面板，逐项验证窗口管理接口的行为：
//! 位置、尺寸、宽高比、尺寸限制、显示器/全屏切换、不透明度和
//! 各个窗口属性。所有状态变更都是对窗口库调用的直接透传，
//! 结果由人眼观察窗口的反应来验证。
//!
//! # 使用方法
//!
//! ```bash
//! cargo run
//!
//! # 覆盖初始窗口尺寸
//! cargo run -- --width 1024 --height 768
//! ```
//!
//! # 架构概览
//!
//! ```text
//! ┌─────────────┐
//! │   main.rs   │  进程入口与事件循环
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Core     │  配置 / 日志 / 错误 / 用户事件
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Inspector  │  窗口状态镜像与检查循环
//! └──────┬──────┘
//!        │
//!   ┌────┴────┐
//!   │         │
//! ┌─▼──┐   ┌──▼──┐
//! │ GUI │   │ gfx │  egui 面板 / wgpu 表面
//! └─────┘   └─────┘
//! ```

mod core;
mod gfx;
mod gui;
mod inspector;

use crate::core::{log, Config, UserEvent};
use crate::inspector::Inspector;

use tracing::{error, info};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};

/// 应用程序入口点
///
/// 初始化日志系统、加载配置、创建窗口与检查器，并启动事件循环。
///
/// # 退出语义
///
/// - 正常关闭（关闭请求且关闭许可开启）：退出码 0
/// - 初始化失败（配置无效、窗口或设备创建失败）：退出码 1
///
/// # 事件处理
///
/// 主循环在两帧之间阻塞等待事件；收到任何事件的批次结束后渲染
/// 一帧，保持帧循环与 GUI 渲染一一对应。
fn main() {
    // 1. 加载配置（在初始化日志之前）
    let mut config = Config::from_file_or_default("config.toml");

    // 2. 应用命令行参数
    config.apply_args(std::env::args());

    // 3. 验证配置
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // 4. 初始化日志系统
    let log_file = if config.logging.file_output {
        Some(config.logging.log_file.as_str())
    } else {
        None
    };
    log::init_logger(config.logging.level, config.logging.file_output, log_file);
    info!("winprobe starting...");
    info!(version = env!("CARGO_PKG_VERSION"), "Application initialized");

    info!(
        width = config.window.width,
        height = config.window.height,
        title = %config.window.title,
        "Window configuration"
    );

    // 5. 创建带用户事件的事件循环
    let event_loop = match EventLoopBuilder::<UserEvent>::with_user_event().build() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            eprintln!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    let proxy = event_loop.create_proxy();

    // 6. 创建检查器（窗口 + 图形上下文 + 面板）
    let mut inspector = match Inspector::new(&event_loop, &config, proxy) {
        Ok(inspector) => inspector,
        Err(e) => {
            error!("Failed to initialize inspector: {}", e);
            eprintln!("Failed to initialize inspector: {}", e);
            std::process::exit(1);
        }
    };

    info!("Entering main loop...");

    // 7. 启动事件循环
    let mut dirty = true;
    let result = event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        match event {
            Event::Resumed => {
                inspector.window().request_redraw();
            }
            // 绘制一帧
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if let Err(e) = inspector.draw() {
                    error!("Draw failed: {}", e);
                    eprintln!("Draw failed: {}", e);
                    elwt.exit();
                }
                if inspector.close_permitted() {
                    info!("Close requested and permitted, shutting down...");
                    elwt.exit();
                }
            }
            // 其余窗口事件交给检查器处理
            Event::WindowEvent { event, .. } => {
                inspector.on_window_event(&event);
                if inspector.close_permitted() {
                    info!("Close requested and permitted, shutting down...");
                    elwt.exit();
                }
                dirty = true;
            }
            // 从其他线程投递的用户事件
            Event::UserEvent(user_event) => {
                inspector.on_user_event(user_event);
                dirty = true;
            }
            // 事件批次处理完毕，按需渲染下一帧
            Event::AboutToWait => {
                if dirty {
                    inspector.window().request_redraw();
                    dirty = false;
                }
            }
            _ => (),
        }
    });

    if let Err(e) = result {
        error!("Event loop error: {}", e);
        eprintln!("Event loop error: {}", e);
        std::process::exit(1);
    }

    info!("winprobe exited");
}
