//! 检查循环模块
//!
//! Inspector 拥有被检查的窗口、GUI 状态和渲染上下文，实现事件驱动
//! 的检查循环：每次迭代读取当前窗口属性、重建面板、应用本帧用户
//! 提交的属性变更，然后渲染并呈现。
//!
//! # 每帧流程
//!
//! 1. 从窗口刷新只读属性快照
//! 2. 从镜像重建 egui 面板（收集属性变更请求）
//! 3. 按顺序应用全部请求（直接透传给 winit 的 setter）
//! 4. 清屏（带不透明度加权的预乘背景色）并绘制面板
//!
//! 所有稳态异常（平台拒绝某个 setter、属性不可用）静默回退，
//! 最多记录日志；只有交换链完全失效才视为运行时错误。

pub mod constraints;
pub mod state;

use std::time::Duration;

use tracing::{debug, info, warn};
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopProxy};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowLevel};

use crate::core::config::Config;
use crate::core::error::{GraphicsError, Result};
use crate::core::{event, UserEvent};
use crate::gfx::GpuContext;
use crate::gui::GuiManager;

use constraints::{aspect_terms, constrain_to_aspect, limit_bounds};
use state::{WindowMirror, WindowRequest};

/// 面板背后的清屏底色（线性空间）
const BACKGROUND: [f64; 3] = [0.10, 0.10, 0.12];

/// 唤醒诊断和 "Hide (briefly)" 使用的延迟，与原始测试工具一致
const POST_DELAY: Duration = Duration::from_secs(3);

/// 窗口属性检查器
pub struct Inspector {
    gfx: GpuContext,
    gui: GuiManager,
    mirror: WindowMirror,
    proxy: EventLoopProxy<UserEvent>,
}

impl Inspector {
    /// 创建检查器
    ///
    /// 创建窗口和图形上下文，探测位置报告是否可用，并从窗口的
    /// 初始状态填充镜像。任何失败都是致命启动错误。
    pub fn new(
        event_loop: &EventLoop<UserEvent>,
        config: &Config,
        proxy: EventLoopProxy<UserEvent>,
    ) -> Result<Self> {
        let gfx = GpuContext::new(event_loop, &config.window)?;
        let window = gfx.window();

        // 位置报告在部分平台（如 Wayland）上不可用，探测一次
        let position = window.outer_position().ok().map(|p| (p.x, p.y));
        if position.is_none() {
            info!("Window position reporting not supported on this platform");
        }

        let scale = window.scale_factor();
        let size: LogicalSize<f64> = window.inner_size().to_logical(scale);
        let mut mirror = WindowMirror::new(
            position,
            (size.width.round() as u32, size.height.round() as u32),
        );
        mirror.opacity_supported = gfx.translucency_supported;

        let gui = GuiManager::new(&gfx.device, gfx.surface_config.format, window)?;

        info!("Inspector initialized");

        Ok(Self {
            gfx,
            gui,
            mirror,
            proxy,
        })
    }

    /// 获取窗口引用
    pub fn window(&self) -> &Window {
        self.gfx.window()
    }

    /// 是否满足退出条件（关闭请求 + 关闭许可）
    pub fn close_permitted(&self) -> bool {
        self.mirror.close_permitted()
    }

    /// 处理窗口事件
    ///
    /// 先交给 egui 翻译输入，再处理检查器自己关心的事件。
    pub fn on_window_event(&mut self, event: &WindowEvent) -> egui_winit::EventResponse {
        let response = self.gui.handle_event(self.gfx.window(), event);

        match event {
            WindowEvent::CloseRequested => {
                debug!("Close requested");
                self.mirror.should_close = true;
            }
            WindowEvent::Resized(size) => {
                self.gfx.reconfigure_surface(size.width, size.height);
                self.enforce_aspect(*size);
            }
            WindowEvent::Focused(focused) => {
                // 自动最小化：全屏失焦时最小化窗口
                if !focused && self.mirror.auto_iconify && self.mirror.live.fullscreen {
                    debug!("Auto-iconify on focus loss");
                    self.gfx.window().set_minimized(true);
                }
            }
            WindowEvent::CursorEntered { .. } => {
                self.mirror.live.hovered = true;
            }
            WindowEvent::CursorLeft { .. } => {
                self.mirror.live.hovered = false;
            }
            WindowEvent::KeyboardInput { event: key, .. } if !response.consumed => {
                // 鼠标穿透开启后面板收不到点击，保留 H 键作为退路
                if self.mirror.passthrough
                    && key.state == ElementState::Pressed
                    && key.physical_key == PhysicalKey::Code(KeyCode::KeyH)
                {
                    info!("Disabling mouse passthrough via keyboard");
                    self.apply(WindowRequest::SetPassthrough(false));
                    self.mirror.passthrough = false;
                }
            }
            _ => {}
        }

        response
    }

    /// 处理从其他线程投递的用户事件（在主线程上执行）
    pub fn on_user_event(&mut self, event: UserEvent) {
        match event {
            UserEvent::WakePosted => {
                // 事件循环正阻塞在平台的消息等待中（甚至可能处于
                // 拖拽调整大小的嵌套消息循环）也会到达这里
                info!("Empty event received on main thread");
                self.mirror.wake_pending = false;
                self.mirror.wake_received += 1;
            }
            UserEvent::Reveal => {
                debug!("Revealing window after brief hide");
                self.gfx.window().set_visible(true);
            }
        }
    }

    /// 绘制一帧
    pub fn draw(&mut self) -> Result<()> {
        // 1. 刷新只读属性快照
        self.refresh_snapshot();

        // 2. 重建面板
        self.gui.update(self.gfx.window(), &mut self.mirror);

        // 3. 应用本帧的属性变更请求
        for request in self.mirror.drain_requests() {
            self.apply(request);
        }

        // 4. 获取交换链纹理
        let output = match self.gfx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.gfx.window().inner_size();
                self.gfx.reconfigure_surface(size.width, size.height);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => {
                return Err(GraphicsError::SwapchainError(format!(
                    "Failed to acquire next image: {}",
                    e
                ))
                .into())
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gfx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        // 5. 清屏，背景按不透明度预乘
        let alpha = if self.mirror.opacity_supported {
            f64::from(self.mirror.opacity)
        } else {
            1.0
        };
        {
            let _clear_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: BACKGROUND[0] * alpha,
                            g: BACKGROUND[1] * alpha,
                            b: BACKGROUND[2] * alpha,
                            a: alpha,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        // 6. 绘制面板并提交
        self.gui.render(
            &self.gfx.device,
            &self.gfx.queue,
            &mut encoder,
            &view,
            self.gfx.window(),
        )?;

        self.gfx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// 从窗口刷新只读属性快照
    fn refresh_snapshot(&mut self) {
        let window = self.gfx.window();
        let scale = window.scale_factor();
        let inner = window.inner_size();
        let logical: LogicalSize<f64> = inner.to_logical(scale);

        let live = &mut self.mirror.live;
        live.scale_factor = scale;
        live.framebuffer = (inner.width, inner.height);
        live.size = (logical.width.round() as u32, logical.height.round() as u32);
        live.position = window.outer_position().ok().map(|p| (p.x, p.y));

        // 边框尺寸：外框与客户区几何之差
        if let (Ok(outer_pos), Ok(inner_pos)) = (window.outer_position(), window.inner_position()) {
            let outer = window.outer_size();
            let left = inner_pos.x - outer_pos.x;
            let top = inner_pos.y - outer_pos.y;
            let right = outer.width as i32 - inner.width as i32 - left;
            let bottom = outer.height as i32 - inner.height as i32 - top;
            live.frame_extents = (left, top, right, bottom);
        }

        live.focused = window.has_focus();
        live.visible = window.is_visible().unwrap_or(true);
        live.iconified = window.is_minimized().unwrap_or(false);
        live.maximized = window.is_maximized();
        live.decorated = window.is_decorated();
        live.resizable = window.is_resizable();
        live.fullscreen = window.fullscreen().is_some();
    }

    /// 应用一条属性变更请求（直接透传给 winit）
    fn apply(&mut self, request: WindowRequest) {
        let window = self.gfx.window();
        debug!(?request, "Applying window request");

        match request {
            WindowRequest::SetPosition { x, y } => {
                window.set_outer_position(PhysicalPosition::new(x, y));
            }
            WindowRequest::SetSize { width, height } => {
                let _ = window.request_inner_size(LogicalSize::new(width, height));
            }
            WindowRequest::SetAspectRatio => {
                self.enforce_aspect(window.inner_size());
            }
            WindowRequest::SetSizeLimits => {
                let (min, max) = limit_bounds(&self.mirror);
                window.set_min_inner_size(min);
                window.set_max_inner_size(max);
            }
            WindowRequest::SetOpacity(opacity) => {
                // 实际生效发生在清屏时的帧合成
                self.mirror.opacity = opacity.clamp(0.0, 1.0);
            }
            WindowRequest::ToggleFullscreen => {
                if window.fullscreen().is_some() {
                    window.set_fullscreen(None);
                } else {
                    window.set_fullscreen(Some(Fullscreen::Borderless(None)));
                }
            }
            WindowRequest::Maximize => window.set_maximized(true),
            WindowRequest::Iconify => window.set_minimized(true),
            WindowRequest::Restore => {
                window.set_maximized(false);
                window.set_minimized(false);
            }
            WindowRequest::HideBriefly => {
                window.set_visible(false);
                event::post_after(self.proxy.clone(), UserEvent::Reveal, POST_DELAY);
            }
            WindowRequest::PostWakeTest => {
                self.mirror.wake_pending = true;
                event::post_after(self.proxy.clone(), UserEvent::WakePosted, POST_DELAY);
            }
            WindowRequest::SetDecorated(decorated) => window.set_decorations(decorated),
            WindowRequest::SetResizable(resizable) => window.set_resizable(resizable),
            WindowRequest::SetFloating(floating) => {
                window.set_window_level(if floating {
                    WindowLevel::AlwaysOnTop
                } else {
                    WindowLevel::Normal
                });
            }
            WindowRequest::SetPassthrough(passthrough) => {
                if let Err(e) = window.set_cursor_hittest(!passthrough) {
                    warn!("Mouse passthrough not supported: {}", e);
                    self.mirror.passthrough = false;
                }
            }
            WindowRequest::SetAutoIconify(_) => {
                // 影子属性，行为在 Focused(false) 事件中实现
            }
            WindowRequest::SetShouldClose(should_close) => {
                self.mirror.should_close = should_close;
            }
        }
    }

    /// 对给定尺寸强制执行宽高比约束
    ///
    /// winit 没有宽高比接口，违反启用比例的尺寸由检查器请求修正；
    /// 已符合比例时不发出请求，避免修正循环。
    fn enforce_aspect(&self, size: PhysicalSize<u32>) {
        let Some((numer, denom)) = aspect_terms(&self.mirror) else {
            return;
        };
        if let Some(corrected) = constrain_to_aspect(size, numer, denom) {
            debug!(
                from = ?(size.width, size.height),
                to = ?(corrected.width, corrected.height),
                "Enforcing aspect ratio"
            );
            let _ = self.gfx.window().request_inner_size(corrected);
        }
    }
}
