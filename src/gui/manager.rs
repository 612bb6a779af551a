//! GUI 管理器
//!
//! GuiManager 是 GUI 系统的核心，负责集成 egui 和 wgpu，
//! 处理输入事件，每帧重建检查面板，并渲染 GUI。

use egui;
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiState;
use winit::window::Window;

use crate::core::error::Result;
use crate::gui::panels;
use crate::inspector::state::WindowMirror;

/// GUI 管理器（使用 egui + wgpu）
pub struct GuiManager {
    // egui 核心组件
    context: egui::Context,
    state: EguiState,
    renderer: EguiRenderer,
}

impl GuiManager {
    /// 创建 GUI 管理器
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        window: &Window,
    ) -> Result<Self> {
        // 创建 egui context
        let context = egui::Context::default();

        // 创建 egui-winit state
        let state = EguiState::new(
            context.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
        );

        // 创建 egui-wgpu renderer
        let renderer = EguiRenderer::new(device, surface_format, None, 1);

        Ok(Self {
            context,
            state,
            renderer,
        })
    }

    /// 处理输入事件
    ///
    /// 返回事件是否被 GUI 消费以及是否需要重绘。
    pub fn handle_event(
        &mut self,
        window: &Window,
        event: &winit::event::WindowEvent,
    ) -> egui_winit::EventResponse {
        self.state.on_window_event(window, event)
    }

    /// 更新 GUI（从窗口状态镜像重建面板）
    pub fn update(&mut self, window: &Window, mirror: &mut WindowMirror) {
        // 开始新帧
        let raw_input = self.state.take_egui_input(window);
        self.context.begin_frame(raw_input);

        // 面板铺满整个窗口，与原始测试工具的满窗布局一致
        egui::CentralPanel::default().show(&self.context, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                panels::actions::render(ui, mirror);
                ui.separator();

                panels::geometry::render(ui, mirror);
                ui.separator();

                panels::limits::render(ui, mirror);
                ui.separator();

                panels::info::render(ui, mirror);
                ui.separator();

                panels::attributes::render(ui, mirror);
            });
        });
    }

    /// 渲染 GUI（绘制到 wgpu）
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        window: &Window,
    ) -> Result<()> {
        // 结束帧，获取输出
        let full_output = self.context.end_frame();

        // 处理平台输出（光标、复制粘贴等）
        self.state
            .handle_platform_output(window, full_output.platform_output);

        // 更新纹理和缓冲
        let paint_jobs = self
            .context
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [window.inner_size().width, window.inner_size().height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        // 没有 paint callback，update_buffers 返回的命令缓冲为空
        let _ = self
            .renderer
            .update_buffers(device, queue, encoder, &paint_jobs, &screen_descriptor);

        // 渲染（叠加在清屏结果之上）
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        // 清理释放的纹理
        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        Ok(())
    }
}
