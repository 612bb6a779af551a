//! wgpu 表面与设备管理
//!
//! 本模块负责窗口和 wgpu 图形设备的初始化，包括：
//! - 创建被检查的窗口
//! - 创建 wgpu 实例和窗口表面
//! - 选择和创建图形适配器
//! - 创建逻辑设备和命令队列
//! - 配置交换链
//!
//! 表面的 alpha 合成模式优先选择支持半透明的模式，使 Opacity 滑块
//! 可以作用于整个帧；当平台只提供不透明合成时，面板将把不透明度
//! 功能标记为不可用。

use std::sync::Arc;

use tracing::{debug, info};
use wgpu;
use winit::event_loop::EventLoopWindowTarget;
use winit::window::{Window, WindowBuilder};

use crate::core::config::WindowConfig;
use crate::core::error::{GraphicsError, Result};
use crate::core::UserEvent;

/// wgpu 图形上下文
///
/// 封装了被检查窗口及其表面、设备和命令队列。
pub struct GpuContext {
    /// 窗口表面
    pub surface: wgpu::Surface<'static>,
    /// 逻辑设备
    pub device: wgpu::Device,
    /// 命令队列
    pub queue: wgpu::Queue,
    /// 表面配置
    pub surface_config: wgpu::SurfaceConfiguration,
    /// 合成模式是否支持半透明（决定 Opacity 滑块是否可用）
    pub translucency_supported: bool,
    /// 窗口引用
    window: Arc<Window>,
}

impl GpuContext {
    /// 创建窗口和 wgpu 上下文
    ///
    /// # 参数
    ///
    /// * `target` - winit 事件循环引用
    /// * `config` - 窗口初始配置
    ///
    /// # 返回值
    ///
    /// 返回初始化完成的 GpuContext 实例；任何一步失败都视为致命
    /// 启动错误，由调用方终止进程。
    pub fn new(target: &EventLoopWindowTarget<UserEvent>, config: &WindowConfig) -> Result<Self> {
        info!("Initializing window and wgpu context");

        // 1. 创建 wgpu 实例
        debug!("Creating wgpu instance");
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            dx12_shader_compiler: Default::default(),
            flags: wgpu::InstanceFlags::default(),
            gles_minor_version: wgpu::Gles3MinorVersion::Automatic,
        });

        // 2. 创建窗口
        debug!("Creating window");
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
            .with_resizable(config.resizable)
            .with_transparent(true)
            .build(target)
            .map_err(|e| GraphicsError::WindowCreation(format!("Failed to create window: {}", e)))?;

        let window = Arc::new(window);

        // 3. 创建表面（wgpu 0.19 API）
        debug!("Creating surface");
        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| GraphicsError::DeviceCreation(format!("Failed to create surface: {}", e)))?;

        // 4. 请求适配器
        debug!("Requesting adapter");
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| GraphicsError::DeviceCreation("Failed to find suitable adapter".to_string()))?;

        info!("Selected adapter: {:?}", adapter.get_info());

        // 5. 请求设备和队列
        debug!("Requesting device and queue");
        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Main Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            },
            None,
        ))
        .map_err(|e| GraphicsError::DeviceCreation(format!("Failed to create device: {}", e)))?;

        // 6. 配置表面
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| matches!(f, wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb))
            .unwrap_or(surface_caps.formats[0]);

        debug!("Surface format: {:?}", surface_format);

        let alpha_mode = pick_alpha_mode(&surface_caps.alpha_modes);
        let translucency_supported = alpha_mode != wgpu::CompositeAlphaMode::Opaque;

        debug!(?alpha_mode, translucency_supported, "Surface alpha mode");

        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &surface_config);

        info!("wgpu context initialized successfully");

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            translucency_supported,
            window,
        })
    }

    /// 获取窗口引用
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// 重新配置表面（用于窗口大小调整）
    pub fn reconfigure_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }
}

/// 选取表面 alpha 合成模式，优先支持半透明的模式
fn pick_alpha_mode(available: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    for preferred in [
        wgpu::CompositeAlphaMode::PreMultiplied,
        wgpu::CompositeAlphaMode::PostMultiplied,
        wgpu::CompositeAlphaMode::Inherit,
    ] {
        if available.contains(&preferred) {
            return preferred;
        }
    }
    available
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_alpha_mode_prefers_translucent() {
        let modes = [
            wgpu::CompositeAlphaMode::Opaque,
            wgpu::CompositeAlphaMode::PostMultiplied,
        ];
        assert_eq!(pick_alpha_mode(&modes), wgpu::CompositeAlphaMode::PostMultiplied);
    }

    #[test]
    fn test_pick_alpha_mode_inherit_over_opaque() {
        // X11/Vulkan 上常见的组合：Inherit 仍可承载半透明
        let modes = [
            wgpu::CompositeAlphaMode::Opaque,
            wgpu::CompositeAlphaMode::Inherit,
        ];
        assert_eq!(pick_alpha_mode(&modes), wgpu::CompositeAlphaMode::Inherit);
    }

    #[test]
    fn test_pick_alpha_mode_falls_back_to_first() {
        let modes = [wgpu::CompositeAlphaMode::Opaque];
        assert_eq!(pick_alpha_mode(&modes), wgpu::CompositeAlphaMode::Opaque);
    }
}
