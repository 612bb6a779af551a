//! 错误处理模块
//!
//! 定义了工具中使用的统一错误类型。
//!
//! # 设计原则
//!
//! - 为每种错误类型提供清晰的上下文信息
//! - 支持错误链（error source）
//! - 易于模式匹配和错误处理
//!
//! 运行期间的非致命状况（平台不支持某属性、文本解析失败）不会产生
//! 错误值，而是回退到最近一次的已知状态；这里的错误类型只覆盖启动
//! 阶段的致命失败。

use std::fmt;

/// 工具统一的 Result 类型
///
/// 所有可能返回错误的函数都应该使用这个类型。
pub type Result<T> = std::result::Result<T, WinProbeError>;

/// winprobe 的错误类型
#[derive(Debug)]
pub enum WinProbeError {
    /// 配置错误
    Config(ConfigError),

    /// 图形 / 窗口系统错误
    Graphics(GraphicsError),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 图形 / 窗口系统相关的错误
#[derive(Debug)]
pub enum GraphicsError {
    /// 窗口创建失败
    WindowCreation(String),

    /// 设备创建失败
    DeviceCreation(String),

    /// 交换链错误
    SwapchainError(String),
}

impl fmt::Display for WinProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinProbeError::Config(e) => write!(f, "Configuration error: {}", e),
            WinProbeError::Graphics(e) => write!(f, "Graphics error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::WindowCreation(msg) => write!(f, "Window creation failed: {}", msg),
            GraphicsError::DeviceCreation(msg) => write!(f, "Device creation failed: {}", msg),
            GraphicsError::SwapchainError(msg) => write!(f, "Swapchain error: {}", msg),
        }
    }
}

impl std::error::Error for WinProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WinProbeError::Config(e) => Some(e),
            WinProbeError::Graphics(e) => Some(e),
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for GraphicsError {}

// 实现 From trait 以便于错误转换
impl From<ConfigError> for WinProbeError {
    fn from(err: ConfigError) -> Self {
        WinProbeError::Config(err)
    }
}

impl From<GraphicsError> for WinProbeError {
    fn from(err: GraphicsError) -> Self {
        WinProbeError::Graphics(err)
    }
}
