//! 核心功能模块
//!
//! 本模块提供了测试工具的基础功能，包括日志系统、配置管理、错误处理
//! 和用户事件。这些模块独立于具体的窗口属性检查逻辑，负责进程级的
//! 初始化和运行支撑。
//!
//! # 模块组织
//!
//! - `log`：日志系统，提供结构化的日志记录功能
//! - `config`：配置管理，支持从配置文件加载工具设置
//! - `error`：错误处理，定义统一的错误类型
//! - `event`：用户事件，提供跨线程唤醒事件循环的机制

pub mod config;
pub mod error;
pub mod event;
pub mod log;

// 重新导出常用类型，方便使用
pub use config::Config;
pub use error::{Result, WinProbeError};
pub use event::UserEvent;
