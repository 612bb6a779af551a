//! 用户事件模块
//!
//! 提供通过 `EventLoopProxy` 从其他线程唤醒主事件循环的机制。
//!
//! 主循环在两帧之间阻塞等待输入事件，`post_after` 允许一个后台线程
//! 在固定延迟后向主循环投递一个自定义事件。这覆盖两个用途：
//!
//! - 跨线程唤醒诊断：验证在主线程阻塞（甚至处于平台内部的嵌套消息
//!   循环，例如拖拽窗口边框调整大小）时，投递的事件仍能在主线程上
//!   被观察到
//! - "Hide (briefly)" 操作的定时重新显示，避免在主循环里做阻塞等待

use std::time::Duration;

use tracing::debug;
use winit::event_loop::EventLoopProxy;

/// 投递到主事件循环的自定义事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    /// 跨线程唤醒诊断事件，由后台线程在延迟结束后投递
    WakePosted,

    /// 重新显示被 "Hide (briefly)" 隐藏的窗口
    Reveal,
}

/// 在指定延迟后从后台线程投递一个用户事件
///
/// 立即返回；实际投递发生在新起的 OS 线程上。如果事件循环已经退出，
/// 投递失败只记录日志。
pub fn post_after(proxy: EventLoopProxy<UserEvent>, event: UserEvent, delay: Duration) {
    std::thread::spawn(move || {
        std::thread::sleep(delay);
        if proxy.send_event(event).is_err() {
            debug!(?event, "Event loop already closed, dropping posted event");
        }
    });
}
