//! 窗口状态镜像
//!
//! WindowMirror 保存所有面板相关的状态数据：可编辑字段的文本缓冲、
//! 最近一次观测到的属性值，以及 winit 没有 getter 的属性的影子值。
//! 面板每帧从镜像构建，用户的提交以 `WindowRequest` 的形式累积，
//! 由检查循环在面板构建完成后统一应用到窗口。
//!
//! # 字段同步约定
//!
//! 每个数值字段由一个文本缓冲和最近观测值组成：
//! - 按 Enter 提交：解析文本并下发对应的属性设置请求
//! - 外部变化（例如用户拖拽窗口）：未聚焦时缓冲被实时值覆盖
//! - 编辑框失焦但未提交：缓冲回退到实时值
//! - 文本无法解析：静默回退到最近的已知值

/// 可编辑数值字段
///
/// 文本缓冲与最近观测值的配对。缓冲只在提交或回写时变化，
/// 观测值跟踪窗口侧的实时状态。
#[derive(Debug, Clone)]
pub struct EditField {
    /// 编辑框文本缓冲
    pub text: String,
    /// 最近一次观测到的值
    last: i32,
}

impl EditField {
    pub fn new(value: i32) -> Self {
        Self {
            text: value.to_string(),
            last: value,
        }
    }

    /// 最近观测值
    pub fn value(&self) -> i32 {
        self.last
    }

    /// 用给定值覆盖观测值并回写文本缓冲
    pub fn sync(&mut self, value: i32) {
        self.last = value;
        self.text = value.to_string();
    }

    /// 观测窗口侧的实时值
    ///
    /// 实时值发生外部变化、或编辑框刚刚失焦未提交时，回写文本缓冲。
    pub fn observe(&mut self, live: i32, deactivated: bool) {
        if live != self.last || deactivated {
            self.sync(live);
        }
        self.last = live;
    }

    /// 编辑框失焦未提交时回写文本缓冲
    pub fn resync(&mut self) {
        self.text = self.last.to_string();
    }

    /// 提交文本缓冲
    ///
    /// 解析成功返回解析值并记为观测值；解析失败回退显示并返回 `None`。
    pub fn commit(&mut self) -> Option<i32> {
        match self.text.trim().parse::<i32>() {
            Ok(value) => {
                self.sync(value);
                Some(value)
            }
            Err(_) => {
                self.resync();
                None
            }
        }
    }

    /// 提交文本缓冲并取绝对值（用于尺寸、比例等非负量）
    pub fn commit_abs(&mut self) -> Option<i32> {
        let value = self.commit()?.abs();
        self.sync(value);
        Some(value)
    }
}

/// 带开关的尺寸限制组（最小尺寸 / 最大尺寸各一组）
#[derive(Debug, Clone)]
pub struct LimitGroup {
    /// 该组限制是否启用
    pub enabled: bool,
    pub width: EditField,
    pub height: EditField,
}

impl LimitGroup {
    fn new(width: i32, height: i32) -> Self {
        Self {
            enabled: false,
            width: EditField::new(width),
            height: EditField::new(height),
        }
    }
}

/// 面板向窗口发出的属性变更请求
///
/// 一帧内面板可以发出多条请求，检查循环在渲染前按顺序应用。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowRequest {
    SetPosition { x: i32, y: i32 },
    SetSize { width: u32, height: u32 },
    /// 按镜像中当前的比例设置重新下发宽高比约束
    SetAspectRatio,
    /// 按镜像中当前的限制组重新下发最小/最大尺寸
    SetSizeLimits,
    SetOpacity(f32),
    ToggleFullscreen,
    Maximize,
    Iconify,
    Restore,
    /// 隐藏窗口，三秒后由定时事件重新显示
    HideBriefly,
    /// 启动跨线程唤醒诊断（三秒后从后台线程投递事件）
    PostWakeTest,
    SetDecorated(bool),
    SetResizable(bool),
    SetFloating(bool),
    SetPassthrough(bool),
    SetAutoIconify(bool),
    SetShouldClose(bool),
}

/// 窗口属性的只读快照
///
/// 每帧在面板构建之前由检查循环从窗口刷新。
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveSnapshot {
    /// 窗口外框位置（平台不支持时为 None）
    pub position: Option<(i32, i32)>,
    /// 客户区逻辑尺寸
    pub size: (u32, u32),
    /// 帧缓冲（物理）尺寸
    pub framebuffer: (u32, u32),
    /// 内容缩放比例
    pub scale_factor: f64,
    /// 窗口边框尺寸（左、上、右、下）
    pub frame_extents: (i32, i32, i32, i32),
    pub focused: bool,
    pub hovered: bool,
    pub visible: bool,
    pub iconified: bool,
    pub maximized: bool,
    pub decorated: bool,
    pub resizable: bool,
    pub fullscreen: bool,
}

/// 窗口状态镜像
///
/// 面板的全部可变状态。数值字段只在提交时推送到窗口，
/// winit 没有 getter 的属性（置顶、鼠标穿透、自动最小化）
/// 以影子布尔值的形式维护在这里。
pub struct WindowMirror {
    // 位置与尺寸
    pub pos_x: EditField,
    pub pos_y: EditField,
    /// 平台是否支持报告窗口位置
    pub position_supported: bool,
    pub size_w: EditField,
    pub size_h: EditField,

    // 宽高比约束
    pub aspect_enabled: bool,
    pub aspect_numer: EditField,
    pub aspect_denom: EditField,

    // 尺寸限制
    pub min_size: LimitGroup,
    pub max_size: LimitGroup,

    // 不透明度
    pub opacity: f32,
    pub opacity_supported: bool,

    // 关闭控制
    pub should_close: bool,
    pub may_close: bool,

    // winit 无 getter 的属性影子值
    pub floating: bool,
    pub passthrough: bool,
    pub auto_iconify: bool,

    /// 跨线程唤醒诊断：是否有一次投递正在等待
    pub wake_pending: bool,
    /// 已在主线程上观察到的唤醒事件次数
    pub wake_received: u32,

    /// 每帧刷新的只读属性快照
    pub live: LiveSnapshot,

    // 本帧累积的属性变更请求
    requests: Vec<WindowRequest>,
}

impl WindowMirror {
    /// 从窗口初始状态创建镜像
    ///
    /// 与原始测试工具相同的初始 400x400 限制值与 1:1 比例。
    pub fn new(position: Option<(i32, i32)>, size: (u32, u32)) -> Self {
        let (x, y) = position.unwrap_or((0, 0));
        Self {
            pos_x: EditField::new(x),
            pos_y: EditField::new(y),
            position_supported: position.is_some(),
            size_w: EditField::new(size.0 as i32),
            size_h: EditField::new(size.1 as i32),

            aspect_enabled: false,
            aspect_numer: EditField::new(1),
            aspect_denom: EditField::new(1),

            min_size: LimitGroup::new(400, 400),
            max_size: LimitGroup::new(400, 400),

            opacity: 1.0,
            opacity_supported: true,

            should_close: false,
            may_close: true,

            floating: false,
            passthrough: false,
            auto_iconify: false,

            wake_pending: false,
            wake_received: 0,

            live: LiveSnapshot::default(),

            requests: Vec::new(),
        }
    }

    /// 累积一条属性变更请求
    pub fn push(&mut self, request: WindowRequest) {
        self.requests.push(request);
    }

    /// 取出本帧累积的全部请求
    pub fn drain_requests(&mut self) -> Vec<WindowRequest> {
        std::mem::take(&mut self.requests)
    }

    /// 是否应当退出主循环（关闭许可门）
    pub fn close_permitted(&self) -> bool {
        self.should_close && self.may_close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_field_commit_parses_value() {
        let mut field = EditField::new(100);
        field.text = "250".to_string();
        assert_eq!(field.commit(), Some(250));
        assert_eq!(field.value(), 250);
        assert_eq!(field.text, "250");
    }

    #[test]
    fn test_edit_field_invalid_commit_falls_back() {
        let mut field = EditField::new(100);
        field.text = "12abc".to_string();
        assert_eq!(field.commit(), None);
        assert_eq!(field.value(), 100);
        assert_eq!(field.text, "100");
    }

    #[test]
    fn test_edit_field_commit_abs_sanitizes_sign() {
        let mut field = EditField::new(400);
        field.text = "-640".to_string();
        assert_eq!(field.commit_abs(), Some(640));
        assert_eq!(field.value(), 640);
        assert_eq!(field.text, "640");
    }

    #[test]
    fn test_observe_resyncs_on_external_change() {
        let mut field = EditField::new(100);
        field.text = "1".to_string(); // 正在编辑中
        field.observe(180, false); // 窗口被外部拖动
        assert_eq!(field.text, "180");
        assert_eq!(field.value(), 180);
    }

    #[test]
    fn test_observe_resyncs_on_deactivation() {
        let mut field = EditField::new(100);
        field.text = "42".to_string(); // 编辑后未按 Enter
        field.observe(100, true);
        assert_eq!(field.text, "100");
    }

    #[test]
    fn test_observe_keeps_buffer_while_editing() {
        let mut field = EditField::new(100);
        field.text = "42".to_string();
        field.observe(100, false);
        assert_eq!(field.text, "42");
    }

    #[test]
    fn test_requests_drain_in_order() {
        let mut mirror = WindowMirror::new(Some((10, 20)), (750, 600));
        mirror.push(WindowRequest::Maximize);
        mirror.push(WindowRequest::SetOpacity(0.5));
        assert_eq!(
            mirror.drain_requests(),
            vec![WindowRequest::Maximize, WindowRequest::SetOpacity(0.5)]
        );
        assert!(mirror.drain_requests().is_empty());
    }

    #[test]
    fn test_close_permission_gate() {
        let mut mirror = WindowMirror::new(None, (750, 600));
        assert!(!mirror.position_supported);
        assert!(!mirror.close_permitted());

        mirror.should_close = true;
        assert!(mirror.close_permitted());

        mirror.may_close = false;
        assert!(!mirror.close_permitted());
    }
}
