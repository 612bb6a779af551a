//! 尺寸约束计算
//!
//! winit 没有宽高比约束接口，检查循环在每次 `Resized` 事件后用这里
//! 的纯函数计算符合比例的尺寸并请求修正。尺寸限制组则在这里解析为
//! winit 的 `Option` 边界（`None` 表示不限制）。

use winit::dpi::{LogicalSize, PhysicalSize};

use super::state::WindowMirror;

/// 给定宽度在 numer:denom 比例下要求的高度
///
/// 比例项为零时约束退化，返回 `None`。
pub fn aspect_corrected_height(width: u32, numer: u32, denom: u32) -> Option<u32> {
    if numer == 0 || denom == 0 {
        return None;
    }
    // 四舍五入到最近的整数高度
    let h = (u64::from(width) * u64::from(denom) + u64::from(numer) / 2) / u64::from(numer);
    Some(h as u32)
}

/// 计算一个尺寸在启用比例约束下的修正尺寸
///
/// 已符合比例（或约束退化）时返回 `None`，避免修正请求循环触发。
pub fn constrain_to_aspect(
    size: PhysicalSize<u32>,
    numer: u32,
    denom: u32,
) -> Option<PhysicalSize<u32>> {
    let expected = aspect_corrected_height(size.width, numer, denom)?;
    if expected == size.height || expected == 0 {
        None
    } else {
        Some(PhysicalSize::new(size.width, expected))
    }
}

/// 将镜像中的限制组解析为 winit 的最小/最大尺寸边界
///
/// 未启用的组解析为 `None`（相当于不限制该侧）。
pub fn limit_bounds(mirror: &WindowMirror) -> (Option<LogicalSize<u32>>, Option<LogicalSize<u32>>) {
    let min = mirror.min_size.enabled.then(|| {
        LogicalSize::new(
            mirror.min_size.width.value().unsigned_abs(),
            mirror.min_size.height.value().unsigned_abs(),
        )
    });
    let max = mirror.max_size.enabled.then(|| {
        LogicalSize::new(
            mirror.max_size.width.value().unsigned_abs(),
            mirror.max_size.height.value().unsigned_abs(),
        )
    });
    (min, max)
}

/// 镜像中当前的宽高比设置（未启用时为 `None`）
pub fn aspect_terms(mirror: &WindowMirror) -> Option<(u32, u32)> {
    if !mirror.aspect_enabled {
        return None;
    }
    Some((
        mirror.aspect_numer.value().unsigned_abs(),
        mirror.aspect_denom.value().unsigned_abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::state::WindowMirror;

    #[test]
    fn test_aspect_height_for_square_ratio() {
        assert_eq!(aspect_corrected_height(640, 1, 1), Some(640));
    }

    #[test]
    fn test_aspect_height_rounds_to_nearest() {
        // 16:9 下 1280 -> 720，1000 -> 562.5 四舍五入为 563
        assert_eq!(aspect_corrected_height(1280, 16, 9), Some(720));
        assert_eq!(aspect_corrected_height(1000, 16, 9), Some(563));
    }

    #[test]
    fn test_aspect_height_degenerate_terms() {
        assert_eq!(aspect_corrected_height(640, 0, 1), None);
        assert_eq!(aspect_corrected_height(640, 1, 0), None);
    }

    #[test]
    fn test_constrain_is_idempotent() {
        let corrected = constrain_to_aspect(PhysicalSize::new(1000, 500), 16, 9).unwrap();
        assert_eq!(corrected, PhysicalSize::new(1000, 563));
        // 已符合比例的尺寸不再产生修正请求
        assert_eq!(constrain_to_aspect(corrected, 16, 9), None);
    }

    #[test]
    fn test_limit_bounds_disabled_groups_are_dont_care() {
        let mirror = WindowMirror::new(None, (750, 600));
        let (min, max) = limit_bounds(&mirror);
        assert!(min.is_none());
        assert!(max.is_none());
    }

    #[test]
    fn test_limit_bounds_enabled_group() {
        let mut mirror = WindowMirror::new(None, (750, 600));
        mirror.min_size.enabled = true;
        mirror.min_size.width.sync(320);
        mirror.min_size.height.sync(240);
        let (min, max) = limit_bounds(&mirror);
        assert_eq!(min, Some(LogicalSize::new(320, 240)));
        assert!(max.is_none());
    }

    #[test]
    fn test_aspect_terms_follow_enable_flag() {
        let mut mirror = WindowMirror::new(None, (750, 600));
        assert_eq!(aspect_terms(&mirror), None);

        mirror.aspect_enabled = true;
        mirror.aspect_numer.sync(16);
        mirror.aspect_denom.sync(9);
        assert_eq!(aspect_terms(&mirror), Some((16, 9)));
    }
}
