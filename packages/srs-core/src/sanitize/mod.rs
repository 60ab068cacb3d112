use crate::error::{Result, SrsError};
use crate::types::{DueCandidate, MemoryState, DAY_MS, MAX_EASE, MIN_EASE};

/// 将 ease 限制在 [MIN_EASE, MAX_EASE]，NaN 视为最小值
pub fn clamp_ease(ease: f64) -> f64 {
    if ease.is_nan() {
        return MIN_EASE;
    }
    ease.clamp(MIN_EASE, MAX_EASE)
}

/// 间隔天数取整 (四舍五入，远离零)，下限为 1 天
pub fn floor_interval(days: f64) -> u32 {
    if days.is_nan() {
        return 1;
    }
    // `as` 对超出范围的浮点数做饱和转换
    (days.round() as u32).max(1)
}

/// 计算到期时间戳 now + days * DAY_MS，溢出时饱和
pub fn due_at(now_ms: i64, interval_days: u32) -> i64 {
    now_ms.saturating_add((interval_days as i64).saturating_mul(DAY_MS))
}

/// 检查记忆状态是否满足前置条件
pub fn validate_state(state: &MemoryState) -> Result<()> {
    if state.item_id.trim().is_empty() {
        return Err(SrsError::invalid("itemId must not be empty"));
    }
    if !state.ease.is_finite() {
        return Err(SrsError::invalid(format!(
            "ease must be finite for item {}",
            state.item_id
        )));
    }
    Ok(())
}

/// 检查候选列表：每个 itemId 都不能为空
pub fn validate_candidates(items: &[DueCandidate]) -> Result<()> {
    if let Some(index) = items.iter().position(|c| c.item_id.trim().is_empty()) {
        return Err(SrsError::invalid(format!(
            "itemId must not be empty (candidate {index})"
        )));
    }
    Ok(())
}

/// 检查选择时间戳不能为负
pub fn validate_now(now_ms: i64) -> Result<()> {
    if now_ms < 0 {
        return Err(SrsError::invalid(format!("nowMs must be >= 0, got {now_ms}")));
    }
    Ok(())
}

/// 检查复习参数：时间戳与响应时长均不能为负
pub fn validate_review(now_ms: i64, response_ms: i64) -> Result<()> {
    validate_now(now_ms)?;
    if response_ms < 0 {
        return Err(SrsError::invalid(format!(
            "responseMs must be >= 0, got {response_ms}"
        )));
    }
    Ok(())
}

/// 将外部传入的 limit 转为 usize，负数直接报错而不是截断
pub fn validate_limit(limit: i64) -> Result<usize> {
    usize::try_from(limit)
        .map_err(|_| SrsError::invalid(format!("limit must be >= 0, got {limit}")))
}
