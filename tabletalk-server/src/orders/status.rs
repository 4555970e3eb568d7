//! 状态转移策略
//!
//! 状态机是展示用的，不强制逐步推进：参考行为允许员工把订单
//! 移到任意状态，包括回退。策略做成可替换对象，换成更严格的
//! 策略不需要动存储和广播管线。

use shared::models::OrderStatus;

/// 单次状态转移的裁决结果
#[derive(Debug, thiserror::Error)]
#[error("status transition {from} -> {to} is not allowed")]
pub struct TransitionRejected {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

/// 状态转移策略对象
///
/// 引擎在应用含 `status` 的 PATCH 前调用；落库用守卫式 UPDATE
/// 绑定被校验的起点状态，并发改动不会绕过策略。
pub trait TransitionPolicy: Send + Sync {
    fn validate(&self, from: OrderStatus, to: OrderStatus) -> Result<(), TransitionRejected>;
}

/// 默认策略：放行一切转移，任意方向 (参考行为)
#[derive(Debug, Clone, Copy, Default)]
pub struct Permissive;

impl TransitionPolicy for Permissive {
    fn validate(&self, _from: OrderStatus, _to: OrderStatus) -> Result<(), TransitionRejected> {
        Ok(())
    }
}

/// 严格策略：只允许沿流水线前进 (或原地不动)
///
/// 未默认启用；需要时在 ServerState::initialize 换入即可。
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardOnly;

impl TransitionPolicy for ForwardOnly {
    fn validate(&self, from: OrderStatus, to: OrderStatus) -> Result<(), TransitionRejected> {
        if to >= from {
            Ok(())
        } else {
            Err(TransitionRejected { from, to })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_allows_backwards() {
        let policy = Permissive;
        assert!(
            policy
                .validate(OrderStatus::Completed, OrderStatus::Received)
                .is_ok()
        );
        assert!(
            policy
                .validate(OrderStatus::Received, OrderStatus::Completed)
                .is_ok()
        );
    }

    #[test]
    fn forward_only_rejects_backwards() {
        let policy = ForwardOnly;
        assert!(
            policy
                .validate(OrderStatus::Received, OrderStatus::Preparing)
                .is_ok()
        );
        assert!(
            policy
                .validate(OrderStatus::Ready, OrderStatus::Ready)
                .is_ok()
        );
        let err = policy
            .validate(OrderStatus::Completed, OrderStatus::Received)
            .unwrap_err();
        assert_eq!(err.from, OrderStatus::Completed);
        assert_eq!(err.to, OrderStatus::Received);
    }
}
