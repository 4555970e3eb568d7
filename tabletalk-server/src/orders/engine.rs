//! 订单生命周期引擎
//!
//! 校验并应用订单的创建和字段更新，是唯一的变更入口。
//! 每次成功提交后，把完整快照交给广播总线 (提交后才广播：
//! 失败的创建绝不发出事件)。
//!
//! 引擎信任调用方：`table_code` 已由上游访问码校验过，
//! `menu_item_id` 由菜单协作方保证有效，无效 id 会触发外键
//! 约束并以存储错误 (500) 浮出。

use std::sync::Arc;

use sqlx::SqlitePool;

use shared::message::BusMessage;
use shared::models::{Order, OrderCreate, OrderPatch, OrderStatus};
use shared::util::now_millis;

use crate::db::repository;
use crate::message::OrderBus;
use crate::orders::hydrate::{MenuReader, hydrate_order};
use crate::orders::status::TransitionPolicy;
use crate::utils::{AppError, AppResult};

/// 生命周期引擎 - 持有存储、菜单能力、转移策略和广播总线
pub struct OrderEngine {
    pool: SqlitePool,
    menu: Arc<dyn MenuReader>,
    policy: Arc<dyn TransitionPolicy>,
    bus: Arc<OrderBus>,
}

impl OrderEngine {
    pub fn new(
        pool: SqlitePool,
        menu: Arc<dyn MenuReader>,
        policy: Arc<dyn TransitionPolicy>,
        bus: Arc<OrderBus>,
    ) -> Self {
        Self {
            pool,
            menu,
            policy,
            bus,
        }
    }

    /// 创建订单
    ///
    /// 输入契约：桌码非空，明细非空且每项 quantity >= 1。
    /// 订单行与全部明细行在同一事务内落库；成功后广播 `new_order`。
    pub async fn create(&self, req: OrderCreate) -> AppResult<Order> {
        if req.table_code.trim().is_empty() {
            return Err(AppError::validation("table_code is required"));
        }
        if req.items.is_empty() {
            return Err(AppError::validation("order must contain at least one item"));
        }
        for item in &req.items {
            if item.quantity < 1 {
                return Err(AppError::validation(format!(
                    "quantity must be >= 1 for menu item {}",
                    item.menu_item_id
                )));
            }
        }

        let now = now_millis();
        let order_id = repository::order::insert(&self.pool, &req.table_code, &req.items, now)
            .await
            .map_err(AppError::from)?;

        let order = self.load(order_id).await?;

        tracing::info!(
            order_id,
            table_code = %order.table_code,
            items = order.items.len(),
            "Order created"
        );
        self.bus.publish(BusMessage::NewOrder {
            order: order.clone(),
        });

        Ok(order)
    }

    /// 更新订单 (稀疏 PATCH)
    ///
    /// 只改出现的字段，可空字段收到显式 null 时清空；`updated_at`
    /// 无条件刷新；每次成功更新都广播 `order_updated`，空 PATCH 也
    /// 不例外。
    ///
    /// 含 `status` 的 PATCH 走守卫式 check-and-set：UPDATE 带上
    /// 策略校验时读到的状态，守卫未命中 (状态被并发改掉) 就重读
    /// 重验，策略不会放过读-写窗口里混进来的转移。
    pub async fn update(&self, id: i64, patch: OrderPatch) -> AppResult<Order> {
        loop {
            let current = repository::order::find_by_id(&self.pool, id)
                .await
                .map_err(AppError::from)?
                .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;

            let guard: Option<OrderStatus> = match patch.status {
                Some(next) => {
                    let from: OrderStatus = current
                        .status
                        .parse()
                        .map_err(|e| AppError::database(format!("Corrupt status in store: {e}")))?;
                    self.policy
                        .validate(from, next)
                        .map_err(|e| AppError::business_rule(e.to_string()))?;
                    Some(from)
                }
                None => None,
            };

            let now = now_millis();
            let applied = repository::order::apply_patch(
                &self.pool,
                id,
                &patch,
                now,
                guard.map(|s| s.as_str()),
            )
            .await
            .map_err(AppError::from)?;
            if applied {
                break;
            }
            // 0 行命中：订单消失走循环顶部的 404，守卫未命中则重试
        }

        let order = self.load(id).await?;

        tracing::info!(
            order_id = id,
            status = %order.status,
            empty_patch = patch.is_empty(),
            "Order updated"
        );
        self.bus.publish(BusMessage::OrderUpdated {
            order: order.clone(),
        });

        Ok(order)
    }

    /// 读取并 hydrate 一个刚提交的订单
    async fn load(&self, id: i64) -> AppResult<Order> {
        let row = repository::order::find_by_id(&self.pool, id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::internal(format!("Order {id} vanished after commit")))?;
        hydrate_order(&self.pool, self.menu.as_ref(), row)
            .await
            .map_err(AppError::from)
    }
}
