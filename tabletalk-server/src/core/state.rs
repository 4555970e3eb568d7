//! 服务器状态

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::{DbService, seed};
use crate::message::OrderBus;
use crate::orders::{OrderEngine, OrderQueries, Permissive, SqlMenuReader};
use crate::utils::{AppError, AppResult};

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是核心数据结构，作为 axum 的应用状态注入每个
/// handler。使用 Arc 实现浅拷贝，克隆成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | bus | Arc<OrderBus> | 广播总线 + 订阅者注册表 |
/// | engine | Arc<OrderEngine> | 订单生命周期引擎 |
/// | queries | Arc<OrderQueries> | 订单查询门面 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
    /// 广播总线 (显式对象，非进程级单例)
    pub bus: Arc<OrderBus>,
    /// 订单生命周期引擎
    pub engine: Arc<OrderEngine>,
    /// 订单查询门面
    pub queries: Arc<OrderQueries>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据目录
    /// 2. 数据库 (迁移 + 可选的演示数据)
    /// 3. 广播总线
    /// 4. 菜单能力、转移策略、引擎与查询门面
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_data_dir()
            .map_err(|e| AppError::internal(format!("Failed to create data directory: {e}")))?;

        let db = DbService::new(&config.database_path).await?;
        if config.seed_demo_data {
            seed::seed_demo_data(&db.pool).await?;
        }

        let bus = Arc::new(OrderBus::with_capacity(config.mailbox_capacity));
        let menu = Arc::new(SqlMenuReader::new(db.pool.clone()));
        // 参考行为：状态转移不受限制。换成 ForwardOnly 即可收紧。
        let policy = Arc::new(Permissive);

        let engine = Arc::new(OrderEngine::new(
            db.pool.clone(),
            menu.clone(),
            policy,
            bus.clone(),
        ));
        let queries = Arc::new(OrderQueries::new(db.pool.clone(), menu));

        Ok(Self {
            config: config.clone(),
            db,
            bus,
            engine,
            queries,
        })
    }

    /// 获取数据库连接池
    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
