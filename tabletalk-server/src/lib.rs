//! TableTalk Order Server - 餐厅点单后端
//!
//! # 架构概述
//!
//! 本模块是订单服务的主入口，提供以下核心功能：
//!
//! - **订单生命周期** (`orders`): 创建/更新校验、状态策略、快照解析
//! - **广播总线** (`message`): 订阅者注册表 + fire-and-forget 扇出
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (sqlx, WAL)
//! - **HTTP API** (`api`): RESTful 接口 + WebSocket 推送通道
//!
//! # 模块结构
//!
//! ```text
//! tabletalk-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器 (+ /ws)
//! ├── orders/        # 生命周期引擎与查询门面
//! ├── message/       # 广播总线
//! ├── db/            # 数据库层
//! └── utils/         # 错误、日志等工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod message;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState, setup_environment};
pub use message::OrderBus;
pub use orders::{OrderEngine, OrderQueries};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
  ______      __    __     ______      ____
 /_  __/___ _/ /_  / /__  /_  __/___ _/ / /__
  / / / __ `/ __ \/ / _ \  / / / __ `/ / //_/
 / / / /_/ / /_/ / /  __/ / / / /_/ / / ,<
/_/  \__,_/_.___/_/\___/ /_/  \__,_/_/_/|_|
    "#
    );
}
