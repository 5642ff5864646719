//! BunLab Site Server - 餐厅官网边缘服务
//!
//! # 架构概述
//!
//! 本模块是官网服务的主入口，提供以下核心功能：
//!
//! - **页面文档** (`api::pages`): 六个固定路由 + 404 回退
//! - **预订流程** (`booking`): 可用性估算、确认码、表单状态机
//! - **预订存储** (`store`): 嵌入式 redb 追加日志
//!
//! # 模块结构
//!
//! ```text
//! site-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── booking/       # 预订流程
//! ├── catalog/       # 静态菜单和品牌数据
//! ├── store/         # 存储层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod booking;
pub mod catalog;
pub mod core;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use store::{ReservationStore, StoreError};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____              __          __
   / __ )__  ______  / /   ____ _/ /_
  / __  / / / / __ \/ /   / __ `/ __ \
 / /_/ / /_/ / / / / /___/ /_/ / /_/ /
/_____/\__,_/_/ /_/_____/\__,_/_.___/
   Smash burgers. Big flavor.
    "#
    );
}
