use std::sync::Arc;

use shared::models::{Brand, MenuCategory};

use crate::catalog;
use crate::core::Config;
use crate::store::ReservationStore;
use crate::utils::{AppError, AppResult};

/// 服务器状态 - 持有所有服务的单例引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项（不可变） |
/// | store | ReservationStore | 预订存储 (redb) |
/// | brand | Arc<Brand> | 品牌元数据（静态） |
/// | menu | Arc<Vec<MenuCategory>> | 菜单目录（静态） |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 预订存储
    pub store: ReservationStore,
    /// 品牌元数据
    pub brand: Arc<Brand>,
    /// 菜单目录
    pub menu: Arc<Vec<MenuCategory>>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录（确保存在）
    /// 2. 预订存储 (work_dir/reservations.redb)
    /// 3. 静态目录数据
    pub fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let store = ReservationStore::open(config.store_path())?;

        Ok(Self {
            config: config.clone(),
            store,
            brand: Arc::new(catalog::brand()),
            menu: Arc::new(catalog::menu()),
        })
    }
}
