use std::sync::Arc;
use std::time::Instant;

use crate::core::{Config, Result};
use crate::settings::TariffStore;

/// 服务器状态 - 在所有请求处理器之间共享
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    /// 资费设置
    pub tariffs: Arc<TariffStore>,
    /// 启动时间
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, tariffs: TariffStore) -> Self {
        Self {
            config: Arc::new(config),
            tariffs: Arc::new(tariffs),
            started_at: Instant::now(),
        }
    }

    /// 根据配置初始化状态 (加载资费设置文件)
    pub fn initialize(config: &Config) -> Result<Self> {
        let tariffs = TariffStore::load(&config.tariff_path)?;
        Ok(Self::new(config.clone(), tariffs))
    }

    /// 运行时间 (秒)
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
