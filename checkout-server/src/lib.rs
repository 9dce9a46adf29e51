//! Checkout Server - 结算报价服务
//!
//! # 架构概述
//!
//! 根据商品金额、配送距离和商户资费计算顾客应付金额：
//!
//! - **计价** (`pricing`): 配送费、折扣、小额订单费、包装费和税费
//! - **资费设置** (`settings`): 当前资费的加载、校验和持久化
//! - **HTTP API** (`api`): 报价和资费设置接口
//!
//! # 模块结构
//!
//! ```text
//! checkout-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── pricing/       # 计价引擎
//! ├── settings/      # 资费设置存储
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod core;
pub mod pricing;
pub mod settings;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use pricing::{PricingError, TariffConfig, compute_total};
pub use settings::TariffStore;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env，读取配置，初始化日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.json_logs(),
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
   ________              __              __
  / ____/ /_  ___  _____/ /______  __  __/ /_
 / /   / __ \/ _ \/ ___/ //_/ __ \/ / / / __/
/ /___/ / / /  __/ /__/ ,< / /_/ / /_/ / /_
\____/_/ /_/\___/\___/_/|_|\____/\__,_/\__/
    "#
    );
}
