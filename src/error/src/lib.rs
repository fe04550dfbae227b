//! 抽卡系统错误处理模块
//!
//! 处理卡池配置校验、抽卡次数校验以及命令行交互中可能出现的错误。

use thiserror::Error;

/// 抽卡系统运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GachaError {
    /// 抽卡次数超出允许范围
    #[error("Invalid pull count {count}: expected 1..={max}")]
    InvalidPullCount { count: usize, max: usize },

    /// 稀有度概率无效（负数或非有限值）
    #[error("Invalid rate for {rarity}: {rate}")]
    InvalidRate { rarity: String, rate: f64 },

    /// Mythic、SSR、SR 基础概率之和超过 100
    #[error("Base rates exceed 100%: {0}")]
    RateOverflow(f64),

    /// 引擎配置无效（如保底阈值为 0）
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// 某个稀有度的物品池为空
    #[error("Item pool for {0} is empty")]
    EmptyPool(String),

    /// 玩家不存在
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    /// 用户输入错误
    #[error("Input error: {0}")]
    InputError(String),

    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// 处理抽卡错误并转换为用户友好的消息
pub fn handle_error(error: &GachaError) -> String {
    match error {
        GachaError::InvalidPullCount { max, .. } => {
            format!("Please enter a number between 1 and {}", max)
        }
        GachaError::PlayerNotFound(name) => format!("No stats found for {}", name),
        GachaError::InputError(_) => "Please enter a valid number".to_string(),
        GachaError::IoError(e) => match e.kind() {
            std::io::ErrorKind::UnexpectedEof => "Input closed".to_string(),
            _ => format!("IO error: {}", e),
        },
        _ => error.to_string(),
    }
}
