//! 抽卡引擎配置（保底阈值与批量抽卡上限）

use error::GachaError;
use serde::{Deserialize, Serialize};

/// 默认的十连抽数量
pub const DEFAULT_MULTI_PULL: usize = 10;

/// 保底参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PityConfig {
    /// 达到该抽数必出 SSR 或更高
    pub pull_pity_limit: u32,
    /// 达到该抽数必出 Mythic
    pub mythic_pity_limit: u32,
    /// 普通保底计数超过此值后开始提升 SSR 概率
    pub ssr_soft_pity_start: u32,
    /// 每抽提升的 SSR 概率（百分点）
    pub ssr_soft_pity_step: f64,
    /// 神话保底计数超过此值后开始提升 Mythic 概率
    pub mythic_soft_pity_start: u32,
    /// 每抽提升的 Mythic 概率（百分点）
    pub mythic_soft_pity_step: f64,
}

impl Default for PityConfig {
    fn default() -> Self {
        Self {
            pull_pity_limit: 110,
            mythic_pity_limit: 5000,
            ssr_soft_pity_start: 75,
            ssr_soft_pity_step: 0.05,
            mythic_soft_pity_start: 800,
            mythic_soft_pity_step: 0.0001,
        }
    }
}

impl PityConfig {
    /// 保底上限至少为 1，软保底步长必须是有限的非负数
    pub fn validate(&self) -> Result<(), GachaError> {
        if self.pull_pity_limit == 0 || self.mythic_pity_limit == 0 {
            return Err(GachaError::InvalidConfig(
                "pity limits must be at least 1".to_string(),
            ));
        }
        for (field, step) in [
            ("ssr_soft_pity_step", self.ssr_soft_pity_step),
            ("mythic_soft_pity_step", self.mythic_soft_pity_step),
        ] {
            if !step.is_finite() || step < 0.0 {
                return Err(GachaError::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    field, step
                )));
            }
        }
        Ok(())
    }
}

/// 引擎整体配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GachaConfig {
    pub pity: PityConfig,
    /// 单次批量抽卡允许的最大次数
    pub max_multi_pull: usize,
}

impl Default for GachaConfig {
    fn default() -> Self {
        Self {
            pity: PityConfig::default(),
            max_multi_pull: 10_000,
        }
    }
}

impl GachaConfig {
    /// 校验批量抽卡次数（1..=max_multi_pull），供调用方在 `multi_pull` 前使用
    pub fn validate_pull_count(&self, count: usize) -> Result<usize, GachaError> {
        if (1..=self.max_multi_pull).contains(&count) {
            Ok(count)
        } else {
            Err(GachaError::InvalidPullCount {
                count,
                max: self.max_multi_pull,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pity_thresholds() {
        let pity = PityConfig::default();
        assert_eq!(pity.pull_pity_limit, 110);
        assert_eq!(pity.mythic_pity_limit, 5000);
        assert_eq!(pity.ssr_soft_pity_start, 75);
        assert_eq!(pity.mythic_soft_pity_start, 800);
    }

    #[test]
    fn test_validate_pull_count_bounds() {
        let config = GachaConfig::default();

        assert_eq!(config.validate_pull_count(1).ok(), Some(1));
        assert_eq!(config.validate_pull_count(10_000).ok(), Some(10_000));
        assert!(matches!(
            config.validate_pull_count(0),
            Err(GachaError::InvalidPullCount { count: 0, max: 10_000 })
        ));
        assert!(config.validate_pull_count(10_001).is_err());
    }

    #[test]
    fn test_pity_config_rejects_bad_steps() {
        assert!(PityConfig::default().validate().is_ok());

        for step in [f64::NAN, f64::INFINITY, -0.05] {
            let mut pity = PityConfig::default();
            pity.ssr_soft_pity_step = step;
            assert!(matches!(pity.validate(), Err(GachaError::InvalidConfig(_))));

            let mut pity = PityConfig::default();
            pity.mythic_soft_pity_step = step;
            assert!(matches!(pity.validate(), Err(GachaError::InvalidConfig(_))));
        }

        let mut pity = PityConfig::default();
        pity.ssr_soft_pity_step = 0.0;
        assert!(pity.validate().is_ok());
    }
}
