//! Chart computation options.

use serde::{Deserialize, Serialize};

/// Which year groups start the Bell star (铃星) at 卯.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BellStarRule {
    /// 寅午戌 years start at 卯, every other year at 戌.
    YearTriad,
    /// Only 戌 years start at 卯, every other year at 戌.
    XuYearOnly,
}

/// Configuration for chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Starting-branch rule for the Bell star.
    pub bell_star_rule: BellStarRule,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bell_star_rule: BellStarRule::YearTriad,
        }
    }
}
