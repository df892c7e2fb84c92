//! The 12 earthly branches and signed modular stepping between them.
//!
//! Branch ordinals follow the canonical order 子=0 .. 亥=11. Every placement
//! rule in the chart is a walk around this ring: "clockwise" (顺) is a
//! positive step, "counter-clockwise" (逆) a negative one.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// The 12 earthly branches (地支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// 0-based ordinal (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for a 0-based ordinal, or None if out of range.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Walk `steps` palaces around the ring (positive = clockwise).
    ///
    /// This is the only place the chart does signed modular arithmetic on
    /// branches; every placement rule is expressed through it.
    pub const fn step(self, steps: i8) -> Self {
        let idx = (self.index() as i16 + steps as i16).rem_euclid(12);
        ALL_BRANCHES[idx as usize]
    }

    /// The branch directly across the ring.
    pub const fn opposite(self) -> Self {
        self.step(6)
    }

    /// Clockwise distance from `from` to `self`, in 0..12.
    pub const fn distance_from(self, from: Branch) -> u8 {
        (self.index() as i16 - from.index() as i16).rem_euclid(12) as u8
    }
}

/// Free-function form of [`Branch::step`].
pub const fn step_branch(from: Branch, steps: i8) -> Branch {
    from.step(steps)
}

/// The four "three harmony" groups (三合) each branch belongs to.
///
/// Several year-branch rules key on the group rather than the branch itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchTriad {
    /// 申子辰
    ShenZiChen,
    /// 寅午戌
    YinWuXu,
    /// 巳酉丑
    SiYouChou,
    /// 亥卯未
    HaiMaoWei,
}

impl BranchTriad {
    /// Triad containing `branch`.
    pub const fn of(branch: Branch) -> Self {
        match branch.index() % 4 {
            0 => Self::ShenZiChen,
            1 => Self::SiYouChou,
            2 => Self::YinWuXu,
            _ => Self::HaiMaoWei,
        }
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Branch {
    type Err = ChartError;

    /// Accepts the character (`寅`) or the pinyin (`yin`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.name() == s || b.pinyin().eq_ignore_ascii_case(s))
            .ok_or(ChartError::InvalidInput("unknown earthly branch"))
    }
}
