//! The 10 heavenly stems, their polarity, and the Five Tiger Dun rule.
//!
//! Stems alternate Yang/Yin starting from 甲 (Yang). The Five Tiger Dun
//! (五虎遁) fixes which stem the 寅 palace receives for a given year stem;
//! the other palace stems follow cyclically from there.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Yin/Yang polarity of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

/// The 10 heavenly stems (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese character of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for a 0-based index, or None if out of range.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 10 {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// Yang for even indices, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Advance cyclically by `steps` stems (negative walks backward).
    pub const fn step(self, steps: i8) -> Self {
        let idx = (self.index() as i16 + steps as i16).rem_euclid(10);
        ALL_STEMS[idx as usize]
    }
}

/// Five Tiger Dun: stem of the 寅 palace for a given year stem.
///
/// 甲己 → 丙, 乙庚 → 戊, 丙辛 → 庚, 丁壬 → 壬, 戊癸 → 甲.
pub const fn five_tiger_dun(year_stem: Stem) -> Stem {
    match year_stem {
        Stem::Jia | Stem::Ji => Stem::Bing,
        Stem::Yi | Stem::Geng => Stem::Wu,
        Stem::Bing | Stem::Xin => Stem::Geng,
        Stem::Ding | Stem::Ren => Stem::Ren,
        Stem::Wu | Stem::Gui => Stem::Jia,
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stem {
    type Err = ChartError;

    /// Accepts the character (`甲`) or the pinyin (`jia`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.name() == s || st.pinyin().eq_ignore_ascii_case(s))
            .ok_or(ChartError::InvalidInput("unknown heavenly stem"))
    }
}
