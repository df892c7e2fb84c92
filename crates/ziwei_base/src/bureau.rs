//! Five-Elements Bureau (五行局) resolution.
//!
//! The bureau is read from a fixed matrix keyed by the year-stem pair
//! (甲己, 乙庚, 丙辛, 丁壬, 戊癸) and the Life Palace branch pair
//! (子丑, 寅卯, 辰巳, 午未, 申酉, 戌亥). Each cell is the 纳音 element of
//! the Life Palace's own stem-branch pair. Its number sets the Purple star
//! column and the starting age of the first decade.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::ChartError;
use crate::stem::Stem;

/// Element of a bureau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Water,
    Wood,
    Metal,
    Earth,
    Fire,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "水",
            Self::Wood => "木",
            Self::Metal => "金",
            Self::Earth => "土",
            Self::Fire => "火",
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The five bureaux, numbered 2 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bureau {
    /// 水二局
    Water2,
    /// 木三局
    Wood3,
    /// 金四局
    Metal4,
    /// 土五局
    Earth5,
    /// 火六局
    Fire6,
}

/// All bureaux in ascending number order.
pub const ALL_BUREAUX: [Bureau; 5] = [
    Bureau::Water2,
    Bureau::Wood3,
    Bureau::Metal4,
    Bureau::Earth5,
    Bureau::Fire6,
];

impl Bureau {
    /// Bureau number, 2..=6.
    pub const fn number(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    /// Bureau for a number in 2..=6.
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            2 => Some(Self::Water2),
            3 => Some(Self::Wood3),
            4 => Some(Self::Metal4),
            5 => Some(Self::Earth5),
            6 => Some(Self::Fire6),
            _ => None,
        }
    }

    /// Bureau carrying `element`.
    pub const fn from_element(element: Element) -> Self {
        match element {
            Element::Water => Self::Water2,
            Element::Wood => Self::Wood3,
            Element::Metal => Self::Metal4,
            Element::Earth => Self::Earth5,
            Element::Fire => Self::Fire6,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Water2 => Element::Water,
            Self::Wood3 => Element::Wood,
            Self::Metal4 => Element::Metal,
            Self::Earth5 => Element::Earth,
            Self::Fire6 => Element::Fire,
        }
    }

    /// Chinese name, e.g. "水二局".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    /// 0-based position in [`ALL_BUREAUX`].
    pub const fn index(self) -> usize {
        (self.number() - 2) as usize
    }
}

impl Display for Bureau {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// 纳音
// ---------------------------------------------------------------------------

use Element::{Earth as Tu, Fire as Huo, Metal as Jin, Water as Shui, Wood as Mu};

/// Sound names and elements of the 30 sexagenary pairs (甲子乙丑, 丙寅丁卯, ...).
const NAYIN: [(&str, Element); 30] = [
    ("海中金", Jin),
    ("炉中火", Huo),
    ("大林木", Mu),
    ("路旁土", Tu),
    ("剑锋金", Jin),
    ("山头火", Huo),
    ("涧下水", Shui),
    ("城头土", Tu),
    ("白蜡金", Jin),
    ("杨柳木", Mu),
    ("泉中水", Shui),
    ("屋上土", Tu),
    ("霹雳火", Huo),
    ("松柏木", Mu),
    ("长流水", Shui),
    ("砂石金", Jin),
    ("山下火", Huo),
    ("平地木", Mu),
    ("壁上土", Tu),
    ("金箔金", Jin),
    ("覆灯火", Huo),
    ("天河水", Shui),
    ("大驿土", Tu),
    ("钗钏金", Jin),
    ("桑柘木", Mu),
    ("大溪水", Shui),
    ("沙中土", Tu),
    ("天上火", Huo),
    ("石榴木", Mu),
    ("大海水", Shui),
];

/// Position of a stem-branch pair in the 60-cycle (甲子 = 0), or `None`
/// when stem and branch differ in parity.
pub const fn sexagenary_index(stem: Stem, branch: Branch) -> Option<u8> {
    let s = stem.index() as u16;
    let b = branch.index() as u16;
    if s % 2 != b % 2 {
        return None;
    }
    // x ≡ s (mod 10), x ≡ b (mod 12)
    Some(((6 * s + 55 * b) % 60) as u8)
}

/// 纳音 sound name and element of a stem-branch pair.
pub const fn nayin(stem: Stem, branch: Branch) -> Option<(&'static str, Element)> {
    match sexagenary_index(stem, branch) {
        Some(i) => Some(NAYIN[(i / 2) as usize]),
        None => None,
    }
}

// ---------------------------------------------------------------------------
// Bureau table
// ---------------------------------------------------------------------------

use Bureau::{Earth5 as E5, Fire6 as F6, Metal4 as M4, Water2 as W2, Wood3 as W3};

/// Rows: stem pair 甲己, 乙庚, 丙辛, 丁壬, 戊癸.
/// Columns: branch pair 子丑, 寅卯, 辰巳, 午未, 申酉, 戌亥.
const BUREAU_TABLE: [[Bureau; 6]; 5] = [
    [W2, F6, W3, E5, M4, F6],
    [F6, E5, M4, W3, W2, E5],
    [E5, W3, W2, M4, F6, W3],
    [W3, M4, F6, W2, E5, M4],
    [M4, W2, E5, F6, W3, W2],
];

/// Resolve the bureau from year stem and Life Palace branch.
///
/// The matrix is total, so a miss means the table itself is broken and is
/// reported as [`ChartError::TableInconsistency`], never as bad input.
pub fn resolve_bureau(year_stem: Stem, life_branch: Branch) -> Result<Bureau, ChartError> {
    let row = (year_stem.index() % 5) as usize;
    let col = (life_branch.index() / 2) as usize;
    BUREAU_TABLE
        .get(row)
        .and_then(|r| r.get(col))
        .copied()
        .ok_or(ChartError::TableInconsistency(
            "five-elements bureau table has no entry",
        ))
}
