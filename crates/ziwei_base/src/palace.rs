//! The twelve palaces: positions, stems, names and the palace record.
//!
//! Palaces are fixed to the twelve branches. The Life Palace is found by
//! counting from the birth-month branch back by the hour; the Body Palace
//! counts forward. Role names then run counter-clockwise from the Life
//! Palace.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::birth::LunisolarBirth;
use crate::branch::{ALL_BRANCHES, Branch};
use crate::decade::DecadeRange;
use crate::error::ChartError;
use crate::star::{Star, StarName};
use crate::stem::{Stem, five_tiger_dun};

// ---------------------------------------------------------------------------
// Palace names
// ---------------------------------------------------------------------------

/// The twelve palace roles, in counter-clockwise order from the Life Palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PalaceName {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Friends,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::Fortune,
    PalaceName::Parents,
];

impl PalaceName {
    /// Chinese name, e.g. "命宫".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    /// 0-based position in [`ALL_PALACE_NAMES`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Role of the palace on `branch` when the Life Palace is on `life`.
    pub const fn at(life: Branch, branch: Branch) -> Self {
        ALL_PALACE_NAMES[life.distance_from(branch) as usize]
    }
}

impl Display for PalaceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Positions and stems
// ---------------------------------------------------------------------------

/// Branch of a lunar month; the first month sits on 寅.
pub fn month_branch(month: u8) -> Result<Branch, ChartError> {
    if !(1..=12).contains(&month) {
        return Err(ChartError::InvalidInput("month must be 1..=12"));
    }
    Ok(Branch::Yin.step(month as i8 - 1))
}

/// Stems of all twelve palaces, indexed by branch.
///
/// 寅 takes the Five Tiger stem of the year; the stems then run forward
/// around the ring. 子 and 丑 repeat the stems of 寅 and 卯.
pub const fn palace_stems(year_stem: Stem) -> [Stem; 12] {
    let yin = five_tiger_dun(year_stem);
    let mut stems = [yin; 12];
    let mut i = 0;
    while i < 12 {
        stems[i] = yin.step(i as i8 - 2);
        i += 1;
    }
    stems[0] = stems[2];
    stems[1] = stems[3];
    stems
}

/// Branch of the inbound palace (来因宫): the palace whose stem matches the
/// year stem. 子 and 丑 are excluded since they repeat 寅 and 卯.
pub fn inbound_palace(stems: &[Stem; 12], year_stem: Stem) -> Option<Branch> {
    ALL_BRANCHES
        .iter()
        .skip(2)
        .zip(stems.iter().skip(2))
        .find(|(_, s)| **s == year_stem)
        .map(|(b, _)| *b)
}

/// Life and Body branches plus the palace stems of a birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalacePositions {
    pub life: Branch,
    pub body: Branch,
    pub stems: [Stem; 12],
}

/// Locate the Life and Body palaces and compute palace stems.
pub fn locate(birth: &LunisolarBirth) -> Result<PalacePositions, ChartError> {
    birth.validate()?;
    let month = month_branch(birth.month)?;
    let hour = birth.hour_branch_index as i8;
    Ok(PalacePositions {
        life: month.step(-hour),
        body: month.step(hour),
        stems: palace_stems(birth.year_stem),
    })
}

// ---------------------------------------------------------------------------
// Palace record
// ---------------------------------------------------------------------------

/// One palace of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palace {
    pub branch: Branch,
    pub name: PalaceName,
    pub stem: Stem,
    pub is_life_palace: bool,
    pub is_body_palace: bool,
    pub is_inbound_palace: bool,
    pub decade_range: Option<DecadeRange>,
    /// Position in the decade sequence, 0 for the Life Palace.
    pub decade_sequence_index: Option<u8>,
    pub stars: Vec<Star>,
}

impl Palace {
    /// An empty palace on `branch` for the given positions.
    pub fn empty(branch: Branch, positions: &PalacePositions, inbound: Option<Branch>) -> Self {
        Self {
            branch,
            name: PalaceName::at(positions.life, branch),
            stem: positions.stems[branch.index() as usize],
            is_life_palace: branch == positions.life,
            is_body_palace: branch == positions.body,
            is_inbound_palace: inbound == Some(branch),
            decade_range: None,
            decade_sequence_index: None,
            stars: Vec::new(),
        }
    }

    pub fn has_star(&self, name: StarName) -> bool {
        self.stars.iter().any(|s| s.name == name)
    }

    pub fn star(&self, name: StarName) -> Option<&Star> {
        self.stars.iter().find(|s| s.name == name)
    }

    /// Main stars in this palace.
    pub fn main_stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter().filter(|s| s.name.is_main())
    }
}
