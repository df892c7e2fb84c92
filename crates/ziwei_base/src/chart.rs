//! Chart assembly: runs every stage in order and owns the result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, warn};

use crate::birth::LunisolarBirth;
use crate::branch::{ALL_BRANCHES, Branch};
use crate::bureau::{Bureau, resolve_bureau};
use crate::config::ChartConfig;
use crate::decade::{DecadeDirection, assign_decades};
use crate::error::ChartError;
use crate::palace::{Palace, PalaceName, inbound_palace, locate};
use crate::placement::{PlacementInput, place, purple_star_branch, treasury_star_branch};
use crate::sihua::{Transform, annotate, birth_year_transforms, unassigned_transforms};
use crate::star::{Star, StarName};

// ---------------------------------------------------------------------------
// Ruling stars
// ---------------------------------------------------------------------------

/// Life ruler (命主) by Life Palace branch.
pub const fn life_ruler(life_branch: Branch) -> StarName {
    use StarName::*;
    match life_branch {
        Branch::Zi => TanLang,
        Branch::Chou | Branch::Hai => JuMen,
        Branch::Yin | Branch::Xu => LuCun,
        Branch::Mao | Branch::You => WenQu,
        Branch::Chen | Branch::Shen => LianZhen,
        Branch::Si | Branch::Wei => WuQu,
        Branch::Wu => PoJun,
    }
}

/// Body ruler (身主) by year branch.
pub const fn body_ruler(year_branch: Branch) -> StarName {
    use StarName::*;
    match year_branch {
        Branch::Zi => HuoXing,
        Branch::Chou | Branch::Wei => TianXiang,
        Branch::Yin | Branch::Shen => TianLiang,
        Branch::Mao | Branch::You => TianTong,
        Branch::Chen | Branch::Xu => WenChang,
        Branch::Si | Branch::Hai => TianJi,
        Branch::Wu => LingXing,
    }
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// Where a birth-year transformation landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformLocation {
    pub transform: Transform,
    pub star: StarName,
    /// `None` when the star was never placed.
    pub branch: Option<Branch>,
    pub palace: Option<PalaceName>,
}

/// A complete natal chart.
///
/// `palaces[i]` sits on the branch with index `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub birth: LunisolarBirth,
    pub palaces: [Palace; 12],
    pub bureau: Bureau,
    pub life_branch: Branch,
    pub body_branch: Branch,
    pub life_ruler_star: StarName,
    pub body_ruler_star: StarName,
    pub birth_year_transforms: BTreeMap<Transform, StarName>,
    /// Birth-year transformations whose star was not on the chart.
    pub unassigned_transforms: Vec<Transform>,
    pub decade_direction: DecadeDirection,
}

impl Chart {
    pub fn palace(&self, branch: Branch) -> &Palace {
        &self.palaces[branch.index() as usize]
    }

    pub fn life_palace(&self) -> &Palace {
        self.palace(self.life_branch)
    }

    pub fn body_palace(&self) -> &Palace {
        self.palace(self.body_branch)
    }

    pub fn inbound_palace(&self) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.is_inbound_palace)
    }

    /// The palace playing role `name`.
    pub fn palace_by_name(&self, name: PalaceName) -> &Palace {
        self.palace(self.life_branch.step(-(name.index() as i8)))
    }

    /// Branch and record of a star.
    pub fn find_star(&self, name: StarName) -> Option<(Branch, &Star)> {
        self.palaces
            .iter()
            .find_map(|p| p.star(name).map(|s| (p.branch, s)))
    }

    /// The four birth-year transformations with the palace holding each.
    pub fn transform_locations(&self) -> Vec<TransformLocation> {
        self.birth_year_transforms
            .iter()
            .map(|(&transform, &star)| {
                let branch = self.find_star(star).map(|(b, _)| b);
                TransformLocation {
                    transform,
                    star,
                    branch,
                    palace: branch.map(|b| self.palace(b).name),
                }
            })
            .collect()
    }

    /// Palaces in decade order, starting at the Life Palace.
    pub fn decade_palaces(&self) -> Vec<&Palace> {
        let mut out: Vec<&Palace> = self.palaces.iter().collect();
        out.sort_by_key(|p| p.decade_sequence_index);
        out
    }

    /// Palace whose decade band contains `age`.
    pub fn decade_at_age(&self, age: u8) -> Option<&Palace> {
        self.palaces
            .iter()
            .find(|p| p.decade_range.is_some_and(|r| r.contains(age)))
    }

    /// 三方四正 of `branch`: the palace itself, its two trines and the
    /// palace across.
    pub fn triad(&self, branch: Branch) -> [&Palace; 4] {
        [
            self.palace(branch),
            self.palace(branch.step(4)),
            self.palace(branch.step(8)),
            self.palace(branch.opposite()),
        ]
    }
}

/// Compute a chart with the default configuration.
pub fn compute_chart(birth: &LunisolarBirth) -> Result<Chart, ChartError> {
    compute_chart_with_config(birth, &ChartConfig::default())
}

/// Compute a chart.
///
/// Stages run in order: palace positions, bureau, star placement,
/// transformations, decade cycle. Any failure aborts the whole chart.
pub fn compute_chart_with_config(
    birth: &LunisolarBirth,
    config: &ChartConfig,
) -> Result<Chart, ChartError> {
    let span = debug_span!("compute_chart", birth = %birth);
    let _guard = span.enter();

    let positions = locate(birth)?;
    debug!(life = %positions.life, body = %positions.body, "located palaces");

    let bureau = resolve_bureau(birth.year_stem, positions.life)?;
    debug!(bureau = %bureau, "resolved bureau");

    let purple = purple_star_branch(bureau, birth.day)?;
    let mut placed = place(&PlacementInput::from_birth(birth, bureau), config)?;
    debug!(
        purple = %purple,
        treasury = %treasury_star_branch(purple),
        "placed stars"
    );

    let inbound = inbound_palace(&positions.stems, birth.year_stem);
    let palaces: Vec<Palace> = ALL_BRANCHES
        .iter()
        .map(|&b| {
            let mut palace = Palace::empty(b, &positions, inbound);
            palace.stars = placed.remove(&b).unwrap_or_default();
            palace
        })
        .collect();

    let mut palaces = annotate(&palaces, birth.year_stem);
    let unassigned = unassigned_transforms(&palaces, birth.year_stem);
    if !unassigned.is_empty() {
        warn!(?unassigned, "birth-year transformations without a placed star");
    }

    let direction = assign_decades(&mut palaces, bureau, birth.year_stem, birth.gender)?;
    debug!(?direction, "assigned decades");

    let palaces: [Palace; 12] = palaces
        .try_into()
        .map_err(|_| ChartError::TableInconsistency("chart must have twelve palaces"))?;

    Ok(Chart {
        birth: *birth,
        palaces,
        bureau,
        life_branch: positions.life,
        body_branch: positions.body,
        life_ruler_star: life_ruler(positions.life),
        body_ruler_star: body_ruler(birth.year_branch),
        birth_year_transforms: birth_year_transforms(birth.year_stem),
        unassigned_transforms: unassigned,
        decade_direction: direction,
    })
}
