//! Star placement: the Purple and Treasury families plus the independent
//! auxiliary, malefic and romance stars.
//!
//! Every rule resolves to a [`Branch`] through [`Branch::step`]. Stars never
//! displace each other; a branch collects every star that lands on it.

use std::collections::BTreeMap;

use crate::birth::LunisolarBirth;
use crate::branch::{ALL_BRANCHES, Branch, BranchTriad};
use crate::bureau::Bureau;
use crate::config::{BellStarRule, ChartConfig};
use crate::error::ChartError;
use crate::star::{Star, StarName};
use crate::stem::Stem;

use Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};

// ---------------------------------------------------------------------------
// Purple and Treasury families
// ---------------------------------------------------------------------------

/// Purple star (紫微) branch by bureau (rows 2..=6) and lunar day (columns 1..=30).
///
/// Generated from the counting rule: with `x` the days missing to the next
/// multiple of the bureau and `q` the quotient, walk `q - 1` from 寅, then
/// `x` back if `x` is odd or forward if even.
pub const PURPLE_TABLE: [[Branch; 30]; 5] = [
    [
        Chou, Yin, Yin, Mao, Mao, Chen, Chen, Si, Si, Wu, Wu, Wei, Wei, Shen, Shen, You, You, Xu,
        Xu, Hai, Hai, Zi, Zi, Chou, Chou, Yin, Yin, Mao, Mao, Chen,
    ],
    [
        Chen, Chou, Yin, Si, Yin, Mao, Wu, Mao, Chen, Wei, Chen, Si, Shen, Si, Wu, You, Wu, Wei,
        Xu, Wei, Shen, Hai, Shen, You, Zi, You, Xu, Chou, Xu, Hai,
    ],
    [
        Hai, Chen, Chou, Yin, Zi, Si, Yin, Mao, Chou, Wu, Mao, Chen, Yin, Wei, Chen, Si, Mao, Shen,
        Si, Wu, Chen, You, Wu, Wei, Si, Xu, Wei, Shen, Wu, Hai,
    ],
    [
        Wu, Hai, Chen, Chou, Yin, Wei, Zi, Si, Yin, Mao, Shen, Chou, Wu, Mao, Chen, You, Yin, Wei,
        Chen, Si, Xu, Mao, Shen, Si, Wu, Hai, Chen, You, Wu, Wei,
    ],
    [
        You, Wu, Hai, Chen, Chou, Yin, Xu, Wei, Zi, Si, Yin, Mao, Hai, Shen, Chou, Wu, Mao, Chen,
        Zi, You, Yin, Wei, Chen, Si, Chou, Xu, Mao, Shen, Si, Wu,
    ],
];

/// Purple family: offsets from the Purple star, counter-clockwise.
pub const PURPLE_FAMILY: [(StarName, i8); 6] = [
    (StarName::ZiWei, 0),
    (StarName::TianJi, -1),
    (StarName::TaiYang, -3),
    (StarName::WuQu, -4),
    (StarName::TianTong, -5),
    (StarName::LianZhen, -8),
];

/// Treasury family: offsets from the Treasury star, clockwise.
pub const TREASURY_FAMILY: [(StarName, i8); 8] = [
    (StarName::TianFu, 0),
    (StarName::TaiYin, 1),
    (StarName::TanLang, 2),
    (StarName::JuMen, 3),
    (StarName::TianXiang, 4),
    (StarName::TianLiang, 5),
    (StarName::QiSha, 6),
    (StarName::PoJun, 10),
];

/// Purple star branch for a bureau and lunar day.
pub fn purple_star_branch(bureau: Bureau, day: u8) -> Result<Branch, ChartError> {
    if !(1..=30).contains(&day) {
        return Err(ChartError::InvalidInput("day must be 1..=30"));
    }
    PURPLE_TABLE
        .get(bureau.index())
        .and_then(|row| row.get(day as usize - 1))
        .copied()
        .ok_or(ChartError::TableInconsistency(
            "purple star table has no entry",
        ))
}

/// Treasury star (天府) branch: the Purple star mirrored across the 寅申 axis.
pub const fn treasury_star_branch(purple: Branch) -> Branch {
    Chen.step(-(purple.index() as i8))
}

// ---------------------------------------------------------------------------
// Independent stars
// ---------------------------------------------------------------------------

/// 文昌: from 戌, counter-clockwise by hour.
pub const fn wen_chang(hour: Branch) -> Branch {
    Xu.step(-(hour.index() as i8))
}

/// 文曲: from 辰, clockwise by hour.
pub const fn wen_qu(hour: Branch) -> Branch {
    Chen.step(hour.index() as i8)
}

/// 左辅: from 辰, clockwise by month.
pub const fn zuo_fu(month: u8) -> Branch {
    Chen.step(month as i8 - 1)
}

/// 右弼: from 戌, counter-clockwise by month.
pub const fn you_bi(month: u8) -> Branch {
    Xu.step(-(month as i8 - 1))
}

/// 天魁 and 天钺 by year stem.
pub const fn kui_yue(year_stem: Stem) -> (Branch, Branch) {
    match year_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => (Chou, Wei),
        Stem::Yi | Stem::Ji => (Zi, Shen),
        Stem::Bing | Stem::Ding => (Hai, You),
        Stem::Ren | Stem::Gui => (Mao, Si),
        Stem::Xin => (Yin, Wu),
    }
}

/// 天马 by year-branch triad.
pub const fn tian_ma(year_branch: Branch) -> Branch {
    match BranchTriad::of(year_branch) {
        BranchTriad::YinWuXu => Shen,
        BranchTriad::ShenZiChen => Yin,
        BranchTriad::SiYouChou => Hai,
        BranchTriad::HaiMaoWei => Si,
    }
}

/// 禄存 by year stem.
pub const fn lu_cun(year_stem: Stem) -> Branch {
    match year_stem {
        Stem::Jia => Yin,
        Stem::Yi => Mao,
        Stem::Bing | Stem::Wu => Si,
        Stem::Ding | Stem::Ji => Wu,
        Stem::Geng => Shen,
        Stem::Xin => You,
        Stem::Ren => Hai,
        Stem::Gui => Zi,
    }
}

/// 擎羊 and 陀罗 flank 禄存.
pub const fn yang_tuo(year_stem: Stem) -> (Branch, Branch) {
    let lu = lu_cun(year_stem);
    (lu.step(1), lu.step(-1))
}

/// 火星: triad base, clockwise by hour.
pub const fn huo_xing(year_branch: Branch, hour: Branch) -> Branch {
    let base = match BranchTriad::of(year_branch) {
        BranchTriad::YinWuXu => Chou,
        BranchTriad::ShenZiChen => Yin,
        BranchTriad::SiYouChou => Mao,
        BranchTriad::HaiMaoWei => You,
    };
    base.step(hour.index() as i8)
}

/// 铃星: base per [`BellStarRule`], clockwise by hour.
pub const fn ling_xing(year_branch: Branch, hour: Branch, rule: BellStarRule) -> Branch {
    let starts_at_mao = match rule {
        BellStarRule::YearTriad => matches!(BranchTriad::of(year_branch), BranchTriad::YinWuXu),
        BellStarRule::XuYearOnly => matches!(year_branch, Xu),
    };
    let base = if starts_at_mao { Mao } else { Xu };
    base.step(hour.index() as i8)
}

/// 地空 and 地劫: from 亥, counter-clockwise and clockwise by hour.
pub const fn kong_jie(hour: Branch) -> (Branch, Branch) {
    let h = hour.index() as i8;
    (Hai.step(-h), Hai.step(h))
}

/// 红鸾 and 天喜: from 卯, counter-clockwise by year branch; 天喜 opposite.
pub const fn luan_xi(year_branch: Branch) -> (Branch, Branch) {
    let luan = Mao.step(-(year_branch.index() as i8));
    (luan, luan.opposite())
}

/// 天姚: from 丑, clockwise by month.
pub const fn tian_yao(month: u8) -> Branch {
    Chou.step(month as i8 - 1)
}

/// 天刑: from 酉, clockwise by month.
pub const fn tian_xing(month: u8) -> Branch {
    You.step(month as i8 - 1)
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// Everything the placement rules read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementInput {
    pub bureau: Bureau,
    pub day: u8,
    pub month: u8,
    pub hour_branch_index: u8,
    pub year_branch: Branch,
    pub year_stem: Stem,
}

impl PlacementInput {
    pub const fn from_birth(birth: &LunisolarBirth, bureau: Bureau) -> Self {
        Self {
            bureau,
            day: birth.day,
            month: birth.month,
            hour_branch_index: birth.hour_branch_index,
            year_branch: birth.year_branch,
            year_stem: birth.year_stem,
        }
    }
}

/// Branch of every star, in catalogue order.
pub fn star_positions(
    input: &PlacementInput,
    config: &ChartConfig,
) -> Result<Vec<(StarName, Branch)>, ChartError> {
    if !(1..=12).contains(&input.month) {
        return Err(ChartError::InvalidInput("month must be 1..=12"));
    }
    let hour = Branch::from_index(input.hour_branch_index)
        .ok_or(ChartError::InvalidInput("hour branch index must be 0..=11"))?;
    let purple = purple_star_branch(input.bureau, input.day)?;
    let treasury = treasury_star_branch(purple);

    let mut out = Vec::with_capacity(32);
    out.extend(PURPLE_FAMILY.iter().map(|&(s, off)| (s, purple.step(off))));
    out.extend(TREASURY_FAMILY.iter().map(|&(s, off)| (s, treasury.step(off))));

    let (kui, yue) = kui_yue(input.year_stem);
    let (yang, tuo) = yang_tuo(input.year_stem);
    let (kong, jie) = kong_jie(hour);
    let (luan, xi) = luan_xi(input.year_branch);
    out.extend([
        (StarName::WenChang, wen_chang(hour)),
        (StarName::WenQu, wen_qu(hour)),
        (StarName::ZuoFu, zuo_fu(input.month)),
        (StarName::YouBi, you_bi(input.month)),
        (StarName::TianKui, kui),
        (StarName::TianYue, yue),
        (StarName::TianMa, tian_ma(input.year_branch)),
        (StarName::LuCun, lu_cun(input.year_stem)),
        (StarName::QingYang, yang),
        (StarName::TuoLuo, tuo),
        (StarName::HuoXing, huo_xing(input.year_branch, hour)),
        (
            StarName::LingXing,
            ling_xing(input.year_branch, hour, config.bell_star_rule),
        ),
        (StarName::DiKong, kong),
        (StarName::DiJie, jie),
        (StarName::TianXing, tian_xing(input.month)),
        (StarName::HongLuan, luan),
        (StarName::TianXi, xi),
        (StarName::TianYao, tian_yao(input.month)),
    ]);
    out.sort_by_key(|(s, _)| s.index());
    Ok(out)
}

/// Place every star; each branch maps to the stars it holds, possibly none.
pub fn place(
    input: &PlacementInput,
    config: &ChartConfig,
) -> Result<BTreeMap<Branch, Vec<Star>>, ChartError> {
    let mut map: BTreeMap<Branch, Vec<Star>> =
        ALL_BRANCHES.iter().map(|&b| (b, Vec::new())).collect();
    for (name, branch) in star_positions(input, config)? {
        map.entry(branch)
            .or_default()
            .push(Star::placed(name, branch));
    }
    Ok(map)
}
