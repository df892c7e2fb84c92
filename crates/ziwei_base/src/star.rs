//! Star catalogue, star kinds, and per-branch brightness.
//!
//! The chart uses 32 stars: the 14 main stars of the Purple and Treasury
//! families plus 18 independently placed stars. Brightness (庙旺得利平不陷)
//! depends only on which branch a star lands on.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::sihua::Transform;

/// Kind-category of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarKind {
    Main,
    Auxiliary,
    Malefic,
    Romance,
}

/// Every star the engine places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StarName {
    // Purple family
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    // Treasury family
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
    // Auxiliary
    WenChang,
    WenQu,
    ZuoFu,
    YouBi,
    TianKui,
    TianYue,
    TianMa,
    LuCun,
    // Malefic
    QingYang,
    TuoLuo,
    HuoXing,
    LingXing,
    DiKong,
    DiJie,
    TianXing,
    // Romance
    HongLuan,
    TianXi,
    TianYao,
}

/// All 32 stars in catalogue order.
pub const ALL_STARS: [StarName; 32] = [
    StarName::ZiWei,
    StarName::TianJi,
    StarName::TaiYang,
    StarName::WuQu,
    StarName::TianTong,
    StarName::LianZhen,
    StarName::TianFu,
    StarName::TaiYin,
    StarName::TanLang,
    StarName::JuMen,
    StarName::TianXiang,
    StarName::TianLiang,
    StarName::QiSha,
    StarName::PoJun,
    StarName::WenChang,
    StarName::WenQu,
    StarName::ZuoFu,
    StarName::YouBi,
    StarName::TianKui,
    StarName::TianYue,
    StarName::TianMa,
    StarName::LuCun,
    StarName::QingYang,
    StarName::TuoLuo,
    StarName::HuoXing,
    StarName::LingXing,
    StarName::DiKong,
    StarName::DiJie,
    StarName::TianXing,
    StarName::HongLuan,
    StarName::TianXi,
    StarName::TianYao,
];

/// The 14 main stars (十四主星).
pub const MAIN_STARS: [StarName; 14] = [
    StarName::ZiWei,
    StarName::TianJi,
    StarName::TaiYang,
    StarName::WuQu,
    StarName::TianTong,
    StarName::LianZhen,
    StarName::TianFu,
    StarName::TaiYin,
    StarName::TanLang,
    StarName::JuMen,
    StarName::TianXiang,
    StarName::TianLiang,
    StarName::QiSha,
    StarName::PoJun,
];

impl StarName {
    /// Chinese name of the star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天机",
            Self::TaiYang => "太阳",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉贞",
            Self::TianFu => "天府",
            Self::TaiYin => "太阴",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
            Self::TianKui => "天魁",
            Self::TianYue => "天钺",
            Self::TianMa => "天马",
            Self::LuCun => "禄存",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀罗",
            Self::HuoXing => "火星",
            Self::LingXing => "铃星",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
            Self::TianXing => "天刑",
            Self::HongLuan => "红鸾",
            Self::TianXi => "天喜",
            Self::TianYao => "天姚",
        }
    }

    pub const fn kind(self) -> StarKind {
        match self {
            Self::ZiWei
            | Self::TianJi
            | Self::TaiYang
            | Self::WuQu
            | Self::TianTong
            | Self::LianZhen
            | Self::TianFu
            | Self::TaiYin
            | Self::TanLang
            | Self::JuMen
            | Self::TianXiang
            | Self::TianLiang
            | Self::QiSha
            | Self::PoJun => StarKind::Main,
            Self::WenChang
            | Self::WenQu
            | Self::ZuoFu
            | Self::YouBi
            | Self::TianKui
            | Self::TianYue
            | Self::TianMa
            | Self::LuCun => StarKind::Auxiliary,
            Self::QingYang
            | Self::TuoLuo
            | Self::HuoXing
            | Self::LingXing
            | Self::DiKong
            | Self::DiJie
            | Self::TianXing => StarKind::Malefic,
            Self::HongLuan | Self::TianXi | Self::TianYao => StarKind::Romance,
        }
    }

    /// 0-based position in [`ALL_STARS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_main(self) -> bool {
        matches!(self.kind(), StarKind::Main)
    }
}

impl Display for StarName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Brightness
// ---------------------------------------------------------------------------

/// Brightness level of a star in a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brightness {
    /// 庙
    Miao,
    /// 旺
    Wang,
    /// 得
    De,
    /// 利
    Li,
    /// 平
    Ping,
    /// 不
    Bu,
    /// 陷
    Xian,
    /// No rating recorded for this star/branch.
    Neutral,
}

impl Brightness {
    /// Chinese label; empty for [`Brightness::Neutral`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Miao => "庙",
            Self::Wang => "旺",
            Self::De => "得",
            Self::Li => "利",
            Self::Ping => "平",
            Self::Bu => "不",
            Self::Xian => "陷",
            Self::Neutral => "",
        }
    }
}

use Brightness::{Bu, De, Li, Miao, Ping, Wang, Xian};

/// Ratings per branch (子..亥) for one star.
type BrightnessRow = [Brightness; 12];

const ZIWEI_ROW: BrightnessRow = [Miao, Wang, De, Li, Ping, Bu, Miao, Wang, De, Li, Ping, Bu];
const TIANJI_ROW: BrightnessRow = [Ping, Miao, Wang, De, Li, Bu, Xian, Ping, Miao, Wang, De, Li];
const TAIYANG_ROW: BrightnessRow = [Xian, Bu, Ping, Li, De, Wang, Miao, Wang, De, Li, Ping, Bu];
const WUQU_ROW: BrightnessRow = [De, Li, Ping, Bu, Xian, Miao, Wang, De, Li, Ping, Bu, Miao];
const TIANTONG_ROW: BrightnessRow = [Li, Ping, Bu, Xian, Miao, Wang, De, Li, Ping, Bu, Miao, Wang];
const LIANZHEN_ROW: BrightnessRow = [Ping, Bu, Xian, Miao, Wang, De, Li, Ping, Bu, Miao, Wang, De];
const TAIYIN_ROW: BrightnessRow = [Miao, Wang, De, Li, Ping, Bu, Xian, Bu, Ping, Li, De, Wang];
const TANLANG_ROW: BrightnessRow = [Wang, De, Li, Ping, Bu, Xian, Miao, Wang, De, Li, Ping, Bu];
const JUMEN_ROW: BrightnessRow = [Bu, Xian, Miao, Wang, De, Li, Ping, Bu, Miao, Wang, De, Li];
const TIANXIANG_ROW: BrightnessRow = [De, Li, Ping, Bu, Miao, Wang, De, Li, Ping, Bu, Miao, Wang];
const TIANLIANG_ROW: BrightnessRow = [Ping, Bu, Miao, Wang, De, Li, Ping, Bu, Miao, Wang, De, Li];
const QISHA_ROW: BrightnessRow = [Miao, Wang, De, Li, Ping, Bu, Xian, Miao, Wang, De, Li, Ping];
const POJUN_ROW: BrightnessRow = [De, Li, Ping, Bu, Xian, Miao, Wang, De, Li, Ping, Bu, Miao];
const QINGYANG_ROW: BrightnessRow = [Xian, Bu, Ping, Li, De, Wang, Xian, Bu, Ping, Li, De, Wang];
const TUOLUO_ROW: BrightnessRow = [Wang, De, Li, Ping, Bu, Xian, Wang, De, Li, Ping, Bu, Xian];
const HUOXING_ROW: BrightnessRow = [De, Miao, Wang, De, Li, Ping, Bu, Xian, Bu, Ping, Li, De];
const LINGXING_ROW: BrightnessRow = [Bu, Xian, Bu, Ping, Li, De, Miao, Wang, De, Miao, Wang, De];

const ALWAYS_MIAO: BrightnessRow = [Miao; 12];
const ALWAYS_PING: BrightnessRow = [Ping; 12];
const ALWAYS_XIAN: BrightnessRow = [Xian; 12];

/// Brightness row for a star, or None if the star carries no ratings.
const fn brightness_row(star: StarName) -> Option<&'static BrightnessRow> {
    match star {
        StarName::ZiWei => Some(&ZIWEI_ROW),
        StarName::TianJi => Some(&TIANJI_ROW),
        StarName::TaiYang => Some(&TAIYANG_ROW),
        StarName::WuQu => Some(&WUQU_ROW),
        StarName::TianTong => Some(&TIANTONG_ROW),
        StarName::LianZhen => Some(&LIANZHEN_ROW),
        StarName::TianFu => Some(&ALWAYS_MIAO),
        StarName::TaiYin => Some(&TAIYIN_ROW),
        StarName::TanLang => Some(&TANLANG_ROW),
        StarName::JuMen => Some(&JUMEN_ROW),
        StarName::TianXiang => Some(&TIANXIANG_ROW),
        StarName::TianLiang => Some(&TIANLIANG_ROW),
        StarName::QiSha => Some(&QISHA_ROW),
        StarName::PoJun => Some(&POJUN_ROW),
        // 文昌 and 天马 follow the Purple star's cycle, 文曲 the Sky Beam's.
        StarName::WenChang => Some(&ZIWEI_ROW),
        StarName::WenQu => Some(&TIANLIANG_ROW),
        StarName::ZuoFu | StarName::YouBi | StarName::LuCun => Some(&ALWAYS_MIAO),
        StarName::TianMa => Some(&ZIWEI_ROW),
        StarName::QingYang => Some(&QINGYANG_ROW),
        StarName::TuoLuo => Some(&TUOLUO_ROW),
        StarName::HuoXing => Some(&HUOXING_ROW),
        StarName::LingXing => Some(&LINGXING_ROW),
        StarName::DiJie => Some(&ALWAYS_XIAN),
        StarName::TianKui
        | StarName::TianYue
        | StarName::HongLuan
        | StarName::TianXi
        | StarName::TianYao => Some(&ALWAYS_PING),
        StarName::DiKong | StarName::TianXing => None,
    }
}

/// Brightness of `star` when it sits on `branch`.
///
/// Stars without a rating table resolve to [`Brightness::Neutral`].
pub const fn brightness(star: StarName, branch: Branch) -> Brightness {
    match brightness_row(star) {
        Some(row) => row[branch.index() as usize],
        None => Brightness::Neutral,
    }
}

// ---------------------------------------------------------------------------
// Placed star
// ---------------------------------------------------------------------------

/// A star as it sits in a palace, with its transformation tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Star {
    pub name: StarName,
    pub kind: StarKind,
    pub brightness: Brightness,
    /// Tag from the birth-year stem, if this star is one of its four.
    pub birth_year_transform: Option<Transform>,
    /// Tags from the stem of the palace the star sits in (自化).
    pub self_transforms: BTreeSet<Transform>,
    /// Tags from the stem of the opposite palace.
    pub opposite_transforms: BTreeSet<Transform>,
}

impl Star {
    /// A freshly placed, untagged star on `branch`.
    pub fn placed(name: StarName, branch: Branch) -> Self {
        Self {
            name,
            kind: name.kind(),
            brightness: brightness(name, branch),
            birth_year_transform: None,
            self_transforms: BTreeSet::new(),
            opposite_transforms: BTreeSet::new(),
        }
    }

    /// Drop every transformation tag.
    pub fn clear_transforms(&mut self) {
        self.birth_year_transform = None;
        self.self_transforms.clear();
        self.opposite_transforms.clear();
    }

    /// Palace-hua notation: `x` + code for self tags, `i` + code for
    /// opposite tags (e.g. `["xA", "iD"]`).
    pub fn palace_hua_codes(&self) -> Vec<String> {
        let own = self.self_transforms.iter().map(|t| format!("x{}", t.code()));
        let opp = self
            .opposite_transforms
            .iter()
            .map(|t| format!("i{}", t.code()));
        own.chain(opp).collect()
    }
}
