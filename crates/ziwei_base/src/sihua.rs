//! Four Transformations (四化): birth-year, self and opposite tags.
//!
//! Each stem names four stars that receive 化禄, 化权, 化科 and 化忌. The
//! birth-year stem tags those stars wherever they sit. Each palace's own
//! stem tags matching stars in that palace (self) and in the palace across
//! the ring (opposite).

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::palace::Palace;
use crate::star::StarName;
use crate::stem::Stem;

/// One of the four transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Transform {
    Lu,
    Quan,
    Ke,
    Ji,
}

/// All four transformations in traditional order.
pub const ALL_TRANSFORMS: [Transform; 4] =
    [Transform::Lu, Transform::Quan, Transform::Ke, Transform::Ji];

impl Transform {
    /// Chinese name, e.g. "化禄".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "化禄",
            Self::Quan => "化权",
            Self::Ke => "化科",
            Self::Ji => "化忌",
        }
    }

    /// Letter code A..D used in palace-hua notation.
    pub const fn code(self) -> char {
        match self {
            Self::Lu => 'A',
            Self::Quan => 'B',
            Self::Ke => 'C',
            Self::Ji => 'D',
        }
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four stars a stem transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SihuaRow {
    pub lu: StarName,
    pub quan: StarName,
    pub ke: StarName,
    pub ji: StarName,
}

impl SihuaRow {
    /// Star receiving `transform`.
    pub const fn star(&self, transform: Transform) -> StarName {
        match transform {
            Transform::Lu => self.lu,
            Transform::Quan => self.quan,
            Transform::Ke => self.ke,
            Transform::Ji => self.ji,
        }
    }

    /// Transformation this row gives `star`, if any.
    pub fn transform_of(&self, star: StarName) -> Option<Transform> {
        ALL_TRANSFORMS.into_iter().find(|&t| self.star(t) == star)
    }
}

const fn row(lu: StarName, quan: StarName, ke: StarName, ji: StarName) -> SihuaRow {
    SihuaRow { lu, quan, ke, ji }
}

/// The transformation row for a stem.
pub const fn sihua_row(stem: Stem) -> SihuaRow {
    use StarName::*;
    match stem {
        Stem::Jia => row(LianZhen, PoJun, WuQu, TaiYang),
        Stem::Yi => row(TianJi, TianLiang, ZiWei, TaiYin),
        Stem::Bing => row(TianTong, TianJi, WenChang, LianZhen),
        Stem::Ding => row(TaiYin, TianTong, TianJi, JuMen),
        Stem::Wu => row(TanLang, TaiYin, YouBi, TianJi),
        Stem::Ji => row(WuQu, TanLang, TianLiang, WenQu),
        Stem::Geng => row(TaiYang, WuQu, TaiYin, TianTong),
        Stem::Xin => row(JuMen, TaiYang, WenQu, WenChang),
        Stem::Ren => row(TianLiang, ZiWei, ZuoFu, WuQu),
        Stem::Gui => row(PoJun, JuMen, TaiYin, TanLang),
    }
}

/// Birth-year transformations as a transform → star map.
pub fn birth_year_transforms(year_stem: Stem) -> BTreeMap<Transform, StarName> {
    let r = sihua_row(year_stem);
    ALL_TRANSFORMS.into_iter().map(|t| (t, r.star(t))).collect()
}

/// Re-derive every transformation tag on a placed palace set.
///
/// Returns a new palace set; the input is left untouched. All tags are
/// cleared before being recomputed, so annotating an already annotated set
/// gives the same result as annotating a fresh one.
pub fn annotate(palaces: &[Palace], year_stem: Stem) -> Vec<Palace> {
    let birth = sihua_row(year_stem);
    let mut out = palaces.to_vec();

    for star in out.iter_mut().flat_map(|p| p.stars.iter_mut()) {
        star.clear_transforms();
        star.birth_year_transform = birth.transform_of(star.name);
    }

    for source in palaces {
        let row = sihua_row(source.stem);
        let across = source.branch.opposite();
        for target in out.iter_mut() {
            if target.branch == source.branch {
                for star in &mut target.stars {
                    if let Some(t) = row.transform_of(star.name) {
                        star.self_transforms.insert(t);
                    }
                }
            } else if target.branch == across {
                for star in &mut target.stars {
                    if let Some(t) = row.transform_of(star.name) {
                        star.opposite_transforms.insert(t);
                    }
                }
            }
        }
    }

    out
}

/// Birth-year transformations whose star was never placed.
///
/// With the full star catalogue this is always empty; a non-empty result is
/// an annotation gap, not a failure.
pub fn unassigned_transforms(palaces: &[Palace], year_stem: Stem) -> Vec<Transform> {
    let birth = sihua_row(year_stem);
    ALL_TRANSFORMS
        .into_iter()
        .filter(|&t| {
            let star = birth.star(t);
            !palaces.iter().any(|p| p.has_star(star))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn codes_and_names() {
        assert_eq!(Transform::Lu.code(), 'A');
        assert_eq!(Transform::Ji.code(), 'D');
        assert_eq!(Transform::Quan.name(), "化权");
    }

    #[test]
    fn jia_row() {
        let r = sihua_row(Stem::Jia);
        assert_eq!(r.star(Transform::Lu), StarName::LianZhen);
        assert_eq!(r.star(Transform::Quan), StarName::PoJun);
        assert_eq!(r.star(Transform::Ke), StarName::WuQu);
        assert_eq!(r.star(Transform::Ji), StarName::TaiYang);
        assert_eq!(r.transform_of(StarName::WuQu), Some(Transform::Ke));
        assert_eq!(r.transform_of(StarName::ZiWei), None);
    }

    #[test]
    fn gui_row_traditional() {
        let r = sihua_row(Stem::Gui);
        assert_eq!(r.lu, StarName::PoJun);
        assert_eq!(r.quan, StarName::JuMen);
        assert_eq!(r.ke, StarName::TaiYin);
        assert_eq!(r.ji, StarName::TanLang);
    }

    #[test]
    fn rows_name_four_distinct_stars() {
        for s in ALL_STEMS {
            let m = birth_year_transforms(s);
            assert_eq!(m.len(), 4);
            let mut stars: Vec<_> = m.values().copied().collect();
            stars.sort();
            stars.dedup();
            assert_eq!(stars.len(), 4, "stem {s}");
        }
    }

    #[test]
    fn annotate_empty_set() {
        assert!(annotate(&[], Stem::Jia).is_empty());
    }
}
