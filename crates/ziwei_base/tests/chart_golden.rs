//! Golden charts: full pipeline against hand-checked reference charts.

use ziwei_base::{
    Branch, Bureau, Chart, DecadeDirection, Gender, LunisolarBirth, PalaceName, StarName, Stem,
    Transform, compute_chart,
};

use Branch::*;
use PalaceName::{
    Career, Children, Friends, Fortune, Health, Life, Parents, Property, Siblings, Spouse, Travel,
    Wealth,
};
use StarName::*;
use Transform::{Ji as J, Ke as K, Lu as L, Quan as Q};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn stars(chart: &Chart, branch: Branch) -> Vec<StarName> {
    chart.palace(branch).stars.iter().map(|s| s.name).collect()
}

fn assert_stars(chart: &Chart, expected: [&[StarName]; 12]) {
    for (i, want) in expected.iter().enumerate() {
        let branch = Branch::from_index(i as u8).unwrap();
        assert_eq!(stars(chart, branch), want.to_vec(), "stars on {branch}");
    }
}

fn self_tags(chart: &Chart) -> Vec<(Branch, StarName, Transform)> {
    let mut out = Vec::new();
    for p in &chart.palaces {
        for s in &p.stars {
            for &t in &s.self_transforms {
                out.push((p.branch, s.name, t));
            }
        }
    }
    out.sort();
    out
}

/// Opposite tags keyed by the branch of the tagged star.
fn opposite_tags(chart: &Chart) -> Vec<(Branch, StarName, Transform)> {
    let mut out = Vec::new();
    for p in &chart.palaces {
        for s in &p.stars {
            for &t in &s.opposite_transforms {
                out.push((p.branch, s.name, t));
            }
        }
    }
    out.sort();
    out
}

fn sorted(mut v: Vec<(Branch, StarName, Transform)>) -> Vec<(Branch, StarName, Transform)> {
    v.sort();
    v
}

fn decade_starts(chart: &Chart) -> Vec<u8> {
    chart
        .palaces
        .iter()
        .map(|p| p.decade_range.unwrap().start_age)
        .collect()
}

// ---------------------------------------------------------------------------
// 甲辰年 正月十五 子时, male
// ---------------------------------------------------------------------------

fn chart_a() -> Chart {
    compute_chart(&LunisolarBirth::new(Stem::Jia, Chen, 1, 15, 0, Gender::Male)).unwrap()
}

#[test]
fn jia_chen_positions() {
    let c = chart_a();
    assert_eq!(c.life_branch, Yin);
    assert_eq!(c.body_branch, Yin);
    assert_eq!(c.bureau, Bureau::Fire6);
    assert_eq!(c.decade_direction, DecadeDirection::Forward);
    assert_eq!(c.find_star(ZiWei).map(|(b, _)| b), Some(Chou));
    assert_eq!(c.find_star(TianFu).map(|(b, _)| b), Some(Mao));
    assert_eq!(c.inbound_palace().map(|p| p.branch), Some(Xu));
    assert_eq!(c.life_ruler_star, LuCun);
    assert_eq!(c.body_ruler_star, WenChang);
}

#[test]
fn jia_chen_stems_and_names() {
    let c = chart_a();
    use Stem as S;
    let stems: Vec<Stem> = c.palaces.iter().map(|p| p.stem).collect();
    assert_eq!(
        stems,
        vec![
            S::Bing, S::Ding, S::Bing, S::Ding, S::Wu, S::Ji, S::Geng, S::Xin, S::Ren, S::Gui,
            S::Jia, S::Yi
        ]
    );
    let names: Vec<PalaceName> = c.palaces.iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec![
            Spouse, Siblings, Life, Parents, Fortune, Property, Career, Friends, Travel, Health,
            Wealth, Children
        ]
    );
}

#[test]
fn jia_chen_stars() {
    assert_stars(
        &chart_a(),
        [
            &[TianJi],
            &[ZiWei, PoJun, TianKui, TuoLuo, TianYao],
            &[TianMa, LuCun, HuoXing],
            &[TianFu, QingYang],
            &[TaiYin, WenQu, ZuoFu],
            &[LianZhen, TanLang, TianXi],
            &[JuMen],
            &[TianXiang, TianYue],
            &[TianTong, TianLiang],
            &[WuQu, QiSha, TianXing],
            &[TaiYang, WenChang, YouBi, LingXing],
            &[DiKong, DiJie, HongLuan],
        ],
    );
}

#[test]
fn jia_chen_decades() {
    assert_eq!(
        decade_starts(&chart_a()),
        vec![106, 116, 6, 16, 26, 36, 46, 56, 66, 76, 86, 96]
    );
}

#[test]
fn jia_chen_transforms() {
    let c = chart_a();
    assert_eq!(c.find_star(LianZhen).unwrap().1.birth_year_transform, Some(L));
    assert_eq!(c.find_star(PoJun).unwrap().1.birth_year_transform, Some(Q));
    assert_eq!(c.find_star(WuQu).unwrap().1.birth_year_transform, Some(K));
    assert_eq!(c.find_star(TaiYang).unwrap().1.birth_year_transform, Some(J));
    assert_eq!(c.find_star(ZiWei).unwrap().1.birth_year_transform, None);
    assert!(c.unassigned_transforms.is_empty());

    assert_eq!(
        self_tags(&c),
        sorted(vec![
            (Zi, TianJi, Q),
            (Chen, TaiYin, Q),
            (Si, TanLang, Q),
            (Shen, TianLiang, L),
            (Xu, TaiYang, J),
        ])
    );
    assert_eq!(
        opposite_tags(&c),
        sorted(vec![(Shen, TianTong, L), (Xu, YouBi, K)])
    );
}

// ---------------------------------------------------------------------------
// 乙丑年 十一月初三 亥时, male
// ---------------------------------------------------------------------------

fn chart_b() -> Chart {
    compute_chart(&LunisolarBirth::new(Stem::Yi, Chou, 11, 3, 11, Gender::Male)).unwrap()
}

#[test]
fn yi_chou_positions() {
    let c = chart_b();
    assert_eq!(c.life_branch, Chou);
    assert_eq!(c.body_branch, Hai);
    assert_eq!(c.bureau, Bureau::Fire6);
    assert_eq!(c.decade_direction, DecadeDirection::Reverse);
    assert_eq!(c.find_star(ZiWei).map(|(b, _)| b), Some(Hai));
    assert_eq!(c.find_star(TianFu).map(|(b, _)| b), Some(Si));
    assert_eq!(c.inbound_palace().map(|p| p.branch), Some(You));
    assert_eq!(c.life_ruler_star, JuMen);
    assert_eq!(c.body_ruler_star, TianXiang);
    assert!(c.body_palace().is_body_palace);
    assert_eq!(c.body_palace().name, Spouse);
}

#[test]
fn yi_chou_names() {
    let names: Vec<PalaceName> = chart_b().palaces.iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec![
            Siblings, Life, Parents, Fortune, Property, Career, Friends, Travel, Health, Wealth,
            Children, Spouse
        ]
    );
}

#[test]
fn yi_chou_stars() {
    assert_stars(
        &chart_b(),
        [
            &[YouBi, TianKui, DiKong],
            &[],
            &[ZuoFu, TuoLuo, HuoXing, HongLuan],
            &[LianZhen, PoJun, WenQu, LuCun],
            &[QingYang],
            &[TianFu],
            &[TianTong, TaiYin],
            &[WuQu, TanLang, TianXing],
            &[TaiYang, JuMen, TianYue, TianXi],
            &[TianXiang, LingXing],
            &[TianJi, TianLiang, DiJie],
            &[ZiWei, QiSha, WenChang, TianMa, TianYao],
        ],
    );
}

#[test]
fn yi_chou_decades_reverse() {
    assert_eq!(
        decade_starts(&chart_b()),
        vec![16, 6, 116, 106, 96, 86, 76, 66, 56, 46, 36, 26]
    );
}

#[test]
fn yi_chou_transforms() {
    let c = chart_b();
    assert_eq!(
        self_tags(&c),
        sorted(vec![
            (Zi, YouBi, K),
            (Mao, WenQu, J),
            (Wei, TanLang, J),
            (Shen, TaiYang, J),
            (Xu, TianJi, Q),
        ])
    );
    assert_eq!(
        opposite_tags(&c),
        sorted(vec![
            (Wu, TaiYin, Q),
            (Wei, WuQu, L),
            (Wei, TanLang, Q),
            (Hai, WenChang, J),
        ])
    );
    let tanlang = c.find_star(TanLang).unwrap().1;
    assert_eq!(tanlang.palace_hua_codes(), vec!["xD", "iB"]);
}

// ---------------------------------------------------------------------------
// 癸卯年 七月廿三 午时, female
// ---------------------------------------------------------------------------

fn chart_c() -> Chart {
    compute_chart(&LunisolarBirth::new(Stem::Gui, Mao, 7, 23, 6, Gender::Female)).unwrap()
}

#[test]
fn gui_mao_positions() {
    let c = chart_c();
    assert_eq!(c.life_branch, Yin);
    assert_eq!(c.body_branch, Yin);
    assert_eq!(c.bureau, Bureau::Water2);
    assert_eq!(c.decade_direction, DecadeDirection::Forward);
    assert_eq!(c.find_star(ZiWei).map(|(b, _)| b), Some(Zi));
    assert_eq!(c.find_star(TianFu).map(|(b, _)| b), Some(Chen));
    assert_eq!(c.inbound_palace().map(|p| p.branch), Some(Hai));
    assert_eq!(c.body_ruler_star, TianTong);
    let life = c.life_palace().decade_range.unwrap();
    assert_eq!((life.start_age, life.end_age), (2, 11));
}

#[test]
fn gui_mao_stars() {
    assert_stars(
        &chart_c(),
        [
            &[ZiWei, LuCun, HongLuan],
            &[QingYang],
            &[PoJun],
            &[TianKui, HuoXing, TianXing],
            &[LianZhen, TianFu, WenChang, YouBi, LingXing],
            &[TaiYin, TianYue, TianMa, DiKong, DiJie],
            &[TanLang, TianXi],
            &[TianTong, JuMen, TianYao],
            &[WuQu, TianXiang],
            &[TaiYang, TianLiang],
            &[QiSha, WenQu, ZuoFu],
            &[TianJi, TuoLuo],
        ],
    );
}

#[test]
fn gui_mao_decades() {
    assert_eq!(
        decade_starts(&chart_c()),
        vec![102, 112, 2, 12, 22, 32, 42, 52, 62, 72, 82, 92]
    );
}

#[test]
fn gui_mao_transforms() {
    let c = chart_c();
    assert_eq!(
        self_tags(&c),
        sorted(vec![
            (Yin, PoJun, Q),
            (Chen, WenChang, K),
            (Chen, LianZhen, J),
            (Si, TaiYin, L),
            (Wu, TanLang, L),
            (Shen, WuQu, Q),
            (You, TaiYang, Q),
            (Xu, ZuoFu, K),
        ])
    );
    assert_eq!(
        opposite_tags(&c),
        sorted(vec![
            (Shen, WuQu, K),
            (You, TianLiang, Q),
            (Hai, TianJi, K),
            (Si, TaiYin, K),
        ])
    );

    let locs = c.transform_locations();
    let places: Vec<_> = locs.iter().map(|l| (l.transform, l.star, l.branch)).collect();
    assert_eq!(
        places,
        vec![
            (L, PoJun, Some(Yin)),
            (Q, JuMen, Some(Wei)),
            (K, TaiYin, Some(Si)),
            (J, TanLang, Some(Wu)),
        ]
    );
    assert_eq!(locs[0].palace, Some(Life));
}

// ---------------------------------------------------------------------------
// 丙寅年 正月初八 子时, female
// ---------------------------------------------------------------------------

fn chart_d() -> Chart {
    compute_chart(&LunisolarBirth::new(Stem::Bing, Yin, 1, 8, 0, Gender::Female)).unwrap()
}

#[test]
fn bing_yin_positions() {
    let c = chart_d();
    assert_eq!(c.life_branch, Yin);
    assert_eq!(c.body_branch, Yin);
    // Life palace 庚寅 is 松柏木.
    assert_eq!(c.bureau, Bureau::Wood3);
    assert_eq!(c.decade_direction, DecadeDirection::Reverse);
    assert_eq!(c.find_star(ZiWei).map(|(b, _)| b), Some(Mao));
    assert_eq!(c.find_star(TianFu).map(|(b, _)| b), Some(Chou));
    assert_eq!(c.inbound_palace().map(|p| p.branch), Some(Shen));
    assert_eq!(c.life_ruler_star, LuCun);
    assert_eq!(c.body_ruler_star, TianLiang);
}

#[test]
fn bing_yin_stems_and_names() {
    let c = chart_d();
    use Stem as S;
    let stems: Vec<Stem> = c.palaces.iter().map(|p| p.stem).collect();
    assert_eq!(
        stems,
        vec![
            S::Geng, S::Xin, S::Geng, S::Xin, S::Ren, S::Gui, S::Jia, S::Yi, S::Bing, S::Ding,
            S::Wu, S::Ji
        ]
    );
    let names: Vec<PalaceName> = c.palaces.iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec![
            Spouse, Siblings, Life, Parents, Fortune, Property, Career, Friends, Travel, Health,
            Wealth, Children
        ]
    );
}

#[test]
fn bing_yin_stars() {
    assert_stars(
        &chart_d(),
        [
            &[TaiYang],
            &[TianFu, HuoXing, HongLuan, TianYao],
            &[TianJi, TaiYin],
            &[ZiWei, TanLang, LingXing],
            &[JuMen, WenQu, ZuoFu, TuoLuo],
            &[TianXiang, LuCun],
            &[TianLiang, QingYang],
            &[LianZhen, QiSha, TianXi],
            &[TianMa],
            &[TianYue, TianXing],
            &[TianTong, WenChang, YouBi],
            &[WuQu, PoJun, TianKui, DiKong, DiJie],
        ],
    );
}

#[test]
fn bing_yin_decades_reverse() {
    let c = chart_d();
    assert_eq!(
        decade_starts(&c),
        vec![23, 13, 3, 113, 103, 93, 83, 73, 63, 53, 43, 33]
    );
    assert_eq!(c.decade_at_age(25).map(|p| p.branch), Some(Zi));
}

#[test]
fn bing_yin_transforms() {
    let c = chart_d();
    let locs = c.transform_locations();
    let places: Vec<_> = locs.iter().map(|l| (l.transform, l.star, l.branch)).collect();
    assert_eq!(
        places,
        vec![
            (L, TianTong, Some(Xu)),
            (Q, TianJi, Some(Yin)),
            (K, WenChang, Some(Xu)),
            (J, LianZhen, Some(Wei)),
        ]
    );
    assert_eq!(
        self_tags(&c),
        sorted(vec![
            (Zi, TaiYang, L),
            (Yin, TaiYin, K),
            (Chen, ZuoFu, K),
            (Xu, YouBi, K),
            (Hai, WuQu, L),
        ])
    );
    assert_eq!(
        opposite_tags(&c),
        sorted(vec![(Zi, TaiYang, J), (Yin, TianJi, Q), (Hai, PoJun, L)])
    );
}
