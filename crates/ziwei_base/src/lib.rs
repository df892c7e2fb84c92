//! ZiWei Dou Shu natal chart engine.
//!
//! This crate provides:
//! - Palace positions, palace stems and the Five-Elements bureau
//! - Placement of the 14 main stars and 18 independent stars with brightness
//! - Birth-year, self and opposite Four Transformation tags
//! - Decade-cycle direction and age bands
//!
//! Input is a birth already converted to its lunisolar form. Every stage is a
//! pure function over compile-time tables.

pub mod birth;
pub mod branch;
pub mod bureau;
pub mod chart;
pub mod config;
pub mod decade;
pub mod error;
pub mod palace;
pub mod placement;
pub mod sihua;
pub mod star;
pub mod stem;

pub use birth::{Gender, LunisolarBirth};
pub use branch::{ALL_BRANCHES, Branch, BranchTriad, step_branch};
pub use bureau::{ALL_BUREAUX, Bureau, Element, nayin, resolve_bureau, sexagenary_index};
pub use chart::{
    Chart, TransformLocation, body_ruler, compute_chart, compute_chart_with_config, life_ruler,
};
pub use config::{BellStarRule, ChartConfig};
pub use decade::{DecadeDirection, DecadeRange, assign_decades, decade_direction};
pub use error::ChartError;
pub use palace::{
    ALL_PALACE_NAMES, Palace, PalaceName, PalacePositions, inbound_palace, locate, month_branch,
    palace_stems,
};
pub use placement::{
    PURPLE_FAMILY, PlacementInput, TREASURY_FAMILY, place, purple_star_branch, star_positions,
    treasury_star_branch,
};
pub use sihua::{
    ALL_TRANSFORMS, SihuaRow, Transform, annotate, birth_year_transforms, sihua_row,
    unassigned_transforms,
};
pub use star::{ALL_STARS, Brightness, MAIN_STARS, Star, StarKind, StarName, brightness};
pub use stem::{ALL_STEMS, Polarity, Stem, five_tiger_dun};
