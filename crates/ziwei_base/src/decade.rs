//! Decade cycle (大限): direction and 10-year age bands.
//!
//! Yang-stem males and Yin-stem females run forward (clockwise) from the
//! Life Palace; everyone else runs in reverse. The Life Palace band starts at
//! the bureau number and each further palace adds ten years.

use serde::{Deserialize, Serialize};

use crate::birth::Gender;
use crate::branch::Branch;
use crate::bureau::Bureau;
use crate::error::ChartError;
use crate::palace::Palace;
use crate::stem::{Polarity, Stem};

/// Direction the decade cycle walks around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecadeDirection {
    /// Clockwise (顺行).
    Forward,
    /// Counter-clockwise (逆行).
    Reverse,
}

/// Inclusive age band of one decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecadeRange {
    pub start_age: u8,
    pub end_age: u8,
}

impl DecadeRange {
    pub const fn contains(&self, age: u8) -> bool {
        age >= self.start_age && age <= self.end_age
    }
}

/// Direction for a year stem and gender.
pub const fn decade_direction(year_stem: Stem, gender: Gender) -> DecadeDirection {
    match (year_stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => {
            DecadeDirection::Forward
        }
        _ => DecadeDirection::Reverse,
    }
}

/// Position of `branch` in the decade sequence starting at the Life Palace.
pub const fn decade_sequence(direction: DecadeDirection, life: Branch, branch: Branch) -> u8 {
    match direction {
        DecadeDirection::Forward => branch.distance_from(life),
        DecadeDirection::Reverse => life.distance_from(branch),
    }
}

/// Age band for sequence position `seq` under `bureau`.
pub const fn decade_range(bureau: Bureau, seq: u8) -> DecadeRange {
    let start_age = bureau.number() + seq * 10;
    DecadeRange {
        start_age,
        end_age: start_age + 9,
    }
}

/// Assign decade sequence and age band to every palace, in place.
///
/// The Life Palace is read from the palaces' own flags; a set without exactly
/// one Life Palace is a [`ChartError::TableInconsistency`].
pub fn assign_decades(
    palaces: &mut [Palace],
    bureau: Bureau,
    year_stem: Stem,
    gender: Gender,
) -> Result<DecadeDirection, ChartError> {
    let mut lives = palaces.iter().filter(|p| p.is_life_palace);
    let life = match (lives.next(), lives.next()) {
        (Some(p), None) => p.branch,
        _ => {
            return Err(ChartError::TableInconsistency(
                "palace set must contain exactly one life palace",
            ));
        }
    };

    let direction = decade_direction(year_stem, gender);
    for palace in palaces.iter_mut() {
        let seq = decade_sequence(direction, life, palace.branch);
        palace.decade_sequence_index = Some(seq);
        palace.decade_range = Some(decade_range(bureau, seq));
    }
    Ok(direction)
}
