//! Lunisolar birth input, as produced by the external calendar service.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::ChartError;
use crate::stem::Stem;

/// Gender of the native; together with year-stem polarity it fixes the
/// decade-cycle direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(ChartError::InvalidInput("gender must be male or female")),
        }
    }
}

/// A birth moment already converted to its lunisolar representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunisolarBirth {
    /// Heavenly stem of the lunar year.
    pub year_stem: Stem,
    /// Earthly branch of the lunar year.
    pub year_branch: Branch,
    /// Lunar month, 1..=12.
    pub month: u8,
    /// Lunar day, 1..=30.
    pub day: u8,
    /// Double-hour index, 0 (子) ..= 11 (亥).
    pub hour_branch_index: u8,
    /// Gender of the native.
    pub gender: Gender,
}

impl LunisolarBirth {
    pub const fn new(
        year_stem: Stem,
        year_branch: Branch,
        month: u8,
        day: u8,
        hour_branch_index: u8,
        gender: Gender,
    ) -> Self {
        Self {
            year_stem,
            year_branch,
            month,
            day,
            hour_branch_index,
            gender,
        }
    }

    /// Check every field against its contract.
    ///
    /// The stem/branch pair must also name a real year of the 60-year cycle,
    /// which requires equal parity (甲子 exists, 甲丑 does not).
    pub fn validate(&self) -> Result<(), ChartError> {
        if !(1..=12).contains(&self.month) {
            return Err(ChartError::InvalidInput("month must be 1..=12"));
        }
        if !(1..=30).contains(&self.day) {
            return Err(ChartError::InvalidInput("day must be 1..=30"));
        }
        if self.hour_branch_index > 11 {
            return Err(ChartError::InvalidInput("hour branch index must be 0..=11"));
        }
        if self.year_stem.index() % 2 != self.year_branch.index() % 2 {
            return Err(ChartError::InvalidInput(
                "year stem and branch do not form a sexagenary year",
            ));
        }
        Ok(())
    }

    /// Branch of the birth double-hour.
    pub fn hour_branch(&self) -> Result<Branch, ChartError> {
        Branch::from_index(self.hour_branch_index)
            .ok_or(ChartError::InvalidInput("hour branch index must be 0..=11"))
    }
}

impl Display for LunisolarBirth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let hour = Branch::from_index(self.hour_branch_index)
            .map(Branch::name)
            .unwrap_or("?");
        write!(
            f,
            "{}{}年 {}月{}日 {}时",
            self.year_stem, self.year_branch, self.month, self.day, hour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth() -> LunisolarBirth {
        LunisolarBirth::new(Stem::Jia, Branch::Chen, 1, 15, 0, Gender::Male)
    }

    #[test]
    fn valid_birth_passes() {
        assert_eq!(birth().validate(), Ok(()));
    }

    #[test]
    fn month_out_of_range() {
        let mut b = birth();
        b.month = 0;
        assert!(b.validate().is_err());
        b.month = 13;
        assert!(b.validate().is_err());
    }

    #[test]
    fn day_out_of_range() {
        let mut b = birth();
        b.day = 0;
        assert!(b.validate().is_err());
        b.day = 31;
        assert!(b.validate().is_err());
        b.day = 30;
        assert!(b.validate().is_ok());
    }

    #[test]
    fn hour_out_of_range() {
        let mut b = birth();
        b.hour_branch_index = 12;
        assert!(b.validate().is_err());
        assert!(b.hour_branch().is_err());
    }

    #[test]
    fn mismatched_parity_rejected() {
        let mut b = birth();
        b.year_branch = Branch::Chou;
        assert_eq!(
            b.validate(),
            Err(ChartError::InvalidInput(
                "year stem and branch do not form a sexagenary year"
            ))
        );
    }

    #[test]
    fn gender_parse() {
        assert_eq!("Male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("女".parse::<Gender>(), Ok(Gender::Female));
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn display_reads_as_lunar_date() {
        assert_eq!(birth().to_string(), "甲辰年 1月15日 子时");
    }
}
