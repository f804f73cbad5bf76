// File: crates/forecast-core/src/region.rs
// Summary: Static region table with per-region price multipliers.

use std::fmt;
use std::str::FromStr;

use crate::error::ForecastError;

/// Indian states offered by the region picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    AndhraPradesh,
    Bihar,
    Gujarat,
    Haryana,
    Karnataka,
    MadhyaPradesh,
    Maharashtra,
    Punjab,
    Rajasthan,
    TamilNadu,
    UttarPradesh,
    WestBengal,
}

/// Multiplier applied when a region name is not in the table.
pub const FALLBACK_MULTIPLIER: f64 = 1.0;

impl Region {
    /// All regions in picker order.
    pub const ALL: [Region; 12] = [
        Region::AndhraPradesh,
        Region::Bihar,
        Region::Gujarat,
        Region::Haryana,
        Region::Karnataka,
        Region::MadhyaPradesh,
        Region::Maharashtra,
        Region::Punjab,
        Region::Rajasthan,
        Region::TamilNadu,
        Region::UttarPradesh,
        Region::WestBengal,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Region::AndhraPradesh => "Andhra Pradesh",
            Region::Bihar => "Bihar",
            Region::Gujarat => "Gujarat",
            Region::Haryana => "Haryana",
            Region::Karnataka => "Karnataka",
            Region::MadhyaPradesh => "Madhya Pradesh",
            Region::Maharashtra => "Maharashtra",
            Region::Punjab => "Punjab",
            Region::Rajasthan => "Rajasthan",
            Region::TamilNadu => "Tamil Nadu",
            Region::UttarPradesh => "Uttar Pradesh",
            Region::WestBengal => "West Bengal",
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Region::Punjab => 1.2,
            Region::Haryana => 1.15,
            Region::UttarPradesh => 1.1,
            Region::Maharashtra => 1.05,
            Region::Gujarat => 1.08,
            Region::Rajasthan => 0.95,
            Region::MadhyaPradesh => 0.98,
            Region::Bihar => 0.92,
            Region::WestBengal => 1.0,
            Region::Karnataka => 1.02,
            Region::TamilNadu => 1.05,
            Region::AndhraPradesh => 1.03,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ForecastError::UnknownRegion(wanted.to_string()))
    }
}

/// Multiplier for a free-form region name, falling back to 1.0 for unknown names.
pub fn multiplier_for(name: &str) -> f64 {
    name.parse::<Region>().map(Region::multiplier).unwrap_or(FALLBACK_MULTIPLIER)
}

/// Base price scaled by the region multiplier, rounded to whole rupees.
pub fn adjusted_base_price(base_price: u32, region: &str) -> u64 {
    (base_price as f64 * multiplier_for(region)).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for r in Region::ALL {
            assert_eq!(r.name().parse::<Region>(), Ok(r));
        }
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(" tamil nadu ".parse::<Region>(), Ok(Region::TamilNadu));
    }

    #[test]
    fn unknown_region_falls_back() {
        assert_eq!(multiplier_for("Unknown Region"), 1.0);
        assert_eq!(adjusted_base_price(2000, "Unknown Region"), 2000);
    }

    #[test]
    fn maharashtra_seed() {
        assert_eq!(adjusted_base_price(2000, "Maharashtra"), 2100);
        assert_eq!(adjusted_base_price(2000, "Punjab"), 2400);
    }

    #[test]
    fn every_multiplier_is_positive() {
        assert!(Region::ALL.iter().all(|r| r.multiplier() > 0.0));
    }
}
