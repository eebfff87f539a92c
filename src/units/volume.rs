use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{normalize_alias, FactorTable, LinearUnit, UnitParseError};

/// 체적 단위. 내부 기준은 리터이다. 갤런/쿼트/파인트/컵/액량온스는 미국식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    Liters,
    Milliliters,
    Gallons,
    Quarts,
    Pints,
    Cups,
    FluidOunces,
}

static VOLUME_TO_LITERS: [(VolumeUnit, f64); 7] = [
    (VolumeUnit::Liters, 1.0),
    (VolumeUnit::Milliliters, 0.001),
    (VolumeUnit::Gallons, 3.78541),
    (VolumeUnit::Quarts, 0.946353),
    (VolumeUnit::Pints, 0.473176),
    (VolumeUnit::Cups, 0.236588),
    (VolumeUnit::FluidOunces, 0.0295735),
];

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 7] = [
        VolumeUnit::Liters,
        VolumeUnit::Milliliters,
        VolumeUnit::Gallons,
        VolumeUnit::Quarts,
        VolumeUnit::Pints,
        VolumeUnit::Cups,
        VolumeUnit::FluidOunces,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VolumeUnit::Liters => "liters",
            VolumeUnit::Milliliters => "milliliters",
            VolumeUnit::Gallons => "gallons",
            VolumeUnit::Quarts => "quarts",
            VolumeUnit::Pints => "pints",
            VolumeUnit::Cups => "cups",
            VolumeUnit::FluidOunces => "fluid_ounces",
        }
    }
}

impl LinearUnit for VolumeUnit {
    fn factor_table() -> &'static FactorTable<Self> {
        &VOLUME_TO_LITERS
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VolumeUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_alias(s).as_str() {
            "l" | "liter" | "liters" | "litre" | "litres" => Ok(VolumeUnit::Liters),
            "ml" | "milliliter" | "milliliters" | "millilitre" => Ok(VolumeUnit::Milliliters),
            "gal" | "gallon" | "gallons" => Ok(VolumeUnit::Gallons),
            "qt" | "quart" | "quarts" => Ok(VolumeUnit::Quarts),
            "pt" | "pint" | "pints" => Ok(VolumeUnit::Pints),
            "cup" | "cups" => Ok(VolumeUnit::Cups),
            "floz" | "fluidounce" | "fluidounces" => Ok(VolumeUnit::FluidOunces),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}
