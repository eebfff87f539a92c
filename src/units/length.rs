use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{normalize_alias, FactorTable, LinearUnit, UnitParseError};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Centimeters,
    Millimeters,
    Miles,
    Yards,
    Feet,
    Inches,
}

/// 1 단위 = 몇 미터인지.
static LENGTH_TO_METERS: [(LengthUnit, f64); 8] = [
    (LengthUnit::Meters, 1.0),
    (LengthUnit::Kilometers, 1000.0),
    (LengthUnit::Centimeters, 0.01),
    (LengthUnit::Millimeters, 0.001),
    (LengthUnit::Miles, 1609.344),
    (LengthUnit::Yards, 0.9144),
    (LengthUnit::Feet, 0.3048),
    (LengthUnit::Inches, 0.0254),
];

impl LengthUnit {
    /// 선택 위젯에 나열하는 순서.
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Meters,
        LengthUnit::Kilometers,
        LengthUnit::Centimeters,
        LengthUnit::Millimeters,
        LengthUnit::Miles,
        LengthUnit::Yards,
        LengthUnit::Feet,
        LengthUnit::Inches,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Kilometers => "kilometers",
            LengthUnit::Centimeters => "centimeters",
            LengthUnit::Millimeters => "millimeters",
            LengthUnit::Miles => "miles",
            LengthUnit::Yards => "yards",
            LengthUnit::Feet => "feet",
            LengthUnit::Inches => "inches",
        }
    }
}

impl LinearUnit for LengthUnit {
    fn factor_table() -> &'static FactorTable<Self> {
        &LENGTH_TO_METERS
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_alias(s).as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meters),
            "km" | "kilometer" | "kilometers" | "kilometre" => Ok(LengthUnit::Kilometers),
            "cm" | "centimeter" | "centimeters" => Ok(LengthUnit::Centimeters),
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Millimeters),
            "mi" | "mile" | "miles" => Ok(LengthUnit::Miles),
            "yd" | "yard" | "yards" => Ok(LengthUnit::Yards),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Feet),
            "in" | "inch" | "inches" | "\"" => Ok(LengthUnit::Inches),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}
