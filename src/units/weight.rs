use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{normalize_alias, FactorTable, LinearUnit, UnitParseError};

/// 무게(질량) 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Kilograms,
    Grams,
    Pounds,
    Ounces,
    /// 미국식 쇼트톤 (907.185 kg).
    Tons,
    MetricTons,
}

/// 1 단위 = 몇 kg인지.
static WEIGHT_TO_KILOGRAMS: [(WeightUnit, f64); 6] = [
    (WeightUnit::Kilograms, 1.0),
    (WeightUnit::Grams, 0.001),
    (WeightUnit::Pounds, 0.453592),
    (WeightUnit::Ounces, 0.0283495),
    (WeightUnit::Tons, 907.185),
    (WeightUnit::MetricTons, 1000.0),
];

impl WeightUnit {
    pub const ALL: [WeightUnit; 6] = [
        WeightUnit::Kilograms,
        WeightUnit::Grams,
        WeightUnit::Pounds,
        WeightUnit::Ounces,
        WeightUnit::Tons,
        WeightUnit::MetricTons,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kilograms",
            WeightUnit::Grams => "grams",
            WeightUnit::Pounds => "pounds",
            WeightUnit::Ounces => "ounces",
            WeightUnit::Tons => "tons",
            WeightUnit::MetricTons => "metric_tons",
        }
    }
}

impl LinearUnit for WeightUnit {
    fn factor_table() -> &'static FactorTable<Self> {
        &WEIGHT_TO_KILOGRAMS
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeightUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_alias(s).as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilograms),
            "g" | "gram" | "grams" => Ok(WeightUnit::Grams),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pounds),
            "oz" | "ounce" | "ounces" => Ok(WeightUnit::Ounces),
            "ton" | "tons" | "shortton" | "shorttons" => Ok(WeightUnit::Tons),
            "t" | "tonne" | "tonnes" | "metricton" | "metrictons" => Ok(WeightUnit::MetricTons),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}
