use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::units::{LengthUnit, TemperatureUnit, UnitParseError, VolumeUnit, WeightUnit};

/// 변환 가능한 물리량 종류. 닫힌 집합이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Volume,
}

/// 카테고리 이름을 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 카테고리: {0}")]
pub struct CategoryParseError(pub String);

impl UnitCategory {
    pub const ALL: [UnitCategory; 4] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Volume,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Volume => "Volume",
        }
    }

    /// 카테고리에 속한 단위를 선택 위젯 순서대로 반환한다.
    pub fn units(self) -> Vec<Unit> {
        match self {
            UnitCategory::Length => LengthUnit::ALL.iter().copied().map(Unit::Length).collect(),
            UnitCategory::Weight => WeightUnit::ALL.iter().copied().map(Unit::Weight).collect(),
            UnitCategory::Temperature => TemperatureUnit::ALL
                .iter()
                .copied()
                .map(Unit::Temperature)
                .collect(),
            UnitCategory::Volume => VolumeUnit::ALL.iter().copied().map(Unit::Volume).collect(),
        }
    }

    /// 카테고리 안에서 단위 이름(별칭 포함)을 해석한다.
    pub fn parse_unit(self, s: &str) -> Result<Unit, UnitParseError> {
        Ok(match self {
            UnitCategory::Length => Unit::Length(s.parse()?),
            UnitCategory::Weight => Unit::Weight(s.parse()?),
            UnitCategory::Temperature => Unit::Temperature(s.parse()?),
            UnitCategory::Volume => Unit::Volume(s.parse()?),
        })
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "distance" => Ok(UnitCategory::Length),
            "weight" | "mass" => Ok(UnitCategory::Weight),
            "temperature" | "temp" => Ok(UnitCategory::Temperature),
            "volume" => Ok(UnitCategory::Volume),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// 카테고리 태그가 붙은 단위. 단위는 정확히 하나의 카테고리에 속한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "unit")]
pub enum Unit {
    Length(LengthUnit),
    Weight(WeightUnit),
    Temperature(TemperatureUnit),
    Volume(VolumeUnit),
}

impl Unit {
    pub fn category(self) -> UnitCategory {
        match self {
            Unit::Length(_) => UnitCategory::Length,
            Unit::Weight(_) => UnitCategory::Weight,
            Unit::Temperature(_) => UnitCategory::Temperature,
            Unit::Volume(_) => UnitCategory::Volume,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Length(u) => u.name(),
            Unit::Weight(u) => u.name(),
            Unit::Temperature(u) => u.name(),
            Unit::Volume(u) => u.name(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<LengthUnit> for Unit {
    fn from(value: LengthUnit) -> Self {
        Unit::Length(value)
    }
}

impl From<WeightUnit> for Unit {
    fn from(value: WeightUnit) -> Self {
        Unit::Weight(value)
    }
}

impl From<TemperatureUnit> for Unit {
    fn from(value: TemperatureUnit) -> Self {
        Unit::Temperature(value)
    }
}

impl From<VolumeUnit> for Unit {
    fn from(value: VolumeUnit) -> Self {
        Unit::Volume(value)
    }
}
