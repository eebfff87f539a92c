use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{normalize_alias, UnitParseError};

/// 온도 단위를 정의한다. 배율과 원점이 모두 달라 계수표 대신 섭씨 기준 1차식을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        TemperatureUnit::Kelvin => value_c + KELVIN_OFFSET,
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_alias(s).as_str() {
            "c" | "°c" | "celsius" | "centigrade" => Ok(TemperatureUnit::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" | "kelvins" => Ok(TemperatureUnit::Kelvin),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_hop_is_affine() {
        assert_eq!(to_celsius(212.0, TemperatureUnit::Fahrenheit), 100.0);
        assert_eq!(from_celsius(-40.0, TemperatureUnit::Fahrenheit), -40.0);
        assert_eq!(to_celsius(0.0, TemperatureUnit::Kelvin), -273.15);
    }

    #[test]
    fn parses_degree_symbols() {
        assert_eq!("°C".parse(), Ok(TemperatureUnit::Celsius));
        assert_eq!("F".parse(), Ok(TemperatureUnit::Fahrenheit));
        assert!("rankine".parse::<TemperatureUnit>().is_err());
    }
}
