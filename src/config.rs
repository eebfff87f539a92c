use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::category::{Unit, UnitCategory};
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::units::*;

/// 별도 지정이 없을 때 쓰는 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 변환 화면에서 처음 선택되는 입력/출력 단위 쌍.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPair<U> {
    pub from: U,
    pub to: U,
}

/// 각 카테고리별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub length: UnitPair<LengthUnit>,
    pub weight: UnitPair<WeightUnit>,
    pub temperature: UnitPair<TemperatureUnit>,
    pub volume: UnitPair<VolumeUnit>,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            length: UnitPair {
                from: LengthUnit::Meters,
                to: LengthUnit::Feet,
            },
            weight: UnitPair {
                from: WeightUnit::Kilograms,
                to: WeightUnit::Pounds,
            },
            temperature: UnitPair {
                from: TemperatureUnit::Celsius,
                to: TemperatureUnit::Fahrenheit,
            },
            volume: UnitPair {
                from: VolumeUnit::Liters,
                to: VolumeUnit::Gallons,
            },
        }
    }
}

impl DefaultUnits {
    /// 카테고리의 기본 단위 쌍을 태그 단위로 반환한다.
    pub fn pair_for(&self, category: UnitCategory) -> (Unit, Unit) {
        match category {
            UnitCategory::Length => (self.length.from.into(), self.length.to.into()),
            UnitCategory::Weight => (self.weight.from.into(), self.weight.to.into()),
            UnitCategory::Temperature => {
                (self.temperature.from.into(), self.temperature.to.into())
            }
            UnitCategory::Volume => (self.volume.from.into(), self.volume.to.into()),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto / en / ko
    pub language: String,
    pub language_pack_dir: Option<String>,
    pub default_category: UnitCategory,
    pub dark_mode: bool,
    pub custom_theme_path: Option<PathBuf>,
    pub history_limit: usize,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_category: UnitCategory::Length,
            dark_mode: true,
            custom_theme_path: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        log::info!("created default configuration at {}", path.display());
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("dark_mode = false\nlanguage = \"ko\"\n").unwrap();
        assert!(!cfg.dark_mode);
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(cfg.default_units, DefaultUnits::default());
    }

    #[test]
    fn unit_names_are_snake_case_in_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(text.contains("from = \"meters\""), "{text}");
        assert!(text.contains("default_category = \"Length\""), "{text}");
    }

    #[test]
    fn pair_for_returns_tagged_units() {
        let units = DefaultUnits::default();
        assert_eq!(
            units.pair_for(UnitCategory::Weight),
            (
                Unit::Weight(WeightUnit::Kilograms),
                Unit::Weight(WeightUnit::Pounds)
            )
        );
    }
}
