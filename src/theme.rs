//! 테마 팔레트. 내장 다크/라이트 팔레트와 JSON 사용자 테마를 다룬다.
//!
//! 사용자 테마 파일은 `primary`, `secondary`, `neutral`, `accent`, `status`
//! 다섯 키를 모두 `#rrggbb` 형식으로 가져야 한다. 하나라도 어긋나면 테마가
//! 없는 것으로 보고 내장 팔레트를 쓴다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// `#` 뒤에 16진수 6자리가 오는 색상 값.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// 색상 문자열 검증 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("색상은 #으로 시작해야 함: '{0}'")]
    MissingHash(String),
    #[error("색상은 16진수 6자리여야 함: '{0}'")]
    BadLength(String),
    #[error("16진수가 아닌 문자가 포함됨: '{0}'")]
    NotHex(String),
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::rgb(0xff, 0xff, 0xff);
    pub const BLACK: HexColor = HexColor::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 상대 휘도 (0.0 ~ 1.0).
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorError::BadLength(s.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::NotHex(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::NotHex(s.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// 채널마다 `min(255, trunc(c * factor))`를 적용해 밝기를 조정한다.
pub fn adjust_brightness(color: HexColor, factor: f64) -> HexColor {
    let scale = |c: u8| (f64::from(c) * factor).clamp(0.0, 255.0) as u8;
    HexColor::rgb(scale(color.r), scale(color.g), scale(color.b))
}

/// 배경색 위에 읽히는 글자색. 어두운 배경이면 흰색, 밝으면 검은색.
pub fn text_color_for(background: HexColor) -> HexColor {
    if background.luminance() < 0.5 {
        HexColor::WHITE
    } else {
        HexColor::BLACK
    }
}

/// 다섯 가지 이름 붙은 색.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub neutral: HexColor,
    pub accent: HexColor,
    pub status: HexColor,
}

impl Palette {
    /// 사용자 테마 기본값.
    pub const DEFAULT: Palette = Palette {
        primary: HexColor::rgb(0x66, 0x7e, 0xea),
        secondary: HexColor::rgb(0x76, 0x4b, 0xa2),
        neutral: HexColor::rgb(0x4a, 0x55, 0x68),
        accent: HexColor::rgb(0x48, 0xbb, 0x78),
        status: HexColor::rgb(0xff, 0xff, 0xff),
    };

    pub const DARK: Palette = Palette {
        primary: HexColor::rgb(0x1a, 0x20, 0x2c),
        secondary: HexColor::rgb(0x2d, 0x37, 0x48),
        neutral: HexColor::rgb(0x71, 0x80, 0x96),
        accent: HexColor::rgb(0x48, 0xbb, 0x78),
        status: HexColor::rgb(0xe2, 0xe8, 0xf0),
    };

    pub const LIGHT: Palette = Palette {
        primary: HexColor::rgb(0xff, 0xff, 0xff),
        secondary: HexColor::rgb(0xf7, 0xfa, 0xfc),
        neutral: HexColor::rgb(0x2d, 0x37, 0x48),
        accent: HexColor::rgb(0x48, 0xbb, 0x78),
        status: HexColor::rgb(0x2d, 0x37, 0x48),
    };
}

/// JSON 문자열에서 사용자 테마를 읽는다. 추가 키는 무시한다.
pub fn parse_custom_theme(json: &str) -> Result<Palette, serde_json::Error> {
    serde_json::from_str(json)
}

/// 사용자 테마 파일을 읽는다. 파일이 없거나 형식이 틀리면 None.
pub fn load_custom_theme(path: &Path) -> Option<Palette> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("theme {} not readable: {e}", path.display());
            return None;
        }
    };
    match parse_custom_theme(&content) {
        Ok(palette) => Some(palette),
        Err(e) => {
            log::debug!("theme {} rejected: {e}", path.display());
            None
        }
    }
}

/// 실제로 적용된 팔레트의 출처.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Dark,
    Light,
    Custom,
}

/// 팔레트와 상호작용 상태용 파생 색상을 묶은 해석 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub source: ThemeSource,
    pub dark_mode: bool,
    pub palette: Palette,
    pub accent_hover: HexColor,
    pub accent_pressed: HexColor,
    pub primary_hover: HexColor,
    pub primary_text: HexColor,
    pub accent_text: HexColor,
}

impl ResolvedTheme {
    fn new(source: ThemeSource, dark_mode: bool, palette: Palette) -> Self {
        Self {
            source,
            dark_mode,
            palette,
            accent_hover: adjust_brightness(palette.accent, 0.9),
            accent_pressed: adjust_brightness(palette.accent, 0.8),
            primary_hover: adjust_brightness(palette.primary, 0.9),
            primary_text: text_color_for(palette.primary),
            accent_text: text_color_for(palette.accent),
        }
    }

    /// 라벨 글자색. 다크 모드는 status, 라이트 모드는 neutral.
    pub fn label_color(&self) -> HexColor {
        if self.dark_mode {
            self.palette.status
        } else {
            self.palette.neutral
        }
    }
}

/// 테마 선택 상태. 유효한 사용자 테마가 있으면 그것이 우선한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSelection {
    pub dark_mode: bool,
    pub custom_path: Option<std::path::PathBuf>,
}

impl ThemeSelection {
    pub fn new(dark_mode: bool, custom_path: Option<std::path::PathBuf>) -> Self {
        Self {
            dark_mode,
            custom_path,
        }
    }

    pub fn resolve(&self) -> ResolvedTheme {
        if let Some(palette) = self.custom_path.as_deref().and_then(load_custom_theme) {
            return ResolvedTheme::new(ThemeSource::Custom, self.dark_mode, palette);
        }
        if self.dark_mode {
            ResolvedTheme::new(ThemeSource::Dark, true, Palette::DARK)
        } else {
            ResolvedTheme::new(ThemeSource::Light, false, Palette::LIGHT)
        }
    }
}
