//! 사용자 테마 파일 로딩과 설정 파일 저장/로드 테스트.
use std::fs;
use std::path::PathBuf;
use unit_conversion_toolbox::category::UnitCategory;
use unit_conversion_toolbox::config::{self, Config};
use unit_conversion_toolbox::theme::{
    load_custom_theme, HexColor, Palette, ThemeSelection, ThemeSource,
};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("uct-{}-{name}", std::process::id()))
}

const VALID_THEME: &str = r##"{
    "primary": "#102030",
    "secondary": "#405060",
    "neutral": "#708090",
    "accent": "#A0B0C0",
    "status": "#ffffff"
}"##;

#[test]
fn custom_theme_file_overrides_dark_mode() {
    let path = scratch_path("theme-valid.json");
    fs::write(&path, VALID_THEME).unwrap();

    let palette = load_custom_theme(&path).expect("valid theme");
    assert_eq!(palette.accent, HexColor::rgb(0xa0, 0xb0, 0xc0));

    let theme = ThemeSelection::new(true, Some(path.clone())).resolve();
    assert_eq!(theme.source, ThemeSource::Custom);
    assert_eq!(theme.palette, palette);
    assert_eq!(theme.primary_text, HexColor::WHITE);
    let _ = fs::remove_file(path);
}

#[test]
fn invalid_theme_files_are_ignored() {
    let cases = [
        ("theme-bad-json.json", "{ primary: "),
        ("theme-missing-key.json", r##"{"primary":"#000000"}"##),
        (
            "theme-short-hex.json",
            r##"{"primary":"#000","secondary":"#111111","neutral":"#222222","accent":"#333333","status":"#444444"}"##,
        ),
        (
            "theme-not-string.json",
            r##"{"primary":0,"secondary":"#111111","neutral":"#222222","accent":"#333333","status":"#444444"}"##,
        ),
    ];
    for (name, body) in cases {
        let path = scratch_path(name);
        fs::write(&path, body).unwrap();
        assert_eq!(load_custom_theme(&path), None, "{name}");

        let theme = ThemeSelection::new(false, Some(path.clone())).resolve();
        assert_eq!(theme.source, ThemeSource::Light);
        assert_eq!(theme.palette, Palette::LIGHT);
        let _ = fs::remove_file(path);
    }
}

#[test]
fn config_is_created_then_reloaded() {
    let path = scratch_path("config.toml");
    let _ = fs::remove_file(&path);

    let created = config::load_or_default(&path).unwrap();
    assert_eq!(created, Config::default());
    assert!(path.exists());

    let changed = Config {
        dark_mode: false,
        default_category: UnitCategory::Volume,
        history_limit: 10,
        custom_theme_path: Some(PathBuf::from("themes/ocean.json")),
        ..created
    };
    changed.save(&path).unwrap();
    let reloaded = config::load_or_default(&path).unwrap();
    assert_eq!(reloaded, changed);
    let _ = fs::remove_file(path);
}

#[test]
fn malformed_config_is_an_error() {
    let path = scratch_path("config-bad.toml");
    fs::write(&path, "history_limit = \"many\"").unwrap();
    assert!(config::load_or_default(&path).is_err());
    let _ = fs::remove_file(path);
}
