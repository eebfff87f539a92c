use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const UNEXPECTED_ERROR: &str = "general.unexpected_error";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_HISTORY: &str = "main_menu.history";
    pub const MAIN_MENU_EXPORT: &str = "main_menu.export";
    pub const MAIN_MENU_THEME: &str = "main_menu.theme";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const CONVERT_PROMPT_CATEGORY: &str = "convert.prompt_category";
    pub const CONVERT_AVAILABLE_UNITS: &str = "convert.available_units";
    pub const CONVERT_PROMPT_VALUE: &str = "convert.prompt_value";
    pub const CONVERT_PROMPT_FROM_UNIT: &str = "convert.prompt_from_unit";
    pub const CONVERT_PROMPT_TO_UNIT: &str = "convert.prompt_to_unit";
    pub const CONVERT_PROMPT_LABEL: &str = "convert.prompt_label";
    pub const CONVERT_RESULT: &str = "convert.result";
    pub const CONVERT_RETRY: &str = "convert.retry";

    pub const HISTORY_HEADING: &str = "history.heading";
    pub const HISTORY_EMPTY: &str = "history.empty";
    pub const HISTORY_PROMPT_PATH: &str = "history.prompt_path";
    pub const HISTORY_EXPORTED: &str = "history.exported";

    pub const THEME_HEADING: &str = "theme.heading";
    pub const THEME_SOURCE: &str = "theme.source";
    pub const THEME_PROMPT_CUSTOM: &str = "theme.prompt_custom";
    pub const THEME_CUSTOM_REJECTED: &str = "theme.custom_rejected";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_DARK_MODE: &str = "settings.dark_mode";
    pub const SETTINGS_DEFAULT_CATEGORY: &str = "settings.default_category";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 해당 언어 내장 문자열 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let found = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        found.unwrap_or("[missing translation]")
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("language pack {} not loaded: {e}", path.display());
            return None;
        }
    };
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        UNEXPECTED_ERROR => "예상하지 못한 오류가 발생했습니다",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 단위 변환기 ===",
        MAIN_MENU_CONVERT => "1) 단위 변환",
        MAIN_MENU_HISTORY => "2) 변환 기록 보기",
        MAIN_MENU_EXPORT => "3) 변환 기록 내보내기",
        MAIN_MENU_THEME => "4) 테마",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택 (엔터=취소): ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CONVERT_HEADING => "\n-- 단위 변환 --",
        CONVERT_PROMPT_CATEGORY => "카테고리 (Length/Weight/Temperature/Volume, 엔터=기본값): ",
        CONVERT_AVAILABLE_UNITS => "사용 가능한 단위:",
        CONVERT_PROMPT_VALUE => "값 입력: ",
        CONVERT_PROMPT_FROM_UNIT => "입력 단위 (엔터=기본값): ",
        CONVERT_PROMPT_TO_UNIT => "변환 단위 (엔터=기본값): ",
        CONVERT_PROMPT_LABEL => "라벨 (선택, 엔터=없음): ",
        CONVERT_RESULT => "변환 결과:",
        CONVERT_RETRY => "다른 값으로 다시 시도하세요.",
        HISTORY_HEADING => "\n-- 변환 기록 (최신순) --",
        HISTORY_EMPTY => "기록이 없습니다.",
        HISTORY_PROMPT_PATH => "저장할 파일 경로 (.json 이면 JSON, 그 외 텍스트): ",
        HISTORY_EXPORTED => "기록을 저장했습니다:",
        THEME_HEADING => "\n-- 테마 --",
        THEME_SOURCE => "현재 테마:",
        THEME_PROMPT_CUSTOM => "사용자 테마 JSON 경로 (엔터=해제): ",
        THEME_CUSTOM_REJECTED => "사용자 테마를 읽을 수 없어 내장 테마를 사용합니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_OPTIONS => "1) 언어  2) 다크 모드 전환  3) 기본 카테고리",
        SETTINGS_PROMPT_LANGUAGE => "언어 (auto/en/ko): ",
        SETTINGS_DARK_MODE => "다크 모드:",
        SETTINGS_DEFAULT_CATEGORY => "기본 카테고리:",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        UNEXPECTED_ERROR => "An unexpected error occurred",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Unit Converter ===",
        MAIN_MENU_CONVERT => "1) Convert",
        MAIN_MENU_HISTORY => "2) Show history",
        MAIN_MENU_EXPORT => "3) Export history",
        MAIN_MENU_THEME => "4) Theme",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select (enter=cancel): ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CONVERT_HEADING => "\n-- Unit Conversion --",
        CONVERT_PROMPT_CATEGORY => "Category (Length/Weight/Temperature/Volume, enter=default): ",
        CONVERT_AVAILABLE_UNITS => "Available units:",
        CONVERT_PROMPT_VALUE => "Value: ",
        CONVERT_PROMPT_FROM_UNIT => "From unit (enter=default): ",
        CONVERT_PROMPT_TO_UNIT => "To unit (enter=default): ",
        CONVERT_PROMPT_LABEL => "Label (optional, enter=none): ",
        CONVERT_RESULT => "Result:",
        CONVERT_RETRY => "Please retry with a different value.",
        HISTORY_HEADING => "\n-- History (newest first) --",
        HISTORY_EMPTY => "No conversions yet.",
        HISTORY_PROMPT_PATH => "Export path (.json for JSON, otherwise text): ",
        HISTORY_EXPORTED => "History exported to:",
        THEME_HEADING => "\n-- Theme --",
        THEME_SOURCE => "Current theme:",
        THEME_PROMPT_CUSTOM => "Custom theme JSON path (enter=clear): ",
        THEME_CUSTOM_REJECTED => "Custom theme could not be loaded; using the built-in theme.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_OPTIONS => "1) Language  2) Toggle dark mode  3) Default category",
        SETTINGS_PROMPT_LANGUAGE => "Language (auto/en/ko): ",
        SETTINGS_DARK_MODE => "Dark mode:",
        SETTINGS_DEFAULT_CATEGORY => "Default category:",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
