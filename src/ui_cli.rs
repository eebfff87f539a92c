use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::app::{AppError, AppState};
use crate::category::UnitCategory;
use crate::format::format_value;
use crate::i18n::{keys, Translator};
use crate::input;
use crate::theme::{load_custom_theme, ResolvedTheme, ThemeSource};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    History,
    Export,
    Theme,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_CONVERT,
        keys::MAIN_MENU_HISTORY,
        keys::MAIN_MENU_EXPORT,
        keys::MAIN_MENU_THEME,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        // 입력 스트림이 닫히면 종료로 본다
        if sel.is_empty() {
            return Ok(MenuChoice::Exit);
        }
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Convert),
        "2" => Some(MenuChoice::History),
        "3" => Some(MenuChoice::Export),
        "4" => Some(MenuChoice::Theme),
        "5" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 단위 변환 메뉴를 처리한다. 사용자 입력 오류는 메시지만 보여주고 메뉴로 돌아간다.
pub fn handle_convert(state: &mut AppState) -> Result<(), AppError> {
    let tr = state.translator.clone();
    println!("{}", tr.t(keys::CONVERT_HEADING));
    let category = loop {
        let sel = read_line(tr.t(keys::CONVERT_PROMPT_CATEGORY))?;
        if sel.trim().is_empty() {
            break state.config.default_category;
        }
        match input::parse_category(&sel) {
            Ok(c) => break c,
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    };
    println!("{} {}", tr.t(keys::CONVERT_AVAILABLE_UNITS), unit_list(category));
    let value = read_line(tr.t(keys::CONVERT_PROMPT_VALUE))?;
    let from = read_line(tr.t(keys::CONVERT_PROMPT_FROM_UNIT))?;
    let to = read_line(tr.t(keys::CONVERT_PROMPT_TO_UNIT))?;
    let label = read_line(tr.t(keys::CONVERT_PROMPT_LABEL))?;
    let label = Some(label.trim().to_string()).filter(|l| !l.is_empty());

    match state.convert_text(category, &value, &from, &to, label) {
        Ok(entry) => {
            println!(
                "{} {} {} = {} {}",
                tr.t(keys::CONVERT_RESULT),
                format_value(entry.input_value),
                entry.from_unit,
                format_value(entry.result),
                entry.to_unit
            );
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            println!("{}", tr.t(keys::CONVERT_RETRY));
            Ok(())
        }
        Err(e) => {
            log::error!("unexpected conversion failure: {e}");
            println!("{}: {e}", tr.t(keys::UNEXPECTED_ERROR));
            Ok(())
        }
    }
}

/// 카테고리의 단위 이름을 쉼표로 나열한다.
pub fn unit_list(category: UnitCategory) -> String {
    category
        .units()
        .iter()
        .map(|u| u.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 변환 기록을 최신순으로 출력한다.
pub fn handle_history(state: &AppState) {
    let tr = &state.translator;
    println!("{}", tr.t(keys::HISTORY_HEADING));
    if state.history.is_empty() {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
        return;
    }
    for entry in state.history.iter() {
        println!("{entry}");
    }
}

/// 변환 기록을 파일로 내보낸다.
pub fn handle_export(state: &AppState) -> Result<(), AppError> {
    let tr = &state.translator;
    if state.history.is_empty() {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
        return Ok(());
    }
    let path = read_line(tr.t(keys::HISTORY_PROMPT_PATH))?;
    let path = path.trim();
    if path.is_empty() {
        return Ok(());
    }
    match state.export_history(Path::new(path)) {
        Ok(()) => println!("{} {path}", tr.t(keys::HISTORY_EXPORTED)),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 테마 메뉴: 현재 팔레트를 보여주고 사용자 테마 경로를 바꾼다.
pub fn handle_theme(state: &mut AppState) -> Result<(), AppError> {
    let tr = state.translator.clone();
    println!("{}", tr.t(keys::THEME_HEADING));
    print_theme(&tr, &state.theme());
    let path = read_line(tr.t(keys::THEME_PROMPT_CUSTOM))?;
    let path = path.trim();
    if path.is_empty() {
        state.config.custom_theme_path = None;
    } else {
        let path = PathBuf::from(path);
        if load_custom_theme(&path).is_none() {
            println!("{}", tr.t(keys::THEME_CUSTOM_REJECTED));
        }
        state.config.custom_theme_path = Some(path);
    }
    print_theme(&tr, &state.theme());
    Ok(())
}

/// 해석된 테마를 한 줄씩 출력한다.
pub fn print_theme(tr: &Translator, theme: &ResolvedTheme) {
    let source = match theme.source {
        ThemeSource::Dark => "dark",
        ThemeSource::Light => "light",
        ThemeSource::Custom => "custom",
    };
    println!("{} {source}", tr.t(keys::THEME_SOURCE));
    let p = &theme.palette;
    println!(
        "  primary   {}  (hover {}, text {})",
        p.primary, theme.primary_hover, theme.primary_text
    );
    println!("  secondary {}", p.secondary);
    println!("  neutral   {}", p.neutral);
    println!(
        "  accent    {}  (hover {}, pressed {}, text {})",
        p.accent, theme.accent_hover, theme.accent_pressed, theme.accent_text
    );
    println!("  status    {}", p.status);
    println!("  label     {}", theme.label_color());
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(state: &mut AppState) -> Result<(), AppError> {
    let tr = state.translator.clone();
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            state.config.language = lang.trim().to_lowercase();
            state.reload_translator();
        }
        "2" => {
            state.config.dark_mode = !state.config.dark_mode;
            println!("{} {}", tr.t(keys::SETTINGS_DARK_MODE), state.config.dark_mode);
        }
        "3" => {
            let sel = read_line(tr.t(keys::CONVERT_PROMPT_CATEGORY))?;
            match input::parse_category(&sel) {
                Ok(c) => {
                    state.config.default_category = c;
                    println!("{} {c}", tr.t(keys::SETTINGS_DEFAULT_CATEGORY));
                }
                Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
            }
        }
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    }
    println!("{}", state.translator.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}
