use std::path::{Path, PathBuf};

use crate::category::UnitCategory;
use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError, ConversionRequest};
use crate::history::{ConversionHistory, HistoryEntry, HistoryExportError};
use crate::i18n::{self, Translator};
use crate::input::{self, InputError};
use crate::theme::{ResolvedTheme, ThemeSelection};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 입력 해석 오류
    #[error("입력 오류: {0}")]
    Input(#[from] InputError),
    /// 기록 내보내기 오류
    #[error("기록 내보내기 오류: {0}")]
    Export(#[from] HistoryExportError),
}

impl AppError {
    /// 사용자가 입력을 바꿔 다시 시도하면 되는 오류인지.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Input(_) => true,
            AppError::Conversion(e) => !e.is_defect(),
            _ => false,
        }
    }
}

/// 화면 계층이 공유하는 상태. 창 인스턴스 필드 대신 명시적으로 넘긴다.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub config_path: PathBuf,
    pub history: ConversionHistory,
    pub translator: Translator,
}

impl AppState {
    pub fn new(config: Config, config_path: PathBuf, lang_override: Option<&str>) -> Self {
        let lang = i18n::resolve_language(lang_override, Some(config.language.as_str()));
        let translator = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
        let history = ConversionHistory::with_capacity(config.history_limit);
        Self {
            config,
            config_path,
            history,
            translator,
        }
    }

    /// 설정의 언어가 바뀌었을 때 번역기를 다시 만든다.
    pub fn reload_translator(&mut self) {
        let lang = i18n::resolve_language(None, Some(self.config.language.as_str()));
        self.translator =
            Translator::new_with_pack(&lang, self.config.language_pack_dir.as_deref());
    }

    pub fn theme_selection(&self) -> ThemeSelection {
        ThemeSelection::new(self.config.dark_mode, self.config.custom_theme_path.clone())
    }

    pub fn theme(&self) -> ResolvedTheme {
        self.theme_selection().resolve()
    }

    /// 요청을 실행하고 성공하면 기록에 남긴다.
    pub fn convert(
        &mut self,
        request: &ConversionRequest,
        label: Option<String>,
    ) -> Result<HistoryEntry, AppError> {
        let result = request.execute()?;
        let entry = HistoryEntry::new(request, result, label);
        self.history.push(entry.clone());
        Ok(entry)
    }

    /// 문자열 입력으로 변환한다. 비어 있는 단위 문자열은 설정의 기본 단위를 쓴다.
    pub fn convert_text(
        &mut self,
        category: UnitCategory,
        value_text: &str,
        from_text: &str,
        to_text: &str,
        label: Option<String>,
    ) -> Result<HistoryEntry, AppError> {
        let (default_from, default_to) = self.config.default_units.pair_for(category);
        let value = input::parse_value(value_text)?;
        let from = if from_text.trim().is_empty() {
            default_from
        } else {
            input::parse_unit(category, from_text)?
        };
        let to = if to_text.trim().is_empty() {
            default_to
        } else {
            input::parse_unit(category, to_text)?
        };
        self.convert(&ConversionRequest { value, from, to }, label)
    }

    pub fn save_config(&self) -> Result<(), AppError> {
        self.config.save(&self.config_path)?;
        Ok(())
    }

    pub fn export_history(&self, path: &Path) -> Result<(), AppError> {
        self.history.export(path)?;
        Ok(())
    }
}

/// 한 번만 변환하고 결과 값을 돌려준다. 기록은 남기지 않는다.
pub fn convert_once(
    category: UnitCategory,
    value_text: &str,
    from_text: &str,
    to_text: &str,
) -> Result<f64, AppError> {
    let request = input::parse_request(category, value_text, from_text, to_text)?;
    Ok(conversion::convert(request.value, request.from, request.to)?)
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(state: &mut AppState) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(&state.translator)? {
            MenuChoice::Convert => ui_cli::handle_convert(state)?,
            MenuChoice::History => ui_cli::handle_history(state),
            MenuChoice::Export => ui_cli::handle_export(state)?,
            MenuChoice::Theme => {
                ui_cli::handle_theme(state)?;
                state.save_config()?;
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(state)?;
                state.save_config()?;
            }
            MenuChoice::Exit => {
                state.save_config()?;
                println!("{}", state.translator.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
