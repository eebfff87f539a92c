//! 변환 엔진을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면 계층에서도 재사용한다.

pub mod app;
pub mod category;
pub mod config;
pub mod conversion;
pub mod format;
pub mod history;
pub mod i18n;
pub mod input;
pub mod theme;
pub mod ui_cli;
pub mod units;
