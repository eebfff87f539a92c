use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use unit_conversion_toolbox::{
    app::{self, AppError, AppState},
    category::UnitCategory,
    config,
    format::format_value,
    input,
    theme::ThemeSelection,
    ui_cli,
};

/// 길이/무게/온도/체적 단위 변환기.
#[derive(Debug, Parser)]
#[command(name = "unit_conversion_toolbox", version, about)]
struct Cli {
    /// 표시 언어 (auto/en/ko)
    #[arg(short = 'L', long, global = true)]
    lang: Option<String>,

    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 값을 한 번 변환해 출력한다
    Convert {
        /// Length / Weight / Temperature / Volume
        category: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
        from: String,
        to: String,
    },
    /// 카테고리별 단위 이름을 나열한다
    Units {
        category: Option<String>,
    },
    /// 현재 설정으로 해석된 테마 팔레트를 출력한다
    Theme {
        #[arg(long, conflicts_with = "light")]
        dark: bool,
        #[arg(long)]
        light: bool,
        /// 사용자 테마 JSON 경로
        #[arg(long)]
        custom: Option<PathBuf>,
    },
    /// 대화형 메뉴 (기본값)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Convert {
            category,
            value,
            from,
            to,
        } => {
            let category = input::parse_category(&category)?;
            let result = app::convert_once(category, &value, &from, &to)?;
            println!("{}", format_value(result));
        }
        Command::Units { category } => {
            let categories = match category {
                Some(c) => vec![input::parse_category(&c)?],
                None => UnitCategory::ALL.to_vec(),
            };
            for c in categories {
                println!("{c}: {}", ui_cli::unit_list(c));
            }
        }
        Command::Theme {
            dark,
            light,
            custom,
        } => {
            let cfg = config::load_or_default(&cli.config)?;
            let dark_mode = if dark || light { dark } else { cfg.dark_mode };
            let selection = ThemeSelection::new(dark_mode, custom.or(cfg.custom_theme_path.clone()));
            let state = AppState::new(cfg, cli.config, cli.lang.as_deref());
            ui_cli::print_theme(&state.translator, &selection.resolve());
        }
        Command::Interactive => {
            let cfg = config::load_or_default(&cli.config)?;
            let mut state = AppState::new(cfg, cli.config, cli.lang.as_deref());
            app::run(&mut state)?;
        }
    }
    Ok(())
}
