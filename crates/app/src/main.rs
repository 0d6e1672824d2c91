use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use imaging_core::Catalog;
use imaging_core::model::{ModalityId, ParseModalityError};
use imaging_core::scan::paint_scan;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{ExplorerController, ExplorerSettings, SettingsOverrides};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::vm::scan_svg_markup;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnsupportedFlag { flag: &'static str, command: Command },
    InvalidModality(ParseModalityError),
    MissingModality { command: Command },
    InvalidNumber { flag: &'static str, raw: String },
    InvalidHighlight { modality: ModalityId, index: usize },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnsupportedFlag { flag, command } => {
                write!(f, "{flag} is not supported by `{command}`")
            }
            ArgsError::InvalidModality(err) => write!(f, "invalid --modality value: {err}"),
            ArgsError::MissingModality { command } => {
                write!(f, "`{command}` requires --modality <id>")
            }
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidHighlight { modality, index } => {
                write!(f, "{modality} has no component {index}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

struct DesktopApp {
    settings: ExplorerSettings,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> ExplorerSettings {
        self.settings.clone()
    }

    fn scan_seed(&self) -> Option<u64> {
        None
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--modality <id>] [--no-animate] [--config <path>] [--log-level <lvl>]");
    eprintln!("  cargo run -p app -- scene --modality <id> [--highlight <n>] [--no-animate]");
    eprintln!("  cargo run -p app -- scan  --modality <id> [--seed <n>]");
    eprintln!();
    eprintln!("Modalities: mri, ct, xray, ultrasound, pet");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  IMAGING_CONFIG, IMAGING_MODALITY, IMAGING_ANIMATE, IMAGING_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Scene,
    Scan,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "scene" => Some(Self::Scene),
            "scan" => Some(Self::Scan),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Command::Ui => "ui",
            Command::Scene => "scene",
            Command::Scan => "scan",
        })
    }
}

#[derive(Debug, Default)]
struct Args {
    overrides: SettingsOverrides,
    highlight: Option<usize>,
    seed: Option<u64>,
}

enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    fn parse(
        command: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Parsed, ArgsError> {
        let mut parsed = Args::default();
        let only = |flag: &'static str, allowed: &[Command]| {
            if allowed.contains(&command) {
                Ok(())
            } else {
                Err(ArgsError::UnsupportedFlag { flag, command })
            }
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--modality" => {
                    let value = require_value(args, "--modality")?;
                    let id = value.parse().map_err(ArgsError::InvalidModality)?;
                    parsed.overrides.modality = Some(id);
                }
                "--no-animate" => {
                    only("--no-animate", &[Command::Ui, Command::Scene])?;
                    parsed.overrides.animate = Some(false);
                }
                "--config" => {
                    only("--config", &[Command::Ui, Command::Scene])?;
                    let value = require_value(args, "--config")?;
                    parsed.overrides.config_path = Some(PathBuf::from(value));
                }
                "--log-level" => {
                    let value = require_value(args, "--log-level")?;
                    parsed.overrides.log_level = Some(value);
                }
                "--highlight" => {
                    only("--highlight", &[Command::Scene])?;
                    let value = require_value(args, "--highlight")?;
                    parsed.highlight = Some(parse_number("--highlight", value)?);
                }
                "--seed" => {
                    only("--seed", &[Command::Scan])?;
                    let value = require_value(args, "--seed")?;
                    parsed.seed = Some(parse_number("--seed", value)?);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if command != Command::Ui && parsed.overrides.modality.is_none() {
            return Err(ArgsError::MissingModality { command });
        }
        Ok(Parsed::Run(parsed))
    }
}

fn init_headless_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            ArgsError::UnknownArg(first.to_owned())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let args = match Args::parse(cmd, &mut iter).inspect_err(|_| print_usage())? {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    let settings = ExplorerSettings::load(&args.overrides, |key| std::env::var(key).ok())?;
    imaging_core::check_builtin_tables()?;

    match cmd {
        Command::Ui => {
            let level = settings
                .log_level
                .parse()
                .unwrap_or(dioxus::logger::tracing::Level::INFO);
            dioxus::logger::init(level)?;
            info!(
                modality = %settings.initial_modality,
                animate = settings.animate,
                "launching explorer window"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { settings });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Medical Imaging Explorer")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Scene => {
            init_headless_tracing(&settings.log_level);
            let modality = settings.initial_modality;
            let mut controller = ExplorerController::new(&settings);
            if let Some(index) = args.highlight {
                if Catalog::builtin().get(modality).component(index).is_none() {
                    return Err(ArgsError::InvalidHighlight { modality, index }.into());
                }
                controller.toggle_highlight(index);
            }
            let scene = controller.build_scene();
            info!(%modality, shapes = scene.shape_count(), "dumping scene");
            println!("{}", serde_json::to_string_pretty(&scene)?);
            Ok(())
        }
        Command::Scan => {
            init_headless_tracing(&settings.log_level);
            let modality = settings.initial_modality;
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let image = paint_scan(modality, &mut rng);
            info!(%modality, ops = image.ops.len(), "dumping scan output");
            println!("{}", scan_svg_markup(&image));
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
