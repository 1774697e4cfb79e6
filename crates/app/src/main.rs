use std::fmt;
use std::sync::{Arc, Mutex};

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, ExamService, UploadOutcome, read_question_file};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyPath,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyPath => write!(f, "--file must not be empty"),
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

struct DesktopApp {
    clock: Clock,
    default_path: Option<String>,
    prepared: Mutex<Option<ExamService>>,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn default_path(&self) -> Option<String> {
        self.default_path.clone()
    }

    fn take_prepared(&self) -> Option<ExamService> {
        self.prepared.lock().ok().and_then(|mut slot| slot.take())
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    file: Option<String>,
    log: Option<String>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--file <questions.json>] [--log <filter>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --file   question file to load on launch");
    eprintln!("  --log    tracing filter, e.g. debug or services=debug (default: info)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EXAM_FILE, EXAM_LOG");
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            file: env("EXAM_FILE").filter(|value| !value.trim().is_empty()),
            log: env("EXAM_LOG"),
            help: false,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" | "-f" => {
                    let value = require_value(&mut args, "--file")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath);
                    }
                    parsed.file = Some(value);
                }
                "--log" => parsed.log = Some(require_value(&mut args, "--log")?),
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Build the service the UI starts with, loading `file` first if given.
/// A file that fails to load leaves the app on the upload screen with the
/// error shown.
async fn prepare_service(clock: Clock, file: Option<&str>) -> ExamService {
    let mut service = ExamService::new(clock);
    if let Some(path) = file {
        let ticket = service.begin_upload(path);
        let result = read_question_file(path).await;
        if let UploadOutcome::Loaded { questions } = service.complete_upload(&ticket, result) {
            tracing::info!(path, questions, "preloaded question file");
        }
    }
    service
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok()).map_err(
        |err| {
            eprintln!("{err}");
            print_usage();
            err
        },
    )?;

    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing(args.log.as_deref());

    let clock = Clock::default();
    let service = prepare_service(clock, args.file.as_deref()).await;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        clock,
        default_path: args.file,
        prepared: Mutex::new(Some(service)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Exam Runner")
            .with_always_on_top(false),
    );

    tracing::debug!("launching desktop window");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
