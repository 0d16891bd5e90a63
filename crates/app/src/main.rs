use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, CatalogService, Clock, LessonService, LessonTiming, VoiceAssistantClient,
    VoiceAssistantConfig,
};
use storage::Storage;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, DesktopLinkOpener, LinkOpenerRef, UiApp, build_app_context};

const ENV_PROCESSING_DELAY_MS: &str = "SCHOLORA_PROCESSING_DELAY_MS";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidVoiceUrl { raw: String },
    InvalidDelay { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidVoiceUrl { raw } => write!(f, "invalid --voice-url value: {raw}"),
            ArgsError::InvalidDelay { raw } => {
                write!(f, "invalid --processing-delay-ms value: {raw}")
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

struct DesktopApp {
    services: AppServices,
    link_opener: LinkOpenerRef,
}

impl UiApp for DesktopApp {
    fn lessons(&self) -> Arc<LessonService> {
        self.services.lessons()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn voice(&self) -> Arc<VoiceAssistantClient> {
        self.services.voice()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    voice_url: String,
    processing_delay: Duration,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--voice-url <url>] [--processing-delay-ms <ms>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --voice-url {}", VoiceAssistantConfig::DEFAULT_BASE_URL);
    eprintln!(
        "  --processing-delay-ms {}",
        LessonTiming::DEFAULT_PROCESSING_DELAY.as_millis()
    );
    eprintln!();
    eprintln!("Environment:");
    eprintln!(
        "  {}, {ENV_PROCESSING_DELAY_MS}, RUST_LOG",
        VoiceAssistantConfig::ENV_BASE_URL
    );
}

impl Args {
    /// Flags win over environment values, which win over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut voice_url = match env(VoiceAssistantConfig::ENV_BASE_URL) {
            Some(raw) => parse_voice_url(raw)?,
            None => VoiceAssistantConfig::DEFAULT_BASE_URL.to_owned(),
        };
        let mut processing_delay = match env(ENV_PROCESSING_DELAY_MS) {
            Some(raw) => parse_delay(raw)?,
            None => LessonTiming::DEFAULT_PROCESSING_DELAY,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--voice-url" => {
                    voice_url = parse_voice_url(require_value(args, "--voice-url")?)?;
                }
                "--processing-delay-ms" => {
                    processing_delay = parse_delay(require_value(args, "--processing-delay-ms")?)?;
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            voice_url,
            processing_delay,
        }))
    }
}

fn parse_voice_url(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ArgsError::InvalidVoiceUrl { raw })
    }
}

fn parse_delay(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidDelay { raw })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(log_fmt::layer())
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    init_tracing();
    tracing::info!(
        voice_url = %args.voice_url,
        processing_delay_ms = args.processing_delay.as_millis() as u64,
        "starting scholora"
    );

    let services = AppServices::new(
        Storage::in_memory(),
        Clock::system(),
        LessonTiming::default().with_processing_delay(args.processing_delay),
        VoiceAssistantConfig::new(args.voice_url),
    );
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        link_opener: Arc::new(DesktopLinkOpener),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Scholora")
            .with_always_on_top(false),
    );

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

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str], env: &[(&str, &str)]) -> Result<Parsed, ArgsError> {
        let mut args = argv.iter().map(|s| (*s).to_owned());
        Args::parse(&mut args, |key| {
            env.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_owned())
        })
    }

    #[test]
    fn defaults_apply_without_flags() {
        let parsed = parse(&[], &[]).expect("parse");
        assert_eq!(
            parsed,
            Parsed::Run(Args {
                voice_url: "http://localhost:5001".into(),
                processing_delay: Duration::from_millis(2000),
            })
        );
    }

    #[test]
    fn flags_override_environment() {
        let parsed = parse(
            &["--voice-url", "http://voice.test:9000", "--processing-delay-ms", "10"],
            &[
                ("SCHOLORA_VOICE_URL", "http://env.test"),
                ("SCHOLORA_PROCESSING_DELAY_MS", "500"),
            ],
        )
        .expect("parse");
        assert_eq!(
            parsed,
            Parsed::Run(Args {
                voice_url: "http://voice.test:9000".into(),
                processing_delay: Duration::from_millis(10),
            })
        );
    }

    #[test]
    fn environment_fills_missing_flags() {
        let parsed = parse(&[], &[("SCHOLORA_PROCESSING_DELAY_MS", "0")]).expect("parse");
        let Parsed::Run(args) = parsed else {
            panic!("expected run");
        };
        assert_eq!(args.processing_delay, Duration::ZERO);
    }

    #[test]
    fn blank_voice_url_from_environment_is_rejected() {
        assert_eq!(
            parse(&[], &[("SCHOLORA_VOICE_URL", "  ")]),
            Err(ArgsError::InvalidVoiceUrl { raw: "  ".into() })
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&["--processing-delay-ms", "soon"], &[]),
            Err(ArgsError::InvalidDelay { raw: "soon".into() })
        );
        assert_eq!(
            parse(&["--voice-url", "localhost"], &[]),
            Err(ArgsError::InvalidVoiceUrl {
                raw: "localhost".into()
            })
        );
        assert_eq!(
            parse(&["--voice-url"], &[]),
            Err(ArgsError::MissingValue { flag: "--voice-url" })
        );
        assert_eq!(
            parse(&["--db"], &[]),
            Err(ArgsError::UnknownArg("--db".into()))
        );
        assert_eq!(parse(&["--help"], &[]), Ok(Parsed::Help));
    }
}
