use std::time::Duration;

use clap::{Parser, ValueEnum};
use pantry_core::domain::{
    common::{DEFAULT_GEMINI_BASE_URL, DEFAULT_TEXT_MODEL, LLMConfig, PantryConfig},
    image::entities::ImageBackend,
    upstream::retry::RetryPolicy,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "pantry", version, about = "Recipe and food image generation proxy")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LLMArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: Url,

    #[arg(long = "text-model", env = "TEXT_MODEL", default_value = DEFAULT_TEXT_MODEL)]
    pub text_model: String,

    #[arg(
        long = "image-backend",
        env = "IMAGE_BACKEND",
        value_enum,
        default_value_t = ImageBackendArg::ContentGeneration
    )]
    pub image_backend: ImageBackendArg,

    /// Defaults to the usual model of the selected backend.
    #[arg(long = "image-model", env = "IMAGE_MODEL")]
    pub image_model: Option<String>,

    #[arg(
        long = "retry-max-attempts",
        env = "RETRY_MAX_ATTEMPTS",
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..=10)
    )]
    pub retry_max_attempts: u32,

    #[arg(long = "retry-base-delay-ms", env = "RETRY_BASE_DELAY_MS", default_value_t = 1000)]
    pub retry_base_delay_ms: u64,

    #[arg(long = "retry-jitter", env = "RETRY_JITTER")]
    pub retry_jitter: bool,

    #[arg(long = "attempt-timeout-secs", env = "ATTEMPT_TIMEOUT_SECS", default_value_t = 60)]
    pub attempt_timeout_secs: u64,

    #[arg(long = "request-deadline-secs", env = "REQUEST_DEADLINE_SECS", default_value_t = 120)]
    pub request_deadline_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageBackendArg {
    ContentGeneration,
    Prediction,
}

impl From<ImageBackendArg> for ImageBackend {
    fn from(value: ImageBackendArg) -> Self {
        match value {
            ImageBackendArg::ContentGeneration => ImageBackend::ContentGeneration,
            ImageBackendArg::Prediction => ImageBackend::Prediction,
        }
    }
}

impl From<Args> for PantryConfig {
    fn from(args: Args) -> Self {
        let llm = args.llm;
        let image_backend = ImageBackend::from(llm.image_backend);

        PantryConfig {
            llm: LLMConfig {
                gemini_api_key: llm.gemini_api_key.filter(|key| !key.trim().is_empty()),
                gemini_base_url: llm.gemini_base_url.to_string(),
                text_model: llm.text_model,
                image_backend,
                image_model: llm
                    .image_model
                    .unwrap_or_else(|| image_backend.default_model().to_string()),
                retry: RetryPolicy {
                    max_attempts: llm.retry_max_attempts,
                    base_delay: Duration::from_millis(llm.retry_base_delay_ms),
                    jitter: llm.retry_jitter,
                    ..RetryPolicy::default()
                },
                attempt_timeout: Duration::from_secs(llm.attempt_timeout_secs),
                request_deadline: Duration::from_secs(llm.request_deadline_secs),
            },
        }
    }
}
