//! CLI definition for the `gridhook` binary.
//!
//! Every flag can also be supplied through its `GRIDHOOK_*` environment
//! variable. The event gateway token is read separately from `AUTH_TOKEN`.

use clap::Parser;

use gridhook_observe::tracing_setup::LogFormat;
use gridhook_types::delivery::DeliveryPolicy;

use crate::config;

/// Receive Event Grid deliveries and forward them to the Dispatch event gateway.
#[derive(Parser, Debug)]
#[command(name = "gridhook", version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on.
    #[arg(short, long, env = "GRIDHOOK_PORT", default_value_t = config::DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to.
    #[arg(long, env = "GRIDHOOK_HOST", default_value = config::DEFAULT_HOST)]
    pub host: String,

    /// Dispatch event gateway address (host:port or URL).
    #[arg(
        long = "dispatch-api-endpoint",
        env = "GRIDHOOK_DISPATCH_API_ENDPOINT",
        default_value = config::DEFAULT_DISPATCH_ENDPOINT
    )]
    pub dispatch_api_endpoint: String,

    /// Organization events are published under.
    #[arg(long, env = "GRIDHOOK_ORG", default_value = config::DEFAULT_ORG)]
    pub org: String,

    /// Token or shared secret callers are expected to pass.
    #[arg(long, env = "GRIDHOOK_SHARED_SECRET", hide_env_values = true)]
    pub shared_secret: Option<String>,

    /// Accept and decode events but do not send them anywhere.
    #[arg(long, env = "GRIDHOOK_DRY_RUN")]
    pub dry_run: bool,

    /// What to answer when the event gateway rejects an event
    /// (best-effort or fail-request).
    #[arg(long, env = "GRIDHOOK_DELIVERY_POLICY", default_value_t = DeliveryPolicy::BestEffort)]
    pub delivery_policy: DeliveryPolicy,

    /// Largest request body accepted, in bytes.
    #[arg(long, env = "GRIDHOOK_MAX_BODY_BYTES", default_value_t = config::DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Per-request timeout in seconds.
    #[arg(long, env = "GRIDHOOK_REQUEST_TIMEOUT_SECS", default_value_t = config::DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// Timeout for each send to the event gateway, in seconds.
    #[arg(long, env = "GRIDHOOK_SEND_TIMEOUT_SECS", default_value_t = config::DEFAULT_SEND_TIMEOUT_SECS)]
    pub send_timeout_secs: u64,

    /// Log output format (text or json).
    #[arg(long, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long)]
    pub otel: bool,

    /// Suppress all logs except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default tracing directive for the chosen verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,gridhook_api=debug,gridhook_core=debug,gridhook_infra=debug",
            _ => "trace",
        }
    }
}
