//! Environment-driven configuration

/// Placeholder endpoint; deployments set `EMBER_ENDPOINT` to their worker URL.
const DEFAULT_ENDPOINT: &str = "https://your-worker.your-subdomain.workers.dev/api/chat";

const DEFAULT_PORT: u16 = 8000;

/// How many prior messages accompany each request as conversational context.
const DEFAULT_HISTORY_WINDOW: usize = 5;

/// Greeting seeded into a fresh message log.
pub const DEFAULT_GREETING: &str = "Hi! I'm your AI assistant. How can I help you today?";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Text-generation endpoint receiving the chat POSTs.
    pub endpoint: String,
    /// Port the HTTP surface listens on.
    pub port: u16,
    /// Number of most recent prior messages sent as context payload.
    pub history_window: usize,
    /// Connectivity assumption before the host reports a signal.
    pub assume_online: bool,
    /// Assistant greeting used to seed the log and after a clear.
    pub greeting: String,
    /// Client identity string included in the request metadata.
    pub platform: String,
}

impl Config {
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("EMBER_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let port: u16 = std::env::var("EMBER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let history_window: usize = std::env::var("EMBER_HISTORY_WINDOW")
            .ok()
            .and_then(|w| w.parse().ok())
            .unwrap_or(DEFAULT_HISTORY_WINDOW);

        let assume_online = std::env::var("EMBER_ASSUME_ONLINE")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true);

        let greeting =
            std::env::var("EMBER_GREETING").unwrap_or_else(|_| DEFAULT_GREETING.to_string());

        Self {
            endpoint,
            port,
            history_window,
            assume_online,
            greeting,
            platform: format!("ember-chat/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
