//! Dashboard configuration with defaults and URL helpers.
//!
//! Browser-specific loading (meta tags, location) lives in `app::preferences`;
//! this module only holds the values and the pure derivations over them.

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
/// Trunk dev-server port, served next to the backend port.
const DEV_SERVER_PORT: &str = "8080";
const BACKEND_PORT: &str = "5000";

/// Static camera stream metadata shown over the simulated frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamInfo {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames per second.
    pub frame_rate: u32,
}

impl Default for StreamInfo {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            frame_rate: 30,
        }
    }
}

impl StreamInfo {
    /// `"1920x1080"`.
    #[must_use]
    pub fn resolution_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// `"30 FPS"`.
    #[must_use]
    pub fn frame_rate_label(&self) -> String {
        format!("{} FPS", self.frame_rate)
    }
}

/// Runtime configuration for the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Detection backend origin, without a trailing slash.
    pub api_base_url: String,
    /// Cosmetic "last updated" tick period.
    pub tick_interval_ms: u32,
    /// Most recent records kept for the table.
    pub recent_limit: usize,
    /// Detection boxes drawn on the live frame.
    pub overlay_limit: usize,
    /// Reconnect attempts before staying disconnected.
    pub reconnect_attempts: u32,
    /// Camera stream metadata.
    pub stream: StreamInfo,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            tick_interval_ms: 5_000,
            recent_limit: 10,
            overlay_limit: 3,
            reconnect_attempts: 3,
            stream: StreamInfo::default(),
        }
    }
}

impl DashboardConfig {
    /// Default configuration pointed at another backend.
    #[must_use]
    pub fn with_api_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }

    /// `GET` endpoint producing the spreadsheet export.
    #[must_use]
    pub fn export_url(&self) -> String {
        format!("{}/api/export", self.api_base_url)
    }

    /// `GET` endpoint producing a [`roadwatch_api_models::DashboardSnapshot`].
    #[must_use]
    pub fn snapshot_url(&self) -> String {
        format!("{}/api/dashboard", self.api_base_url)
    }
}

/// Trim whitespace and trailing slashes; empty input yields the default origin.
#[must_use]
pub fn normalize_base_url(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Backend origin derived from the page location: the dev server port maps to
/// the backend port, every other port is kept.
#[must_use]
pub fn origin_for_location(protocol: &str, host: &str, port: &str) -> String {
    let mapped_port = match port {
        "" => None,
        DEV_SERVER_PORT => Some(BACKEND_PORT),
        other => Some(other),
    };
    let mut base = format!("{protocol}//{host}");
    if let Some(port) = mapped_port {
        base.push(':');
        base.push_str(port);
    }
    base
}
