use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Presentation constants
// =============================================================================

/// Countdown length of the check page in seconds; the page displays from one
/// less because the timer decrements before the first paint.
pub const COUNTDOWN_SECS: u32 = 11;

/// Badge image dimensions, fixed by the pages that embed it
pub const BADGE_WIDTH: u32 = 148;
pub const BADGE_HEIGHT: u32 = 18;

/// Longest version text the badge renders from the store
pub const VERSION_READ_LIMIT: usize = 19;

// =============================================================================
// Transport constants
// =============================================================================

/// Request timeout for the primary client transport
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent by client transports
pub const USER_AGENT: &str = concat!("version-gate/", env!("CARGO_PKG_VERSION"));

/// Runtime configuration for the gate server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Single-line text file holding the latest released version
    pub version_file: PathBuf,
    /// Homepage the check page redirects to after the countdown, and the
    /// target of the redirect issued when no `version` parameter is present
    pub redirect_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            version_file: PathBuf::from("version.txt"),
            redirect_url: "https://example.com/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_binds_loopback() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.version_file, PathBuf::from("version.txt"));
    }
}
