use std::path::PathBuf;

use serde::Deserialize;

/// Config file read from the working directory at startup.
pub const CONFIG_FILE: &str = "mvp.toml";

/// Top-level server configuration, loaded from `mvp.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Directory holding the roster and event log. Also served as static
    /// files (background art and other assets).
    pub data_dir: String,
    pub players_file: String,
    pub events_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            data_dir: "public".to_string(),
            players_file: "players.json".to_string(),
            events_file: "events.json".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn players_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.players_file)
    }

    pub fn events_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.events_file)
    }

    /// Path of a static asset served from `data_dir`.
    pub fn asset_path(&self, relative: &str) -> PathBuf {
        PathBuf::from(&self.data_dir).join(relative)
    }

    /// Check for values the server cannot run with.
    pub fn check(&self) -> Result<(), String> {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!(
                "listen_addr '{}' is not a valid socket address",
                self.listen_addr
            ));
        }
        if self.players_file.is_empty() {
            return Err("players_file must not be empty".to_string());
        }
        if self.events_file.is_empty() {
            return Err("events_file must not be empty".to_string());
        }
        Ok(())
    }

    /// Validate configuration, logging warnings for issues.
    pub fn validate(&self) {
        if let Err(e) = self.check() {
            tracing::error!("{e}");
            std::process::exit(1);
        }

        if !PathBuf::from(&self.data_dir).is_dir() {
            tracing::warn!(
                data_dir = %self.data_dir,
                "data_dir does not exist, the leaderboard will be empty"
            );
        }
    }

    /// Parse a config file body, falling back to defaults on error.
    pub fn from_toml(content: &str) -> Self {
        match toml::from_str::<ServerConfig>(content) {
            Ok(cfg) => {
                tracing::info!("Loaded configuration from {CONFIG_FILE}");
                cfg
            },
            Err(e) => {
                tracing::warn!("Failed to parse {CONFIG_FILE}: {e}, using defaults");
                ServerConfig::default()
            },
        }
    }

    /// Load config from `mvp.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(content) => Self::from_toml(&content),
            Err(_) => {
                tracing::info!("No {CONFIG_FILE} found, using defaults");
                ServerConfig::default()
            },
        };
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var("MVP_LISTEN_ADDR")
            && !addr.is_empty()
        {
            self.listen_addr = addr;
        }
        if let Ok(dir) = std::env::var("MVP_DATA_DIR")
            && !dir.is_empty()
        {
            self.data_dir = dir;
        }
        if let Ok(file) = std::env::var("MVP_PLAYERS_FILE")
            && !file.is_empty()
        {
            self.players_file = file;
        }
        if let Ok(file) = std::env::var("MVP_EVENTS_FILE")
            && !file.is_empty()
        {
            self.events_file = file;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.data_dir, "public");
        assert_eq!(cfg.players_path(), PathBuf::from("public/players.json"));
        assert_eq!(cfg.events_path(), PathBuf::from("public/events.json"));
        assert_eq!(
            cfg.asset_path("assets/background.png"),
            PathBuf::from("public/assets/background.png")
        );
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
listen_addr = "127.0.0.1:9090"
data_dir = "/srv/match"
players_file = "squad.json"
events_file = "ball_by_ball.json"
"#;
        let cfg: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9090");
        assert_eq!(cfg.players_path(), PathBuf::from("/srv/match/squad.json"));
        assert_eq!(
            cfg.events_path(),
            PathBuf::from("/srv/match/ball_by_ball.json")
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: ServerConfig = toml::from_str(r#"data_dir = "fixtures""#).unwrap();
        assert_eq!(cfg.data_dir, "fixtures");
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.players_file, "players.json");
    }

    #[test]
    fn malformed_toml_falls_back_to_defaults() {
        let cfg = ServerConfig::from_toml("listen_addr = [not valid");
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.events_file, "events.json");
    }

    #[test]
    fn check_rejects_invalid_addr() {
        let cfg = ServerConfig {
            listen_addr: "not-an-address".to_string(),
            ..ServerConfig::default()
        };
        let err = cfg.check().unwrap_err();
        assert!(err.contains("not-an-address"));
    }

    #[test]
    fn check_rejects_empty_players_file() {
        let cfg = ServerConfig {
            players_file: String::new(),
            ..ServerConfig::default()
        };
        assert_eq!(cfg.check().unwrap_err(), "players_file must not be empty");
    }

    #[test]
    fn check_rejects_empty_events_file() {
        let cfg = ServerConfig {
            events_file: String::new(),
            ..ServerConfig::default()
        };
        assert_eq!(cfg.check().unwrap_err(), "events_file must not be empty");
    }

    #[test]
    fn check_accepts_defaults() {
        assert!(ServerConfig::default().check().is_ok());
    }

    #[test]
    fn validate_accepts_valid_config() {
        let cfg = ServerConfig::default();
        cfg.validate();
    }
}
