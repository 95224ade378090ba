use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;

use mvp_server::build_app;
use mvp_server::config::ServerConfig;

pub const PLAYERS_JSON: &str = r#"[
    {"id": 1, "name": "A"},
    {"id": 2, "name": "B"},
    {"id": 3, "name": "C"}
]"#;

pub const EVENTS_JSON: &str = r#"[
    {"playerId": 1, "action": "TAKE_WICKET"},
    {"playerId": 2, "action": "HIT_SIX"},
    {"playerId": 2, "action": "HIT_SIX"},
    {"playerId": 1, "action": "HIT_FOUR"},
    {"playerId": 3, "action": "TAKE_WICKET"},
    {"playerId": 3, "action": "50_RUNS_MILESTONE"},
    {"playerId": 77, "action": "TAKE_WICKET"},
    {"playerId": 2, "action": "APPEAL"}
]"#;

pub struct TestServer {
    pub addr: SocketAddr,
    pub data_dir: TempDir,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server over the standard fixture files.
    pub async fn new() -> Self {
        Self::with_files(Some(PLAYERS_JSON), Some(EVENTS_JSON)).await
    }

    /// Start a test server with the given file bodies. `None` leaves the
    /// file missing.
    pub async fn with_files(players: Option<&str>, events: Option<&str>) -> Self {
        let data_dir = tempfile::tempdir().unwrap();
        if let Some(body) = players {
            write_file(data_dir.path(), "players.json", body);
        }
        if let Some(body) = events {
            write_file(data_dir.path(), "events.json", body);
        }

        let config = ServerConfig {
            listen_addr: "127.0.0.1:0".to_string(),
            data_dir: data_dir.path().to_string_lossy().into_owned(),
            ..ServerConfig::default()
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(config);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            data_dir,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn write(&self, name: &str, body: &str) {
        write_file(self.data_dir.path(), name, body);
    }
}

pub fn write_file(dir: &Path, name: &str, body: &str) {
    if let Some(parent) = dir.join(name).parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(dir.join(name), body).unwrap();
}
