use std::path::PathBuf;

/// Process settings read from the environment (and `.env`, loaded by `main`).
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub file_logs: bool,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // stdout carries JSON results, so stay quiet unless asked
        let log_level = lookup("RUST_LOG").unwrap_or_else(|| "warn".to_string());

        let file_logs = lookup("ENABLE_FILE_LOGS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let log_dir = lookup("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./logs"));

        Self {
            log_level,
            file_logs,
            log_dir,
        }
    }
}
