use tracing::{debug, info};

use super::{Settings, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_env_source(path: &std::path::Path, from_env: bool) {
    if from_env {
        info!(
            target: "docgate::config",
            path = %path.display(),
            "Loading settings using DOCGATE_CONFIG_PATH environment variable"
        );
    } else {
        debug!(
            target: "docgate::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "DOCGATE_CONFIG_PATH not set; using default docgate.toml"
        );
    }
}

pub fn log_defaults(path: &std::path::Path) {
    debug!(
        target: "docgate::config",
        path = %path.display(),
        "Settings file not found; using built-in defaults"
    );
}

pub fn log_loaded(settings: &Settings) {
    info!(
        target: "docgate::config",
        path = ?settings.source_path.as_ref().map(|path| path.display().to_string()),
        remote = %settings.git.remote,
        base_candidates = ?settings.git.base_candidates,
        base_branch = ?settings.git.base_branch,
        color = ?settings.report.color,
        "Settings loaded"
    );
}
