use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("plugin '{name}' not found in {}", .source_dir.display())]
    PluginNotFound {
        name: String,
        source_dir: std::path::PathBuf,
    },

    #[error("invalid plugin name '{0}': must be a single directory name")]
    InvalidPluginName(String),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PluginError>;
