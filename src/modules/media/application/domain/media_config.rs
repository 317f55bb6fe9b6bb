use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory uploaded images are written under.
    pub root: PathBuf,
    pub max_bytes: u64,
}

impl MediaConfig {
    pub const DEFAULT_ROOT: &'static str = "./media";
    pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

    /// Reads `MEDIA_ROOT` and `MEDIA_MAX_BYTES`, falling back to the defaults.
    pub fn from_env() -> Self {
        let root = std::env::var("MEDIA_ROOT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ROOT.to_string());

        let max_bytes = std::env::var("MEDIA_MAX_BYTES")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(Self::DEFAULT_MAX_BYTES);

        Self {
            root: PathBuf::from(root),
            max_bytes,
        }
    }

    pub fn new(root: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }
}
