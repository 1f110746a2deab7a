use std::path::PathBuf;

/// Runtime configuration for the lookup tool.
pub struct Config {
    /// Path to the SQLite file holding saved predictions.
    pub db_path: PathBuf,
    /// Base URL of the prediction endpoint. The name is sent as the `name` query parameter.
    pub api_url: String,
}

impl Config {
    /// Default configuration: `nationality.db` in the working directory, public nationalize.io API.
    pub fn nationalize_default() -> Self {
        Self {
            db_path: PathBuf::from("nationality.db"),
            api_url: "https://api.nationalize.io".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_api() {
        let config = Config::nationalize_default();
        assert_eq!(config.api_url, "https://api.nationalize.io");
        assert_eq!(config.db_path, PathBuf::from("nationality.db"));
    }
}
