use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the CSV tables
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Number of K-means clusters for the habit-time recommender
    #[serde(default = "default_habit_clusters")]
    pub habit_clusters: usize,

    /// Seed for K-means initialization
    #[serde(default = "default_cluster_seed")]
    pub cluster_seed: u64,

    /// Number of K-means restarts; the lowest-inertia run wins
    #[serde(default = "default_cluster_restarts")]
    pub cluster_restarts: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_habit_clusters() -> usize {
    3
}

fn default_cluster_seed() -> u64 {
    42
}

fn default_cluster_restarts() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: default_data_dir(),
            habit_clusters: default_habit_clusters(),
            cluster_seed: default_cluster_seed(),
            cluster_restarts: default_cluster_restarts(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.habit_clusters == 0 {
            anyhow::bail!("HABIT_CLUSTERS must be at least 1");
        }

        Ok(config)
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.habit_clusters, 3);
        assert_eq!(config.cluster_seed, 42);
        assert_eq!(config.cluster_restarts, 10);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("PORT", "8080"),
            ("DATA_DIR", "/srv/wellness"),
            ("HABIT_CLUSTERS", "4"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("/srv/wellness"));
        assert_eq!(config.habit_clusters, 4);
    }

    #[test]
    fn test_rejects_zero_clusters() {
        let result = Config::from_vars(vars(&[("HABIT_CLUSTERS", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_port() {
        let result = Config::from_vars(vars(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}
