use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Result count for top-rated and graph-based lists when the request omits `k`
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,

    /// Neighbors shown in an item's drill-down
    #[serde(default = "default_similar_top_k")]
    pub similar_top_k: usize,

    /// Same-principal items shown in an item's drill-down
    #[serde(default = "default_principal_top_k")]
    pub principal_top_k: usize,

    /// Principals listed by the popular-principals view
    #[serde(default = "default_popular_principals_top_k")]
    pub popular_principals_top_k: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_top_k() -> usize {
    5
}

fn default_similar_top_k() -> usize {
    3
}

fn default_principal_top_k() -> usize {
    2
}

fn default_popular_principals_top_k() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_top_k: default_top_k(),
            similar_top_k: default_similar_top_k(),
            principal_top_k: default_principal_top_k(),
            popular_principals_top_k: default_popular_principals_top_k(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
