use std::env::var;

pub(crate) const CLUSTER_NAME: &str = "CLUSTER_NAME";
pub(crate) const CONFIG_S3_URI: &str = "CONFIG_S3_URI";
pub(crate) const REGION: &str = "REGION";

/// Rendered in log lines and messages in place of a missing value.
pub const UNSET: &str = "<unset>";

/// Cluster settings passed to the lambda via env vars.
/// None of them is required: a missing value is carried as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// E.g. hpc-dev
    pub cluster_name: Option<String>,
    /// E.g. s3://my-bucket/cluster-config.yaml
    pub config_s3_uri: Option<String>,
    /// E.g. us-east-1
    pub region: Option<String>,
}

impl Config {
    /// Reads the config from the process environment. Never fails.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a HashMap in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cluster_name: lookup(CLUSTER_NAME),
            config_s3_uri: lookup(CONFIG_S3_URI),
            region: lookup(REGION),
        }
    }

    pub fn cluster_name(&self) -> &str {
        self.cluster_name.as_deref().unwrap_or(UNSET)
    }

    pub fn config_s3_uri(&self) -> &str {
        self.config_s3_uri.as_deref().unwrap_or(UNSET)
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(UNSET)
    }
}
