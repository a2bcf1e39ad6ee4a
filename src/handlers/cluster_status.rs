use super::ok;
use crate::cluster::ClusterBackend;
use crate::config::Config;
use crate::error::LifecycleError;
use crate::types::{LifecycleResponse, StatusBody};
use tracing::info;

/// Reports the cluster state, head node address and the scheduler summary.
pub(crate) fn handler<B: ClusterBackend>(backend: &B, config: &Config) -> Result<LifecycleResponse, LifecycleError> {
    info!("Checking status for cluster {}", config.cluster_name());

    let description = backend.describe_cluster(config)?;

    ok(&StatusBody {
        cluster_name: config.cluster_name.clone(),
        description,
    })
}
