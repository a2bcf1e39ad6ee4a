use super::ok;
use crate::cluster::ClusterBackend;
use crate::config::Config;
use crate::error::LifecycleError;
use crate::types::{LifecycleResponse, OperationBody};
use tracing::info;

/// Starts deleting the cluster. The config URI is not needed for this one.
pub(crate) fn handler<B: ClusterBackend>(backend: &B, config: &Config) -> Result<LifecycleResponse, LifecycleError> {
    info!("Deleting cluster {}", config.cluster_name());

    let status = backend.delete_cluster(config)?;

    ok(&OperationBody {
        message: format!("Cluster {} deletion initiated", config.cluster_name()),
        cluster_name: config.cluster_name.clone(),
        status,
    })
}
