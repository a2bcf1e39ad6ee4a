use super::ok;
use crate::cluster::ClusterBackend;
use crate::config::Config;
use crate::error::LifecycleError;
use crate::types::{LifecycleResponse, OperationBody};
use tracing::info;

pub(crate) fn handler<B: ClusterBackend>(backend: &B, config: &Config) -> Result<LifecycleResponse, LifecycleError> {
    info!(
        "Updating cluster {} with config {}",
        config.cluster_name(),
        config.config_s3_uri()
    );

    let status = backend.update_cluster(config)?;

    ok(&OperationBody {
        message: format!("Cluster {} update initiated", config.cluster_name()),
        cluster_name: config.cluster_name.clone(),
        status,
    })
}
