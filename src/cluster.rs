use crate::config::Config;
use crate::error::LifecycleError;
use crate::types::{ClusterDescription, ClusterStatus, SlurmSummary};
use std::fmt;
use std::net::Ipv4Addr;
use tracing::info;

/// Lifecycle operations against a cluster orchestration service.
/// An instance is created once per lambda instance and borrowed by every invocation.
pub trait ClusterBackend {
    fn create_cluster(&self, config: &Config) -> Result<ClusterStatus, LifecycleError>;
    fn update_cluster(&self, config: &Config) -> Result<ClusterStatus, LifecycleError>;
    fn delete_cluster(&self, config: &Config) -> Result<ClusterStatus, LifecycleError>;
    fn describe_cluster(&self, config: &Config) -> Result<ClusterDescription, LifecycleError>;
}

/// A `pcluster` CLI invocation, e.g.
/// `pcluster delete-cluster --cluster-name hpc-dev --region us-east-1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PclusterCommand<'a> {
    pub subcommand: &'static str,
    pub cluster_name: &'a str,
    /// Only create and update take a cluster configuration
    pub cluster_configuration: Option<&'a str>,
    pub region: &'a str,
}

impl<'a> PclusterCommand<'a> {
    fn new(subcommand: &'static str, config: &'a Config) -> Self {
        Self {
            subcommand,
            cluster_name: config.cluster_name(),
            cluster_configuration: None,
            region: config.region(),
        }
    }

    pub fn create_cluster(config: &'a Config) -> Self {
        Self {
            cluster_configuration: Some(config.config_s3_uri()),
            ..Self::new("create-cluster", config)
        }
    }

    pub fn update_cluster(config: &'a Config) -> Self {
        Self {
            cluster_configuration: Some(config.config_s3_uri()),
            ..Self::new("update-cluster", config)
        }
    }

    pub fn delete_cluster(config: &'a Config) -> Self {
        Self::new("delete-cluster", config)
    }

    pub fn describe_cluster(config: &'a Config) -> Self {
        Self::new("describe-cluster", config)
    }
}

impl fmt::Display for PclusterCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pcluster {} --cluster-name {}", self.subcommand, self.cluster_name)?;
        if let Some(cluster_configuration) = self.cluster_configuration {
            write!(f, " --cluster-configuration {}", cluster_configuration)?;
        }
        write!(f, " --region {}", self.region)
    }
}

/// A stand-in for the ParallelCluster API.
/// It logs the command it would have run and reports the state the real call would return.
/// It never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedCluster;

impl SimulatedCluster {
    /// Address reported for the head node of every simulated cluster
    pub const HEAD_NODE_IP: Ipv4Addr = Ipv4Addr::new(10, 0, 16, 100);
    pub const SLURM_VERSION: &'static str = "22.05.7";
    pub const QUEUE: &'static str = "compute";
    pub const NODES: u32 = 10;

    fn simulate(&self, command: PclusterCommand<'_>) {
        info!("Simulating command: {}", command);
    }
}

impl ClusterBackend for SimulatedCluster {
    fn create_cluster(&self, config: &Config) -> Result<ClusterStatus, LifecycleError> {
        self.simulate(PclusterCommand::create_cluster(config));
        Ok(ClusterStatus::CreateInProgress)
    }

    fn update_cluster(&self, config: &Config) -> Result<ClusterStatus, LifecycleError> {
        self.simulate(PclusterCommand::update_cluster(config));
        Ok(ClusterStatus::UpdateInProgress)
    }

    fn delete_cluster(&self, config: &Config) -> Result<ClusterStatus, LifecycleError> {
        self.simulate(PclusterCommand::delete_cluster(config));
        Ok(ClusterStatus::DeleteInProgress)
    }

    fn describe_cluster(&self, config: &Config) -> Result<ClusterDescription, LifecycleError> {
        self.simulate(PclusterCommand::describe_cluster(config));
        Ok(ClusterDescription {
            status: ClusterStatus::CreateComplete,
            head_node_ip: Self::HEAD_NODE_IP,
            slurm: SlurmSummary {
                version: Self::SLURM_VERSION.to_string(),
                queues: vec![Self::QUEUE.to_string()],
                nodes: Self::NODES,
            },
        })
    }
}
