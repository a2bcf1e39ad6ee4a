use crate::error::LifecycleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Lifecycle actions recognized in the `action` field of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
    Status,
}

impl Action {
    /// Used when the event has no `action` field.
    pub const DEFAULT: Action = Action::Create;

    /// Matches the exact lowercase action name. Anything else is an unknown action.
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "create" => Some(Action::Create),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            "status" => Some(Action::Status),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Status => "status",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cluster states as reported by ParallelCluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterStatus {
    CreateInProgress,
    UpdateInProgress,
    DeleteInProgress,
    CreateComplete,
}

/// Summary of the batch scheduler running on the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlurmSummary {
    pub version: String,
    pub queues: Vec<String>,
    pub nodes: u32,
}

/// What `describe-cluster` returns about a running cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDescription {
    pub status: ClusterStatus,
    pub head_node_ip: Ipv4Addr,
    pub slurm: SlurmSummary,
}

/// Body of create, update and delete responses.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationBody {
    pub message: String,
    pub cluster_name: Option<String>,
    pub status: ClusterStatus,
}

/// Body of the status response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBody {
    pub cluster_name: Option<String>,
    #[serde(flatten)]
    pub description: ClusterDescription,
}

/// The value returned to the Lambda runtime, in the API Gateway proxy shape.
/// `body` is JSON text, not a nested object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleResponse {
    pub status_code: u16,
    pub body: String,
}

impl LifecycleResponse {
    /// Serializes `body` into the JSON text of the response.
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Result<Self, LifecycleError> {
        Ok(Self {
            status_code,
            body: serde_json::to_string(body)?,
        })
    }

    /// A response whose body is a single JSON string, e.g. `"Unknown action: foo"`.
    /// Serializing a string cannot fail, so this one is infallible.
    pub fn text(status_code: u16, msg: String) -> Self {
        Self {
            status_code,
            body: serde_json::Value::String(msg).to_string(),
        }
    }
}
