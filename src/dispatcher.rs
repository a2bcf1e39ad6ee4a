use crate::cluster::ClusterBackend;
use crate::config::Config;
use crate::error::LifecycleError;
use crate::handlers;
use crate::types::{Action, LifecycleResponse};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::borrow::Cow;
use tracing::{debug, error, info};

/// The lambda entry point. Every outcome is returned as a [`LifecycleResponse`],
/// including failures, so the runtime never sees an `Err` from here.
pub async fn handler<B: ClusterBackend>(
    event: LambdaEvent<Value>,
    config: &Config,
    backend: &B,
) -> Result<LifecycleResponse, Error> {
    let (event, ctx) = event.into_parts();

    info!("Received event: {}", event);
    debug!("Request ID: {}", ctx.request_id);

    Ok(dispatch(&event, config, backend))
}

/// Routes the event to the handler for its `action` and converts any error into a 500.
pub fn dispatch<B: ClusterBackend>(event: &Value, config: &Config, backend: &B) -> LifecycleResponse {
    let action = action_name(event);

    match route(&action, config, backend) {
        Ok(v) => v,
        Err(e) => {
            error!("Error: {e}");
            handlers::server_error(&e)
        }
    }
}

fn route<B: ClusterBackend>(action: &str, config: &Config, backend: &B) -> Result<LifecycleResponse, LifecycleError> {
    match Action::parse(action) {
        Some(Action::Create) => handlers::create_cluster::handler(backend, config),
        Some(Action::Update) => handlers::update_cluster::handler(backend, config),
        Some(Action::Delete) => handlers::delete_cluster::handler(backend, config),
        Some(Action::Status) => handlers::cluster_status::handler(backend, config),
        None => {
            error!("Unknown action: {action}");
            Ok(handlers::bad_request(format!("Unknown action: {action}")))
        }
    }
}

/// Returns the value of `action` field or the default action if there is none.
/// Non-string values are returned as JSON text so they end up in the unknown action message.
fn action_name(event: &Value) -> Cow<'_, str> {
    match event.get("action") {
        None => Cow::Borrowed(Action::DEFAULT.as_str()),
        Some(Value::String(v)) => Cow::Borrowed(v.as_str()),
        Some(v) => Cow::Owned(v.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::SimulatedCluster;
    use crate::types::{ClusterDescription, ClusterStatus};
    use lambda_runtime::Context;
    use serde_json::json;

    /// Fails every call to check the 500 path.
    struct BrokenCluster;

    impl ClusterBackend for BrokenCluster {
        fn create_cluster(&self, _config: &Config) -> Result<ClusterStatus, LifecycleError> {
            Err(LifecycleError::Backend("stack limit exceeded".to_string()))
        }

        fn update_cluster(&self, _config: &Config) -> Result<ClusterStatus, LifecycleError> {
            Err(LifecycleError::Backend("cluster is not in a stable state".to_string()))
        }

        fn delete_cluster(&self, _config: &Config) -> Result<ClusterStatus, LifecycleError> {
            Err(LifecycleError::Backend("cluster not found".to_string()))
        }

        fn describe_cluster(&self, _config: &Config) -> Result<ClusterDescription, LifecycleError> {
            Err(LifecycleError::Backend("throttled".to_string()))
        }
    }

    fn config() -> Config {
        Config {
            cluster_name: Some("hpc-dev".to_string()),
            config_s3_uri: Some("s3://bucket/cluster.yaml".to_string()),
            region: Some("us-east-1".to_string()),
        }
    }

    fn body(resp: &LifecycleResponse) -> Value {
        serde_json::from_str(&resp.body).unwrap()
    }

    #[test]
    fn test_action_name() {
        assert_eq!(action_name(&json!({})), "create");
        assert_eq!(action_name(&json!({ "action": "status" })), "status");
        assert_eq!(action_name(&json!({ "action": 5 })), "5");
        assert_eq!(action_name(&json!({ "action": null })), "null");
        assert_eq!(action_name(&json!("not an object")), "create");
    }

    #[test]
    fn test_in_progress_actions() {
        let config = config();

        for (action, status) in [
            ("create", "CREATE_IN_PROGRESS"),
            ("update", "UPDATE_IN_PROGRESS"),
            ("delete", "DELETE_IN_PROGRESS"),
        ] {
            let resp = dispatch(&json!({ "action": action }), &config, &SimulatedCluster);
            assert_eq!(resp.status_code, 200);
            assert_eq!(body(&resp)["status"], status);
            assert_eq!(body(&resp)["clusterName"], "hpc-dev");
        }
    }

    #[test]
    fn test_operation_messages() {
        let config = config();

        let resp = dispatch(&json!({ "action": "create" }), &config, &SimulatedCluster);
        assert_eq!(body(&resp)["message"], "Cluster hpc-dev creation initiated");

        let resp = dispatch(&json!({ "action": "update" }), &config, &SimulatedCluster);
        assert_eq!(body(&resp)["message"], "Cluster hpc-dev update initiated");

        let resp = dispatch(&json!({ "action": "delete" }), &config, &SimulatedCluster);
        assert_eq!(body(&resp)["message"], "Cluster hpc-dev deletion initiated");
    }

    #[test]
    fn test_missing_action_is_create() {
        let config = config();

        let implicit = dispatch(&json!({ "RequestType": "Delete" }), &config, &SimulatedCluster);
        let explicit = dispatch(&json!({ "action": "create" }), &config, &SimulatedCluster);

        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_status() {
        let resp = dispatch(&json!({ "action": "status" }), &Config::default(), &SimulatedCluster);

        assert_eq!(resp.status_code, 200);
        assert_eq!(
            body(&resp),
            json!({
                "clusterName": null,
                "status": "CREATE_COMPLETE",
                "headNodeIp": "10.0.16.100",
                "slurm": { "version": "22.05.7", "queues": ["compute"], "nodes": 10 }
            })
        );
    }

    #[test]
    fn test_unknown_action() {
        let resp = dispatch(&json!({ "action": "restart" }), &config(), &SimulatedCluster);

        assert_eq!(resp.status_code, 400);
        assert_eq!(body(&resp), json!("Unknown action: restart"));
    }

    #[test]
    fn test_backend_errors_become_500() {
        let config = config();

        let resp = dispatch(&json!({}), &config, &BrokenCluster);
        assert_eq!(resp.status_code, 500);
        assert_eq!(body(&resp), json!("Error: stack limit exceeded"));

        let resp = dispatch(&json!({ "action": "status" }), &config, &BrokenCluster);
        assert_eq!(resp.status_code, 500);
        assert_eq!(body(&resp), json!("Error: throttled"));
    }

    #[test]
    fn test_unknown_action_does_not_reach_backend() {
        let resp = dispatch(&json!({ "action": "resize" }), &config(), &BrokenCluster);

        assert_eq!(resp.status_code, 400);
    }

    #[tokio::test]
    async fn test_handler_never_errs() {
        let config = Config::default();

        let event = LambdaEvent::new(json!({ "action": "delete" }), Context::default());
        let resp = handler(event, &config, &SimulatedCluster).await.unwrap();
        assert_eq!(resp.status_code, 200);
        assert_eq!(body(&resp)["message"], "Cluster <unset> deletion initiated");
        assert_eq!(body(&resp)["clusterName"], Value::Null);

        let event = LambdaEvent::new(json!({}), Context::default());
        let resp = handler(event, &config, &BrokenCluster).await.unwrap();
        assert_eq!(resp.status_code, 500);
    }
}
