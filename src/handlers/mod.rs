use crate::error::LifecycleError;
use crate::types::LifecycleResponse;
use serde::Serialize;

pub(crate) mod cluster_status;
pub(crate) mod create_cluster;
pub(crate) mod delete_cluster;
pub(crate) mod update_cluster;

/// Returns a 200 response with `body` serialized as JSON.
pub(crate) fn ok<T: Serialize>(body: &T) -> Result<LifecycleResponse, LifecycleError> {
    LifecycleResponse::json(200, body)
}

/// Returns a 400 response with `msg` as a JSON string body.
pub(crate) fn bad_request(msg: String) -> LifecycleResponse {
    LifecycleResponse::text(400, msg)
}

/// Returns a 500 response with the error text prefixed with `Error: `.
pub(crate) fn server_error(err: &LifecycleError) -> LifecycleResponse {
    LifecycleResponse::text(500, format!("Error: {err}"))
}
