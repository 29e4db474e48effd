use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable, split_message};
use tracing::warn;

use crate::{
    core::domain::models::{
        AppError,
        usecases::{
            AddShardUseCaseInput, HashKeyUseCaseInput, ListShardsUseCaseInput,
            RemoveShardUseCaseInput, RouteKeyUseCaseInput,
        },
    },
    infrastructure::di::RingRouterModule,
};

pub struct RequestController {
    module_dependencies: Arc<RingRouterModule>,
}

impl RequestController {
    pub fn new(module_dependencies: Arc<RingRouterModule>) -> Self {
        Self {
            module_dependencies,
        }
    }
}

impl RequestController {
    /// Handles one input line and renders the reply (`OK ...` / `ERR ...`).
    pub async fn handle_line(&self, line: &str) -> String {
        let line = line.trim();
        let (action, payload) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match self
            .handle_request(&action.to_ascii_uppercase(), payload)
            .await
        {
            Ok(reply) => format!("OK {reply}"),
            Err(e) => {
                warn!(action, error = %e, "request failed");
                format!("ERR {e}")
            }
        }
    }

    pub async fn handle_request(&self, action: &str, payload: &str) -> Result<String, AppError> {
        let mut parts = split_message(payload).into_iter();

        match action {
            "PING" => Ok(String::from("PONG")),
            "HASH" => {
                let key = parts.next().unwrap_or_default().to_string();

                let response = self
                    .module_dependencies
                    .hash_key_use_case
                    .validate_and_execute(HashKeyUseCaseInput { key })
                    .await?;

                Ok(response.hash.to_string())
            }
            "ROUTE" => {
                let key = parts.next().unwrap_or_default().to_string();

                let response = self
                    .module_dependencies
                    .route_key_use_case
                    .validate_and_execute(RouteKeyUseCaseInput { key })
                    .await?;

                let route = response.route;
                Ok(format!(
                    "{} {} {:016x}",
                    route.shard, route.address, route.hash
                ))
            }
            "ADD" => {
                let name = parts.next().unwrap_or_default().to_string();
                let address = parts.next().unwrap_or_default().to_string();

                let response = self
                    .module_dependencies
                    .add_shard_use_case
                    .validate_and_execute(AddShardUseCaseInput {
                        name: name.clone(),
                        address,
                    })
                    .await?;

                if !response.success {
                    return Err(AppError::BadRequest("Failed to add shard".to_string()));
                }

                Ok(format!("ADDED {name}"))
            }
            "REMOVE" => {
                let name = parts.next().unwrap_or_default().to_string();

                let response = self
                    .module_dependencies
                    .remove_shard_use_case
                    .validate_and_execute(RemoveShardUseCaseInput { name: name.clone() })
                    .await?;

                if !response.success {
                    return Err(AppError::BadRequest("Failed to remove shard".to_string()));
                }

                Ok(format!("REMOVED {name}"))
            }
            "SHARDS" => {
                let response = self
                    .module_dependencies
                    .list_shards_use_case
                    .execute(ListShardsUseCaseInput)
                    .await?;

                Ok(response
                    .shards
                    .iter()
                    .map(|s| format!("{}@{} keys={}", s.name, s.address, s.routed_keys))
                    .collect::<Vec<_>>()
                    .join(", "))
            }
            _ => Err(AppError::BadRequest(format!("Unknown action: {}", action))),
        }
    }
}
