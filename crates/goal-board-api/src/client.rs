use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::board::Board;
use crate::error::{ApiResult, ClientError};
use crate::models::{
    CreateTargetBody, CreateTodoBody, NewTarget, NewTodo, ReplaceTargetBody, Target, Todo,
};

/// Service the front-end talks to unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "https://todo-caio.azurewebsites.net/api/";

// The service is case-insensitive but these are the paths it is addressed by.
const TARGETS_LIST: &str = "Targets";
const TARGETS: &str = "targets";
const TODO_LIST: &str = "Todo";
const TODO: &str = "todo";

/// HTTP client for the targets/todos REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service root (e.g., "https://host/api/"), trailing slash optional
    ///
    /// `Content-Type: application/json` is only set on requests with a body, so
    /// bodiless GET and DELETE stay simple CORS requests.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = ReqwestClient::builder().build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    /// Send and turn any non-2xx status into `ClientError::Status`
    async fn send(&self, req: RequestBuilder) -> ApiResult<Response> {
        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::warn!("request failed with status {}: {}", status, body);
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn execute_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let response = self.send(req).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// A 2xx reply is success; the echoed record is decoded if it can be
    async fn execute_echo<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<Option<T>> {
        let response = self.send(req).await?;
        let bytes = response.bytes().await?;
        match serde_json::from_slice(&bytes) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                log::warn!("created, but the reply did not decode: {}", e);
                Ok(None)
            }
        }
    }

    async fn execute_empty(&self, req: RequestBuilder) -> ApiResult<()> {
        self.send(req).await.map(|_| ())
    }

    // =========================================================================
    // Board
    // =========================================================================

    /// Fetch both collections. Nothing is returned unless both requests succeed.
    pub async fn load_board(&self) -> ApiResult<Board> {
        let targets = self.list_targets().await?;
        let todos = self.list_todos().await?;
        Ok(Board::new(targets, todos))
    }

    // =========================================================================
    // Target Operations
    // =========================================================================

    pub async fn list_targets(&self) -> ApiResult<Vec<Target>> {
        let req = self.request(Method::GET, TARGETS_LIST);
        self.execute_json(req).await
    }

    /// Create a target; it always starts incomplete.
    /// `None` means the service accepted it without echoing a readable record.
    pub async fn create_target(&self, draft: &NewTarget) -> ApiResult<Option<Target>> {
        let req = self
            .request(Method::POST, TARGETS)
            .json(&CreateTargetBody::from(draft));
        self.execute_echo(req).await
    }

    /// Full replace of a target, children included
    pub async fn update_target(&self, target: &Target) -> ApiResult<()> {
        let req = self
            .request(Method::PUT, &format!("{}/{}", TARGETS, target.id))
            .json(&ReplaceTargetBody::from(target));
        self.execute_empty(req).await
    }

    /// Delete a target. The service removes its todos as well.
    pub async fn delete_target(&self, id: u32) -> ApiResult<()> {
        let req = self.request(Method::DELETE, &format!("{}/{}", TARGETS, id));
        self.execute_empty(req).await
    }

    // =========================================================================
    // Todo Operations
    // =========================================================================

    pub async fn list_todos(&self) -> ApiResult<Vec<Todo>> {
        let req = self.request(Method::GET, TODO_LIST);
        self.execute_json(req).await
    }

    /// Create a todo under `draft.target_id`; it always starts incomplete
    pub async fn create_todo(&self, draft: &NewTodo) -> ApiResult<Option<Todo>> {
        let req = self
            .request(Method::POST, TODO_LIST)
            .json(&CreateTodoBody::from(draft));
        self.execute_echo(req).await
    }

    pub async fn update_todo(&self, todo: &Todo) -> ApiResult<()> {
        let req = self
            .request(Method::PUT, &format!("{}/{}", TODO, todo.id))
            .json(todo);
        self.execute_empty(req).await
    }

    pub async fn delete_todo(&self, id: u32) -> ApiResult<()> {
        let req = self.request(Method::DELETE, &format!("{}/{}", TODO, id));
        self.execute_empty(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_optional() {
        let with = ApiClient::new("http://localhost:5000/api/").unwrap();
        let without = ApiClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(with.base_url(), "http://localhost:5000/api");
        assert_eq!(with.base_url(), without.base_url());
    }

    #[test]
    fn test_default_base_url_points_at_api_root() {
        let client = ApiClient::new(DEFAULT_BASE_URL).unwrap();
        assert!(client.base_url().ends_with("/api"));
    }
}
