use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use crate::submission::form::Submission;

const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug)]
pub enum NotionError {
    DatabaseNotFound(String),
    Unauthorized(String),
    Api {
        status: u16,
        code: String,
        message: String,
    },
    Transport(reqwest::Error),
}

impl std::fmt::Display for NotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotionError::DatabaseNotFound(msg) => write!(f, "Database not found: {msg}"),
            NotionError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            NotionError::Api {
                status,
                code,
                message,
            } => write!(f, "Notion API error {status} ({code}): {message}"),
            NotionError::Transport(err) => write!(f, "Notion request failed: {err}"),
        }
    }
}

impl From<reqwest::Error> for NotionError {
    fn from(err: reqwest::Error) -> Self {
        NotionError::Transport(err)
    }
}

/// Client for the Notion pages API.
pub struct NotionClient {
    client: reqwest::Client,
    token: String,
    api_base: String,
}

impl NotionClient {
    pub fn new(token: &str, api_base: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            token: token.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Create one page in the given database. Returns the new page id.
    /// Single attempt, no retries.
    pub async fn create_page(
        &self,
        database_id: &str,
        properties: Value,
    ) -> Result<String, NotionError> {
        let body = json!({
            "parent": { "database_id": database_id },
            "properties": properties,
        });

        let resp = self
            .client
            .post(format!("{}/v1/pages", self.api_base))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let payload: Value = resp.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            return payload["id"]
                .as_str()
                .map(|id| id.to_string())
                .ok_or_else(|| NotionError::Api {
                    status: status.as_u16(),
                    code: "missing_id".to_string(),
                    message: "create-page response carried no page id".to_string(),
                });
        }

        let code = payload["code"].as_str().unwrap_or("").to_string();
        let message = payload["message"].as_str().unwrap_or("").to_string();

        match code.as_str() {
            "object_not_found" => Err(NotionError::DatabaseNotFound(message)),
            "unauthorized" => Err(NotionError::Unauthorized(message)),
            _ => Err(NotionError::Api {
                status: status.as_u16(),
                code,
                message,
            }),
        }
    }
}

/// Mapping from submission fields to Notion property names.
///
/// The historical routes disagreed on property casing; this table is the
/// single source of truth for both.
#[derive(Debug, Clone)]
pub struct PropertyMap {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gpu_type: String,
    pub quantity: String,
    pub message: String,
    pub submitted_at: String,
}

impl Default for PropertyMap {
    fn default() -> Self {
        Self {
            first_name: "First name".to_string(),
            last_name: "Last name".to_string(),
            email: "Email".to_string(),
            gpu_type: "GPU type".to_string(),
            quantity: "Quantity".to_string(),
            message: "Message".to_string(),
            submitted_at: "Submission time".to_string(),
        }
    }
}

impl PropertyMap {
    /// Build the Notion properties object for a submission.
    pub fn to_properties(&self, submission: &Submission, submitted_at: DateTime<Utc>) -> Value {
        let mut props = Map::new();
        props.insert(
            self.first_name.clone(),
            json!({ "title": [{ "text": { "content": submission.first_name } }] }),
        );
        props.insert(
            self.last_name.clone(),
            json!({ "rich_text": [{ "text": { "content": submission.last_name } }] }),
        );
        props.insert(self.email.clone(), json!({ "email": submission.email }));
        props.insert(
            self.gpu_type.clone(),
            json!({ "select": { "name": submission.gpu_type } }),
        );
        props.insert(
            self.quantity.clone(),
            json!({ "number": submission.quantity }),
        );
        props.insert(
            self.message.clone(),
            json!({ "rich_text": [{ "text": { "content": submission.message.as_deref().unwrap_or("") } }] }),
        );
        props.insert(
            self.submitted_at.clone(),
            json!({ "date": { "start": submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true) } }),
        );
        Value::Object(props)
    }
}
