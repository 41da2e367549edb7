use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_MESSAGE_LIMIT: u32 = 50;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub reactions: Map<String, Value>,
    #[serde(default)]
    pub is_edited: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, ToSchema)]
pub struct InsertMessageInput {
    pub channel_id: String,
    pub author_id: String,
    pub author_name: String,
    pub content: String,
    pub attachments: Vec<String>,
    #[schema(value_type = Object)]
    pub reactions: Map<String, Value>,
    pub is_edited: bool,
}

/// Body of a message send request. The channel always comes from the path.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateMessageRequest {
    pub author_id: String,
    pub author_name: String,
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl CreateMessageRequest {
    pub fn into_input(self, channel_id: String) -> InsertMessageInput {
        InsertMessageInput {
            channel_id,
            author_id: self.author_id,
            author_name: self.author_name,
            content: self.content,
            attachments: self.attachments,
            reactions: Map::new(),
            is_edited: false,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMessagesQuery {
    /// Maximum number of messages returned, oldest first
    #[serde(default = "default_message_limit")]
    pub limit: u32,
}

fn default_message_limit() -> u32 {
    DEFAULT_MESSAGE_LIMIT
}

impl Default for ListMessagesQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_MESSAGE_LIMIT,
        }
    }
}
