use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    #[default]
    Text,
    Voice,
    Announcement,
    Stage,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub server_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ChannelType,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub is_private: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, ToSchema)]
pub struct InsertChannelInput {
    pub server_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    pub topic: Option<String>,
    pub is_private: bool,
}

/// Body of a channel creation request. The owning server always comes from
/// the request path; a `server_id` in the body is ignored.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateChannelRequest {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ChannelType,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub is_private: bool,
}

impl CreateChannelRequest {
    pub fn into_input(self, server_id: String) -> InsertChannelInput {
        InsertChannelInput {
            server_id,
            name: self.name,
            kind: self.kind,
            topic: self.topic,
            is_private: self.is_private,
        }
    }
}
