use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{channel::entities::Channel, server::entities::Server};

pub const SEED_SERVER_NAME: &str = "VibeCord";
pub const SEED_SERVER_DESCRIPTION: &str = "A modern, minimal community";
pub const SEED_CHANNEL_NAMES: [&str; 4] = ["general", "announcements", "design", "dev-talk"];
pub const SEED_AUTHOR_ID: &str = "seed";
pub const SEED_AUTHOR_NAME: &str = "System";
pub const SEED_MESSAGES: [&str; 3] = [
    "Welcome to VibeCord — a clean, modern chat.",
    "Use the message box below to send your first message.",
    "We'll keep things fast and minimal.",
];

/// The seeded server together with all of its channels.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct SeedResult {
    pub server: Server,
    pub channels: Vec<Channel>,
}

pub fn seed_channel_topic(name: &str) -> String {
    format!("Welcome to #{name}")
}
