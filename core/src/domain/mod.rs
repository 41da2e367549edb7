pub mod channel;
pub mod common;
pub mod document;
pub mod health;
pub mod message;
pub mod seed;
pub mod server;
