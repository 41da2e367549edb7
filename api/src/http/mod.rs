pub mod channels;
pub mod diagnostics;
pub mod health;
pub mod messages;
pub mod seed;
pub mod server;
pub mod servers;
