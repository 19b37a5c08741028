pub mod client;
pub mod context;
pub mod conversation;
