pub mod discord;
pub mod http;
pub mod signature;
