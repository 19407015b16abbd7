pub mod bridge;
pub mod config;
pub mod mapper;
pub mod response;
pub mod scopes;
pub mod timestamp;
