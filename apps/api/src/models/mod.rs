pub mod exercise;
pub mod role_kit;
pub mod session;
