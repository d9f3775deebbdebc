pub mod search;
pub mod token_service;
pub mod types;
