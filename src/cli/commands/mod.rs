pub mod ping;
pub mod token;
