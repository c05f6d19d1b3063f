pub mod export;
pub mod mock;
