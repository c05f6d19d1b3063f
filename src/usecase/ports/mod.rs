pub mod export;
pub mod source;
