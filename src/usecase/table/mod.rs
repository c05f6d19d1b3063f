pub mod filter;
pub mod paginate;
pub mod sort;
