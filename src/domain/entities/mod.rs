pub mod campaign;
pub mod dashboard;
pub mod view;
