pub mod assist;
pub mod stories;
