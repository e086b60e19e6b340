pub mod campus;
pub mod lines;
pub mod not_found;
