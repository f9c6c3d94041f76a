pub mod archetypes;
pub mod board;
pub mod models;
pub mod sanitizer;
