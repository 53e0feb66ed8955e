//! Repository structs wrapping raw SQL for each table.

pub mod movie_repo;

pub use movie_repo::MovieRepo;
