//! Domain types and pure logic for the Filmes API.
//!
//! No I/O lives here: storage is in `filmes_db`, HTTP in `filmes_api`.

pub mod error;
pub mod pagination;
pub mod patch;
pub mod types;
pub mod validation;
