//! Infrastructure layer - database.

mod db;

pub use db::Database;
