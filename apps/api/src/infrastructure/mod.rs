// Infrastructure layer module
// PostgreSQL adapters for the domain repositories

pub mod repositories;
