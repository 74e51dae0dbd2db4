//! Repository implementations: PostgreSQL for deployments, in-memory for
//! hermetic tests and database-less runs.

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
