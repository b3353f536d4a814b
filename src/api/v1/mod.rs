/*
 * Responsibility
 * - Public surface of v1 (routes() re-export)
 */
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
