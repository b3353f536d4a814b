/*
 * Responsibility
 * - Public interface of the middleware layer (re-export)
 */
pub mod http;
