/*
 * Responsibility
 * - Message schema of the comment.v1 RPC package
 * - Shared by the transport (api) and the core (services); depends on neither
 */
pub mod comment;
