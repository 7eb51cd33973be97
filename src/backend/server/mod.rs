/**
 * Server Module
 *
 * Configuration loading, state management, and application assembly.
 */

pub mod config;
pub mod init;
pub mod state;
