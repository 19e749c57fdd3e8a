//! soka-kit: configuration and scaffolding for Soka agent applications.
//!
//! - [`config`]: environment-seeded configuration with `ai`/`performance`
//!   DSL sections and an optional `config/soka.yaml` overlay
//! - [`agent`]: agent type definitions that pick up the configuration when
//!   they are derived from a parent
//! - [`generators`]: scaffolding for the install layout, agents and tools
//! - [`testing`]: mock model responses and configuration overrides for tests

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generators;
pub mod testing;

#[cfg(test)]
mod test_support;
