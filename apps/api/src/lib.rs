//! Tailored-CV generation pipeline: job-posting URL + skills text in,
//! rendered resume document out.
//!
//! The pipeline is URL → text → structured record → file, with each stage
//! failing fast and the orchestrator forwarding the first error. The
//! `api` binary exposes it over HTTP; the `tailor` binary drives it from
//! the command line.

pub mod config;
pub mod errors;
pub mod fetch;
pub mod generation;
pub mod llm_client;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod routes;
pub mod skills;
pub mod state;
