//! Resume tailoring service: rewrites resume bullets for a job description
//! and shows each rewrite as a word-level diff against its source bullet.

pub mod assertions;
pub mod config;
pub mod diff;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
