//! Reconciles LLM pricing with benchmark leaderboards and ranks models by
//! value for money.
//!
//! The engine (`resolve`, `normalize`, `cost_benefit`, `merge`, `ranking`)
//! is pure and does no I/O; `store` and `api` sit at the boundary.

pub mod api;
pub mod config;
pub mod cost_benefit;
pub mod data;
pub mod dataset;
pub mod merge;
pub mod normalize;
pub mod ranking;
pub mod resolve;
pub mod sources;
pub mod store;
