//! Narrative Advisor: turns a [`syndicate_core::GameSnapshot`] into a
//! short dramatic write-up by calling a generative-language service.
//!
//! The advisor is strictly informational. Every failure path collapses
//! into fixed fallback prose so the caller never has an error to
//! handle, and the call itself never touches roster state.

pub mod config;
pub mod narrator;
pub mod summary;

pub use config::AdvisorConfig;
pub use narrator::{
    GeminiNarrator, Narrator, FALLBACK_TEXT, NOT_CONFIGURED_TEXT, NO_INSIGHTS_TEXT,
};
pub use summary::SlotSummary;
