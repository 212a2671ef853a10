//! Interview Assist — wizard core for creating AI-run interviews.
//!
//! A four-step form state machine (employer email, questions, evaluated
//! traits, recipients) plus the submission pipeline that validates the
//! draft, calls the creation service, and caches the result under the id
//! the service hands back.

pub mod cli;
pub mod config;
pub mod draft;
pub mod error;
pub mod pipeline;
pub mod remote;
pub mod store;
pub mod wizard;
