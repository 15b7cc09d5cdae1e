//! Background fetch execution.
//!
//! This module runs catalog requests off the controller's timeline. The
//! controller never awaits a fetch: it hands a [`FetchRequest`] to the
//! [`FetchWorker`], which spawns it on the tokio runtime and delivers a
//! [`FetchResponse`] over a channel once the round trip completes.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol with generation tokens
//! - `handler`: Worker implementation and outcome normalization

pub mod handler;
pub mod messages;

pub use handler::FetchWorker;
pub use messages::{FetchKind, FetchOutcome, FetchRequest, FetchResponse};
