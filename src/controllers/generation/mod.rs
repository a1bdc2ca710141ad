//! Generation controller for last-request-wins image generation.
//!
//! This module provides the application layer over the tile engine,
//! accepting view-area requests and dispatching completion events to the
//! consuming layer.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: [`ViewArea`](crate::ViewArea) requests via `request_generation`
//! - **Output**: [`GenerationCompletionPort`] trait for receiving finished images
//! - **Core**: uses the domain actions from `core/` for the actual computation

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::{GenerationController, GenerationControllerConstructorError};
pub use data::completion_data::CompletionData;
pub use data::generation_settings::GenerationSettings;
pub use errors::generation::GenerationFailure;
pub use events::generation_event::GenerationEvent;
pub use ports::completion_port::GenerationCompletionPort;
