//! Core library for wpgen
//!
//! This crate implements the **Functional Core** of the wpgen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`wpgen_core`** (this crate): Pure transformation functions with zero I/O
//! - **`wpgen`**: Environment, HTTP and filesystem operations (the Imperative Shell)
//!
//! Nothing in this crate touches the network, the environment or the disk. The
//! shell hands it raw values (an environment variable, a response body, the
//! model's file list) and acts on what comes back.
//!
//! # Module Organization
//!
//! - [`plugin`]: The structured reply records and the printed summary
//! - [`prompt`]: The fixed system instruction and message construction
//! - [`completion`]: Request body, JSON schema and response interpretation
//! - [`paths`]: Confinement of model-supplied paths to the output root
//! - [`config`]: Credential resolution
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use wpgen_core::completion::{interpret_response, CompletionOutcome, CompletionRequest};
//! use wpgen_core::prompt::{build_messages, PromptConfig};
//!
//! let messages = build_messages(&PromptConfig::default(), "Acme", "Add a shortcode");
//! let request = CompletionRequest::new("gpt-4o-2024-08-06", messages);
//!
//! // `body` is whatever the HTTP layer received
//! match interpret_response(body) {
//!     CompletionOutcome::Success(plugin) => println!("{}", plugin.name),
//!     CompletionOutcome::Refusal { raw, .. } => eprintln!("{raw}"),
//!     CompletionOutcome::TransportError(detail) => eprintln!("{detail}"),
//! }
//! ```

pub mod completion;
pub mod config;
pub mod paths;
pub mod plugin;
pub mod prompt;
