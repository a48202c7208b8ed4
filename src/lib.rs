//! # sqltutor
//!
//! Chat-completion gateway for an SQL tutoring assistant. A conversation goes
//! in, a single reply string comes out: either the model's answer or an
//! `Error: ...` sentence ready to show to the student.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sqltutor::{Message, send_message};
//!
//! #[tokio::main]
//! async fn main() {
//!     let history = vec![Message::user("What does GROUP BY do?")];
//!     let reply = send_message(&history, "Can you show an example?", Some("Aggregations")).await;
//!     println!("{reply}");
//! }
//! ```
//!
//! The credential is read from `GITHUB_TOKEN` on every call. Use
//! [`TutorGateway`] with [`TutorSettings`] to change the model, token limit,
//! persona or credential source, and [`TutorGateway::complete`] when the
//! failure kind matters.

pub mod core;
pub mod provider;
pub mod tutor;

pub use crate::core::{
    ChatRole, CredentialProvider, EnvCredential, HttpClientConfig, LlmError, Message,
    StaticCredential, TutorSettings,
};
pub use provider::{ChatCompletions, GitHubModelsClient, GitHubModelsConfig, Provider};
pub use tutor::{EMPTY_REPLY_FALLBACK, TutorGateway, send_message};
