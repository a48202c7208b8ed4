pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use config::{CredentialProvider, EnvCredential, StaticCredential, TutorSettings};
pub use error::LlmError;
pub use http::{HttpClient, HttpClientConfig};
pub use types::{ChatRole, Message};
