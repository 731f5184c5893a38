/// Environment-backed startup configuration.
pub mod config;
/// Typed startup errors and user-facing denials.
pub mod errors;
/// Help thread lifecycle rules.
pub mod lifecycle;
pub mod model;
/// Embed and component builders.
pub mod notices;
/// Port to the chat platform.
pub mod platform;
pub mod tags;

use std::sync::Arc;

use twilight_http::Client;

use crate::lifecycle::HelpForum;

/// Shared application context passed into event and interaction handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub forum: Arc<HelpForum>,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, forum: Arc<HelpForum>) -> Self {
        Self { http, forum }
    }
}
