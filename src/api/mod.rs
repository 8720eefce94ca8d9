//! API client modules for external service integrations.
//!
//! Currently hosts the GitLab client, which is the tool's single data
//! source. Authentication is a static private token sent with every
//! request, so there is no session lifecycle to manage here.

pub mod gitlab;

// Re-export the configuration struct for easier access from other modules
pub use gitlab::GitLabConfig;
