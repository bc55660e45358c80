use serde::{Deserialize, Serialize};

/// Endpoint the dashboard loads its user records from.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

fn default_users_endpoint() -> String {
    DEFAULT_USERS_ENDPOINT.to_string()
}

/// Settings for the directory data source.
///
/// The app builds this with `Default` and shares it through context; there
/// is no config file behind it. Every field has a default so a partial value
/// (e.g. from an embedding host) still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryConfig {
    #[serde(default = "default_users_endpoint")]
    pub users_endpoint: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            users_endpoint: default_users_endpoint(),
        }
    }
}
