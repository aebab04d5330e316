//! User directory trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A user profile from the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// The user's primary email address.
    pub email: Option<String>,
    /// The user's primary phone number.
    pub phone: Option<String>,
    pub image_url: Option<String>,
}

/// Lookup of staff users by id in the external identity provider.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the profile for a user id.
    ///
    /// An unknown id is a not-found error; any provider failure surfaces
    /// as a transport error with no partial response.
    async fn user(&self, id: &str) -> Result<UserProfile>;
}
