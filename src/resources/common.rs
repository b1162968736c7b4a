//! Types shared across resources

use crate::error::Result;
use crate::http::Sdk;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A named link to another resource, used throughout the API and as the item
/// type of every listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLink {
    /// Resource name
    #[serde(default)]
    pub name: String,
    /// URL of the full resource
    #[serde(default)]
    pub url: String,
}

impl NamedLink {
    /// Fetch the resource this link points to.
    ///
    /// ```rust,ignore
    /// let pokemon: Pokemon = link.follow(&sdk).await?;
    /// ```
    pub async fn follow<T: DeserializeOwned>(&self, sdk: &Sdk) -> Result<T> {
        sdk.follow(&self.url).await
    }
}
