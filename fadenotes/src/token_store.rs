mod errors;
mod internal;

use async_trait::async_trait;

pub use errors::*;
pub use internal::ProductionTokenStore;

/// Persisted `access_token`/`refresh_token` pair. Tokens are opaque
/// strings; holding an access token is what "authenticated" means to the
/// rest of the client, nothing in them is inspected locally.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn set_tokens(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), TokenStoreError>;

    async fn set_access_token(
        &self,
        access_token: &str,
    ) -> Result<(), TokenStoreError>;

    async fn clear_tokens(&self) -> Result<(), TokenStoreError>;

    async fn access_token(&self) -> Option<String>;

    async fn refresh_token(&self) -> Option<String>;

    async fn is_authenticated(&self) -> bool {
        self.access_token().await.is_some()
    }
}
