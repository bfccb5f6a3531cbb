use std::path::Path;

use async_trait::async_trait;
use log::{info, trace};
use tokio::sync::RwLock;

use crate::token_store::{TokenStore, TokenStoreError};
use crate::token_store::internal::io_trait::{
    ProductionTokenStoreIo,
    TokenStoreIo,
};

mod data;
mod io_trait;

pub type ProductionTokenStore = TokenStoreImpl<ProductionTokenStoreIo>;

#[allow(private_bounds)]
pub struct TokenStoreImpl<Io: TokenStoreIo> {
    io: Io,
    state: RwLock<data::TokenData>,
}

impl ProductionTokenStore {
    pub async fn new(
        data_directory: &Path,
    ) -> Result<ProductionTokenStore, TokenStoreError> {
        Self::new_internal(ProductionTokenStoreIo::new(data_directory)).await
    }
}

#[allow(private_bounds)]
impl<Io: TokenStoreIo> TokenStoreImpl<Io> {
    async fn new_internal(
        io: Io,
    ) -> Result<TokenStoreImpl<Io>, TokenStoreError> {
        let state = io.read_token_file().await?;
        trace!(
            "loaded token state, access token held: {}",
            state.access_token.is_some(),
        );
        Ok(
            TokenStoreImpl {
                io,
                state: RwLock::new(state),
            }
        )
    }

    async fn write_state(
        &self,
        state: &data::TokenData,
    ) -> Result<(), TokenStoreError> {
        self.io.write_token_file(state).await
    }
}

#[allow(private_bounds)]
#[async_trait]
impl<Io: TokenStoreIo> TokenStore for TokenStoreImpl<Io> {
    async fn set_tokens(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), TokenStoreError> {
        info!("storing new token pair");
        let mut state = self.state.write().await;
        state.access_token = Some(access_token.to_owned());
        state.refresh_token = Some(refresh_token.to_owned());
        self.write_state(&state).await
    }

    async fn set_access_token(
        &self,
        access_token: &str,
    ) -> Result<(), TokenStoreError> {
        info!("storing refreshed access token");
        let mut state = self.state.write().await;
        state.access_token = Some(access_token.to_owned());
        self.write_state(&state).await
    }

    async fn clear_tokens(&self) -> Result<(), TokenStoreError> {
        info!("clearing stored tokens");
        let mut state = self.state.write().await;
        state.access_token = None;
        state.refresh_token = None;
        self.write_state(&state).await
    }

    async fn access_token(&self) -> Option<String> {
        self.state.read().await.access_token.clone()
    }

    async fn refresh_token(&self) -> Option<String> {
        self.state.read().await.refresh_token.clone()
    }
}
