use std::sync::Arc;

use api_data::model::*;
use log::{debug, trace};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::api::ApiError;
use crate::token_store::TokenStore;


/// Thin wrapper over the remote HTTP API: JSON in and out, the bearer
/// token attached whenever one is held, and non-2xx responses turned
/// into [`ApiError::Server`] with the service's message.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
    ) -> ApiClient {
        let base_url: String = base_url.into();
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let builder = match self.tokens.access_token().await {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        self.execute_raw(builder).await
    }

    async fn execute_raw<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        trace!("response status {status} for {}", response.url());
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let url = response.url().clone();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP error, status {}", status.as_u16()),
        };
        debug!("service reported an error for {url}: {message}");
        Err(
            ApiError::Server {
                status: status.as_u16(),
                message,
            }
        )
    }

    pub async fn signup(
        &self,
        request: &SignupRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.execute(
            self.http.post(self.url("/auth/signup")).json(request)
        ).await
    }

    pub async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        self.execute(
            self.http.post(self.url("/auth/login")).json(request)
        ).await
    }

    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.execute(self.http.post(self.url("/auth/logout"))).await
    }

    /// The refresh endpoint authenticates with the refresh token rather
    /// than the (possibly expired) access token.
    pub async fn refresh_token(&self) -> Result<RefreshResponse, ApiError> {
        let refresh_token = self.tokens.refresh_token()
            .await
            .ok_or(ApiError::NoRefreshToken)?;
        self.execute_raw(
            self.http
                .post(self.url("/auth/refresh"))
                .bearer_auth(refresh_token)
        ).await
    }

    pub async fn get_profile(&self) -> Result<ProfileResponse, ApiError> {
        self.execute(self.http.get(self.url("/auth/profile"))).await
    }

    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<ProfileResponse, ApiError> {
        self.execute(
            self.http.put(self.url("/auth/profile")).json(request)
        ).await
    }

    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.execute(
            self.http.post(self.url("/auth/forgot-password")).json(request)
        ).await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.execute(
            self.http.post(self.url("/auth/reset-password")).json(request)
        ).await
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.execute(
            self.http.post(self.url("/auth/change-password")).json(request)
        ).await
    }

    pub async fn resend_verification(
        &self,
        request: &ResendVerificationRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.execute(
            self.http
                .post(self.url("/auth/resend-verification"))
                .json(request)
        ).await
    }

    pub async fn get_notes(&self) -> Result<NoteListResponse, ApiError> {
        self.execute(self.http.get(self.url("/notes/"))).await
    }

    pub async fn get_archived_notes(
        &self,
    ) -> Result<ArchivedNoteListResponse, ApiError> {
        self.execute(self.http.get(self.url("/notes/archived"))).await
    }

    pub async fn create_note(
        &self,
        request: &CreateNoteRequest,
    ) -> Result<NoteEnvelopeResponse, ApiError> {
        self.execute(
            self.http.post(self.url("/notes/")).json(request)
        ).await
    }

    pub async fn update_note(
        &self,
        note_id: i64,
        request: &UpdateNoteRequest,
    ) -> Result<NoteEnvelopeResponse, ApiError> {
        self.execute(
            self.http
                .put(self.url(&format!("/notes/{note_id}")))
                .json(request)
        ).await
    }

    pub async fn delete_note(
        &self,
        note_id: i64,
    ) -> Result<MessageResponse, ApiError> {
        self.execute(
            self.http.delete(self.url(&format!("/notes/{note_id}")))
        ).await
    }

    pub async fn ai_revision(
        &self,
        note_id: i64,
    ) -> Result<AiRevisionResponse, ApiError> {
        self.execute(
            self.http.post(self.url(&format!("/notes/{note_id}/ai-revision")))
        ).await
    }

    pub async fn answer_revision_question(
        &self,
        note_id: i64,
        request: &AnswerRequest,
    ) -> Result<AnswerResponse, ApiError> {
        self.execute(
            self.http
                .post(self.url(&format!("/notes/{note_id}/answer-question")))
                .json(request)
        ).await
    }

    pub async fn complete_revision(
        &self,
        note_id: i64,
        request: &CompleteRevisionRequest,
    ) -> Result<CompleteRevisionResponse, ApiError> {
        self.execute(
            self.http
                .post(
                    self.url(&format!("/notes/{note_id}/complete-revision"))
                )
                .json(request)
        ).await
    }

    pub async fn revive_note(
        &self,
        note_id: i64,
        request: &AnswerRequest,
    ) -> Result<ReviveResponse, ApiError> {
        self.execute(
            self.http
                .post(self.url(&format!("/notes/{note_id}/revive")))
                .json(request)
        ).await
    }

    pub async fn stats(&self) -> Result<StatsResponse, ApiError> {
        self.execute(self.http.get(self.url("/notes/stats"))).await
    }
}
