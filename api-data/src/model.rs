use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub refresh_token: String,
    pub user: Option<UserResponse>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub is_verified: Option<bool>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub token: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    Active,
    Archived,
    Revived,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NoteResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub status: NoteStatus,
    pub created_at: Option<String>,
    pub last_revised: Option<String>,
    pub archived_at: Option<String>,
    pub expires_at: Option<String>,
    pub decay_minutes: i64,
    pub original_decay_minutes: Option<i64>,
    pub wrong_answers_count: Option<u32>,
    pub penalty_applied: Option<bool>,
    pub ai_summary: Option<String>,
    pub ai_questions: Option<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NoteListResponse {
    pub notes: Vec<NoteResponse>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ArchivedNoteListResponse {
    pub archived_notes: Vec<NoteResponse>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    pub decay_minutes: i64,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateNoteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay_minutes: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NoteEnvelopeResponse {
    pub message: Option<String>,
    pub note: NoteResponse,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AiRevisionResponse {
    pub summary: String,
    pub questions: Vec<String>,
    pub note: Option<NoteResponse>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AnswerRequest {
    pub question_index: usize,
    pub answer: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PenaltyInfo {
    pub new_decay_minutes: i64,
    pub wrong_answers_count: Option<u32>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub message: String,
    pub feedback: Option<String>,
    pub penalty_info: Option<PenaltyInfo>,
    pub note: Option<NoteResponse>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReviveResponse {
    pub message: String,
    pub note: NoteResponse,
    pub correct_answer: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct CompleteRevisionRequest {
    pub correct_answers: u32,
    pub total_questions: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RevisionScore {
    pub correct: u32,
    pub total: u32,
    pub percentage: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CompleteRevisionResponse {
    pub session_complete: bool,
    pub score: RevisionScore,
    pub message: String,
    pub bonus_applied: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NoteStats {
    pub active_notes: u64,
    pub archived_notes: u64,
    pub revived_notes: u64,
    pub total_notes: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatsResponse {
    pub stats: NoteStats,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
