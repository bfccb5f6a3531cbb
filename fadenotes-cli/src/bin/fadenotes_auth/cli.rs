use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fadenotes-auth", about = "memory decay notepad accounts")]
pub struct CliConfig {
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account
    Signup {
        username: String,
        email: String,
        first_name: String,
        last_name: String,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Sign in and store the session tokens
    Login {
        email: String,
    },

    /// Drop the stored session
    Logout,

    /// Trade the refresh token for a fresh access token
    Refresh,

    /// Show the signed-in profile
    Profile,

    /// Change profile fields
    UpdateProfile {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Request a password reset email
    ForgotPassword {
        email: String,
    },

    /// Set a new password using an emailed reset token
    ResetPassword {
        email: String,
        token: String,
    },

    /// Change the password of the signed-in account
    ChangePassword,

    /// Resend the verification email
    ResendVerification {
        email: String,
    },

    /// Report whether a session is held
    Status,
}
