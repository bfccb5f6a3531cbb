use api_data::model::{
    ChangePasswordRequest,
    ForgotPasswordRequest,
    LoginRequest,
    ResendVerificationRequest,
    ResetPasswordRequest,
    SignupRequest,
    UpdateProfileRequest,
    UserResponse,
};
use clap::Parser;
use fadenotes::error_exit;
use fadenotes::logging::init_logging;
use fadenotes::token_store::TokenStore;
use fadenotes_cli::app::App;
use log::warn;
use rpassword::prompt_password;

use crate::cli::{CliConfig, Command};

mod cli;

#[tokio::main]
async fn main() {
    init_logging("fadenotes-auth");

    let cli_config = CliConfig::parse();
    let app = App::init(cli_config.config_file).await;

    match cli_config.command {
        Command::Signup { username, email, first_name, last_name, phone } => {
            signup(&app, username, email, first_name, last_name, phone).await
        },
        Command::Login { email } => login(&app, email).await,
        Command::Logout => logout(&app).await,
        Command::Refresh => refresh(&app).await,
        Command::Profile => profile(&app).await,
        Command::UpdateProfile { first_name, last_name, phone } => {
            update_profile(&app, first_name, last_name, phone).await
        },
        Command::ForgotPassword { email } => forgot_password(&app, email).await,
        Command::ResetPassword { email, token } => {
            reset_password(&app, email, token).await
        },
        Command::ChangePassword => change_password(&app).await,
        Command::ResendVerification { email } => {
            resend_verification(&app, email).await
        },
        Command::Status => status(&app).await,
    }
}

async fn signup(
    app: &App,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    phone: Option<String>,
) {
    let password = read_new_password();
    let response = app.api_client()
        .signup(
            &SignupRequest {
                username,
                email,
                password,
                first_name,
                last_name,
                phone,
            }
        )
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("{}", response.message);
}

async fn login(app: &App, email: String) {
    let password = prompt_password("Enter the password: ")
        .unwrap_or_else(|e| error_exit!("could not read password: {e}"));
    let response = app.api_client()
        .login(
            &LoginRequest {
                email,
                password,
            }
        )
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    app.tokens
        .set_tokens(&response.access_token, &response.refresh_token)
        .await
        .unwrap_or_else(|e| error_exit!("could not store the session: {e}"));
    println!("{}", response.message);
}

async fn logout(app: &App) {
    // the local session goes away even when the service call fails
    if let Err(e) = app.api_client().logout().await {
        warn!("logout request failed: {e}");
    }
    app.tokens.clear_tokens()
        .await
        .unwrap_or_else(|e| error_exit!("could not drop the session: {e}"));
    println!("logged out");
}

async fn refresh(app: &App) {
    let response = app.api_client()
        .refresh_token()
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    match &response.refresh_token {
        Some(refresh_token) => {
            app.tokens
                .set_tokens(&response.access_token, refresh_token)
                .await
        },
        None => {
            app.tokens.set_access_token(&response.access_token).await
        },
    }
        .unwrap_or_else(|e| error_exit!("could not store the session: {e}"));
    println!("session refreshed");
}

async fn profile(app: &App) {
    let response = app.api_client()
        .get_profile()
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    print_user(&response.user);
}

async fn update_profile(
    app: &App,
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
) {
    if first_name.is_none() && last_name.is_none() && phone.is_none() {
        error_exit!("nothing to change");
    }
    let response = app.api_client()
        .update_profile(
            &UpdateProfileRequest {
                first_name,
                last_name,
                phone,
            }
        )
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    print_user(&response.user);
}

async fn forgot_password(app: &App, email: String) {
    let response = app.api_client()
        .forgot_password(&ForgotPasswordRequest { email })
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("{}", response.message);
}

async fn reset_password(app: &App, email: String, token: String) {
    let new_password = read_new_password();
    let response = app.api_client()
        .reset_password(
            &ResetPasswordRequest {
                email,
                token,
                new_password,
            }
        )
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("{}", response.message);
}

async fn change_password(app: &App) {
    let current_password = prompt_password("Enter the current password: ")
        .unwrap_or_else(|e| error_exit!("could not read password: {e}"));
    let new_password = read_new_password();
    let response = app.api_client()
        .change_password(
            &ChangePasswordRequest {
                current_password,
                new_password,
            }
        )
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("{}", response.message);
}

async fn resend_verification(app: &App, email: String) {
    let response = app.api_client()
        .resend_verification(&ResendVerificationRequest { email })
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("{}", response.message);
}

async fn status(app: &App) {
    if app.tokens.is_authenticated().await {
        println!("signed in");
    } else {
        println!("signed out");
    }
}

fn read_new_password() -> String {
    let password = prompt_password("Enter the new password: ")
        .unwrap_or_else(|e| error_exit!("could not read password: {e}"));
    if password.is_empty() {
        error_exit!("entered password is empty");
    }
    let confirmation = prompt_password("Repeat the password: ")
        .unwrap_or_else(|e| error_exit!("could not read password: {e}"));
    if confirmation != password {
        error_exit!("the passwords do not match");
    }
    password
}

fn print_user(user: &UserResponse) {
    println!("username: {}", user.username);
    println!("email: {}", user.email);
    if let Some(first_name) = &user.first_name {
        println!("first name: {first_name}");
    }
    if let Some(last_name) = &user.last_name {
        println!("last name: {last_name}");
    }
    if let Some(phone) = &user.phone {
        println!("phone: {phone}");
    }
    if let Some(is_verified) = user.is_verified {
        println!("verified: {is_verified}");
    }
}
