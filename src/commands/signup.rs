use crate::api::ApiClient;
use crate::config;
use crate::prompt;
use crate::types::SignupRequest;
use crate::view::PasswordInput;
use anyhow::{anyhow, Result};
use colored::Colorize;

pub async fn handle_signup() -> Result<()> {
    let settings = config::load_settings()?;

    let email = prompt::input_required("Email")?;
    let first_name = prompt::input("First name")?;
    let last_name = prompt::input("Last name")?;

    let field = PasswordInput::default();
    let password = prompt::password("Password", &field)?;
    let password_confirm = prompt::password("Confirm password", &field)?;

    if password != password_confirm {
        return Err(anyhow!("Passwords do not match."));
    }

    o_step!("Creating account...");
    let req = SignupRequest {
        email,
        first_name,
        last_name,
        password,
    };
    let user = ApiClient::new(&settings.api_url).signup(&req).await?;

    o_success!("{}", format!("✔ Account created for {}", user.email).green());
    o_detail!("You can now log in with `todo-login login`.");
    Ok(())
}
