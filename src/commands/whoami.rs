use crate::api::ApiClient;
use crate::config::{self, CookieJar};
use anyhow::{Context, Result};
use colored::Colorize;

pub async fn handle_whoami() -> Result<()> {
    let settings = config::load_settings()?;
    let jar = CookieJar::open().context("Could not open cookie jar. Are you logged in?")?;
    let token = jar
        .access_token()
        .context("You are not logged in. Please run `todo-login login` first.")?;

    let user = ApiClient::new(&settings.api_url).me(token).await?;

    o_result!("You are logged in as:\n");
    o_result!("  {}      {}\n", "Email:".bold(), user.email.cyan());
    o_result!("  {} {}\n", "First name:".bold(), user.first_name.unwrap_or_default());
    o_result!("  {}  {}\n", "Last name:".bold(), user.last_name.unwrap_or_default());

    Ok(())
}
