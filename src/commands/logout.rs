use crate::config::CookieJar;
use crate::login::TOKEN_COOKIE;
use anyhow::{Context, Result};
use colored::Colorize;

pub async fn handle_logout() -> Result<()> {
    let mut jar = CookieJar::open().context("Could not open cookie jar.")?;

    if jar.remove(TOKEN_COOKIE).is_none() {
        o_warn!("{}", "You are not logged in.".yellow());
        return Ok(());
    }

    jar.save().context("Failed to clear access token.")?;

    o_success!("{}", "✔ You have been logged out.".green());
    Ok(())
}
