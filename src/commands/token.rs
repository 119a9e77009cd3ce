use crate::config::CookieJar;
use anyhow::{Context, Result};

pub async fn handle_get_token() -> Result<()> {
    let jar = CookieJar::open().context("Could not open cookie jar. Are you logged in?")?;
    let token = jar
        .access_token()
        .context("You are not logged in. Please run `todo-login login` first.")?;
    // No trailing newline, so scripts can capture it as-is.
    o_result!("{}", token);
    Ok(())
}
