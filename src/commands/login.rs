use crate::api::ApiClient;
use crate::config::{self, CookieJar};
use crate::login::{LoginFormController, Router, SubmitOutcome};
use crate::prompt;
use crate::toggle::PasswordVisibilityToggle;
use crate::view::{ErrorMessage, LoginForm};
use anyhow::{anyhow, Context, Result};
use colored::Colorize;

/// Navigation target for the terminal: the next page is only announced.
#[derive(Default)]
struct TerminalRouter {
    last_route: Option<String>,
}

impl Router for TerminalRouter {
    fn navigate(&mut self, route: &str) {
        o_detail!("  {} {}", "→".cyan(), route);
        self.last_route = Some(route.to_string());
    }
}

pub async fn handle_login(show_password: bool) -> Result<()> {
    let settings = config::load_settings()?;

    let mut toggle = PasswordVisibilityToggle::default();
    if show_password {
        toggle.click();
    }
    o_debug!("password field {:?} after {} click(s)", toggle.state(), toggle.clicks());
    if toggle.hide_icon().is_visible() {
        o_detail!("{}", "(password will be shown as you type)".dimmed());
    }

    let username = prompt::field("Username")?;
    let password = prompt::password("Password", toggle.input())?;

    let jar = CookieJar::open().context("Could not open cookie jar")?;
    let mut controller = LoginFormController::new(
        ApiClient::new(&settings.api_url),
        jar,
        TerminalRouter::default(),
        LoginForm::new(username, password),
        ErrorMessage::default(),
    )
    .with_landing_route(&settings.landing_route);

    o_step!("Logging in...");
    let outcome = controller.submit().await;
    match outcome {
        Ok(SubmitOutcome::LoggedIn { route }) => {
            o_debug!("navigated to {:?}", controller.router().last_route);
            let jar = controller.into_cookies();
            jar.save().context("Failed to save access token")?;
            o_success!("{}", "✔ Login successful! Token saved.".green());
            o_detail!("Continue at {}.", route.cyan());
            Ok(())
        }
        Ok(SubmitOutcome::Rejected) => Err(anyhow!(controller.error_message().text().to_string())),
        Err(e) => {
            o_warn!("{}", "Could not reach the login service.".yellow());
            Err(e).context("Login failed")
        }
    }
}
