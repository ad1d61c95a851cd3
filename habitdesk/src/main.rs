//! Console front-end for the habit tracker auth client.
//!
//! This is the input layer: it owns presence checks (the web form's
//! `required` attributes) and rendering; all submission logic lives in
//! [`habitdesk::AuthForm`].

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use habitdesk::app::{AuthForm, FormMode};
use habitdesk::core::service::Notifier;
use habitdesk::i18n::Lang;
use habitdesk::services::api::ApiClient;

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("[ok] {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("[error] {message}");
    }
}

/// Read one trimmed line. `None` means end of input (zero-byte read or a
/// read error), which callers treat as quitting.
fn prompt(input: &mut impl BufRead, label: &str, mark: &str) -> Option<String> {
    print!("{mark}{label}: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Re-prompt until the field is non-empty (presence check); `None` at end
/// of input.
fn prompt_required(input: &mut impl BufRead, label: &str, mark: &str) -> Option<String> {
    loop {
        let value = prompt(input, label, mark)?;
        if !value.is_empty() {
            return Some(value);
        }
    }
}

/// Drain results until the outstanding request settles.
async fn wait_for_settle(form: &AuthForm) {
    while form.state.read().pending {
        form.on_tick();
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    form.on_tick();
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let lang = Lang::from_tag(&std::env::var("HABITDESK_LANG").unwrap_or_default());
    let t = lang.translations();
    // Directional mark so bidi-aware terminals lay Arabic lines out
    // right-to-left; empty for left-to-right languages.
    let mark = lang.dir().mark();

    let api = Arc::new(ApiClient::new());
    tracing::info!(base_url = api.base_url(), lang = lang.tag(), "Starting habitdesk");

    let form = AuthForm::new(
        api,
        Arc::new(ConsoleNotifier),
        lang,
        Box::new(|token, _user| {
            println!("authenticated (token: {token})");
        }),
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let (title, desc, toggle_hint) = match form.state.read().mode {
            FormMode::Login => (t.login_title, t.login_desc, t.no_account),
            FormMode::Signup => (t.signup_title, t.signup_desc, t.has_account),
        };
        println!();
        println!("{mark}== {title} ==");
        println!("{mark}{desc}");
        println!("{mark}(enter 'switch' to toggle - {toggle_hint} - or 'quit')");

        let Some(email) = prompt(&mut input, t.email, mark) else {
            break;
        };
        match email.as_str() {
            "quit" => break,
            "switch" => {
                form.toggle_mode();
                continue;
            }
            "" => continue,
            _ => {}
        }
        form.set_email(email);

        let Some(password) = prompt_required(&mut input, t.password, mark) else {
            break;
        };
        form.set_password(password);

        if form.state.read().mode == FormMode::Signup {
            let Some(full_name) = prompt_required(&mut input, t.full_name, mark) else {
                break;
            };
            form.set_full_name(full_name);
        }

        form.submit();
        println!("{mark}{}", t.loading);
        wait_for_settle(&form).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_returns_none_at_end_of_input() {
        let mut input = io::Cursor::new("");
        assert_eq!(prompt(&mut input, "Email", ""), None);
    }

    #[test]
    fn prompt_trims_the_entered_line() {
        let mut input = io::Cursor::new("  a@b.c \n");
        assert_eq!(prompt(&mut input, "Email", ""), Some("a@b.c".to_string()));
    }

    #[test]
    fn prompt_required_skips_blank_lines() {
        let mut input = io::Cursor::new("\n\nAda Lovelace\n");
        assert_eq!(
            prompt_required(&mut input, "Full Name", ""),
            Some("Ada Lovelace".to_string())
        );
    }

    #[test]
    fn prompt_required_stops_at_end_of_input() {
        // Blank lines followed by EOF must not loop forever.
        let mut input = io::Cursor::new("\n\n");
        assert_eq!(prompt_required(&mut input, "Full Name", ""), None);
    }
}
