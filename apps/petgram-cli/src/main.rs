//! # Petgram CLI
//!
//! Interactive terminal client driving the auth session and the feed store.
//! Acts as the presentation layer: it sends intents into the state holders,
//! reads back snapshots, and acknowledges the one-shot success flags.

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use petgram_core::domain::{AuthState, Media};
use petgram_core::{AuthSession, FeedStore};
use petgram_infra::{HttpPostsGateway, InMemoryCredentialStore};

mod config;

use config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::from_env();
    tracing::info!(api = %config.api_base_url, "starting petgram");

    let store = Arc::new(InMemoryCredentialStore::with_demo_user());
    let gateway = Arc::new(HttpPostsGateway::new(config.api_base_url.clone()));
    let session = AuthSession::new(store, config.auth());
    let feed = FeedStore::new(gateway, config.feed());

    println!("petgram - type `help` for commands");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["help"] => print_help(),
            ["login", email, password] => {
                session.set_email(*email);
                session.set_password(*password);
                session.submit_login().await;

                let state = session.snapshot();
                if state.login_succeeded {
                    session.acknowledge_login();
                    println!("logged in as {email}");
                } else {
                    report_auth_errors(&state);
                }
            }
            ["signup", email, password, confirm] => {
                session.set_email(*email);
                session.set_password(*password);
                session.set_confirm_password(*confirm);
                session.submit_signup().await;

                let state = session.snapshot();
                if state.signup_succeeded {
                    session.acknowledge_signup();
                    println!("account created - log in to continue");
                } else {
                    report_auth_errors(&state);
                }
            }
            ["logout"] => {
                session.logout();
                println!("logged out");
            }
            ["feed"] => {
                feed.load().await;
                for post in &feed.snapshot().posts {
                    let media = match &post.media {
                        Media::Remote(url) => url.clone(),
                        Media::Local(bytes) => format!("<local image, {} bytes>", bytes.len()),
                    };
                    println!("#{} @{}: {} [{}]", post.id, post.author, post.caption, media);
                }
            }
            ["post", path, caption @ ..] => {
                if !session.snapshot().is_session_active {
                    println!("log in first");
                } else {
                    match tokio::fs::read(path).await {
                        Ok(bytes) => {
                            let id = feed.add_local_post(bytes, caption.join(" "));
                            println!("posted #{id}");
                        }
                        Err(e) => println!("cannot read {path}: {e}"),
                    }
                }
            }
            ["state"] => println!("{}", serde_json::to_string_pretty(&session.snapshot())?),
            ["quit"] | ["exit"] => break,
            _ => println!("unknown command - type `help`"),
        }
        prompt();
    }

    Ok(())
}

fn report_auth_errors(state: &AuthState) {
    if let Some(e) = &state.email_error {
        println!("email: {e}");
    }
    if let Some(e) = &state.password_error {
        println!("password: {e}");
    }
    if let Some(e) = &state.confirm_password_error {
        println!("confirm password: {e}");
    }
    if let Some(e) = &state.general_error {
        println!("{e}");
    }
}

fn print_help() {
    println!("commands:");
    println!("  login <email> <password>");
    println!("  signup <email> <password> <confirm>");
    println!("  logout");
    println!("  feed                       reload and print the feed");
    println!("  post <path> <caption...>   share a local image");
    println!("  state                      dump the auth state as JSON");
    println!("  quit");
}

fn prompt() {
    use std::io::Write;

    print!("> ");
    let _ = std::io::stdout().flush();
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,petgram_cli=info,petgram_core=info,petgram_infra=info")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
