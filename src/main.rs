use std::io::{BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acme_blogs::api_client::ApiClient;
use acme_blogs::app::App;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acme_blogs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Acme Blogs");

    let app = App::init(ApiClient::from_env()).await;

    println!("Employees:");
    for option in app.select_menu().children() {
        let id = option.attr("value").unwrap_or_default();
        println!("  {id}: {}", option.text());
    }
    println!();
    println!("Commands:");
    println!("  <user-id>         select an employee and show their posts");
    println!("  toggle <post-id>  show/hide a post's comments");
    println!("  show              print the current content");
    println!("  quit");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();

        match line.split_once(' ') {
            Some(("toggle", id)) => match id.trim().parse() {
                Ok(post_id) => match app.click(post_id) {
                    Some(outcome) => {
                        println!("{}", outcome.button_label);
                        println!("{}", app.content().render_text());
                    }
                    None => println!("no such post: {post_id}"),
                },
                Err(_) => println!("usage: toggle <post-id>"),
            },
            None if line == "quit" => break,
            None if line == "show" => println!("{}", app.content().render_text()),
            None if line.is_empty() => {
                // Empty selection falls back to the default employee.
                let outcome = app.select_user(None).await;
                tracing::debug!(?outcome, "selection handled");
                println!("{}", app.content().render_text());
            }
            None => match line.parse() {
                Ok(user_id) => {
                    let outcome = app.select_user(Some(user_id)).await;
                    tracing::debug!(?outcome, "selection handled");
                    println!("{}", app.content().render_text());
                }
                Err(_) => println!("unknown command: {line}"),
            },
            Some(_) => println!("unknown command: {line}"),
        }
    }
}
