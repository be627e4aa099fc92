// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, create an API client and hand it
//   to the menu loop.
// - Errors the menu does not handle itself end the process through
//   `anyhow::Result`.

use postboard_cli::{api::ApiClient, ui::main_menu};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with menu output on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_writer(std::io::stderr)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                ),
        )
        .init();

    // Base URL comes from `POSTS_API_URL` or defaults to JSONPlaceholder.
    // See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    // Blocks until the user picks "Exit".
    main_menu(&api)?;
    Ok(())
}
