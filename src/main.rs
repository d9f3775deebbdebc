use anyhow::Result;
use clap::{Parser, Subcommand};
use mood_proxy::authorize;
use mood_proxy::config::credentials::Credentials;
use mood_proxy::config::settings::{MetricsConfig, ServerConfig, SpotifyConfig};
use mood_proxy::server;
use mood_proxy::utils::logging;
use mood_proxy::utils::logging::LogLevel;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,

    #[command(flatten)]
    server: ServerConfig,

    #[command(flatten)]
    spotify: SpotifyConfig,

    #[command(flatten)]
    metrics: MetricsConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the mood search proxy
    Serve {
        #[command(flatten)]
        credentials: Credentials,

        /// Long-lived refresh token obtained with `authorize`
        #[arg(long, env = "SPOTIFY_REFRESH_TOKEN", hide_env_values = true)]
        refresh_token: String,
    },
    /// One-time interactive flow to obtain a refresh token
    Authorize {
        #[command(flatten)]
        credentials: Credentials,

        /// Redirect URI registered for the application; must point at
        /// this listener's /callback
        #[arg(long, env = "REDIRECT_URI")]
        redirect_uri: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read CLI arguments and environment
    //
    // clap fails fast when required credentials are absent
    // -------------------------------

    let args = Args::parse();

    // -------------------------------
    // 2. Initialize logging
    // -------------------------------

    logging::run(args.log_level);

    // -------------------------------
    // 3. Run the selected command
    // -------------------------------

    match args.command {
        Command::Serve {
            credentials,
            refresh_token,
        } => {
            server::server::start(
                &args.server,
                &args.metrics,
                &args.spotify,
                &credentials,
                refresh_token,
            )
            .await?;
        }
        Command::Authorize {
            credentials,
            redirect_uri,
        } => {
            authorize::run(&args.server, &args.spotify, credentials, redirect_uri).await?;
        }
    }

    Ok(())
}
