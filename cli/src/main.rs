use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use library_cli::transport::DEFAULT_TIMEOUT_SECS;
use library_cli::{CliError, FileStorage, ReqwestTransport, commands};
use session::{Credentials, SessionClient, SignupForm, TokenStore};

#[derive(Parser, Debug)]
#[command(name = "library-cli", about = "Library session client: login, signup, token checks, user lookup")]
struct Cli {
    #[arg(long, env = "LIBRARY_BASE_URL", default_value = "http://127.0.0.1:4000")]
    base_url: String,

    /// Directory holding the persisted session (defaults to `$HOME/.library`).
    #[arg(long, env = "LIBRARY_STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[arg(long, env = "LIBRARY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Log request-level detail to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session token.
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "LIBRARY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account with an invite code.
    Signup {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        code: String,
        #[arg(short, long, env = "LIBRARY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Ask the server whether the stored token is still valid.
    Validate,
    /// Print the stored session record.
    Whoami,
    /// Print the `Authorization` header for the stored token.
    Header,
    /// Show a user's profile (requires a valid session).
    User { username: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN })
        .init();

    let state_dir = match cli.state_dir {
        Some(dir) => dir,
        None => default_state_dir().ok_or(CliError::MissingStateDir)?,
    };
    let transport = ReqwestTransport::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
    let client = SessionClient::new(transport, TokenStore::new(FileStorage::new(state_dir)));

    let output = match cli.command {
        Command::Login { username, password } => {
            commands::login(&client, &Credentials::new(username, password)).await?
        }
        Command::Signup {
            username,
            email,
            code,
            password,
        } => {
            let form = SignupForm {
                username,
                email,
                code,
                password,
            };
            commands::signup(&client, &form).await?
        }
        Command::Logout => commands::logout(&client),
        Command::Validate => commands::validate(&client).await?,
        Command::Whoami => commands::whoami(&client)?,
        Command::Header => commands::header(&client),
        Command::User { username } => commands::user(&client, &username).await?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn default_state_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".library"))
}
