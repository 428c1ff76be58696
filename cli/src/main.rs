use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use client::{ClientConfig, ConfigError, FetchError, History, NavigationError, SessionContext, TokenCookie};
use dto::ValidationErrors;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid query parameter `{0}`; expected key=value")]
    InvalidQuery(String),
    #[error("login rejected: invalid credentials")]
    LoginRejected,
    #[error("no profile available; token missing, expired, or account inactive")]
    NoProfile,
}

#[derive(Parser, Debug)]
#[command(name = "usergate", about = "User API client and payload validator")]
struct Cli {
    #[arg(long, env = "API_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "AUTH_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a user creation payload locally and list every violation.
    ValidateUser(UserPayloadArgs),
    /// Exchange credentials for a session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Fetch the profile of the current token's user.
    Profile,
    /// Run the route guard for a path and print where it lands.
    Navigate { path: String },
    /// Send a raw request through the session-aware client.
    Request(RequestArgs),
}

#[derive(Args, Debug)]
struct UserPayloadArgs {
    /// Full payload as JSON; overrides the field flags.
    #[arg(long, conflicts_with_all = ["email", "password", "name", "is_active"])]
    data: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    password: Option<String>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    is_active: Option<bool>,
}

#[derive(Args, Debug)]
struct RequestArgs {
    #[arg(value_enum)]
    method: Method,
    path: String,
    /// JSON body for post/put/delete.
    #[arg(long)]
    data: Option<String>,
    /// Query parameter for get, repeatable: `--query tag=a --query tag=b`.
    #[arg(long = "query")]
    query: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::ValidateUser(args) => run_validate_user(&args),
        Command::Login { email, password } => {
            let (session, _) = connect(&cli.base_url, cli.token)?;
            run_login(&session, &email, &password).await
        }
        Command::Profile => {
            let (session, _) = connect(&cli.base_url, cli.token)?;
            run_profile(&session).await
        }
        Command::Navigate { path } => {
            let (session, history) = connect(&cli.base_url, cli.token)?;
            run_navigate(&session, &history, &path).await
        }
        Command::Request(args) => {
            let (session, _) = connect(&cli.base_url, cli.token)?;
            run_request(&session, args).await
        }
    }
}

fn connect(base_url: &str, token: Option<String>) -> Result<(SessionContext, Arc<History>), CliError> {
    let config = ClientConfig::new(base_url)?;
    let cookie = token.map_or_else(TokenCookie::new, |t| TokenCookie::with_token(t));
    let history = Arc::new(History::new());
    let session = SessionContext::new(&config, cookie, history.clone())?;
    Ok((session, history))
}

fn run_validate_user(args: &UserPayloadArgs) -> Result<(), CliError> {
    let payload = user_payload(args)?;
    let violations = dto::validate_create_user(&payload);
    if violations.is_empty() {
        println!("valid");
        return Ok(());
    }
    print_json(&serde_json::to_value(&violations)?)?;
    Err(ValidationErrors { violations }.into())
}

async fn run_login(session: &SessionContext, email: &str, password: &str) -> Result<(), CliError> {
    if !session.login(email, password).await? {
        return Err(CliError::LoginRejected);
    }
    let token = session.cookie().get().ok_or(CliError::LoginRejected)?;
    println!("{token}");
    Ok(())
}

async fn run_profile(session: &SessionContext) -> Result<(), CliError> {
    session.store().get_profile().await;
    let user = session.store().user().ok_or(CliError::NoProfile)?;
    print_json(&user)
}

async fn run_navigate(session: &SessionContext, history: &History, path: &str) -> Result<(), CliError> {
    let landed = session.navigate(path).await?;
    println!("{landed}");
    tracing::debug!(entries = history.len(), "navigation recorded");
    Ok(())
}

async fn run_request(session: &SessionContext, args: RequestArgs) -> Result<(), CliError> {
    let body = args.data.as_deref().map(serde_json::from_str::<Value>).transpose()?;
    let client = session.client();
    let response = match args.method {
        Method::Get => {
            let params = query_params(&args.query)?;
            let params = (!params.is_empty()).then_some(&params);
            client.get(&args.path, params).await?
        }
        Method::Post => client.post(&args.path, body.as_ref()).await?,
        Method::Put => client.put(&args.path, body.as_ref()).await?,
        Method::Delete => client.delete(&args.path, body.as_ref()).await?,
    };

    match response {
        Some(value) => print_json(&value),
        None => {
            println!("(no content)");
            Ok(())
        }
    }
}

/// Build the creation payload from either `--data` or the individual flags.
fn user_payload(args: &UserPayloadArgs) -> Result<Value, CliError> {
    if let Some(data) = &args.data {
        return Ok(serde_json::from_str(data)?);
    }

    let mut map = Map::new();
    if let Some(email) = &args.email {
        map.insert("email".to_owned(), Value::String(email.clone()));
    }
    if let Some(password) = &args.password {
        map.insert("password".to_owned(), Value::String(password.clone()));
    }
    if let Some(name) = &args.name {
        map.insert("name".to_owned(), Value::String(name.clone()));
    }
    if let Some(is_active) = args.is_active {
        map.insert("isActive".to_owned(), Value::Bool(is_active));
    }
    Ok(Value::Object(map))
}

/// Fold `key=value` pairs into a query map. Repeated keys become arrays.
fn query_params(pairs: &[String]) -> Result<Map<String, Value>, CliError> {
    let mut map = Map::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(CliError::InvalidQuery(pair.clone()));
        };
        if key.is_empty() {
            return Err(CliError::InvalidQuery(pair.clone()));
        }
        let value = Value::String(value.to_owned());
        match map.get_mut(key) {
            None => {
                map.insert(key.to_owned(), value);
            }
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }
    Ok(map)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
