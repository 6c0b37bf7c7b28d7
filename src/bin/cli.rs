//! A2P Academy CLI
//!
//! Terminal client for the academy backend:
//! - Check backend status and the current session
//! - Submit registrations and contact inquiries
//! - List registrations and inquiries (admin)
//! - Generate a config file

use std::io::Write;
use std::path::PathBuf;

use a2p_academy::api::{ApiClient, ClientConfig, FormData, Inquiry, PageHost, Registration};
use a2p_academy::behavior::form::{
    contact_form, field_mut, registration_form, validate_form, FormField, REQUIRED_FIELDS_MESSAGE,
};
use a2p_academy::config::{generate_default_config, Config, LoggingConfig};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "a2p")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the A2P Academy backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config and A2P_API_BASE)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: searched in the usual locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for listings
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show backend health
    Status,

    /// Show the signed-in user
    Whoami,

    /// Print the Google sign-in URL
    Login,

    /// End the backend session
    Logout,

    /// Submit a student registration
    Register {
        /// Form fields in key=value format (full_name, email, phone, course, message)
        #[arg(short = 'F', long = "field")]
        fields: Vec<String>,
    },

    /// Submit a contact inquiry
    Contact {
        /// Form fields in key=value format (name, email, phone, subject, message)
        #[arg(short = 'F', long = "field")]
        fields: Vec<String>,
    },

    /// List all registrations
    Registrations,

    /// List all inquiries
    Inquiries,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Page host for a terminal: alerts are printed, navigation prints the URL
struct TerminalHost;

impl PageHost for TerminalHost {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }

    fn navigate(&self, url: &str) {
        println!("Open this URL in your browser to sign in:");
        println!("  {}", url);
    }

    fn reload(&self) {
        println!("Signed out.");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.backend.base_url = url.clone();
    }

    init_logging(&config.logging);

    let client_config = ClientConfig::parse(&config.backend.base_url)?;
    let client = ApiClient::new(client_config, TerminalHost);

    match cli.command {
        Commands::Status => match client.health().await {
            Ok(health) => {
                println!("A2P Academy client v{}", env!("CARGO_PKG_VERSION"));
                println!();
                println!("Backend:  {}", client.config().base_url);
                println!("Status:   {}", health.status.as_deref().unwrap_or("ok"));
                if let Some(database) = &health.database {
                    println!("Database: {}", database);
                }
                if let Some(version) = &health.version {
                    println!("Version:  {}", version);
                }
            }
            Err(e) => {
                eprintln!(
                    "Cannot reach the academy backend at {}",
                    client.config().base_url
                );
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Whoami => match client.session().await {
            Ok(Some(user)) => {
                println!("Signed in as {}", user.display_name());
                if let Some(email) = &user.email {
                    println!("  Email:   {}", email);
                }
                if let Some(picture) = &user.picture {
                    println!("  Picture: {}", picture);
                }
            }
            Ok(None) => println!("Not signed in."),
            Err(e) => {
                eprintln!("Could not check the session: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Login => client.login(),

        Commands::Logout => client.logout().await,

        Commands::Register { fields } => {
            let form = fill_form(registration_form(), &fields)?;
            if !client.submit_registration(&form).await.is_success() {
                std::process::exit(1);
            }
        }

        Commands::Contact { fields } => {
            let form = fill_form(contact_form(), &fields)?;
            if !client.submit_contact(&form).await.is_success() {
                std::process::exit(1);
            }
        }

        Commands::Registrations => match client.fetch_registrations().await {
            Ok(rows) => print_registrations(&rows, cli.format)?,
            Err(e) => {
                eprintln!("Failed to fetch registrations: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Inquiries => match client.fetch_inquiries().await {
            Ok(rows) => print_inquiries(&rows, cli.format)?,
            Err(e) => {
                eprintln!("Failed to fetch inquiries: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "a2p_academy={level},a2p={level}",
            level = logging.level
        ))
    });

    let (json, pretty) = if logging.is_json() {
        (
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
            None,
        )
    } else {
        (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();
}

/// Apply `key=value` arguments to a form layout and validate it.
///
/// Keys outside the layout are sent as extra fields.
fn fill_form(mut layout: Vec<FormField>, args: &[String]) -> anyhow::Result<FormData> {
    let mut extra = FormData::new();

    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Invalid field `{}`, expected key=value", arg))?;

        match field_mut(&mut layout, key.trim()) {
            Some(field) => field.value = value.to_string(),
            None => {
                extra.insert(key.trim().to_string(), value.to_string());
            }
        }
    }

    if !validate_form(&mut layout) {
        eprintln!("{}", REQUIRED_FIELDS_MESSAGE);
        for field in layout.iter().filter(|f| f.invalid) {
            eprintln!("  missing: {} (--field {}=...)", field.label, field.name);
        }
        std::process::exit(1);
    }

    let mut form = a2p_academy::behavior::form::collect(&layout);
    form.extend(extra);
    Ok(form)
}

fn submitted(created_at: &Option<String>, parsed: Option<chrono::DateTime<chrono::Utc>>) -> String {
    parsed
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .or_else(|| created_at.clone())
        .unwrap_or_else(|| "-".to_string())
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or("-")
}

fn print_registrations(rows: &[Registration], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record([
                "id", "full_name", "email", "phone", "course", "status", "created_at",
            ])?;
            for r in rows {
                writer.write_record([
                    r.id.to_string().as_str(),
                    cell(&r.full_name),
                    cell(&r.email),
                    cell(&r.phone),
                    cell(&r.course),
                    cell(&r.status),
                    submitted(&r.created_at, r.submitted_at()).as_str(),
                ])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No registrations yet.");
                return Ok(());
            }

            println!(
                "{:<5} {:<24} {:<30} {:<20} {:<10} {}",
                "ID", "Name", "Email", "Course", "Status", "Submitted"
            );
            println!("{}", "-".repeat(105));
            for r in rows {
                println!(
                    "{:<5} {:<24} {:<30} {:<20} {:<10} {}",
                    r.id,
                    cell(&r.full_name),
                    cell(&r.email),
                    cell(&r.course),
                    cell(&r.status),
                    submitted(&r.created_at, r.submitted_at())
                );
            }
            println!();
            println!("{} registration(s)", rows.len());
        }
    }

    std::io::stdout().flush()?;
    Ok(())
}

fn print_inquiries(rows: &[Inquiry], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record([
                "id", "name", "email", "phone", "subject", "message", "status", "created_at",
            ])?;
            for r in rows {
                writer.write_record([
                    r.id.to_string().as_str(),
                    cell(&r.name),
                    cell(&r.email),
                    cell(&r.phone),
                    cell(&r.subject),
                    cell(&r.message),
                    cell(&r.status),
                    submitted(&r.created_at, r.submitted_at()).as_str(),
                ])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No inquiries yet.");
                return Ok(());
            }

            println!(
                "{:<5} {:<24} {:<30} {:<24} {:<8} {}",
                "ID", "Name", "Email", "Subject", "Status", "Submitted"
            );
            println!("{}", "-".repeat(105));
            for r in rows {
                println!(
                    "{:<5} {:<24} {:<30} {:<24} {:<8} {}",
                    r.id,
                    cell(&r.name),
                    cell(&r.email),
                    cell(&r.subject),
                    cell(&r.status),
                    submitted(&r.created_at, r.submitted_at())
                );
            }
            println!();
            println!("{} inquiry(ies)", rows.len());
        }
    }

    std::io::stdout().flush()?;
    Ok(())
}
