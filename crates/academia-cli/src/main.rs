use academia_auth::{Identity, TokenSigner};
use academia_cli::seeder::{self, SeedConfig};
use academia_config::{DatabaseConfig, TokenConfig};
use academia_db::{PgPool, init_db_pool};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use dotenvy::dotenv;
use validator::Validate;

#[derive(Parser)]
#[command(name = "academia-cli")]
#[command(about = "Academia CLI - Administrative tools for the Academia API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the database with fake faculties, programs, subjects and professors
    Seed {
        /// Number of faculties to create
        #[arg(short = 'f', long, default_value = "4")]
        faculties: usize,

        /// Number of programs per faculty
        #[arg(long, default_value = "3")]
        programs: usize,

        /// Number of subjects per program
        #[arg(long, default_value = "6")]
        subjects: usize,

        /// Number of professors per subject
        #[arg(long, default_value = "2")]
        professors: usize,
    },
    /// Delete every faculty, program, subject and professor
    SeedClear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Issue a bearer token signed with TOKEN_SIGNING_SECRET
    IssueToken {
        /// Display name embedded in the token
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email embedded in the token
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed {
            faculties,
            programs,
            subjects,
            professors,
        } => {
            let config = SeedConfig::new(faculties)
                .with_programs(programs)
                .with_subjects(subjects)
                .with_professors(professors);
            handle_seed(&config).await
        }
        Commands::SeedClear { yes } => handle_seed_clear(yes).await,
        Commands::IssueToken { name, email } => handle_issue_token(name, email),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn connect() -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::from_env()?;
    Ok(init_db_pool(&config).await?)
}

async fn handle_seed(config: &SeedConfig) -> anyhow::Result<()> {
    let pool = connect().await?;
    seeder::seed_all(&pool, config).await?;
    Ok(())
}

async fn handle_seed_clear(yes: bool) -> anyhow::Result<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt("Delete all faculties, programs, subjects and professors?")
            .default(false)
            .interact()?;

    if !confirmed {
        println!("Aborted.");
        return Ok(());
    }

    let pool = connect().await?;
    seeder::clear_all(&pool).await?;
    Ok(())
}

fn handle_issue_token(name: Option<String>, email: Option<String>) -> anyhow::Result<()> {
    let signer = TokenSigner::new(&TokenConfig::from_env()?)?;

    let name = match name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Name (leave blank to omit)")
            .allow_empty(true)
            .interact_text()?,
    };
    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email (leave blank to omit)")
            .allow_empty(true)
            .interact_text()?,
    };

    let identity = Identity {
        name: Some(name).filter(|n| !n.trim().is_empty()),
        email: Some(email).filter(|e| !e.trim().is_empty()),
    };

    identity.validate()?;

    let token = signer.issue(identity)?;
    println!("{}", token);
    eprintln!("(expires in {} seconds)", signer.ttl_seconds());
    Ok(())
}
