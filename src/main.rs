use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hubtrack::{Config, GitHubClient};

#[derive(Parser, Debug)]
#[command(name = "hubtrack")]
#[command(version = "0.1.0")]
#[command(about = "Query GitHub issues, repositories and organizations")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print the rate-limit counters reported by the last response
    #[arg(long)]
    rate_limit: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the profile of the authenticated user
    User,
    /// List organizations for the authenticated user
    Orgs,
    /// List repositories of an organization, split by visibility
    Repos {
        organization: String,
        /// Repository type filter passed to the API (all, public, private, ...)
        #[arg(long, default_value = "all")]
        kind: String,
    },
    /// List repositories of the authenticated user, split by visibility
    UserRepos,
    /// List issues of a repository
    Issues {
        owner: String,
        repository: String,
        #[arg(long, default_value = "open")]
        state: String,
        #[arg(long)]
        milestone: Option<u64>,
    },
    /// List milestones of a repository
    Milestones { owner: String, repository: String },
    /// Assign an issue to a user
    Assign {
        owner: String,
        repository: String,
        number: u64,
        user: String,
    },
    /// Clear the assignee of an issue
    Drop {
        owner: String,
        repository: String,
        number: u64,
    },
    /// Exchange an OAuth authorization code for an access token
    Token { code: String, state: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("hubtrack=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;
    let client = GitHubClient::new(config.credentials)?;

    match args.command {
        Command::Token { code, state } => {
            let token = client.get_access_token(&code, &state).await?;
            println!("{}", token);
        }
        command => {
            let token = config
                .token
                .ok_or_else(|| anyhow::anyhow!("GITHUB_TOKEN environment variable not set"))?;
            run(&client, command, &token).await?;
        }
    }

    if args.rate_limit {
        match client.rate_limit() {
            Some(reading) => eprintln!(
                "rate limit: {:?} remaining of {:?}",
                reading.remaining, reading.limit
            ),
            None => eprintln!("rate limit: no response observed"),
        }
    }

    Ok(())
}

async fn run(client: &GitHubClient, command: Command, token: &str) -> anyhow::Result<()> {
    match command {
        Command::User => {
            let user = client.get_user(token).await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        Command::Orgs => {
            let organizations = client.get_organizations(token).await?;
            println!("{}", serde_json::to_string_pretty(&organizations)?);
        }
        Command::Repos { organization, kind } => {
            let buckets = client.get_repositories(&organization, token, &kind).await?;
            println!("{}", serde_json::to_string_pretty(&buckets)?);
        }
        Command::UserRepos => {
            let buckets = client.get_user_repositories(token).await?;
            println!("{}", serde_json::to_string_pretty(&buckets)?);
        }
        Command::Issues {
            owner,
            repository,
            state,
            milestone,
        } => {
            let issues = client
                .get_issues(&owner, &repository, token, &state, milestone)
                .await?;
            println!("{}", serde_json::to_string_pretty(&issues)?);
        }
        Command::Milestones { owner, repository } => {
            let milestones = client.get_milestones(&owner, &repository, token).await?;
            println!("{}", serde_json::to_string_pretty(&milestones)?);
        }
        Command::Assign {
            owner,
            repository,
            number,
            user,
        } => {
            let issue = client
                .assign_issue(number, &user, &owner, &repository, token)
                .await?;
            tracing::info!("issue #{} assigned to {}", issue.number, user);
        }
        Command::Drop {
            owner,
            repository,
            number,
        } => {
            let issue = client.drop_issue(number, &owner, &repository, token).await?;
            tracing::info!("issue #{} dropped back to the backlog", issue.number);
        }
        Command::Token { .. } => unreachable!("handled in main"),
    }

    Ok(())
}
