use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use flagpacks::config::{Access, Config};
use flagpacks::geo;
use flagpacks::harvest::{harvest, Harvest};
use flagpacks::logging::init_tracing;
use flagpacks::packs::{self, timestamp, Outcome, Reconciler};
use flagpacks::xrpc::{CachedReader, GraphReader, PackPublisher, ThreadCache, XrpcClient};

/// Publish one starter pack per country from the flags people reply with.
#[derive(Parser)]
#[command(name = "flagpacks", version, about, long_about = None)]
struct Cli {
    /// Path to config.toml (default: the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug logging for this crate
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Serve thread fetches from the on-disk cache
    #[arg(long, global = true)]
    cache: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan replies to the configured posts and reconcile country packs
    Replies {
        /// Print per-country and per-continent counts
        #[arg(long)]
        stats: bool,
        /// Scan only; publish nothing
        #[arg(long)]
        dry_run: bool,
    },
    /// Show a starter pack and its members
    Starter { uri: String },
    /// List the starter packs an account has published
    StarterPacks {
        /// Account DID (default: the configured account)
        #[arg(long)]
        actor: Option<String>,
    },
    /// Refresh the state file from the published packs
    Pull,
    /// Add locally known members missing from the published lists
    Push,
    /// Print a post thread as JSON
    Post { uri: String },
    /// Create a starter pack from explicit members, outside the state file
    Create {
        #[arg(long)]
        name: String,
        #[arg(required = true, value_name = "DID")]
        members: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.cache {
        config.cache.enabled = true;
    }

    match cli.command {
        Command::Replies { stats, dry_run } => replies(&config, stats, dry_run).await,
        Command::Starter { uri } => starter(&config, &uri).await,
        Command::StarterPacks { actor } => starter_packs(&config, actor).await,
        Command::Pull => {
            let client = XrpcClient::connect(&config, Access::Read).await?;
            let reader = reader(&config, client);
            let refreshed = packs::pull(&*reader, Path::new(&config.packs.state_file)).await?;
            println!("Refreshed {} starter packs", refreshed);
            Ok(())
        }
        Command::Push => {
            config.require_did()?;
            let client = XrpcClient::connect(&config, Access::Write).await?;
            let added = packs::push(&client, &client, Path::new(&config.packs.state_file)).await?;
            println!("Added {} members", added);
            Ok(())
        }
        Command::Post { uri } => {
            let client = XrpcClient::connect(&config, Access::Read).await?;
            let thread = reader(&config, client).post_thread_raw(&uri).await?;
            println!("{}", serde_json::to_string_pretty(&thread)?);
            Ok(())
        }
        Command::Create { name, members } => create(&config, &name, members).await,
    }
}

fn reader(config: &Config, client: XrpcClient) -> Box<dyn GraphReader> {
    if config.cache.enabled {
        Box::new(CachedReader::new(client, ThreadCache::new(&config.cache.dir)))
    } else {
        Box::new(client)
    }
}

async fn replies(config: &Config, stats: bool, dry_run: bool) -> anyhow::Result<()> {
    if config.packs.posts.is_empty() {
        bail!("No posts configured: set [packs] posts in the config file");
    }

    let access = if dry_run { Access::Read } else { Access::Write };
    if !dry_run {
        config.require_did()?;
    }
    let client = XrpcClient::connect(config, access).await?;

    let result = harvest(&*reader(config, client.clone()), &config.packs.posts).await?;
    println!(
        "{} of {} replies attributed to {} countries",
        result.attributed(),
        result.replies_seen,
        result.by_country.len()
    );
    if stats {
        print_stats(&result);
    }

    let reconciler = Reconciler::new(&client, &config.packs.state_file, config.packs.name_prefix.as_str());
    for (country, members) in result.qualifying(config.packs.min_members) {
        if dry_run {
            println!("{} {}: {} members (dry run)", country, country.flag(), members.len());
            continue;
        }

        let outcome = reconciler
            .reconcile(country, members)
            .await
            .with_context(|| format!("Reconciling {}", country))?;
        match outcome {
            Outcome::Created { uri, members } => {
                println!("{} {}: created {} with {} members", country, country.flag(), uri, members)
            }
            Outcome::Updated { added } if added.is_empty() => {
                println!("{} {}: up to date", country, country.flag())
            }
            Outcome::Updated { added } => {
                println!("{} {}: added {} members", country, country.flag(), added.len())
            }
        }
    }

    Ok(())
}

fn print_stats(result: &Harvest) {
    println!();
    println!("Countries:");
    for (country, count) in result.countries.most_common() {
        let name = geo::country_name(country).unwrap_or("?");
        println!("  {} {} {:<32} {}", country, country.flag(), name, count);
    }

    println!("Continents:");
    for (continent, count) in result.continents.most_common() {
        println!("  {:<16} {}", continent, count);
    }
}

async fn starter(config: &Config, uri: &str) -> anyhow::Result<()> {
    let client = XrpcClient::connect(config, Access::Read).await?;
    let pack = client.starter_pack(uri).await?;
    let members = client.list_members(&pack.record.list).await?;

    println!("{}", pack.record.name);
    println!("  uri:     {}", pack.uri);
    println!("  list:    {}", pack.record.list);
    println!("  created: {}", pack.record.created_at);
    for member in members {
        println!("  {}", member);
    }
    Ok(())
}

async fn starter_packs(config: &Config, actor: Option<String>) -> anyhow::Result<()> {
    let actor = match actor {
        Some(actor) => actor,
        None => config.require_did()?.to_string(),
    };

    let client = XrpcClient::connect(config, Access::Read).await?;
    for pack in client.actor_starter_packs(&actor).await? {
        println!("{}  {}", pack.uri, pack.record.name);
    }
    Ok(())
}

async fn create(config: &Config, name: &str, mut members: Vec<String>) -> anyhow::Result<()> {
    config.require_did()?;
    if let Some(bad) = members.iter().find(|m| !m.starts_with("did:")) {
        bail!("'{}' is not a DID", bad);
    }
    members.sort();
    members.dedup();

    let client = XrpcClient::connect(config, Access::Write).await?;
    let created_at = timestamp();

    let list_uri = client.create_list(name, &created_at).await.context("Creating list")?;
    client
        .add_members(&list_uri, &members, &created_at)
        .await
        .context("Adding members")?;
    let uri = client
        .create_starter_pack(name, &list_uri, &created_at)
        .await
        .context("Creating starter pack")?;

    println!("{}", uri);
    Ok(())
}
