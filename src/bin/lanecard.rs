use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lanecard::assets::loader::HttpLoader;
use lanecard::{
    AssetCatalog, BannerAssets, BannerConfig, Enricher, HttpTransport, LinearBackoff, MatchRecord,
    PlayerIdentity, Region, RiotApi, Settings,
};

#[derive(Parser, Debug)]
#[command(name = "lanecard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enrich a player's recent matches and print them as JSON.
    Matches(MatchesArgs),
    /// Render a lane banner PNG.
    Banner(BannerArgs),
}

#[derive(Args, Debug)]
struct PlayerArgs {
    /// Riot ID game name.
    #[arg(long)]
    name: String,

    /// Riot ID tag line (with or without '#').
    #[arg(long)]
    tag: String,

    /// Platform region code (EUW, NA, KR, ...).
    #[arg(long, value_enum, ignore_case = true)]
    region: Region,
}

#[derive(Parser, Debug)]
struct MatchesArgs {
    #[command(flatten)]
    player: PlayerArgs,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BannerArgs {
    /// Hand-edited banner config JSON.
    #[arg(long, conflicts_with_all = ["name", "tag", "region", "index"])]
    config: Option<PathBuf>,

    /// Riot ID game name.
    #[arg(long, requires_all = ["tag", "region"])]
    name: Option<String>,

    /// Riot ID tag line.
    #[arg(long)]
    tag: Option<String>,

    /// Platform region code.
    #[arg(long, value_enum, ignore_case = true)]
    region: Option<Region>,

    /// Which enriched match to render (0 = most recent).
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lanecard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env()?;
    match cli.cmd {
        Command::Matches(args) => cmd_matches(&settings, args).await,
        Command::Banner(args) => cmd_banner(&settings, args).await,
    }
}

async fn enrich(settings: &Settings, identity: &PlayerIdentity) -> anyhow::Result<Vec<MatchRecord>> {
    let transport = HttpTransport::new(settings.require_api_key()?, settings.request_timeout())?;
    let enricher = Enricher::new(
        RiotApi::new(transport),
        LinearBackoff::new(settings.rank_spacing()),
    );
    let records = enricher
        .enrich_matches(identity)
        .await
        .with_context(|| format!("enrich matches for {}#{}", identity.game_name, identity.tag_line))?;
    Ok(records)
}

async fn cmd_matches(settings: &Settings, args: MatchesArgs) -> anyhow::Result<()> {
    let identity = PlayerIdentity::new(args.player.name, &args.player.tag, args.player.region);
    let records = enrich(settings, &identity).await?;
    let json = serde_json::to_string_pretty(&records).context("serialize match records")?;

    match args.out {
        Some(path) => {
            write_output(&path, json.as_bytes()).await?;
            eprintln!("wrote {} matches to {}", records.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

async fn cmd_banner(settings: &Settings, args: BannerArgs) -> anyhow::Result<()> {
    let config = match (&args.config, &args.name, &args.tag, args.region) {
        (Some(path), ..) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("read banner config '{}'", path.display()))?;
            BannerConfig::from_json(&text)?
        }
        (None, Some(name), Some(tag), Some(region)) => {
            let identity = PlayerIdentity::new(name.clone(), tag, region);
            let records = enrich(settings, &identity).await?;
            let record = records.get(args.index).with_context(|| {
                format!(
                    "match index {} out of range ({} matches available)",
                    args.index,
                    records.len()
                )
            })?;
            BannerConfig::from_record(record)
        }
        _ => anyhow::bail!("pass either --config or --name/--tag/--region"),
    };

    let http = HttpLoader::new(settings.image_timeout())?;
    let ddragon_version = match &settings.ddragon_version {
        Some(v) => v.clone(),
        None => http.latest_ddragon_version().await,
    };
    let loader = BannerAssets::new(
        AssetCatalog::new(ddragon_version, &settings.assets_dir),
        http,
    );

    let png = lanecard::render_banner(&config, &loader).await?;
    write_output(&args.out, &png).await?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

async fn write_output(path: &std::path::Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}
