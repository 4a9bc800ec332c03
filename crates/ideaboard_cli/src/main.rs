//! Terminal front end for the idea board.
//!
//! # Responsibility
//! - Map subcommands onto `ideaboard_core` use-cases.
//! - Keep output plain text, one record per block, for piping and grepping.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ideaboard_core::{
    default_log_level, extract_url, filter_sponsors, init_logging, init_stderr_logging, site,
    BoardConfig, BootScript, BootStep, FileIdeaSource, HttpIdeaSource, IdeaBoard, IdeaRecord,
    IdeaSource, ReferenceLink, ThemeAccent, Track,
};
use std::path::PathBuf;

/// Stderr carries only warnings and errors unless `--log-level` says otherwise.
const STDERR_LOG_LEVEL: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "ideaboard", version, about = "Browse hackathon ideas and sponsor resources")]
struct Cli {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files. Logs go to stderr when omitted.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch ideas and print those matching a track.
    Ideas {
        /// Track label or slug, e.g. `defi-agents`. All tracks when omitted.
        #[arg(long)]
        track: Option<Track>,
        /// Read a JSON snapshot instead of calling the endpoint.
        #[arg(long)]
        from_file: Option<PathBuf>,
        /// Override the ideas endpoint (beats `IDEABOARD_ENDPOINT`).
        #[arg(long)]
        endpoint: Option<String>,
        /// Request timeout (beats `IDEABOARD_TIMEOUT_MS`).
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// List the hackathon tracks.
    Tracks,
    /// Print the link found in a free-text reference note.
    ExtractUrl { text: String },
    /// Print sponsor resources.
    Resources {
        /// Exact sponsor name.
        #[arg(long)]
        sponsor: Option<String>,
    },
    /// Play the boot log animation.
    Boot {
        #[arg(long)]
        seed: Option<u64>,
        /// Skip the delays.
        #[arg(long)]
        fast: bool,
    },
    /// Print site information.
    About,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref(), cli.log_dir.as_ref())?;

    match cli.command {
        Command::Ideas {
            track,
            from_file,
            endpoint,
            timeout_ms,
        } => run_ideas(track, from_file, endpoint, timeout_ms),
        Command::Tracks => {
            for track in Track::ALL {
                println!("{:<20} {}", track.slug(), track.label());
            }
            Ok(())
        }
        Command::ExtractUrl { text } => {
            println!("{}", extract_url(&text));
            Ok(())
        }
        Command::Resources { sponsor } => {
            print_resources(sponsor.as_deref());
            Ok(())
        }
        Command::Boot { seed, fast } => {
            play_boot(seed, fast);
            Ok(())
        }
        Command::About => {
            println!("{} - {}", site::SITE_TITLE, site::SITE_TAGLINE);
            println!("site:      {}", site::SITE_URL);
            println!("hackathon: {}", site::HACKATHON_URL);
            println!();
            println!("{}", site::HERO_HEADING);
            println!("{}", site::HERO_BLURB);
            Ok(())
        }
    }
}

fn setup_logging(level: Option<&str>, log_dir: Option<&PathBuf>) -> Result<()> {
    let Some(log_dir) = log_dir else {
        init_stderr_logging(level.unwrap_or(STDERR_LOG_LEVEL))?;
        return Ok(());
    };
    let dir = log_dir
        .to_str()
        .context("log directory must be valid UTF-8")?;
    init_logging(level.unwrap_or(default_log_level()), dir)?;
    Ok(())
}

fn run_ideas(
    track: Option<Track>,
    from_file: Option<PathBuf>,
    endpoint: Option<String>,
    timeout_ms: Option<u64>,
) -> Result<()> {
    let source: Box<dyn IdeaSource> = match from_file {
        Some(path) => Box::new(FileIdeaSource::new(path)),
        None => {
            let config = BoardConfig::from_env_with(endpoint, timeout_ms)?;
            Box::new(HttpIdeaSource::try_new(&config)?)
        }
    };

    let mut board = IdeaBoard::new();
    let total = board.load(source.as_ref());
    board.select_track(track);

    println!("{}", site::IDEAS_HEADER);
    println!("{}", site::IDEAS_SUBTITLE);
    println!(
        "track: {}",
        track.map_or(site::ALL_TRACKS_LABEL, Track::label)
    );
    println!();

    let visible = board.visible_ideas();
    for idea in &visible {
        print_idea(idea);
    }
    println!("{} of {} idea(s)", visible.len(), total);
    Ok(())
}

fn print_idea(idea: &IdeaRecord) {
    let marker = match idea.accent() {
        ThemeAccent::DeFi => "[defi]",
        ThemeAccent::Social => "[social]",
        ThemeAccent::General => "[idea]",
    };
    if idea.has_platform() {
        println!("{marker} {} • {}", idea.theme, idea.platform);
    } else {
        println!("{marker} {}", idea.theme);
    }
    println!("  {}", idea.header);
    if !idea.description.trim().is_empty() {
        println!("  {}", idea.description);
    }
    println!("  by {}", idea.contributor_or_anonymous());
    if idea.has_references() {
        if let ReferenceLink::Url(url) = ReferenceLink::resolve(&idea.references) {
            println!("  ref: {url}");
        }
    }
    println!();
}

fn print_resources(sponsor: Option<&str>) {
    println!("{}", site::RESOURCES_HEADING);
    println!("{}", site::RESOURCES_BLURB);
    println!("filter: {}", sponsor.unwrap_or(site::ALL_SPONSORS_LABEL));
    println!();

    for entry in filter_sponsors(sponsor) {
        match entry.website {
            Some(website) => println!("{} ({website})", entry.name.to_lowercase()),
            None => println!("{}", entry.name.to_lowercase()),
        }
        for category in entry.categories {
            println!("  {}", category.kind.heading());
            for resource in category.items {
                println!("    {} <{}>", resource.title.to_lowercase(), resource.url);
                if let Some(description) = resource.description {
                    println!("      {}", description.to_lowercase());
                }
            }
        }
        println!();
    }
}

fn play_boot(seed: Option<u64>, fast: bool) {
    let mut script = match seed {
        Some(seed) => BootScript::seeded(seed),
        None => BootScript::from_entropy(),
    };

    println!("loading {}...", site::SITE_TITLE.to_lowercase());
    loop {
        if !fast && !script.is_finished() {
            std::thread::sleep(ideaboard_core::boot::BOOT_TICK_INTERVAL);
        }
        match script.tick() {
            BootStep::Log(line) => println!("> {line}"),
            BootStep::Reveal { after } => {
                if !fast {
                    std::thread::sleep(after);
                }
                println!();
                println!("{} - {}", site::SITE_TITLE, site::SITE_TAGLINE);
            }
            BootStep::Done => break,
        }
    }
}
