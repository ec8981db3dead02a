//! Command-line front end for Cocktail Cellar

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use cocktail_lib::commands::{self, AppState};
use cocktail_lib::config::{resolve_data_dir, AppConfig, ConfigUpdate, DATA_DIR_ENV};
use cocktail_lib::logging;
use cocktail_lib::models::{
    AlcoholicFilter, Cocktail, DiaryEntry, DiaryRatings, FavoriteEntry, RatingDimension,
};
use cocktail_lib::ratings::{RatingDisplay, RatingInput, SortOption};
use cocktail_lib::services::{Notice, NoticeLevel};

/// Cocktail Cellar: search recipes, keep favorites, rate and take notes
#[derive(Parser)]
#[command(name = "cocktail")]
#[command(about = "Local-first cocktail catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search cocktails by name
    Search { query: String },

    /// Show a random cocktail
    Random,

    /// Show a few random cocktails
    Featured,

    /// Show a recipe in full
    Show { id: String },

    /// List drink categories
    Categories,

    /// List cocktails starting with a letter
    Letter { letter: char },

    /// Filter by category or alcohol content
    Filter(FilterArgs),

    /// Find cocktails containing an ingredient
    Ingredient { name: String },

    /// Manage saved cocktails
    #[command(subcommand)]
    Favorite(FavoriteCommand),

    /// Best rated favorites
    Top {
        /// Number of entries
        #[arg(short, long)]
        limit: Option<usize>,

        /// Rank by this dimension instead of overall
        #[arg(short, long)]
        by: Option<RatingDimension>,
    },

    /// Start a local session under a display name
    Login { name: String },

    /// End the local session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Tasting diary of the logged-in user
    #[command(subcommand)]
    Diary(DiaryCommand),

    /// Show or change the stored settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the settings in effect
    Show,

    /// Change one or more settings
    Set {
        /// Recipe API base URL
        #[arg(long)]
        api_base_url: Option<String>,

        /// Request timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Serve the built-in recipes when the API is unreachable
        #[arg(long, value_name = "BOOL")]
        fallback: Option<bool>,

        /// Default number of entries for `top`
        #[arg(long, value_name = "N")]
        top_limit: Option<usize>,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Category, e.g. "Ordinary Drink"
    #[arg(short, long)]
    category: Option<String>,

    /// "alcoholic" or "non_alcoholic"
    #[arg(short, long)]
    alcoholic: Option<AlcoholicFilter>,
}

#[derive(Subcommand)]
enum FavoriteCommand {
    /// Save a cocktail by ID
    Add { id: String },

    /// Remove a saved cocktail
    Remove { id: String },

    /// List saved cocktails
    List {
        /// Only names containing this text
        #[arg(short, long, default_value = "")]
        filter: String,

        /// newest, oldest, name-asc, name-desc, rating-high, rating-low
        #[arg(short, long, default_value = "newest")]
        sort: SortOption,
    },

    /// Rate a saved cocktail, 1 to 5 per dimension
    Rate(RateArgs),
}

#[derive(Args)]
struct RateArgs {
    id: String,
    /// Sweetness, 1 to 5
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    sweet: Option<u8>,
    /// Sourness, 1 to 5
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    sour: Option<u8>,
    /// Bitterness, 1 to 5
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    bitter: Option<u8>,
    /// Strength, 1 to 5
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    strong: Option<u8>,
    /// Overall, 1 to 5
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    overall: Option<u8>,
}

impl RateArgs {
    fn input(&self) -> Result<RatingInput> {
        let given: Vec<(RatingDimension, u8)> = [
            (RatingDimension::Sweet, self.sweet),
            (RatingDimension::Sour, self.sour),
            (RatingDimension::Bitter, self.bitter),
            (RatingDimension::Strong, self.strong),
            (RatingDimension::Overall, self.overall),
        ]
        .into_iter()
        .filter_map(|(dimension, value)| value.map(|v| (dimension, v)))
        .collect();

        if given.is_empty() {
            bail!("give at least one of --sweet, --sour, --bitter, --strong, --overall");
        }

        let dimensions: Vec<RatingDimension> = given.iter().map(|(d, _)| *d).collect();
        let mut input = RatingInput::for_dimensions(&dimensions);
        for (dimension, value) in given {
            input.set(dimension, value);
        }
        Ok(input)
    }
}

#[derive(Subcommand)]
enum DiaryCommand {
    /// Write a tasting note
    Add {
        /// Cocktail ID
        id: String,
        #[arg(short, long, default_value = "")]
        notes: String,
        #[arg(long, default_value_t = 0.0)]
        flavor: f64,
        #[arg(long, default_value_t = 0.0)]
        presentation: f64,
        #[arg(long, default_value_t = 0.0)]
        overall: f64,
    },

    /// List tasting notes, most recent first
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = AppConfig::load(&data_dir);
    let state = AppState::open(&data_dir, config)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;

    let outcome = run(&state, &cli, &data_dir).await;
    print_notices(&state.drain_notices());
    outcome
}

async fn run(state: &AppState, cli: &Cli, data_dir: &Path) -> Result<()> {
    let out = Output { json: cli.json };

    match &cli.command {
        Command::Search { query } => out.cocktails(&commands::search_cocktails(state, query).await?),
        Command::Random => match commands::random_cocktail(state).await? {
            Some(cocktail) => out.recipe(&cocktail),
            None => out.message("No cocktail available"),
        },
        Command::Featured => out.cocktails(&commands::featured_cocktails(state).await?),
        Command::Show { id } => out.recipe(&commands::get_cocktail(state, id).await?),
        Command::Categories => out.lines(&commands::list_categories(state).await?),
        Command::Letter { letter } => {
            out.cocktails(&commands::cocktails_by_letter(state, *letter).await?)
        }
        Command::Filter(args) => {
            if args.category.is_none() && args.alcoholic.is_none() {
                bail!("give --category or --alcoholic");
            }
            let found =
                commands::filter_cocktails(state, args.category.clone(), args.alcoholic).await?;
            out.cocktails(&found)
        }
        Command::Ingredient { name } => {
            out.cocktails(&commands::search_by_ingredient(state, name).await?)
        }
        Command::Favorite(cmd) => run_favorite(state, &out, cmd).await,
        Command::Top { limit, by } => {
            let entries = match by {
                Some(dimension) => commands::get_top_by_dimension(state, *dimension, *limit)?,
                None => commands::get_top_rated(state, *limit)?,
            };
            out.favorites(&entries, by.unwrap_or(RatingDimension::Overall))
        }
        Command::Login { name } => {
            let user = commands::login(state, name)?;
            out.value(&user, || format!("{} ({})", user.display_name, user.id))
        }
        Command::Logout => {
            commands::logout(state)?;
            Ok(())
        }
        Command::Whoami => match commands::current_user(state) {
            Some(user) => out.value(&user, || format!("{} ({})", user.display_name, user.id)),
            None => out.message("Not logged in"),
        },
        Command::Diary(cmd) => run_diary(state, &out, cmd).await,
        Command::Config(cmd) => run_config(data_dir, &out, cmd),
    }
}

fn run_config(data_dir: &Path, out: &Output, cmd: &ConfigCommand) -> Result<()> {
    let config = match cmd {
        ConfigCommand::Show => AppConfig::load(data_dir),
        ConfigCommand::Set {
            api_base_url,
            timeout,
            fallback,
            top_limit,
        } => {
            let update = ConfigUpdate {
                api_base_url: api_base_url.clone(),
                request_timeout_secs: *timeout,
                fallback_to_samples: *fallback,
                top_rated_limit: *top_limit,
            };
            if update.is_empty() {
                bail!("give at least one of --api-base-url, --timeout, --fallback, --top-limit");
            }
            AppConfig::update(data_dir, &update)
                .with_context(|| format!("failed to save settings in {}", data_dir.display()))?
        }
    };

    out.value(&config, || {
        format!(
            "api_base_url: {}\nrequest_timeout_secs: {}\nfallback_to_samples: {}\ntop_rated_limit: {}\nfile: {}",
            config.api_base_url,
            config.request_timeout_secs,
            config.fallback_to_samples,
            config.top_rated_limit,
            AppConfig::get_config_path(data_dir).display()
        )
    })
}

async fn run_favorite(state: &AppState, out: &Output, cmd: &FavoriteCommand) -> Result<()> {
    match cmd {
        FavoriteCommand::Add { id } => {
            commands::add_favorite(state, id).await?;
            Ok(())
        }
        FavoriteCommand::Remove { id } => {
            if !commands::remove_favorite(state, id)? {
                out.message(&format!("{} is not in your collection", id))?;
            }
            Ok(())
        }
        FavoriteCommand::List { filter, sort } => {
            let entries = commands::get_dashboard(state, filter, *sort)?;
            out.favorites(&entries, RatingDimension::Overall)
        }
        FavoriteCommand::Rate(args) => {
            let submission = args.input()?.submission();
            let aggregate = commands::rate_favorite(state, &args.id, &submission)?;
            out.value(&aggregate, || {
                RatingDimension::ALL
                    .iter()
                    .map(|d| {
                        format!(
                            "{:<8} {}",
                            d.label(),
                            RatingDisplay::new(aggregate.get(*d)).render_with_value()
                        )
                    })
                    .chain(std::iter::once(format!("{} rating(s)", aggregate.count)))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
    }
}

async fn run_diary(state: &AppState, out: &Output, cmd: &DiaryCommand) -> Result<()> {
    match cmd {
        DiaryCommand::Add {
            id,
            notes,
            flavor,
            presentation,
            overall,
        } => {
            let ratings = DiaryRatings {
                flavor: *flavor,
                presentation: *presentation,
                overall: *overall,
            };
            let entry = commands::add_diary_entry(state, id, notes, ratings).await?;
            out.diary(std::slice::from_ref(&entry))
        }
        DiaryCommand::List => out.diary(&commands::list_diary(state)?),
    }
}

/// Stdout rendering, plain text or JSON
struct Output {
    json: bool,
}

impl Output {
    fn value<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }

    fn message(&self, message: &str) -> Result<()> {
        self.value(&serde_json::json!({ "message": message }), || message.to_string())
    }

    fn lines(&self, lines: &[String]) -> Result<()> {
        self.value(&lines, || lines.join("\n"))
    }

    fn cocktails(&self, cocktails: &[Cocktail]) -> Result<()> {
        self.value(&cocktails, || {
            if cocktails.is_empty() {
                return "No cocktails found".to_string();
            }
            cocktails
                .iter()
                .map(|c| match c.category.as_deref() {
                    Some(category) => format!("{:>6}  {} [{}]", c.id, c.name, category),
                    None => format!("{:>6}  {}", c.id, c.name),
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    fn recipe(&self, cocktail: &Cocktail) -> Result<()> {
        self.value(cocktail, || {
            let mut text = format!("{} (#{})", cocktail.name, cocktail.id);
            let details = [
                cocktail.category.as_deref(),
                cocktail.alcoholic.as_deref(),
                cocktail.glass.as_deref(),
            ];
            let details: Vec<&str> = details.into_iter().flatten().collect();
            if !details.is_empty() {
                text.push_str(&format!("\n{}", details.join(" | ")));
            }
            for line in cocktail.ingredients() {
                text.push_str(&format!("\n  - {} {}", line.measure, line.ingredient));
            }
            if let Some(instructions) = &cocktail.instructions {
                text.push_str(&format!("\n\n{}", instructions));
            }
            text
        })
    }

    fn favorites(&self, entries: &[FavoriteEntry], dimension: RatingDimension) -> Result<()> {
        self.value(&entries, || {
            if entries.is_empty() {
                return "Your collection is empty".to_string();
            }
            entries
                .iter()
                .map(|e| {
                    format!(
                        "{:>6}  {:<28} {}  ({} rating(s), saved {})",
                        e.id(),
                        e.name(),
                        RatingDisplay::new(e.ratings.get(dimension)).render_with_value(),
                        e.ratings.count,
                        e.added_at.format("%Y-%m-%d")
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    fn diary(&self, entries: &[DiaryEntry]) -> Result<()> {
        self.value(&entries, || {
            if entries.is_empty() {
                return "Your diary is empty".to_string();
            }
            entries
                .iter()
                .map(|e| {
                    let mut text = format!(
                        "{}  {}  flavor {} presentation {} overall {}",
                        e.date.format("%B %-d, %Y"),
                        e.cocktail_name,
                        RatingDisplay::new(e.ratings.flavor).render(),
                        RatingDisplay::new(e.ratings.presentation).render(),
                        RatingDisplay::new(e.ratings.overall).render(),
                    );
                    if !e.notes.is_empty() {
                        text.push_str(&format!("\n    {}", e.notes));
                    }
                    text
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

fn print_notices(notices: &[Notice]) {
    for notice in notices {
        let marker = match notice.level {
            NoticeLevel::Info => "i",
            NoticeLevel::Success => "✓",
            NoticeLevel::Error => "!",
        };
        eprintln!("{} {}", marker, notice.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate_args(extra: &[&str]) -> std::result::Result<RateArgs, clap::Error> {
        let mut argv = vec!["cocktail", "favorite", "rate", "11007"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv)?.command {
            Command::Favorite(FavoriteCommand::Rate(args)) => Ok(args),
            _ => panic!("expected favorite rate"),
        }
    }

    #[test]
    fn test_rate_rejects_out_of_range_values() {
        assert!(rate_args(&["--overall", "0"]).is_err());
        assert!(rate_args(&["--sweet", "6"]).is_err());
        assert!(rate_args(&["--bitter", "-1"]).is_err());
    }

    #[test]
    fn test_rate_accepts_bounds() {
        let args = rate_args(&["--overall", "5", "--sour", "1"]).unwrap();
        let submission = args.input().unwrap().submission();

        assert_eq!(submission.get(RatingDimension::Overall), Some(5.0));
        assert_eq!(submission.get(RatingDimension::Sour), Some(1.0));
        assert_eq!(submission.get(RatingDimension::Sweet), None);
    }

    #[test]
    fn test_rate_needs_a_dimension() {
        assert!(rate_args(&[]).unwrap().input().is_err());
    }

    #[test]
    fn test_config_set_writes_settings() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "cocktail",
            "config",
            "set",
            "--fallback",
            "true",
            "--top-limit",
            "7",
        ])
        .unwrap();
        let Command::Config(cmd) = &cli.command else {
            panic!("expected config");
        };

        run_config(dir.path(), &Output { json: true }, cmd).unwrap();

        let saved = AppConfig::load(dir.path());
        assert!(saved.fallback_to_samples);
        assert_eq!(saved.top_rated_limit, 7);
    }

    #[test]
    fn test_config_set_without_flags_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from(["cocktail", "config", "set"]).unwrap();
        let Command::Config(cmd) = &cli.command else {
            panic!("expected config");
        };

        assert!(run_config(dir.path(), &Output { json: true }, cmd).is_err());
        assert!(!AppConfig::get_config_path(dir.path()).exists());
    }
}
