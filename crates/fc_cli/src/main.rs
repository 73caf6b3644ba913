//! Football career CLI
//!
//! Thin host around `fc_core`: generate a world, run a career week by week,
//! or watch a single match.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fc_core::engine::{AutoDecider, Commentary, FluentCommentary, MatchEngine, PlainCommentary};
use fc_core::{generate_world, CareerSession, SimConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fc")]
#[command(about = "Football career simulation", long_about = None)]
struct Cli {
    /// YAML simulation config; defaults apply to missing fields
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Commentary locale (en-US, ko-KR)
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a world and print its leagues and clubs
    World {
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },

    /// Run a career with automatic decisions and print weekly summaries
    Career {
        #[arg(long, default_value_t = 52)]
        weeks: u32,

        #[arg(long, default_value_t = 1)]
        seed: u64,

        /// One JSON summary per line instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Simulate one match between two generated clubs
    Match {
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let commentary = build_commentary(cli.locale.as_deref())?;

    match cli.command {
        Commands::World { seed } => print_world(seed, &config),
        Commands::Career { weeks, seed, json } => run_career(seed, weeks, json, config, commentary),
        Commands::Match { seed } => run_match(seed, &config, commentary),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let source = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = SimConfig::from_yaml_str(&source).with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!("loaded config from {}", path.display());
    Ok(config)
}

fn build_commentary(locale: Option<&str>) -> Result<Rc<dyn Commentary>> {
    match locale {
        Some(locale) => Ok(Rc::new(FluentCommentary::new(&[locale])?)),
        None => Ok(Rc::new(PlainCommentary)),
    }
}

fn print_world(seed: u64, config: &SimConfig) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let world = generate_world(&mut rng, config);

    for league in &world.leagues {
        println!("\n{} (tier {}, {})", league.name, league.tier, league.region.label());
        for id in &league.team_ids {
            let Some(club) = world.club(*id) else { continue };
            println!(
                "   {:<28} avg {:>5.1}  budget {:>12.0}  {}  {:?}",
                club.name,
                club.squad_average(),
                club.budget,
                club.tactics.formation.code(),
                club.transfer_policy
            );
        }
    }
    println!(
        "\n{} leagues, {} clubs, {} players, {} free agents",
        world.leagues.len(),
        world.clubs.len(),
        world.player_count(),
        world.free_agents.len()
    );
    Ok(())
}

fn run_career(seed: u64, weeks: u32, json: bool, config: SimConfig, commentary: Rc<dyn Commentary>) -> Result<()> {
    let mut session = CareerSession::start(seed, config)?;
    session.set_commentary(commentary);
    if let (Some(player), Some(club)) = (session.human(), session.human_club()) {
        tracing::info!("career started: {} at {}", player.name, club.name);
        if !json {
            println!(
                "{} ({}, age {}, rating {:.1}) signs for {}",
                player.name,
                player.position.display_name(),
                player.age,
                player.overall_rating(),
                club.name
            );
        }
    }

    for _ in 0..weeks {
        let summary = session.advance_week(&mut AutoDecider)?;
        if json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!();
            for line in summary.lines() {
                println!("   {}", line);
            }
        }
        if summary.retired {
            break;
        }
        // The auto career takes the most desirable offer on the table.
        if !session.pending_offers().is_empty() && session.human_club().is_none() {
            let contract = session.accept_offer(0)?;
            if !json {
                println!("   Signed: {:.0}/week for {} year(s)", contract.weekly_wage, contract.years_remaining);
            }
        }
    }

    if !json {
        println!("\nLeague table:");
        for row in session.human_league_table() {
            println!(
                "   {:>2}. {:<28} {:>3} pts  {:+} GD  {}",
                row.position,
                row.name,
                row.stats.points,
                row.stats.goal_difference(),
                row.stats.form_string()
            );
        }
        println!("\nBalance: {:.0}", session.balance());
    }
    Ok(())
}

fn run_match(seed: u64, config: &SimConfig, commentary: Rc<dyn Commentary>) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let world = generate_world(&mut rng, config);
    let league = world.leagues.first().context("generated world has no leagues")?;
    let (home, away) = match league.team_ids.as_slice() {
        [home, away, ..] => (
            world.club(*home).context("unknown home club")?,
            world.club(*away).context("unknown away club")?,
        ),
        _ => anyhow::bail!("{} has fewer than two clubs", league.name),
    };

    let mut engine = MatchEngine::new(home, away, None, config.matches.clone(), commentary)?;
    let result = engine.run_to_completion(&mut rng, &mut AutoDecider)?;

    println!("{} vs {}", home.name, away.name);
    for event in result.events() {
        println!("   {}", event.text);
    }
    let (home_goals, away_goals) = result.score();
    let (home_possession, away_possession) = result.possession();
    println!("\nFull time: {} {} - {} {}", home.name, home_goals, away_goals, away.name);
    println!("Possession: {}% - {}%", home_possession, away_possession);
    tracing::debug!("{} decision(s) taken", result.decisions_taken());
    Ok(())
}
