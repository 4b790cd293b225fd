/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Sleuthgraph.

Sleuthgraph is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Sleuthgraph is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Sleuthgraph. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! The command line is a developer tool to try the generator on attribute files and settings.
//!
//! # Examples
//!
//! Generate a puzzle of ten profiles from the built-in pools and print it as JSON:
//!
//! ```text
//! $ sleuthgraph -n 10 --seed 42 --json
//! ```
//!
//! Generate 100 puzzles from an attribute file and print some statistics:
//!
//! ```text
//! $ sleuthgraph -d profiles.txt -n 30 -c 100 --summary
//! ```
//!
//! Solve a puzzle automatically and record the score in the scoreboard of a directory:
//!
//! ```text
//! $ sleuthgraph --autoplay --scores ~/.local/share/sleuthgraph --player-name Ada
//! ```

use clap::Parser;
use log::{debug, error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::PathBuf;

use sleuthgraph::config::{BUILTIN_PROFILES, COPYRIGHT_NOTICE};
use sleuthgraph::game::{Game, GameError, SubmitOutcome};
use sleuthgraph::generator::attributes::AttributePools;
use sleuthgraph::generator::graph::Graph;
use sleuthgraph::generator::random_graph::{GenerateError, RandomGraph};
use sleuthgraph::generator::vertexes::Field;
use sleuthgraph::highscores::ScoreIndex;
use sleuthgraph::saver::highscores::SaverHighScores;
use sleuthgraph::GeneratorConfig;

/// Generate social-deduction puzzle graphs.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Attribute file with the #names, #countries, and #misc sections (built-in pools by default)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON file with the generator settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of profiles in the puzzle, the player included
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Degree at which a profile stops rolling extra links
    #[arg(long)]
    degree_cap: Option<usize>,

    /// Seed for the random generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the generated puzzles in JSON format
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Solve the generated puzzles automatically
    #[arg(long, default_value_t = false)]
    autoplay: bool,

    /// Directory of the scoreboard; autoplay scores are added to it, and it is printed
    #[arg(long)]
    scores: Option<PathBuf>,

    /// Name recorded in the scoreboard
    #[arg(long, default_value = "sleuth")]
    player_name: String,

    /// Print some statistics after generating the puzzles
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // Settings and attribute pools
    //
    let mut config: GeneratorConfig = match &args.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Cannot read the settings from {}: {e}", path.display());
                return 1;
            }
        },
        None => GeneratorConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(degree_cap) = args.degree_cap {
        config.degree_cap = degree_cap;
    }
    debug!("Settings: {config:?}");

    let pools: Result<AttributePools, GenerateError> = match &args.data {
        Some(path) => AttributePools::from_file(path).map_err(GenerateError::from),
        None => BUILTIN_PROFILES.parse().map_err(GenerateError::from),
    };
    let pools: AttributePools = match pools {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid attribute pools: {e}");
            return 1;
        }
    };

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let saver: Option<SaverHighScores> = args.scores.clone().map(SaverHighScores::new);
    let mut scores: ScoreIndex = match &saver {
        Some(s) => match s.get_highscores() {
            Ok(scores) => scores.unwrap_or_default(),
            Err(e) => {
                eprintln!("Cannot read the scoreboard: {e}");
                return 1;
            }
        },
        None => ScoreIndex::new(),
    };

    //
    // Generate the puzzles
    //
    let mut generator: RandomGraph = RandomGraph::new(&pools, &config);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut degrees: usize = 0;

    for i in 0..args.count {
        debug!("Puzzle {i}");
        let graph: Graph = match generator.generate(&mut rng) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("Cannot generate the puzzle: {e}");
                return 1;
            }
        };
        total += generator.duration;
        max = max.max(generator.duration);
        attempts += generator.attempts;
        degrees += (0..graph.count()).map(|v| graph.vertex_degree(v)).sum::<usize>();

        if args.json {
            match serde_json::to_string_pretty(&graph) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Cannot serialize the puzzle: {e}");
                    return 1;
                }
            }
        } else {
            print_puzzle(&graph);
        }

        if args.autoplay {
            let mut game: Game = Game::new(graph);
            match autoplay(&mut game) {
                Ok(()) => {
                    println!(
                        "Solved with {} clue(s), score {}",
                        game.get_clues_given(),
                        game.score()
                    );
                    scores.insert(game.score(), &args.player_name);
                }
                Err(e) => {
                    error!("Autoplay failed: {e}");
                    return 1;
                }
            }
        }
    }

    if let Some(s) = &saver {
        if args.autoplay
            && let Err(e) = s.save_highscores(&scores)
        {
            eprintln!("Cannot save the scoreboard: {e}");
            return 1;
        }
        print!("{}", scores.leaderboard());
    }

    // Print some stats
    if args.summary && args.count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
  average attempts = {}
    average degree = {}",
            total,
            total / args.count as f32,
            max,
            attempts as f32 / args.count as f32,
            degrees as f32 / (args.count * config.size) as f32,
        );
    }
    0
}

/// Print the profiles as the player sees them at the beginning of the game.
fn print_puzzle(graph: &Graph) {
    for (id, v) in graph.vertices().enumerate() {
        println!("---------------------------------------------");
        println!("#{id} ({} link(s))", v.edge_count());
        print!("{}", v.describe("???"));
    }
    println!("---------------------------------------------");
    println!("Names: {}", graph.roster().join(", "));
}

/// Solve the puzzle by guessing, from every identified vertex, the vertexes linked to it.
/// A clue is requested before each guess, as a player would.
fn autoplay(game: &mut Game) -> Result<(), GameError> {
    while !game.is_solved() {
        let size: usize = game.graph.count();
        let guess: Option<(usize, usize)> = (0..size)
            .filter(|known| game.graph.check_field(*known, Field::Name))
            .find_map(|known| {
                game.graph
                    .neighbors(known)
                    .find(|target| game.graph.edge_unique(*target, known))
                    .map(|target| (target, known))
            });

        let Some((target, known)) = guess else {
            // Not reachable with a connected graph
            break;
        };
        if game.graph.has_clue(known) {
            game.request_clue(known)?;
        }
        let name: String = game
            .graph
            .get_vertex(target)
            .map(|v| v.name.clone())
            .unwrap_or_default();
        let outcome: SubmitOutcome = game.submit(target, &name, known)?;
        debug!("Linked {target}-{known}: {outcome:?}");
    }
    Ok(())
}
