//! Wordle Tree - CLI
//!
//! Plays, simulates and analyzes Wordle over a frequency-weighted word table.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_tree::{
    commands::{
        FIXTURES, FilterQuery, best_opening, evaluate_sequence, expected_turns,
        failure_probability, hidden_words, play_adversary, progress_bar, resolve, run_benchmark,
        run_check, run_filter, run_interactive, score_pair, solve_word, top_pair,
    },
    dictionary::{Dictionary, LikelihoodKind, loader},
    game::Game,
    output::{
        print_benchmark_result, print_check, print_filter_matches, print_game, print_outcome,
        print_pair, print_score, print_value,
    },
    solver::{DEFAULT_TURNS, Metric, Selector},
};

#[derive(Parser)]
#[command(
    name = "wordle_tree",
    about = "Wordle solver and game-tree analyzer over a frequency-weighted word table",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word table: one `word frequency` pair per line
    #[arg(short = 'w', long, global = true, default_value = "words")]
    words: PathBuf,

    /// Separate `word frequency` table; --words is then a plain word list
    #[arg(long, global = true)]
    frequencies: Option<PathBuf>,

    /// Guess-ranking metric
    #[arg(short, long, global = true, value_enum, default_value_t)]
    metric: Metric,

    /// Hard mode: only guess words that are still possible
    #[arg(short = 'H', long, global = true)]
    hard: bool,

    /// List the remaining candidates when fewer than 20 are left
    #[arg(short, long, global = true)]
    debug: bool,

    /// How raw frequencies become likelihood weights
    #[arg(long, global = true, value_enum, default_value_t)]
    likelihood: LikelihoodKind,

    /// Logistic midpoint, in raw frequency units
    #[arg(long, global = true, default_value_t = 80.0)]
    center: f64,

    /// Logistic scale, in raw frequency units
    #[arg(long, global = true, default_value_t = 15.0)]
    slope: f64,

    /// Turns per game, and the failure budget
    #[arg(long, global = true, default_value_t = DEFAULT_TURNS)]
    turns: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play: enter the feedback for each suggested guess (default)
    Play {
        /// Guesses to play first
        guesses: Vec<String>,
    },

    /// Simulate a game against a known hidden word
    Solve {
        /// The hidden word
        hidden: String,

        /// Guesses to play first
        guesses: Vec<String>,
    },

    /// Simulate a game against the most obstructive feedback
    Adversary {
        /// Guesses to play first
        guesses: Vec<String>,
    },

    /// Expected number of turns over the whole table
    Exp {
        /// Guesses to play first
        guesses: Vec<String>,
    },

    /// Probability of failing to solve within --turns
    Fail,

    /// Metric value of a fixed guess sequence
    Eval {
        /// The sequence, first guess first
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Best fixed opening pair
    Top,

    /// Words consistent with shared result grids, grids separated by '/'
    Filter {
        /// Feedback rows such as -y--g
        #[arg(required = true, allow_hyphen_values = true)]
        patterns: Vec<String>,
    },

    /// Simulate every table word (or a sample) as the hidden word
    Bench {
        /// Number of hidden words to sample
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Sampling seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Run the scoring self-check
    Check,

    /// Show the feedback for one guess against one hidden word
    Score { guess: String, hidden: String },
}

fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    let likelihood = cli.likelihood.build(cli.center, cli.slope);
    let dict = match &cli.frequencies {
        Some(frequencies) => loader::load_with_frequencies(&cli.words, frequencies, likelihood),
        None => loader::load_table(&cli.words, likelihood),
    };
    dict.context("failed to load the word table")
}

fn game<'a>(selector: Selector<'a>, turns: usize, guesses: &[String]) -> Result<Game<'a>> {
    let opening = resolve(selector.dictionary(), guesses)?;
    Ok(Game::new(selector).with_turns(turns).with_opening(opening))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();
    let command = cli
        .command
        .take()
        .unwrap_or(Commands::Play { guesses: Vec::new() });

    // Commands that never touch the word table
    match &command {
        Commands::Check => return run_check_command(),
        Commands::Score { guess, hidden } => {
            let (word, pattern, packed) = score_pair(guess, hidden)?;
            print_score(&word, pattern, packed);
            return Ok(());
        }
        _ => {}
    }

    let dict = load_dictionary(&cli)?;
    let selector = Selector::new(&dict, cli.metric, cli.hard);
    match command {
        Commands::Play { guesses } => {
            let game = game(selector, cli.turns, &guesses)?;
            let result = run_interactive(&game, io::stdin().lock(), io::stdout(), cli.debug)
                .context("interactive game ended")?;
            print_outcome(&result);
        }
        Commands::Solve { hidden, guesses } => {
            let result = solve_word(&game(selector, cli.turns, &guesses)?, &hidden)?;
            print_game(&result, cli.debug);
        }
        Commands::Adversary { guesses } => {
            let result = play_adversary(&game(selector, cli.turns, &guesses)?)?;
            print_game(&result, cli.debug);
        }
        Commands::Exp { guesses } => {
            let opening = resolve(&dict, &guesses)?;
            let value = expected_turns(selector, opening, progress_bar("expected turns"))?;
            print_value("Expected turns", value);
        }
        Commands::Fail => {
            let value = failure_probability(selector, cli.turns, progress_bar("failure"))?;
            print_value("Failure probability", value);
        }
        Commands::Eval { guesses } => {
            let value = evaluate_sequence(selector, &resolve(&dict, &guesses)?)?;
            print_value(&cli.metric.to_string(), value);
        }
        Commands::Top => {
            let Some(pair) = top_pair(selector, progress_bar("pairs")) else {
                bail!("the word table needs at least two words");
            };
            print_pair(&pair, &best_opening(selector)?, cli.metric);
        }
        Commands::Filter { patterns } => {
            let query = FilterQuery::parse(&patterns)?;
            print_filter_matches(&run_filter(&dict, &query));
        }
        Commands::Bench { count, seed } => {
            // every game shares the same first guess
            let opening = best_opening(selector)?.entry;
            let game = Game::new(selector)
                .with_turns(cli.turns)
                .with_opening(vec![opening]);
            let hidden = hidden_words(&dict, count, seed);
            println!(
                "Running benchmark on {} words, opening with {}...",
                hidden.len(),
                opening.text().to_uppercase()
            );
            let result = run_benchmark(&game, &hidden, &progress_bar("games"))?;
            print_benchmark_result(&result);
        }
        Commands::Check | Commands::Score { .. } => {}
    }
    Ok(())
}

fn run_check_command() -> Result<()> {
    let mismatches = run_check();
    print_check(&mismatches, FIXTURES.len());
    if !mismatches.is_empty() {
        bail!("{} scoring fixtures failed", mismatches.len());
    }
    Ok(())
}
