use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io::{self, BufRead, Write};

use gacha_sim::{
    GachaEngine, GachaError, handle_error,
    report::{format_pull, format_pulls, format_stats},
};

#[derive(Parser)]
#[command(author, version, about = "WoW themed gacha pull simulator", long_about = None)]
struct Args {
    /// Random seed (optional, makes the session reproducible)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Player name (prompted when omitted)
    #[arg(short, long)]
    player: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Run the interactive menu (default)
    Interactive,
    /// Pull a batch for one player and print their stats
    Simulate {
        /// Number of pulls
        #[arg(short = 'n', long, default_value_t = gacha_sim::DEFAULT_MULTI_PULL)]
        count: usize,
        /// Print the stats snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut engine = match args.seed {
        Some(seed) => GachaEngine::with_seed(seed),
        None => GachaEngine::new(),
    };
    info!("session seed {}", engine.seed());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    match args.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let player = match args.player {
                Some(name) => name,
                None => prompt(&mut input, "Enter player name: ")?,
            };
            run_interactive(&mut engine, &mut input, player)
        }
        Commands::Simulate { count, json } => {
            let player = args.player.unwrap_or_else(|| "Player".to_string());
            run_simulation(&mut engine, &player, count, json)
        }
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String, GachaError> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(line.trim().to_string())
}

fn read_pull_count(engine: &GachaEngine, input: &mut impl BufRead) -> Result<usize, GachaError> {
    let max = engine.config().max_multi_pull;
    let raw = prompt(input, &format!("Enter number of pulls (1-{}): ", max))?;
    let count = raw
        .parse::<usize>()
        .map_err(|e| GachaError::InputError(e.to_string()))?;
    engine.config().validate_pull_count(count)
}

fn run_interactive(
    engine: &mut GachaEngine,
    input: &mut impl BufRead,
    mut player: String,
) -> Result<()> {
    loop {
        println!("\n=== WoW Gacha System === [Player: {}]", player);
        println!("\n1. Single Pull");
        println!("2. Multi Pull");
        println!("3. View Stats");
        println!("4. Change Player");
        println!("5. Exit");

        let choice = match prompt(input, "\nSelect option (1-5): ") {
            Ok(choice) => choice,
            Err(GachaError::IoError(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e).context("Failed to read menu choice"),
        };

        match choice.as_str() {
            "1" => {
                let record = engine.pull_item(&player);
                println!("\nSingle Pull Result: {}", format_pull(&record));
            }
            "2" => match read_pull_count(engine, input) {
                Ok(count) => {
                    let records = engine.multi_pull(&player, count);
                    print!("\n{}", format_pulls(&records));
                }
                Err(e @ GachaError::IoError(_)) => {
                    return Err(e).context("Failed to read pull count");
                }
                Err(e) => println!("{}", handle_error(&e)),
            },
            "3" => match engine.get_player_stats(&player) {
                Some(stats) => print!("\n{}", format_stats(&stats)),
                None => println!(
                    "{}",
                    handle_error(&GachaError::PlayerNotFound(player.clone()))
                ),
            },
            "4" => {
                player = prompt(input, "Enter new player name: ")
                    .context("Failed to read player name")?;
                println!("\nSwitched to player: {}", player);
            }
            "5" => {
                println!("Thank you for playing!");
                break;
            }
            _ => println!("Invalid option. Please try again."),
        }
    }
    Ok(())
}

fn run_simulation(engine: &mut GachaEngine, player: &str, count: usize, json: bool) -> Result<()> {
    engine
        .config()
        .validate_pull_count(count)
        .map_err(|e| anyhow::anyhow!(handle_error(&e)))?;
    engine.multi_pull(player, count);

    let stats = engine
        .get_player_stats(player)
        .ok_or_else(|| GachaError::PlayerNotFound(player.to_string()))?;
    if json {
        let text = serde_json::to_string_pretty(&stats).context("Failed to encode stats")?;
        println!("{}", text);
    } else {
        print!("{}", format_stats(&stats));
        let pity = engine.pity();
        println!(
            "\nPity: {} since SSR+, {} since Mythic",
            pity.pull_pity, pity.mythic_pity
        );
    }
    Ok(())
}
