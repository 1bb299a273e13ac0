use clap::Parser;
use stack_othello::core::{BoardSize, Color, Difficulty, GameConfig, GameResult, GameRng};
use stack_othello::rules::StackOthello;
use stack_othello::selector::MoveSelector;

#[derive(Parser, Debug)]
#[command(
    name = "selfplay",
    about = "Play computer vs computer Stack Othello games"
)]
struct Args {
    /// Board side length (4, 6 or 8)
    #[arg(long, default_value_t = 8, value_parser = parse_size)]
    size: usize,

    /// Maximum stack height
    #[arg(long, default_value_t = 2)]
    max_stack: u8,

    /// Difficulty of the Black player (easy|medium|hard)
    #[arg(long, default_value_t = Difficulty::Medium)]
    black: Difficulty,

    /// Difficulty of the White player (easy|medium|hard)
    #[arg(long, default_value_t = Difficulty::Hard)]
    white: Difficulty,

    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Random seed
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let side: usize = s.parse().map_err(|e| format!("{e}"))?;
    BoardSize::try_from(side)
        .map(BoardSize::side)
        .map_err(|e| e.to_string())
}

#[derive(Default)]
struct Tally {
    black: usize,
    white: usize,
    draws: usize,
}

/// White is the configured computer side; Black plays at `black`.
fn play_game(
    config: &GameConfig,
    black: Difficulty,
    selector: &MoveSelector,
    rng: &mut GameRng,
) -> Result<StackOthello, Box<dyn std::error::Error>> {
    let mut game = StackOthello::new(config.clone())?;

    while !game.is_over() {
        let color = game.current_turn();
        let difficulty = if game.is_cpu_turn() {
            game.difficulty()
        } else {
            black
        };
        match selector.select_move(game.state(), color, difficulty, rng) {
            Some(pos) => {
                game.place(pos.x as i32, pos.y as i32, color)?;
            }
            None => {
                game.pass(color)?;
            }
        }
    }

    Ok(game)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = GameConfig::new(BoardSize::try_from(args.size)?)
        .with_max_stack_height(args.max_stack)
        .with_cpu(Color::White)
        .with_difficulty(args.white);
    config.validate()?;

    println!(
        "{} board, max stack {}: Black={} vs White={}, {} games (seed {})",
        config.board_size,
        config.max_stack_height,
        args.black,
        config.difficulty,
        args.games,
        args.seed
    );

    let selector = MoveSelector::new();
    let mut master = GameRng::new(args.seed);
    let mut tally = Tally::default();

    for i in 0..args.games {
        let mut rng = master.fork();
        let game = play_game(&config, args.black, &selector, &mut rng)?;

        let black = game.count_discs(Color::Black);
        let white = game.count_discs(Color::White);
        let result = game.winner().unwrap_or(GameResult::Draw);
        match result {
            GameResult::Winner(Color::Black) => tally.black += 1,
            GameResult::Winner(Color::White) => tally.white += 1,
            GameResult::Draw => tally.draws += 1,
        }

        println!(
            "game {:>3}: {:<11} Black={:<3} White={:<3} plies={}",
            i + 1,
            result.to_string(),
            black,
            white,
            game.state().ply()
        );
        if args.show_board {
            println!("{}", game.board());
        }
    }

    println!(
        "Summary: Black wins {}, White wins {}, draws {}",
        tally.black, tally.white, tally.draws
    );
    Ok(())
}
