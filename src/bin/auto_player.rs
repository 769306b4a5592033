use clap::Parser;
use mahjong_solitaire::generator::generate_deal;
use mahjong_solitaire::layout::Layout;
use mahjong_solitaire::solver::solve;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Layout to generate: turtle, garden or ziggurat
    #[clap(short, long, default_value = "turtle")]
    layout: String,

    /// Seed for deterministic generation; a random board when omitted
    #[clap(short, long)]
    seed: Option<u64>,

    /// Re-solve the board from scratch instead of replaying the removal
    /// order the generator found
    #[clap(long)]
    resolve: bool,
}

fn main() {
    let args = Args::parse();

    let layout = match Layout::by_name(&args.layout) {
        Some(layout) => layout,
        None => {
            eprintln!(
                "Unknown layout '{}'. Available layouts: turtle, garden, ziggurat.",
                args.layout
            );
            std::process::exit(1);
        }
    };

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let deal = match generate_deal(&layout, &mut rng) {
        Ok(deal) => deal,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Initial board ({}):\n{}\n", layout.name(), deal.board);

    let removals = if args.resolve {
        println!("Searching for a winning sequence...\n");
        match solve(&deal.board) {
            Some(solution) => solution.removals,
            None => {
                eprintln!("No winning sequence found.");
                std::process::exit(1);
            }
        }
    } else {
        deal.removals.clone()
    };

    let mut board = deal.board.clone();
    for (i, &(a, b)) in removals.iter().enumerate() {
        let code = |pos| {
            board
                .get(pos)
                .map(|chip| chip.code())
                .unwrap_or_else(|| "??".to_string())
        };
        println!("Move {:>2}: {} at {}  +  {} at {}", i + 1, code(a), a, code(b), b);
        board.set(a, None);
        board.set(b, None);
    }

    println!("\nChips remaining: {}", board.chip_count());
}
