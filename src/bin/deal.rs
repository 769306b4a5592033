use clap::Parser;
use mahjong_solitaire::draw::draw_order;
use mahjong_solitaire::engine::selectable_positions;
use mahjong_solitaire::generator::generate_deal;
use mahjong_solitaire::layout::Layout;
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

    println!(
        "Layout: {} ({} rows x {} cols)\n",
        layout.name(),
        layout.row_count(),
        layout.col_count()
    );
    println!("{}\n", deal.board);
    println!("Chips placed: {}", deal.board.chip_count());
    println!(
        "Selectable now: {}",
        selectable_positions(&deal.board).len()
    );

    match draw_order(&deal.board.occupied_positions()) {
        Ok(order) => println!("Draw order spans {} tiles", order.len()),
        Err(e) => eprintln!("Draw ordering failed: {}", e),
    }
}
