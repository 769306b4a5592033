use mahjong_solitaire::game::Game;
use mahjong_solitaire::layout::Layout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::env;
use std::io::{self, Write}; // For input/output

fn main() {
    let layout_name = env::args().nth(1).unwrap_or_else(|| "turtle".to_string());
    let layout = match Layout::by_name(&layout_name) {
        Some(layout) => layout,
        None => {
            eprintln!(
                "Unknown layout '{}'. Available layouts: turtle, garden, ziggurat.",
                layout_name
            );
            return;
        }
    };

    let mut rng = SmallRng::from_entropy();
    let mut game = match Game::new(&layout, &mut rng) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Could not generate a board: {}", e);
            return;
        }
    };

    println!("Welcome to Mahjong Solitaire ({})!", layout.name());

    loop {
        println!("---------------------");
        println!("{}", game.board());
        println!(
            "Chips left: {}, selectable: {}",
            game.board().chip_count(),
            game.selectable().len()
        );

        if game.is_won() {
            println!();
            println!("---------------------");
            println!("🎉 YOU WON! 🎉");
            println!("---------------------");
            break;
        }

        if !game.has_moves() {
            println!();
            println!("---------------------");
            println!("No moves left. Game over.");
            println!("---------------------");
            break;
        }

        print!("Enter a match (r1 c1 r2 c2), 'h' for a hint, 'u' to undo, 'q' to quit: ");
        io::stdout().flush().unwrap(); // Ensure prompt is shown before input

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "u" {
            if game.undo_last_match() {
                println!("Match undone.");
            } else {
                println!("Cannot undo (no matches committed, or the game ended).");
            }
            continue;
        }

        if trimmed_input == "h" {
            match game.hint() {
                Some((a, b)) => println!("Try {} and {}.", a, b),
                None => println!("No matching pair available."),
            }
            continue;
        }

        // Try to parse as two coordinate pairs
        let numbers: Vec<i32> = trimmed_input
            .split_whitespace()
            .filter_map(|part| part.parse().ok())
            .collect();
        if numbers.len() != 4 {
            println!("Invalid input format. Use 'r1 c1 r2 c2', 'h', 'u', or 'q'.");
            continue;
        }

        let first = game.selectable_at(numbers[0], numbers[1]);
        let second = game.selectable_at(numbers[2], numbers[3]);
        match (first, second) {
            (Some(a), Some(b)) => {
                if game.try_match(a, b) {
                    println!("Match removed.");
                } else {
                    println!("Those tiles do not match.");
                }
            }
            _ => {
                println!("One of those stacks is not selectable right now.");
            }
        }
    }
}
