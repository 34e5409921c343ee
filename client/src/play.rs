use anyhow::Result;
use log::info;

use common::create_rng;
use engine::engine::GameEngine;
use engine::value::Value as ValueTrait;
use negamax::{Negamax, NegamaxOptions};
use reversi::{Action, Engine, GameState, PositionEvaluator};

use super::options::PlayOptions;

/// Interactive game on the terminal: the human enters cell indices, the
/// agent answers with a search, printing its score grid each turn.
pub fn play(options: &PlayOptions, search_options: NegamaxOptions) -> Result<()> {
    let game_engine = Engine::with_size(options.width, options.height);
    let evaluator = PositionEvaluator::new();
    let mut agent = Negamax::new(
        &game_engine,
        &evaluator,
        search_options,
        create_rng(options.seed),
    );

    let mut game_state = game_engine.initial_state();

    while !game_state.is_terminal() {
        println!("{}", game_state);

        let action = if game_state.player_to_move() == options.human_player {
            read_action(&game_state)?
        } else {
            let action = agent.choose_action(&game_state)?;
            if let (Some(details), Some(scores)) = (agent.search_details(), agent.root_scores()) {
                info!("{}", details);
                print_score_grid(&game_state, scores);
            }
            println!("Agent plays {}", action);
            action
        };

        let (step, _) = game_state.apply(action);
        if step.terminal {
            println!("{}", game_state);
            let outcome = &step.value;
            println!(
                "Game over. {} (O: {:.0}, X: {:.0})",
                winner_label(outcome),
                outcome.get_value_for_player(0),
                outcome.get_value_for_player(1)
            );
        }
    }

    Ok(())
}

pub fn winner_label(outcome: &reversi::Value) -> &'static str {
    let first = outcome.get_value_for_player(0);
    let second = outcome.get_value_for_player(1);

    match first.partial_cmp(&second) {
        Some(std::cmp::Ordering::Greater) => "O wins",
        Some(std::cmp::Ordering::Less) => "X wins",
        _ => "Tie",
    }
}

/// One fixed-width column per cell, blank where the mover has no legal
/// placement.
fn print_score_grid(game_state: &GameState, scores: &[f32]) {
    let board = game_state.board();
    let legal: Vec<usize> = game_state
        .legal_actions(game_state.player_to_move())
        .iter()
        .map(|action| action.index())
        .collect();

    for y in 0..board.height() as i32 {
        let mut line = String::from("|");
        for x in 0..board.width() as i32 {
            let index = board.index_of(x, y);
            if legal.contains(&index) {
                line.push_str(&format!("{:6.1}|", scores[index]));
            } else {
                line.push_str("      |");
            }
        }
        println!("{}", line);
    }
    println!();
}

/// Prompts until the input parses as an in-range cell index. An index
/// with no capture is accepted as-is; picking it forfeits the game.
fn read_action(game_state: &GameState) -> Result<Action> {
    let reader = std::io::stdin();

    loop {
        println!("Input the cell index to play:");
        let mut input = String::new();
        reader.read_line(&mut input)?;

        match input.trim().parse::<Action>() {
            Ok(action) if action.index() < game_state.board().cell_count() => return Ok(action),
            _ => println!("Not a cell index on this board: {}", input.trim()),
        }
    }
}
