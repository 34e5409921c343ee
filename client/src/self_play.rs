use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::time::Instant;

use anyhow::Result;
use log::info;
use serde::Serialize;

use common::create_rng;
use engine::engine::GameEngine;
use negamax::{Negamax, NegamaxOptions};
use reversi::{Action, Engine, PositionEvaluator, StoneCounts, Value};

use super::options::SelfPlayOptions;
use super::play::winner_label;

/// One finished game, written as a JSON line when a record path is
/// configured.
#[derive(Serialize, Debug)]
pub struct GameRecord {
    pub actions: Vec<Action>,
    pub outcome: Value,
    pub counts: StoneCounts,
}

/// Plays the configured number of agent-vs-agent games, logging a result
/// line per game.
pub fn play_self(options: &SelfPlayOptions, search_options: NegamaxOptions) -> Result<()> {
    let game_engine = Engine::with_size(options.width, options.height);
    let evaluator = PositionEvaluator::new();

    let mut agents = [0u64, 1].map(|player| {
        Negamax::new(
            &game_engine,
            &evaluator,
            search_options.clone(),
            create_rng(options.seed.map(|seed| seed.wrapping_add(player))),
        )
    });

    let mut writer = options
        .record_path
        .as_ref()
        .map(|path| -> Result<_> {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(BufWriter::new(file))
        })
        .transpose()?;

    let mut wins = [0usize; 2];
    for game_number in 1..=options.games {
        let started = Instant::now();
        let mut game_state = game_engine.initial_state();
        let mut actions = Vec::new();
        let mut visits = 0;

        let (outcome, counts) = loop {
            let mover = game_state.player_to_move();
            let action = agents[mover].choose_action(&game_state)?;
            visits += agents[mover].visits();
            actions.push(action);

            let (step, _) = game_state.apply(action);
            if step.terminal {
                break (step.value, step.info.unwrap_or(game_state.stone_counts()));
            }
        };

        for player in 0..2 {
            if outcome.0[player] > 0.0 {
                wins[player] += 1;
            }
        }

        info!(
            "game {}/{}: {}, stones {}/{}, {} moves, {} nodes, {:?}",
            game_number,
            options.games,
            winner_label(&outcome),
            counts.0[0],
            counts.0[1],
            actions.len(),
            visits,
            started.elapsed(),
        );

        if let Some(writer) = writer.as_mut() {
            let record = GameRecord {
                actions,
                outcome,
                counts,
            };
            writeln!(writer, "{}", serde_json::to_string(&record)?)?;
        }
    }

    if let Some(writer) = writer.as_mut() {
        writer.flush()?;
    }

    info!(
        "finished {} games: O won {}, X won {}, {} tied",
        options.games,
        wins[0],
        wins[1],
        options.games - wins[0] - wins[1]
    );

    Ok(())
}
