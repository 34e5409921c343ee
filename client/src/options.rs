use anyhow::Result;
use common::{Config, ConfigLoader};
use reversi::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

#[derive(Debug)]
pub struct PlayOptions {
    pub width: usize,
    pub height: usize,
    pub human_player: usize,
    pub seed: Option<u64>,
}

impl Config for PlayOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            width: config
                .get("width")
                .and_then(|v| v.as_usize())
                .unwrap_or(DEFAULT_BOARD_WIDTH),
            height: config
                .get("height")
                .and_then(|v| v.as_usize())
                .unwrap_or(DEFAULT_BOARD_HEIGHT),
            human_player: config
                .get("human_player")
                .and_then(|v| v.as_usize())
                .filter(|&player| player <= 1)
                .unwrap_or(0),
            seed: config.get("seed").and_then(|v| v.as_u64()),
        })
    }
}

#[derive(Debug)]
pub struct SelfPlayOptions {
    pub width: usize,
    pub height: usize,
    pub games: usize,
    pub seed: Option<u64>,
    pub record_path: Option<String>,
}

impl Config for SelfPlayOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            width: config
                .get("width")
                .and_then(|v| v.as_usize())
                .unwrap_or(DEFAULT_BOARD_WIDTH),
            height: config
                .get("height")
                .and_then(|v| v.as_usize())
                .unwrap_or(DEFAULT_BOARD_HEIGHT),
            games: config
                .get("games")
                .and_then(|v| v.as_usize())
                .unwrap_or(10),
            seed: config.get("seed").and_then(|v| v.as_u64()),
            record_path: config.get("record_path").and_then(|v| v.as_string()),
        })
    }
}
