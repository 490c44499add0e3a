//! Headless driver - line-delimited JSON over any reader/writer pair
//!
//! The binary wires this to stdin/stdout. Each non-blank input line is one
//! [`Request`]; each produces exactly one [`Response`] line. Malformed input
//! becomes an `invalid_request` error and the loop keeps going.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::config::AdapterConfig;
use crate::core::{Game, GemGenerator};
use crate::log::{EffectLog, LogRecord};
use crate::protocol::{effects_to_wire, ErrorCode, MoveWire, Request, Response};
use crate::snapshot::GameSnapshot;
use crate::types::{Gem, Position};

pub type GemGame = Game<Gem, GemGenerator>;

/// Pull `seq` out of a line that failed to parse as a request
fn extract_seq_best_effort(line: &str) -> Option<u64> {
    let start = line.find("\"seq\"")?;
    let after_key = &line[start + 5..];
    let colon = after_key.find(':')?;
    let rest = after_key[colon + 1..].trim_start();
    let end = rest.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    rest[..end].parse::<u64>().ok()
}

pub struct Driver {
    config: AdapterConfig,
    base_seed: u32,
    games_started: u32,
    game: Option<GemGame>,
    log: Option<EffectLog>,
}

impl Driver {
    /// `seed` seeds the first game started without an explicit seed; later
    /// ones count up from it.
    pub fn new(config: AdapterConfig, seed: u32) -> Self {
        let log = config.log_path.as_deref().and_then(|path| match EffectLog::open(path) {
            Ok(log) => Some(log),
            Err(e) => {
                eprintln!("[match3] effect log disabled: {:#}", e);
                None
            }
        });

        Self {
            config,
            base_seed: seed,
            games_started: 0,
            game: None,
            log,
        }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn game(&self) -> Option<&GemGame> {
        self.game.as_ref()
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Handle one input line; blank lines produce no response
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match serde_json::from_str::<Request>(line) {
            Ok(request) => Some(self.handle_request(request)),
            Err(e) => Some(Response::error(
                extract_seq_best_effort(line),
                ErrorCode::InvalidRequest,
                format!("invalid request: {}", e),
            )),
        }
    }

    pub fn handle_request(&mut self, request: Request) -> Response {
        match request {
            Request::NewGame { seq, seed } => {
                let seed = seed.unwrap_or_else(|| self.base_seed.wrapping_add(self.games_started));
                self.games_started += 1;
                let game = Game::new(GemGenerator::new(seed), self.config.rules());
                eprintln!(
                    "[match3] new game #{} seed={} {}x{}",
                    self.games_started,
                    seed,
                    self.config.width,
                    self.config.height
                );
                let snapshot = GameSnapshot::capture(&game);
                self.game = Some(game);
                Response::Snapshot { seq, game: snapshot }
            }
            Request::Move { seq, from, to } => self.handle_move(seq, from.into(), to.into()),
            Request::Snapshot { seq } => match self.game.as_ref() {
                Some(game) => Response::Snapshot {
                    seq,
                    game: GameSnapshot::capture(game),
                },
                None => no_game(seq),
            },
            Request::Hint { seq } => match self.game.as_ref() {
                Some(game) => Response::Hint {
                    seq,
                    mv: game.hint().map(MoveWire::from),
                },
                None => no_game(seq),
            },
            Request::End { seq } => match self.game.as_mut() {
                Some(game) => {
                    game.end();
                    Response::Snapshot {
                        seq,
                        game: GameSnapshot::capture(game),
                    }
                }
                None => no_game(seq),
            },
        }
    }

    fn handle_move(&mut self, seq: u64, from: Position, to: Position) -> Response {
        let Some(game) = self.game.as_mut() else {
            return no_game(seq);
        };

        let Some(outcome) = game.make_move(from, to) else {
            let message = if game.is_completed() {
                "game has ended"
            } else {
                "no moves left"
            };
            return Response::error(Some(seq), ErrorCode::GameOver, message);
        };

        let effects = effects_to_wire(&outcome.effects);
        if let Some(log) = self.log.as_mut() {
            log.append(&LogRecord {
                seq,
                accepted: outcome.accepted,
                passes: outcome.passes,
                score: game.score(),
                effects: effects.clone(),
            });
        }

        Response::MoveResult {
            seq,
            accepted: outcome.accepted,
            passes: outcome.passes,
            effects,
            game: GameSnapshot::capture(game),
        }
    }

    /// Serve requests until `input` is exhausted
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read request line")?;
            let Some(response) = self.handle_line(&line) else {
                continue;
            };
            serde_json::to_writer(&mut output, &response).context("failed to encode response")?;
            output.write_all(b"\n").context("failed to write response")?;
            output.flush().context("failed to flush response")?;
        }
        Ok(())
    }
}

fn no_game(seq: u64) -> Response {
    Response::error(Some(seq), ErrorCode::NoGame, "no game in progress; send new_game first")
}
