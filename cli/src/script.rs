use anyhow::{Context, bail};
use swooper_core::{Direction, GameState, RevealOutcome};

/// One driver event: a player intent or a timer firing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Reveal,
    Flag,
    ElapsedTick,
    HunterTick,
}

impl Action {
    fn from_token(token: char) -> Option<Self> {
        Some(match token.to_ascii_lowercase() {
            'u' => Self::Move(Direction::Up),
            'd' => Self::Move(Direction::Down),
            'l' => Self::Move(Direction::Left),
            'r' => Self::Move(Direction::Right),
            'x' => Self::Reveal,
            'f' => Self::Flag,
            't' => Self::ElapsedTick,
            'h' => Self::HunterTick,
            _ => return None,
        })
    }
}

/// Parses a script such as `"rrdx f t h"`. Whitespace is ignored.
pub fn parse(script: &str) -> anyhow::Result<Vec<Action>> {
    let mut actions = Vec::with_capacity(script.len());
    for (position, token) in script.chars().enumerate() {
        if token.is_whitespace() {
            continue;
        }
        match Action::from_token(token) {
            Some(action) => actions.push(action),
            None => bail!("Unknown script token {token:?} at position {position}"),
        }
    }
    Ok(actions)
}

/// Feeds `actions` into `game` until they run out or the game ends. Returns how many were applied.
pub fn run(game: &mut GameState, actions: &[Action]) -> anyhow::Result<usize> {
    let mut applied = 0;
    for (index, &action) in actions.iter().enumerate() {
        if game.is_finished() {
            log::info!("Game ended, skipping {} remaining actions", actions.len() - index);
            break;
        }
        apply(game, action).with_context(|| format!("Action #{index} ({action:?}) failed"))?;
        applied += 1;
    }
    Ok(applied)
}

fn apply(game: &mut GameState, action: Action) -> anyhow::Result<()> {
    match action {
        Action::Move(direction) => {
            if !game.move_player(direction)?.has_update() {
                log::debug!("Blocked moving {direction:?} at {:?}", game.player());
            }
        }
        Action::Reveal => {
            let outcome = game.reveal_at_player()?;
            if !outcome.has_update() {
                log::debug!("Nothing to reveal at {:?}", game.player());
            } else if outcome == RevealOutcome::HitMine {
                log::info!("Stepped on a mine at {:?}", game.player());
            }
        }
        Action::Flag => {
            if !game.toggle_flag_at_player()?.has_update() {
                log::debug!("Cannot flag revealed cell at {:?}", game.player());
            }
        }
        Action::ElapsedTick => game.elapsed_tick(),
        Action::HunterTick => {
            if game.hunter_tick().is_captured() {
                log::info!("Hunter caught the player at {:?}", game.player());
            }
        }
    }
    Ok(())
}
