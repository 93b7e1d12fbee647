use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Why a game was lost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    Mine,
    Captured,
}

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost(LossCause),
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A game from start to finish: board, player, optional hunter and clock.
///
/// The state never reads a wall clock; the driver calls [`GameState::elapsed_tick`] and
/// [`GameState::hunter_tick`] on its own schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    grid: Grid,
    player: Coord2,
    hunter: Option<Hunter>,
    hunter_mode: HunterMode,
    vision_radius: Option<Coord>,
    elapsed_seconds: u32,
    first_click_done: bool,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl GameState {
    /// Starts a game on a randomly generated board, player in the top-left corner.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let generator = BernoulliGenerator::new(config.mine_chance)?;
        Self::with_generator(config, &generator, rng)
    }

    /// Starts a game on a board produced by `generator`. `config.mine_chance` is not used.
    pub fn with_generator<G, R>(config: GameConfig, generator: &G, rng: &mut R) -> Result<Self>
    where
        G: GridGenerator,
        R: Rng + ?Sized,
    {
        let grid = generator.generate(config.size, rng)?;
        let player = (0, 0);
        let hunter = if config.hunter.is_enabled() {
            Some(Hunter::spawn(config.size, player, rng)?)
        } else {
            None
        };

        log::debug!(
            "New game {}x{}, vision {:?}, hunter {:?}",
            config.size.0,
            config.size.1,
            config.vision_radius,
            config.hunter
        );

        Ok(Self {
            grid,
            player,
            hunter,
            hunter_mode: config.hunter,
            vision_radius: config.vision_radius,
            elapsed_seconds: 0,
            first_click_done: false,
            status: GameStatus::InProgress,
            triggered_mine: None,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn player(&self) -> Coord2 {
        self.player
    }

    pub fn hunter(&self) -> Option<&Hunter> {
        self.hunter.as_ref()
    }

    pub fn hunter_mode(&self) -> HunterMode {
        self.hunter_mode
    }

    pub fn vision_radius(&self) -> Option<Coord> {
        self.vision_radius
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// Whether the clock runs, i.e. the first reveal happened.
    pub fn is_clock_started(&self) -> bool {
        self.first_click_done
    }

    pub fn is_first_click_pending(&self) -> bool {
        !self.first_click_done
    }

    /// The mine that ended the game, if one did.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Mines minus flags. Goes negative with too many flags.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.grid.mine_count()) - i64::from(self.grid.flagged_count())
    }

    /// Fog of war: whether the player can see `coords`.
    pub fn is_cell_visible(&self, coords: Coord2) -> bool {
        match self.vision_radius {
            Some(radius) => within_radius(self.player, coords, radius),
            None => true,
        }
    }

    /// Whether the driver should show the hunter. Only the cave hunter hides in fog.
    pub fn is_hunter_visible(&self) -> bool {
        let Some(hunter) = &self.hunter else {
            return false;
        };
        match (self.hunter_mode.hides_in_fog(), self.vision_radius) {
            (true, Some(radius)) => hunter.is_within_sight(self.player, radius),
            _ => true,
        }
    }

    pub fn move_player(&mut self, direction: Direction) -> Result<MoveOutcome> {
        self.check_in_progress()?;

        let next = direction.step_clamped(self.player, self.grid.size());
        if next == self.player {
            return Ok(MoveOutcome::NoChange);
        }
        log::trace!("Player moved {:?} to {:?}", direction, next);
        self.player = next;
        Ok(MoveOutcome::Moved(next))
    }

    pub fn toggle_flag_at_player(&mut self) -> Result<MarkOutcome> {
        self.check_in_progress()?;
        Ok(self.grid.toggle_flag(self.player))
    }

    /// Reveals the cell under the player.
    ///
    /// The first effective reveal of the game can never hit a mine: a mine under the player is removed and the whole
    /// board's counts recomputed before opening the neighbourhood. It also starts the clock.
    pub fn reveal_at_player(&mut self) -> Result<RevealOutcome> {
        self.check_in_progress()?;

        let coords = self.player;
        if !self.grid[coords].is_revealable() {
            return Ok(RevealOutcome::NoChange);
        }

        let is_first_click = !self.first_click_done;
        if is_first_click {
            self.first_click_done = true;
            if self.grid.clear_mine(coords) {
                log::debug!("Cleared mine under first click at {:?}", coords);
            }
        }

        let outcome = reveal(&mut self.grid, coords, is_first_click);
        match outcome {
            RevealOutcome::HitMine => {
                self.triggered_mine = Some(coords);
                self.end_game(GameStatus::Lost(LossCause::Mine));
            }
            RevealOutcome::Safe => {
                if self.grid.all_safe_revealed() {
                    self.end_game(GameStatus::Won);
                }
            }
            RevealOutcome::NoChange => {}
        }
        Ok(outcome)
    }

    /// One second of game time. No-op before the first reveal and after the game ended.
    pub fn elapsed_tick(&mut self) {
        if self.first_click_done && !self.is_finished() {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        }
    }

    /// One hunter move. No-op without a hunter or after the game ended.
    pub fn hunter_tick(&mut self) -> CaptureStatus {
        if self.is_finished() {
            return CaptureStatus::Clear;
        }
        let Some(hunter) = self.hunter.as_mut() else {
            return CaptureStatus::Clear;
        };

        let status = hunter.step(self.player);
        if status.is_captured() {
            self.end_game(GameStatus::Lost(LossCause::Captured));
        }
        status
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(self)
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }
        log::debug!("Game ended: {:?} after {}s", status, self.elapsed_seconds);
        self.status = status;
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
