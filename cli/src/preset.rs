use clap::ValueEnum;
use swooper_core::{Coord, GameConfig, HunterMode};

/// Menu difficulty presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Easy,
    Medium,
    Hard,
    Cave,
    Hunter,
    Cavehunter,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PresetValues {
    pub cols: Coord,
    pub rows: Coord,
    pub mine_chance: f64,
    pub vision_radius: Option<Coord>,
    pub hunter: HunterMode,
}

impl Preset {
    pub const fn values(self) -> PresetValues {
        use Preset::*;
        let (cols, rows, mine_chance, vision_radius, hunter) = match self {
            Easy => (8, 8, 0.10, None, HunterMode::Disabled),
            Medium => (12, 12, 0.15, None, HunterMode::Disabled),
            Hard => (16, 16, 0.20, None, HunterMode::Disabled),
            Cave => (24, 24, 0.25, Some(3), HunterMode::Disabled),
            Hunter => (16, 16, 0.20, None, HunterMode::Hunter),
            Cavehunter => (24, 24, 0.25, Some(3), HunterMode::CaveHunter),
        };
        PresetValues {
            cols,
            rows,
            mine_chance,
            vision_radius,
            hunter,
        }
    }
}

impl PresetValues {
    pub fn config(&self) -> swooper_core::Result<GameConfig> {
        Ok(GameConfig::new(self.cols, self.rows, self.mine_chance)?
            .with_vision_radius(self.vision_radius)
            .with_hunter(self.hunter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_is_valid() {
        for preset in Preset::value_variants() {
            let config = preset.values().config().unwrap();
            assert!(config.total_cells() > 0);
        }
    }

    #[test]
    fn cave_presets_have_fog() {
        assert_eq!(Preset::Cave.values().vision_radius, Some(3));
        assert_eq!(Preset::Cavehunter.values().hunter, HunterMode::CaveHunter);
        assert_eq!(Preset::Hard.values().vision_radius, None);
    }
}
