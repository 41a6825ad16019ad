use bevy::prelude::*;

#[derive(States, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// nothing allocated yet
    #[default]
    Load,
    Running,
    Paused,
}
