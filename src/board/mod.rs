// src/board/mod.rs

pub mod error;
pub mod frame;
pub mod resources;
pub mod state;
pub mod store;
pub mod systems;
pub mod territory;

pub use error::BoardError;
pub use frame::{Frame, PlayerKey, PlayerMark, Team};
pub use resources::{BoardParameters, PlaybackClock};
pub use state::{
    BoardEvent, BoardKey, DragState, DragTarget, HitRadii, PlaybackMode, PlaybackState,
    TacticsBoard,
};
pub use store::{FrameSource, FrameStore};
pub use territory::TerritoryDiagram;
