// src/board/state.rs
use bevy::log::{debug, info};
use bevy::prelude::{Event, Resource};

use super::frame::{Frame, PlayerKey};
use super::store::FrameSource;
use crate::math::types::Point2D;
use crate::math::utils::simple_geometry::within_radius;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKey {
    TogglePause,
    StepForward,
    StepBackward,
}

/// Eingaben, die der Controller pro Frame in Eingangsreihenfolge verarbeitet.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum BoardEvent {
    PointerDown(Point2D),
    PointerMove(Point2D),
    PointerUp,
    Key(BoardKey),
    /// Sprung auf einen Zeitpunkt (Zeitleiste), wird auf `0..=max_time` begrenzt.
    Seek(i64),
    /// Automatischer Schritt des Wiedergabetakts.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    #[default]
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Player(PlayerKey),
    Ball,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    pub time: i64,
    pub mode: PlaybackMode,
    pub drag: DragState,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }
}

/// Trefferradien für den Treffertest beim Drücken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRadii {
    pub player: f32,
    pub ball: f32,
}

/// Wiedergabezustand plus die Arbeitskopie des aktuell angezeigten Frames.
///
/// Zieh-Änderungen landen nur in `frame` und gehen beim nächsten Zeitwechsel
/// verloren; der [`FrameSource`] wird nie beschrieben.
#[derive(Resource, Debug, Clone)]
pub struct TacticsBoard {
    state: PlaybackState,
    frame: Frame,
    radii: HitRadii,
    /// Zählt jede Änderung an `frame`, damit abhängige Daten wissen, wann sie veraltet sind.
    revision: u64,
}

impl TacticsBoard {
    /// Startet bei Zeit 0 im Modus `Playing`.
    pub fn new(store: &impl FrameSource, radii: HitRadii) -> Self {
        Self {
            state: PlaybackState::default(),
            frame: store.positions_at(0),
            radii,
            revision: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn time(&self) -> i64 {
        self.state.time
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn handle(&mut self, event: BoardEvent, store: &impl FrameSource) {
        match event {
            BoardEvent::Key(BoardKey::TogglePause) => self.toggle_pause(),
            BoardEvent::Key(BoardKey::StepForward) => self.step(1, store),
            BoardEvent::Key(BoardKey::StepBackward) => self.step(-1, store),
            BoardEvent::Tick => {
                if self.is_playing() {
                    self.step(1, store);
                }
            }
            BoardEvent::Seek(time) => self.seek(time, store),
            BoardEvent::PointerDown(position) => self.press(position),
            BoardEvent::PointerMove(position) => self.drag_to(position),
            BoardEvent::PointerUp => self.release(),
        }
    }

    pub fn toggle_pause(&mut self) {
        self.state.mode = match self.state.mode {
            PlaybackMode::Playing => PlaybackMode::Paused,
            PlaybackMode::Paused => PlaybackMode::Playing,
        };
        info!("Playback {:?} at t = {}.", self.state.mode, self.state.time);
    }

    /// Verschiebt die Zeit um `delta`, mit Umlauf an beiden Enden.
    pub fn step(&mut self, delta: i64, store: &impl FrameSource) {
        let max_time = store.max_time();
        let mut time = self.state.time + delta;
        if time > max_time {
            time = 0;
        } else if time < 0 {
            time = max_time;
        }
        self.load(time, store);
    }

    pub fn seek(&mut self, time: i64, store: &impl FrameSource) {
        self.load(time.clamp(0, store.max_time().max(0)), store);
    }

    fn load(&mut self, time: i64, store: &impl FrameSource) {
        self.state.time = time;
        self.frame = store.positions_at(time);
        self.revision += 1;
        debug!("Board time set to {time}.");
    }

    /// Treffertest in fester Reihenfolge: Team 1, Team 2, Ball. Der erste Treffer gewinnt.
    pub fn hit_test(&self, position: Point2D) -> Option<DragTarget> {
        self.frame
            .players()
            .find(|(_, mark)| within_radius(position, mark.position, self.radii.player))
            .map(|(key, _)| DragTarget::Player(key))
            .or_else(|| {
                within_radius(position, self.frame.ball, self.radii.ball).then_some(DragTarget::Ball)
            })
    }

    fn press(&mut self, position: Point2D) {
        if let Some(target) = self.hit_test(position) {
            info!("Dragging {target:?}.");
            self.state.drag = DragState::Dragging(target);
        }
    }

    fn drag_to(&mut self, position: Point2D) {
        let DragState::Dragging(target) = self.state.drag else {
            return;
        };
        let moved = match target {
            DragTarget::Player(key) => self.frame.move_player(key, position),
            DragTarget::Ball => {
                self.frame.ball = position;
                true
            }
        };
        if moved {
            self.revision += 1;
        }
    }

    fn release(&mut self) {
        if let DragState::Dragging(target) = self.state.drag {
            debug!("Released {target:?}.");
        }
        self.state.drag = DragState::Idle;
    }

    /// Kurzbeschreibung des Zieh-Ziels für das Bedienfeld.
    pub fn drag_label(&self) -> String {
        match self.state.drag {
            DragState::Idle => "-".to_string(),
            DragState::Dragging(DragTarget::Ball) => "ball".to_string(),
            DragState::Dragging(DragTarget::Player(key)) => match self.frame.player(key) {
                Some(mark) => format!("{} #{}", key.team.label(), mark.id),
                None => format!("{} [{}]", key.team.label(), key.index),
            },
        }
    }
}
