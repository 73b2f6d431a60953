// src/board/store.rs
use super::error::BoardError;
use super::frame::{Frame, PlayerMark, Team};
use crate::math::types::Point2D;
use bevy::log::{info, warn};
use bevy::prelude::Resource;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Lesender Zugriff auf die zeitindizierten Positionen.
pub trait FrameSource {
    /// Gespeicherter Frame für genau diesen Zeitpunkt, sonst der Default-Frame.
    fn positions_at(&self, time: i64) -> Frame;
    /// Größter vorhandener Zeitpunkt.
    fn max_time(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RowKind {
    Team1,
    Team2,
    Ball,
}

#[derive(Debug, Deserialize)]
struct PositionRow {
    time: i64,
    team: RowKind,
    player_id: Option<u32>,
    x: i32,
    y: i32,
}

/// Alle Frames des Datensatzes, nach dem Laden unveränderlich.
#[derive(Resource, Debug, Clone)]
pub struct FrameStore {
    frames: BTreeMap<i64, Frame>,
    max_time: i64,
}

impl FrameStore {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(file)?;
        info!(
            "Loaded {} frames from {} (max time {}).",
            store.frame_count(),
            path.display(),
            store.max_time
        );
        Ok(store)
    }

    /// Liest `time,team,player_id,x,y`. Der erste fehlerhafte Datensatz bricht ab.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BoardError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers().map_err(csv_error)?.clone();
        let mut frames: BTreeMap<i64, Frame> = BTreeMap::new();
        let mut balls: BTreeMap<i64, Point2D> = BTreeMap::new();
        let mut record = csv::StringRecord::new();

        while reader.read_record(&mut record).map_err(csv_error)? {
            let line = record.position().map_or(0, |p| p.line());
            let row: PositionRow = record
                .deserialize(Some(&headers))
                .map_err(|e| BoardError::DataFormat {
                    line,
                    reason: e.to_string(),
                })?;

            let position = Point2D::new(row.x as f32, row.y as f32);
            let frame = frames.entry(row.time).or_default();
            let team = match row.team {
                RowKind::Team1 => Team::Team1,
                RowKind::Team2 => Team::Team2,
                RowKind::Ball => {
                    // mehrfache Ballzeilen: die letzte gilt
                    balls.insert(row.time, position);
                    continue;
                }
            };
            let id = row.player_id.ok_or_else(|| BoardError::DataFormat {
                line,
                reason: format!("{} row without player_id", team.label()),
            })?;
            frame.roster_mut(team).push(PlayerMark { id, team, position });
        }

        let Some(&max_time) = frames.keys().next_back() else {
            return Err(BoardError::EmptyDataset);
        };

        for (time, frame) in frames.iter_mut() {
            match balls.get(time) {
                Some(ball) => frame.ball = *ball,
                None => warn!("No ball row for time {time}, ball placed at the origin."),
            }
        }

        Ok(Self { frames, max_time })
    }

    /// Anzahl der Zeitpunkte mit mindestens einer Zeile.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for FrameStore {
    fn positions_at(&self, time: i64) -> Frame {
        self.frames.get(&time).cloned().unwrap_or_default()
    }

    fn max_time(&self) -> i64 {
        self.max_time
    }
}

fn csv_error(error: csv::Error) -> BoardError {
    let line = error.position().map_or(0, |p| p.line());
    BoardError::DataFormat {
        line,
        reason: error.to_string(),
    }
}
