// src/board/frame.rs
use crate::math::types::Point2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    Team1,
    Team2,
}

impl Team {
    /// Reihenfolge, in der Kader durchlaufen werden (Treffertest, Besitz-Gleichstand).
    pub const ALL: [Team; 2] = [Team::Team1, Team::Team2];

    pub fn label(&self) -> &'static str {
        match self {
            Team::Team1 => "team1",
            Team::Team2 => "team2",
        }
    }
}

/// Eindeutiger Schlüssel eines Spielers innerhalb eines Frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerKey {
    pub team: Team,
    /// Position im Kader (Reihenfolge des Datensatzes).
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerMark {
    /// Über alle Zeitpunkte stabile Spieler-ID.
    pub id: u32,
    pub team: Team,
    pub position: Point2D,
}

/// Positionen aller Spieler und des Balls zu einem Zeitpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub team1: Vec<PlayerMark>,
    pub team2: Vec<PlayerMark>,
    pub ball: Point2D,
}

impl Default for Frame {
    /// Leere Kader, Ball im Ursprung. Wird für Zeitpunkte ohne Daten verwendet.
    fn default() -> Self {
        Self {
            team1: Vec::new(),
            team2: Vec::new(),
            ball: Point2D::ZERO,
        }
    }
}

impl Frame {
    pub fn roster(&self, team: Team) -> &[PlayerMark] {
        match team {
            Team::Team1 => &self.team1,
            Team::Team2 => &self.team2,
        }
    }

    pub fn roster_mut(&mut self, team: Team) -> &mut Vec<PlayerMark> {
        match team {
            Team::Team1 => &mut self.team1,
            Team::Team2 => &mut self.team2,
        }
    }

    pub fn player(&self, key: PlayerKey) -> Option<&PlayerMark> {
        self.roster(key.team).get(key.index)
    }

    /// Alle Spieler, erst Team 1 dann Team 2, jeweils in Datensatz-Reihenfolge.
    pub fn players(&self) -> impl Iterator<Item = (PlayerKey, &PlayerMark)> + '_ {
        Team::ALL.into_iter().flat_map(move |team| {
            self.roster(team)
                .iter()
                .enumerate()
                .map(move |(index, mark)| (PlayerKey { team, index }, mark))
        })
    }

    pub fn player_count(&self) -> usize {
        self.team1.len() + self.team2.len()
    }

    /// Spielerpositionen mit Schlüssel, in der Reihenfolge von [`Frame::players`].
    pub fn keyed_positions(&self) -> Vec<(PlayerKey, Point2D)> {
        self.players().map(|(key, mark)| (key, mark.position)).collect()
    }

    /// Ändert nur die Koordinaten; ID und Team bleiben erhalten.
    pub fn move_player(&mut self, key: PlayerKey, position: Point2D) -> bool {
        match self.roster_mut(key.team).get_mut(key.index) {
            Some(mark) => {
                mark.position = position;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(id: u32, team: Team, x: f32, y: f32) -> PlayerMark {
        PlayerMark {
            id,
            team,
            position: Point2D::new(x, y),
        }
    }

    #[test]
    fn test_players_iterate_team1_first() {
        let frame = Frame {
            team1: vec![mark(7, Team::Team1, 1.0, 1.0), mark(9, Team::Team1, 2.0, 2.0)],
            team2: vec![mark(4, Team::Team2, 3.0, 3.0)],
            ball: Point2D::new(5.0, 5.0),
        };

        let keys: Vec<_> = frame.players().map(|(key, mark)| (key, mark.id)).collect();
        assert_eq!(
            keys,
            vec![
                (PlayerKey { team: Team::Team1, index: 0 }, 7),
                (PlayerKey { team: Team::Team1, index: 1 }, 9),
                (PlayerKey { team: Team::Team2, index: 0 }, 4),
            ]
        );
        assert_eq!(frame.player_count(), 3);
    }

    #[test]
    fn test_move_player_keeps_identity() {
        let mut frame = Frame {
            team1: Vec::new(),
            team2: vec![mark(11, Team::Team2, 10.0, 10.0)],
            ball: Point2D::ZERO,
        };
        let key = PlayerKey { team: Team::Team2, index: 0 };

        assert!(frame.move_player(key, Point2D::new(40.0, 50.0)));
        let moved = frame.player(key).unwrap();
        assert_eq!(moved.position, Point2D::new(40.0, 50.0));
        assert_eq!(moved.id, 11);
        assert_eq!(moved.team, Team::Team2);

        let missing = PlayerKey { team: Team::Team1, index: 0 };
        assert!(!frame.move_player(missing, Point2D::ZERO));
    }

    #[test]
    fn test_default_frame_is_empty_with_ball_at_origin() {
        let frame = Frame::default();
        assert_eq!(frame.player_count(), 0);
        assert_eq!(frame.ball, Point2D::ZERO);
    }
}
