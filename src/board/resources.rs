use bevy::prelude::*;
use std::path::PathBuf;

use crate::math::geometry::voronoi::VoronoiConfig;
use crate::math::types::Point2D;

use super::frame::Team;
use super::state::HitRadii;

#[derive(Resource, Debug, Clone)]
pub struct BoardParameters {
    // --- Spielfeld ---
    pub pitch_width: f32,
    pub pitch_height: f32,
    pub anchor_inset: f32,
    pub centre_circle_radius: f32,
    pub goal_box_size: Vec2,
    pub line_width: f32,

    // --- Marker ---
    pub player_radius: f32,
    pub ball_radius: f32,
    pub anchor_radius: f32,
    pub label_font_size: f32,

    // --- Territorium ---
    pub stripe_pitch: f32,
    pub show_territory: bool,
    pub show_ridges: bool,
    pub clip_cells_to_anchors: bool,

    // --- Farben ---
    pub pitch_color: Color,
    pub line_color: Color,
    pub team1_color: Color,
    pub team2_color: Color,
    pub ball_color: Color,
    pub anchor_color: Color,
    pub ridge_color: Color,

    // --- Wiedergabe & Dateien ---
    pub playback_hz: f32,
    pub data_path: PathBuf,
    pub export_dir: PathBuf,
}

impl Default for BoardParameters {
    fn default() -> Self {
        Self {
            // Spielfeld
            pitch_width: 1200.0,
            pitch_height: 800.0,
            anchor_inset: 50.0,
            centre_circle_radius: 100.0,
            goal_box_size: Vec2::new(20.0, 100.0),
            line_width: 2.0,

            // Marker
            player_radius: 17.0,
            ball_radius: 10.0,
            anchor_radius: 5.0,
            label_font_size: 25.0,

            // Territorium
            stripe_pitch: 20.0,
            show_territory: true,
            show_ridges: true,
            clip_cells_to_anchors: false,

            // Farben
            pitch_color: Color::rgb_u8(34, 177, 76),
            line_color: Color::rgb_u8(255, 255, 255),
            team1_color: Color::rgb_u8(0, 0, 255),
            team2_color: Color::rgb_u8(255, 0, 0),
            ball_color: Color::rgb_u8(255, 255, 0),
            anchor_color: Color::rgb_u8(150, 150, 150),
            ridge_color: Color::rgb_u8(0, 0, 0),

            // Wiedergabe & Dateien
            playback_hz: 1.0,
            data_path: PathBuf::from("game_data.csv"),
            export_dir: PathBuf::from("exports"),
        }
    }
}

impl BoardParameters {
    /// Randanker mit `anchor_inset` Abstand zu den Fensterecken.
    pub fn voronoi_config(&self) -> VoronoiConfig {
        VoronoiConfig::from_pitch(self.pitch_width, self.pitch_height, self.anchor_inset)
            .with_clipping(self.clip_cells_to_anchors)
    }

    pub fn hit_radii(&self) -> HitRadii {
        HitRadii {
            player: self.player_radius,
            ball: self.ball_radius,
        }
    }

    pub fn team_color(&self, team: Team) -> Color {
        match team {
            Team::Team1 => self.team1_color,
            Team::Team2 => self.team2_color,
        }
    }

    pub fn pitch_size(&self) -> Point2D {
        Point2D::new(self.pitch_width, self.pitch_height)
    }

    pub fn playback_period_secs(&self) -> f32 {
        if self.playback_hz > 0.0 {
            1.0 / self.playback_hz
        } else {
            1.0
        }
    }
}

/// Taktgeber für das automatische Vorspulen während der Wiedergabe.
#[derive(Resource, Debug)]
pub struct PlaybackClock(pub Timer);

impl PlaybackClock {
    pub fn from_params(params: &BoardParameters) -> Self {
        Self(Timer::from_seconds(
            params.playback_period_secs(),
            TimerMode::Repeating,
        ))
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::from_params(&BoardParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_the_standard_board() {
        let params = BoardParameters::default();
        let config = params.voronoi_config();

        assert!(config.validate().is_ok());
        assert_eq!(config.anchors[0], Point2D::new(50.0, 50.0));
        assert_eq!(config.anchors[2], Point2D::new(1150.0, 750.0));
        assert!(!config.clip_to_anchors);
        assert_eq!(params.hit_radii(), HitRadii { player: 17.0, ball: 10.0 });
    }

    #[test]
    fn test_clock_period_follows_playback_rate() {
        let mut params = BoardParameters {
            playback_hz: 4.0,
            ..Default::default()
        };
        assert_eq!(params.playback_period_secs(), 0.25);

        params.playback_hz = 0.0;
        assert_eq!(params.playback_period_secs(), 1.0);
        let clock = PlaybackClock::from_params(&params);
        assert_eq!(clock.0.duration().as_secs_f32(), 1.0);
    }
}
