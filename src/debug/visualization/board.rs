// src/debug/visualization/board.rs
use bevy::prelude::*;

use super::painter::{BoardPainter, Fill, GizmoPainter, LabelQueue};
use crate::board::{BoardParameters, Frame, TacticsBoard, TerritoryDiagram};
use crate::math::geometry::polygon::StripeFill;
use crate::math::types::{Bounds2D, Point2D};

/// Zeichnet das komplette Brett. Reihenfolge: Spielfeld, Anker, Spieler mit
/// Nummern, Ball, Schraffur der Regionen, Voronoi-Kanten.
pub fn paint_board(
    painter: &mut impl BoardPainter,
    frame: &Frame,
    territory: &TerritoryDiagram,
    params: &BoardParameters,
) {
    paint_pitch(painter, params);
    paint_markers(painter, frame, params);
    if params.show_territory {
        paint_territory(painter, territory, params);
    }
    if params.show_ridges {
        for ridge in &territory.ridges {
            painter.line(ridge.start, ridge.end, params.ridge_color);
        }
    }
}

fn paint_pitch(painter: &mut impl BoardPainter, params: &BoardParameters) {
    let inset = params.anchor_inset;
    let (width, height) = (params.pitch_width, params.pitch_height);
    let centre = Point2D::new(width / 2.0, height / 2.0);
    let goal = params.goal_box_size;

    painter.rect(
        Point2D::splat(inset),
        Vec2::new(width - 2.0 * inset, height - 2.0 * inset),
        params.line_color,
    );
    painter.circle(centre, params.centre_circle_radius, params.line_color, Fill::Outline);
    painter.line(
        Point2D::new(centre.x, inset),
        Point2D::new(centre.x, height - inset),
        params.line_color,
    );
    painter.rect(
        Point2D::new(inset, centre.y - goal.y / 2.0),
        goal,
        params.line_color,
    );
    painter.rect(
        Point2D::new(width - inset - goal.x, centre.y - goal.y / 2.0),
        goal,
        params.line_color,
    );

    for anchor in params.voronoi_config().anchors {
        painter.circle(anchor, params.anchor_radius, params.anchor_color, Fill::Solid);
    }
}

fn paint_markers(painter: &mut impl BoardPainter, frame: &Frame, params: &BoardParameters) {
    for (key, mark) in frame.players() {
        painter.circle(
            mark.position,
            params.player_radius,
            params.team_color(key.team),
            Fill::Solid,
        );
        painter.text(
            mark.position,
            &mark.id.to_string(),
            params.label_font_size,
            params.line_color,
        );
    }
    painter.circle(frame.ball, params.ball_radius, params.ball_color, Fill::Solid);
}

fn paint_territory(
    painter: &mut impl BoardPainter,
    territory: &TerritoryDiagram,
    params: &BoardParameters,
) {
    // Nur Scanlinien im sichtbaren Fenster; Zellen können weit hinausragen
    let window = Bounds2D::from_points(Point2D::ZERO, params.pitch_size());
    let fill = match StripeFill::new(params.stripe_pitch) {
        Ok(fill) => fill.within(window),
        Err(e) => {
            warn!("Territory fill skipped: {e}");
            return;
        }
    };
    for region in &territory.regions {
        let color = params.team_color(region.owner.team);
        for stripe in fill.segments(&region.polygon) {
            painter.line(stripe.start, stripe.end, color);
        }
    }
}

pub fn draw_board_system(
    mut gizmos: Gizmos,
    mut labels: ResMut<LabelQueue>,
    board: Res<TacticsBoard>,
    territory: Res<TerritoryDiagram>,
    params: Res<BoardParameters>,
) {
    labels.0.clear();
    let mut painter = GizmoPainter::new(&mut gizmos, &mut labels, params.pitch_size());
    paint_board(&mut painter, board.frame(), &territory, &params);
}
