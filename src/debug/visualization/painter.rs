// src/debug/visualization/painter.rs
use bevy::prelude::*;

use crate::math::types::Point2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid,
    Outline,
}

/// Zeichenprimitive in Brett-Koordinaten (Pixel, Ursprung oben links, y nach unten).
pub trait BoardPainter {
    fn line(&mut self, start: Point2D, end: Point2D, color: Color);
    fn circle(&mut self, center: Point2D, radius: f32, color: Color, fill: Fill);
    /// Umriss eines achsenparallelen Rechtecks mit linker oberer Ecke `min`.
    fn rect(&mut self, min: Point2D, size: Vec2, color: Color);
    /// Text, zentriert auf `center`.
    fn text(&mut self, center: Point2D, content: &str, font_size: f32, color: Color);
}

/// Ein Text, der in diesem Frame als `Text2d` erscheinen soll.
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedLabel {
    pub world: Vec2,
    pub content: String,
    pub font_size: f32,
    pub color: Color,
}

#[derive(Resource, Debug, Default)]
pub struct LabelQueue(pub Vec<QueuedLabel>);

/// Markiert die wiederverwendeten Text-Entities der Beschriftungen.
#[derive(Component, Debug)]
pub struct BoardLabel;

/// Abstand der Ringe, mit denen gefüllte Kreise angenähert werden.
const RING_SPACING: f32 = 1.5;
const LABEL_Z: f32 = 10.0;

pub struct GizmoPainter<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    labels: &'a mut LabelQueue,
    board_size: Vec2,
}

impl<'a, 'w, 's> GizmoPainter<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, labels: &'a mut LabelQueue, board_size: Vec2) -> Self {
        Self {
            gizmos,
            labels,
            board_size,
        }
    }

    /// Brett-Pixel in Weltkoordinaten der zentrierten 2D-Kamera (y nach oben).
    pub fn to_world(&self, point: Point2D) -> Vec2 {
        board_to_world(point, self.board_size)
    }
}

pub fn board_to_world(point: Point2D, board_size: Vec2) -> Vec2 {
    Vec2::new(point.x - board_size.x / 2.0, board_size.y / 2.0 - point.y)
}

impl BoardPainter for GizmoPainter<'_, '_, '_> {
    fn line(&mut self, start: Point2D, end: Point2D, color: Color) {
        let (start, end) = (self.to_world(start), self.to_world(end));
        self.gizmos.line_2d(start, end, color);
    }

    fn circle(&mut self, center: Point2D, radius: f32, color: Color, fill: Fill) {
        let center = self.to_world(center);
        match fill {
            Fill::Outline => {
                self.gizmos.circle_2d(center, radius, color);
            }
            Fill::Solid => {
                let mut ring = radius;
                while ring > 0.0 {
                    self.gizmos.circle_2d(center, ring, color);
                    ring -= RING_SPACING;
                }
            }
        }
    }

    fn rect(&mut self, min: Point2D, size: Vec2, color: Color) {
        let center = self.to_world(min + size / 2.0);
        self.gizmos.rect_2d(center, 0.0, size, color);
    }

    fn text(&mut self, center: Point2D, content: &str, font_size: f32, color: Color) {
        let world = self.to_world(center);
        self.labels.0.push(QueuedLabel {
            world,
            content: content.to_string(),
            font_size,
            color,
        });
    }
}

/// Gleicht die `BoardLabel`-Entities mit der Warteschlange ab: vorhandene
/// werden umgeschrieben, fehlende gespawnt, überzählige entfernt.
pub fn sync_labels_system(
    mut commands: Commands,
    mut queue: ResMut<LabelQueue>,
    mut labels: Query<(Entity, &mut Text, &mut Transform), With<BoardLabel>>,
) {
    let mut pending = std::mem::take(&mut queue.0).into_iter();

    for (entity, mut text, mut transform) in labels.iter_mut() {
        match pending.next() {
            Some(label) => {
                *text = label_text(&label);
                transform.translation = label.world.extend(LABEL_Z);
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for label in pending {
        commands.spawn((
            Text2dBundle {
                text: label_text(&label),
                transform: Transform::from_translation(label.world.extend(LABEL_Z)),
                ..default()
            },
            BoardLabel,
        ));
    }
}

fn label_text(label: &QueuedLabel) -> Text {
    Text::from_section(
        label.content.clone(),
        TextStyle {
            font_size: label.font_size,
            color: label.color,
            ..default()
        },
    )
}

/// Zeichnet nichts, merkt sich aber jeden Aufruf.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub calls: Vec<PaintCall>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCall {
    Line { start: Point2D, end: Point2D, color: Color },
    Circle { center: Point2D, radius: f32, color: Color, fill: Fill },
    Rect { min: Point2D, size: Vec2, color: Color },
    Text { center: Point2D, content: String },
}

#[cfg(test)]
impl RecordingPainter {
    pub fn lines_with(&self, wanted: Color) -> Vec<(Point2D, Point2D)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PaintCall::Line { start, end, color } if *color == wanted => Some((*start, *end)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl BoardPainter for RecordingPainter {
    fn line(&mut self, start: Point2D, end: Point2D, color: Color) {
        self.calls.push(PaintCall::Line { start, end, color });
    }

    fn circle(&mut self, center: Point2D, radius: f32, color: Color, fill: Fill) {
        self.calls.push(PaintCall::Circle {
            center,
            radius,
            color,
            fill,
        });
    }

    fn rect(&mut self, min: Point2D, size: Vec2, color: Color) {
        self.calls.push(PaintCall::Rect { min, size, color });
    }

    fn text(&mut self, center: Point2D, content: &str, _font_size: f32, _color: Color) {
        self.calls.push(PaintCall::Text {
            center,
            content: content.to_string(),
        });
    }
}
