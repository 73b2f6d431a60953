// src/debug/visualization/svg.rs
use bevy::log::info;
use bevy::prelude::{Color, Vec2};
use std::path::{Path, PathBuf};
use svg::Document;
use svg::node::element::{Circle, Line, Rectangle, Text};

use super::board::paint_board;
use super::painter::{BoardPainter, Fill};
use crate::board::{BoardError, BoardParameters, Frame, TerritoryDiagram};
use crate::math::types::Point2D;

/// Sammelt die Zeichenaufrufe als SVG-Elemente. Brett-Koordinaten lassen sich
/// direkt übernehmen, da SVG ebenfalls y nach unten zählt.
pub struct SvgPainter {
    size: Vec2,
    background: Color,
    line_width: f32,
    nodes: Vec<Box<dyn svg::Node>>,
}

impl SvgPainter {
    pub fn new(size: Vec2, background: Color, line_width: f32) -> Self {
        Self {
            size,
            background,
            line_width,
            nodes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn into_document(self) -> Document {
        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", self.size.x)
            .set("height", self.size.y)
            .set("fill", css_color(self.background));

        self.nodes.into_iter().fold(
            Document::new()
                .set("width", self.size.x)
                .set("height", self.size.y)
                .set("viewBox", (0.0, 0.0, self.size.x, self.size.y))
                .add(background),
            |document, node| document.add(node),
        )
    }
}

impl BoardPainter for SvgPainter {
    fn line(&mut self, start: Point2D, end: Point2D, color: Color) {
        self.nodes.push(Box::new(
            Line::new()
                .set("x1", start.x)
                .set("y1", start.y)
                .set("x2", end.x)
                .set("y2", end.y)
                .set("stroke", css_color(color))
                .set("stroke-width", 1),
        ));
    }

    fn circle(&mut self, center: Point2D, radius: f32, color: Color, fill: Fill) {
        let circle = Circle::new()
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", radius);
        let circle = match fill {
            Fill::Solid => circle.set("fill", css_color(color)),
            Fill::Outline => circle
                .set("fill", "none")
                .set("stroke", css_color(color))
                .set("stroke-width", self.line_width),
        };
        self.nodes.push(Box::new(circle));
    }

    fn rect(&mut self, min: Point2D, size: Vec2, color: Color) {
        self.nodes.push(Box::new(
            Rectangle::new()
                .set("x", min.x)
                .set("y", min.y)
                .set("width", size.x)
                .set("height", size.y)
                .set("fill", "none")
                .set("stroke", css_color(color))
                .set("stroke-width", self.line_width),
        ));
    }

    fn text(&mut self, center: Point2D, content: &str, font_size: f32, color: Color) {
        self.nodes.push(Box::new(
            Text::new(content)
                .set("x", center.x)
                .set("y", center.y)
                .set("font-size", font_size)
                .set("font-family", "sans-serif")
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("fill", css_color(color)),
        ));
    }
}

fn css_color(color: Color) -> String {
    let [r, g, b, _] = color.as_rgba_u8();
    format!("rgb({r},{g},{b})")
}

/// Schreibt den angezeigten Frame (mit Zieh-Änderungen) nach `<dir>/board_t<time>.svg`.
pub fn export_board_svg(
    dir: &Path,
    time: i64,
    frame: &Frame,
    territory: &TerritoryDiagram,
    params: &BoardParameters,
) -> Result<PathBuf, BoardError> {
    let path = dir.join(format!("board_t{time}.svg"));
    let export_error = |source| BoardError::Export {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(export_error)?;

    let mut painter = SvgPainter::new(params.pitch_size(), params.pitch_color, params.line_width);
    paint_board(&mut painter, frame, territory, params);
    let elements = painter.len();
    svg::save(&path, &painter.into_document()).map_err(export_error)?;

    info!("Exported {} ({elements} elements).", path.display());
    Ok(path)
}
