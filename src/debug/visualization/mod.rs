// src/debug/visualization/mod.rs
pub mod board;
pub mod painter;
pub mod svg;

pub use board::{draw_board_system, paint_board};
pub use painter::{BoardLabel, BoardPainter, Fill, GizmoPainter, LabelQueue, sync_labels_system};
pub use svg::{SvgPainter, export_board_svg};
