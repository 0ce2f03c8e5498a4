//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{GameStatus, PieceKind};

const SCORE_DIGITS: usize = 6;
const LEVEL_DIGITS: usize = 2;
const LINES_DIGITS: usize = 3;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board origin and size in terminal cells, border included.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Renders the board, side panel and overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Terminal size needed to show the board and the side panel.
    pub fn required_size(&self, snap: &GameSnapshot) -> Viewport {
        let (frame_w, frame_h) = self.frame_size(snap);
        Viewport::new(
            frame_w.saturating_add(2 + PANEL_WIDTH),
            frame_h.max(PANEL_HEIGHT),
        )
    }

    /// Board size in terminal cells, border included. Saturates on huge boards.
    fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.width.saturating_mul(self.cell_w).saturating_add(2),
            snap.height.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let needed = self.required_size(snap);
        let frame = Frame {
            x: viewport.width.saturating_sub(needed.width) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, frame, border);

        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x, y) {
                    Some(kind) => self.draw_block(fb, frame, x, y, kind),
                    None => self.draw_empty(fb, frame, x, y),
                }
            }
        }

        // Cells above the board stay hidden.
        if let Some(active) = snap.active.as_ref().filter(|_| snap.status.in_game()) {
            for &(x, y) in &active.cells {
                if x >= 0 && y >= 0 && (x as u16) < snap.width && (y as u16) < snap.height {
                    self.draw_block(fb, frame, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, frame);

        match snap.status {
            GameStatus::Menu => draw_overlay(fb, frame, &["BLOCKFALL", "", "ENTER: START"]),
            GameStatus::Paused => draw_overlay(fb, frame, &["PAUSED", "", "P: RESUME"]),
            GameStatus::GameOver => draw_overlay(fb, frame, &["GAME OVER", "", "ENTER: RETRY"]),
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        self.fill_cell(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = Style::new(piece_color(kind), WELL_BG).bold();
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: Style) {
        let px = x.saturating_mul(self.cell_w).saturating_add(frame.x + 1);
        let py = y.saturating_mul(self.cell_h).saturating_add(frame.y + 1);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= fb.width() {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        for (name, n, digits) in [
            ("SCORE", snap.score, SCORE_DIGITS),
            ("HI", snap.high_score, SCORE_DIGITS),
            ("LEVEL", snap.level, LEVEL_DIGITS),
            ("LINES", snap.lines, LINES_DIGITS),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_padded(panel_x, y + 1, n, digits, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(next) = &snap.next {
            let style = Style::new(piece_color(next.kind), Rgb::new(0, 0, 0)).bold();
            for (r, c) in next.shape.filled() {
                let px = (c as u16).saturating_mul(self.cell_w).saturating_add(panel_x);
                fb.fill_rect(px, y + 1 + r as u16, self.cell_w, 1, '█', style);
            }
        }
        y += 6;

        fb.put_str(panel_x, y, "SOUND", label);
        fb.put_str(
            panel_x,
            y + 1,
            if snap.sound_enabled { "ON" } else { "OFF" },
            value,
        );
    }
}

/// Side panel footprint (columns, rows)
const PANEL_WIDTH: u16 = 10;
const PANEL_HEIGHT: u16 = 20;

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: Style) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
    // Clip to the framebuffer.
    let w = w.min(fb.width().saturating_sub(x).saturating_add(1)).max(2);
    let h = h.min(fb.height().saturating_sub(y).saturating_add(1)).max(2);

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Centre a block of lines over the board.
fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
    let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    let top = (frame.y + frame.h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(text_w) / 2;
        fb.put_str(x, top + i as u16, text, style);
    }
}

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_size_covers_board_and_panel() {
        let snap = GameSnapshot {
            width: 10,
            height: 20,
            board: vec![None; 200],
            ..GameSnapshot::default()
        };
        let size = GameView::default().required_size(&snap);
        assert_eq!(size, Viewport::new(22 + 2 + PANEL_WIDTH, 22));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameSnapshot {
            width: 10,
            height: 20,
            board: vec![Some(PieceKind::T); 200],
            status: GameStatus::GameOver,
            ..GameSnapshot::default()
        };
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }

    #[test]
    fn oversized_board_saturates_instead_of_overflowing() {
        let snap = GameSnapshot {
            width: 40_000,
            height: 4,
            board: vec![None; 160_000],
            status: GameStatus::Playing,
            ..GameSnapshot::default()
        };
        let view = GameView::default();
        assert_eq!(view.required_size(&snap).width, u16::MAX);

        let fb = view.render(&snap, Viewport::new(80, 24));
        assert_eq!((fb.width(), fb.height()), (80, 24));
    }
}
