/// Terminal output.
///
/// The engine draws into a `Canvas`; this module only translates that grid
/// into terminal commands, centred in whatever space the terminal has.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use dino_runner::drawer::Canvas;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_DAY_FG: Color = Color::DarkGrey;
const C_NIGHT_FG: Color = Color::White;
const C_NIGHT_DEEP_FG: Color = Color::Cyan;
const C_FRAME: Color = Color::DarkBlue;

// ── Public entry point ────────────────────────────────────────────────────────

/// Where the game area sits inside the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn current() -> std::io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self { width, height })
    }

    fn origin(&self, canvas: &Canvas) -> (u16, u16) {
        let x = (self.width as usize).saturating_sub(canvas.width()) / 2;
        let y = (self.height as usize).saturating_sub(canvas.height()) / 2;
        (x as u16, y as u16)
    }
}

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, canvas: &Canvas, viewport: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (ox, oy) = viewport.origin(canvas);
    draw_frame(out, canvas, viewport, ox, oy)?;

    let fg = if !canvas.is_night() {
        C_DAY_FG
    } else if canvas.night_density() > 0.5 {
        C_NIGHT_DEEP_FG
    } else {
        C_NIGHT_FG
    };
    out.queue(style::SetForegroundColor(fg))?;

    let max_cols = (viewport.width.saturating_sub(ox)) as usize;
    for y in 0..canvas.height() {
        let row = oy as usize + y;
        if row >= viewport.height as usize {
            break;
        }
        let line: String = canvas.row(y).chars().take(max_cols).collect();
        out.queue(cursor::MoveTo(ox, row as u16))?;
        out.queue(Print(line))?;
    }

    // cursor parked on the bottom row
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

/// Thin box around the game area when the terminal has room for it.
fn draw_frame<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    viewport: Viewport,
    ox: u16,
    oy: u16,
) -> std::io::Result<()> {
    let w = canvas.width() as u16;
    let h = canvas.height() as u16;
    if ox == 0 || oy == 0 || ox + w >= viewport.width || oy + h >= viewport.height {
        return Ok(());
    }

    out.queue(style::SetForegroundColor(C_FRAME))?;

    out.queue(cursor::MoveTo(ox - 1, oy - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w as usize))))?;

    out.queue(cursor::MoveTo(ox - 1, oy + h))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w as usize))))?;

    for row in oy..oy + h {
        out.queue(cursor::MoveTo(ox - 1, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(ox + w, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}
