//! Terminal stand-in for the board: double-buffered, diff-based renderer.
//!
//! How it works:
//!   1. Build the next frame into `front` buffer (array of Cell)
//!   2. Compare each cell with `back` buffer (previous frame)
//!   3. Only emit terminal commands for cells that changed
//!   4. All commands are batched with `queue!`, flushed once at the end
//!   5. Swap front/back
//!
//! Each LED of the 5x5 display is drawn as a block of `PIXEL_W` x `PIXEL_H`
//! terminal cells; the RGB indicator sits to the right of it.

use std::io::{self, BufWriter, Write};
use std::time::Duration;

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::device::bitmap::Bitmap;
use crate::device::glyph::BOARD_SIZE;
use crate::device::{Actuator, Display, DisplayMode, Indicator};
use crate::domain::colour::Rgb8;
use crate::ui::sound::SoundEngine;

// ── Cell: the unit of the back-buffer ──

#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    const BASE_BG: Color = Color::Rgb { r: 22, g: 22, b: 35 };

    const BLANK: Cell = Cell { ch: ' ', fg: Color::White, bg: Cell::BASE_BG };

    /// Never equal to a real cell, so every position gets repainted.
    const INVALID: Cell = Cell { ch: '?', fg: Color::Magenta, bg: Color::Magenta };

    fn new(ch: char, fg: Color, bg: Color) -> Self {
        let bg = match bg {
            Color::Reset => Self::BASE_BG,
            other => other,
        };
        Cell { ch, fg, bg }
    }
}

// ── FrameBuffer: a 2D grid of Cells ──

struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    fn new(w: usize, h: usize) -> Self {
        FrameBuffer { width: w, height: h, cells: vec![Cell::BLANK; w * h] }
    }

    fn resize(&mut self, w: usize, h: usize) {
        if self.width != w || self.height != h {
            self.width = w;
            self.height = h;
            self.cells = vec![Cell::BLANK; w * h];
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::BLANK
        }
    }

    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) {
        for (i, ch) in s.chars().enumerate() {
            if x + i >= self.width {
                break;
            }
            self.set(x + i, y, Cell::new(ch, fg, bg));
        }
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, cell: Cell) {
        for yy in y..y + h {
            for xx in x..x + w {
                self.set(xx, yy, cell);
            }
        }
    }
}

// ── Layout ──

const PIXEL_W: usize = 4;
const PIXEL_H: usize = 2;
const TITLE_ROW: usize = 0;
const BOARD_ROW: usize = 2;
const BOARD_COL: usize = 2;
const LED_GAP: usize = 1;
const INDICATOR_COL: usize = BOARD_COL + BOARD_SIZE * (PIXEL_W + LED_GAP) + 4;
const STATUS_ROW: usize = BOARD_ROW + BOARD_SIZE * (PIXEL_H + LED_GAP) + 1;
const HELP_ROW: usize = STATUS_ROW + 2;

/// Dimmest shade a lit LED is drawn with, so brightness 1 stays visible.
const MIN_SHADE: u16 = 40;

/// Map an LED intensity to its drawn colour.
fn led_colour(intensity: u8, brightness: u8, mode: DisplayMode) -> Color {
    if intensity == 0 || brightness == 0 {
        return Color::Rgb { r: 45, g: 12, b: 12 };
    }
    let level = match mode {
        DisplayMode::BlackAndWhite => 255u16,
        DisplayMode::Greyscale => intensity as u16,
    };
    let shade = (level * brightness as u16 / 255).max(MIN_SHADE).min(255) as u8;
    Color::Rgb { r: shade, g: shade / 8, b: shade / 10 }
}

/// The terminal board: display, indicator and (optionally) sound.
pub struct TerminalBoard {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
    term_w: usize,
    term_h: usize,

    frame: Bitmap,
    brightness: u8,
    mode: DisplayMode,
    indicator: Rgb8,
    title: String,
    status: String,
    sound: Option<SoundEngine>,
}

impl TerminalBoard {
    /// Switch the terminal into raw alternate-screen mode. Restored on drop.
    pub fn new(sound: Option<SoundEngine>) -> io::Result<Self> {
        let mut board = TerminalBoard {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(0, 0),
            back: FrameBuffer::new(0, 0),
            term_w: 0,
            term_h: 0,
            frame: Bitmap::new(BOARD_SIZE, BOARD_SIZE),
            brightness: 255,
            mode: DisplayMode::BlackAndWhite,
            indicator: Rgb8::default(),
            title: String::new(),
            status: String::new(),
            sound,
        };

        terminal::enable_raw_mode()?;
        execute!(
            board.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            SetBackgroundColor(Cell::BASE_BG),
            Clear(ClearType::All)
        )?;
        board.fit_terminal();
        Ok(board)
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_status(&mut self, status: &str) {
        if self.status != status {
            self.status = status.to_string();
        }
    }

    fn fit_terminal(&mut self) -> bool {
        let (tw, th) = terminal::size().unwrap_or((80, 24));
        if tw as usize == self.term_w && th as usize == self.term_h {
            return false;
        }
        self.term_w = tw as usize;
        self.term_h = th as usize;
        self.front.resize(self.term_w, self.term_h);
        self.back.resize(self.term_w, self.term_h);
        self.back.cells.fill(Cell::INVALID);
        true
    }

    /// Draw the current board state.
    pub fn render(&mut self) -> io::Result<()> {
        if self.fit_terminal() {
            queue!(self.writer, SetBackgroundColor(Cell::BASE_BG), Clear(ClearType::All))?;
        }

        self.front.clear();
        self.compose_title();
        self.compose_leds();
        self.compose_indicator();
        self.compose_footer();

        self.flush_diff()?;
        std::mem::swap(&mut self.front, &mut self.back);
        Ok(())
    }

    /// Trait calls cannot fail; a broken terminal only loses a frame.
    fn redraw(&mut self) {
        if let Err(e) = self.render() {
            tracing::warn!(error = %e, "terminal redraw failed");
        }
    }

    // ── Diff flush: only write changed cells ──

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg = Color::White;
        let mut last_bg = Cell::BASE_BG;
        let mut cursor_at: Option<(usize, usize)> = None;

        queue!(self.writer, SetForegroundColor(last_fg), SetBackgroundColor(last_bg))?;

        for y in 0..self.front.height {
            for x in 0..self.front.width {
                let cell = self.front.get(x, y);
                if cell == self.back.get(x, y) {
                    continue;
                }
                if cursor_at != Some((x, y)) {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                }
                if cell.fg != last_fg {
                    queue!(self.writer, SetForegroundColor(cell.fg))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(self.writer, SetBackgroundColor(cell.bg))?;
                    last_bg = cell.bg;
                }
                queue!(self.writer, Print(cell.ch))?;
                cursor_at = Some((x + 1, y));
            }
        }

        self.writer.flush()
    }

    // ── Compose: build front buffer content ──

    fn compose_title(&mut self) {
        let bar = Color::Rgb { r: 20, g: 20, b: 60 };
        for x in 0..self.front.width {
            self.front.set(x, TITLE_ROW, Cell::new(' ', Color::White, bar));
        }
        let title = format!(" MAZE PULSE  {} ", self.title);
        self.front.put_str(0, TITLE_ROW, &title, Color::White, bar);
    }

    fn compose_leds(&mut self) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let colour = led_colour(self.frame.get(row, col), self.brightness, self.mode);
                let x = BOARD_COL + col * (PIXEL_W + LED_GAP);
                let y = BOARD_ROW + row * (PIXEL_H + LED_GAP);
                self.front.fill_rect(x, y, PIXEL_W, PIXEL_H, Cell::new(' ', Color::White, colour));
            }
        }
    }

    fn compose_indicator(&mut self) {
        let Rgb8 { r, g, b } = self.indicator;
        let y = BOARD_ROW + 2 * (PIXEL_H + LED_GAP);
        let colour = Color::Rgb { r, g, b };
        self.front.fill_rect(INDICATOR_COL, y, 6, 3, Cell::new(' ', Color::White, colour));
        self.front.put_str(INDICATOR_COL, y + 4, "light", Color::DarkGrey, Color::Reset);
    }

    fn compose_footer(&mut self) {
        let status = format!(" {} ", self.status);
        self.front.put_str(0, STATUS_ROW, &status, Color::Rgb { r: 200, g: 180, b: 50 }, Color::Reset);
        let help = " \u{2190}/A:Left  \u{2192}/D:Right  \u{2191}/W/Space:Step  Tab/M:Map  Enter:Again  Esc/Q:Quit";
        self.front.put_str(0, HELP_ROW, help, Color::DarkGrey, Color::Reset);
    }
}

impl Drop for TerminalBoard {
    fn drop(&mut self) {
        if let Some(sfx) = self.sound.as_mut() {
            sfx.tone_off();
        }
        let _ = execute!(self.writer, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

// ── Collaborator contracts ──

impl Display for TerminalBoard {
    fn clear(&mut self) {
        self.frame.clear();
        self.redraw();
    }

    fn show(&mut self, frame: &Bitmap) {
        self.frame = frame.window(0, 0, BOARD_SIZE, BOARD_SIZE, 0);
        self.redraw();
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }
}

impl Indicator for TerminalBoard {
    fn set_colour(&mut self, rgb: Rgb8, _reserved: u8) {
        if self.indicator != rgb {
            self.indicator = rgb;
            self.redraw();
        }
    }
}

impl Actuator for TerminalBoard {
    fn sound_on(&mut self, hertz: u16) {
        if let Some(sfx) = self.sound.as_mut() {
            sfx.tone_on(hertz);
        }
    }

    fn sound_off(&mut self) {
        if let Some(sfx) = self.sound.as_mut() {
            sfx.tone_off();
        }
    }

    fn sleep(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}
