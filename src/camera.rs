use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;

use crate::Pixel;
use crate::ScreenSize;
use crate::layout::Layout;
use crate::layout::Rect;
use crate::render::Canvas;
use crate::render::Color;

/// Layout pixels covered by one terminal column
pub const PIXELS_PER_COL: Pixel = 10;

/// Layout pixels covered by one terminal row. Terminal glyphs are about twice as tall as they
/// are wide, so a square cell ends up two columns wide and one row high.
pub const PIXELS_PER_ROW: Pixel = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Glyph {
    ch: char,
    fg: Color,
    bg: Color,
}

const BLANK: Glyph = Glyph {
    ch: ' ',
    fg: Color::White,
    bg: Color::Black,
};

/// A terminal sized framebuffer we can draw layout pixels onto.
pub struct Camera {
    /// The glyph buffer, row by row
    gb: Vec<Glyph>,

    /// Width of the framebuffer, in columns
    w: usize,

    /// Height of the framebuffer, in rows
    h: usize,
}

impl Camera {
    pub fn new(cols: ScreenSize, rows: ScreenSize) -> Self {
        let (w, h) = (cols as usize, rows as usize);

        Self {
            gb: vec![BLANK; w * h],
            w,
            h,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn resize(&mut self, cols: ScreenSize, rows: ScreenSize) {
        *self = Self::new(cols, rows);
    }

    /// Terminal size needed to show all of `layout`
    pub fn required(layout: &Layout) -> (ScreenSize, ScreenSize) {
        let cols = layout.width() + PIXELS_PER_COL - 1;
        let rows = layout.height() + PIXELS_PER_ROW - 1;

        (
            (cols / PIXELS_PER_COL) as ScreenSize,
            (rows / PIXELS_PER_ROW) as ScreenSize,
        )
    }

    /// Whether the whole of `layout` is visible
    pub fn fits(&self, layout: &Layout) -> bool {
        let (cols, rows) = Self::required(layout);

        self.w >= cols as usize && self.h >= rows as usize
    }

    /// Layout position at the center of the glyph at `(col, row)`
    pub fn pointer_at(col: ScreenSize, row: ScreenSize) -> (Pixel, Pixel) {
        (
            col as Pixel * PIXELS_PER_COL + PIXELS_PER_COL / 2,
            row as Pixel * PIXELS_PER_ROW + PIXELS_PER_ROW / 2,
        )
    }

    /// Write the framebuffer to `out`, switching colors only where they change.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut run = String::with_capacity(self.w);

        for (y, row) in self.gb.chunks(self.w.max(1)).enumerate() {
            queue!(out, cursor::MoveTo(0, y as u16))?;

            let mut colors = None;

            for glyph in row {
                let next = (glyph.fg, glyph.bg);

                if colors != Some(next) {
                    Self::flush_run(out, &mut run)?;

                    let (fg, bg) = next;
                    queue!(
                        out,
                        style::SetColors(style::Colors::new(term_color(fg), term_color(bg)))
                    )?;
                    colors = Some(next);
                }

                run.push(glyph.ch);
            }

            Self::flush_run(out, &mut run)?;
        }

        queue!(out, style::ResetColor)?;
        out.flush()
    }

    fn flush_run<W: Write>(out: &mut W, run: &mut String) -> io::Result<()> {
        if !run.is_empty() {
            queue!(out, style::Print(run.as_str()))?;
            run.clear();
        }

        Ok(())
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// Column range covered by `[x0, x1)`, clipped to the framebuffer
    fn cols(&self, x0: Pixel, x1: Pixel) -> std::ops::Range<usize> {
        let c0 = x0.div_euclid(PIXELS_PER_COL).clamp(0, self.w as Pixel);
        let c1 = x1.div_euclid(PIXELS_PER_COL).clamp(0, self.w as Pixel);

        c0 as usize..c1 as usize
    }

    /// Row range covered by `[y0, y1)`, clipped to the framebuffer
    fn rows(&self, y0: Pixel, y1: Pixel) -> std::ops::Range<usize> {
        let r0 = y0.div_euclid(PIXELS_PER_ROW).clamp(0, self.h as Pixel);
        let r1 = y1.div_euclid(PIXELS_PER_ROW).clamp(0, self.h as Pixel);

        r0 as usize..r1 as usize
    }

    /// Plain text picture of the framebuffer. Text shows as itself, blank glyphs show their
    /// background color.
    #[cfg(test)]
    fn dump(&self) -> String {
        self.gb
            .chunks(self.w)
            .map(|row| {
                row.iter()
                    .map(|g| match (g.ch, g.bg) {
                        (' ', Color::Black) => '.',
                        (' ', Color::White) => '#',
                        (' ', Color::Gray) => '-',
                        (' ', Color::Red) => 'r',
                        (' ', Color::Green) => 'g',
                        (ch, _) => ch,
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Canvas for Camera {
    fn clear(&mut self, color: Color) {
        self.gb.fill(Glyph { bg: color, ..BLANK });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let glyph = Glyph { bg: color, ..BLANK };

        for y in self.rows(rect.y, rect.y + rect.h) {
            for x in self.cols(rect.x, rect.x + rect.w) {
                let i = self.xy_from(x, y);
                self.gb[i] = glyph;
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: Pixel, y: Pixel, _size: Pixel, color: Color) {
        let row = y.div_euclid(PIXELS_PER_ROW);
        if row < 0 || row >= self.h as Pixel {
            return;
        }

        let col = x.div_euclid(PIXELS_PER_COL);

        for (dx, ch) in text.chars().enumerate() {
            let x = col + dx as Pixel;
            if x < 0 {
                continue;
            }
            if x >= self.w as Pixel {
                break;
            }

            let i = self.xy_from(x as usize, row as usize);
            self.gb[i].ch = ch;
            self.gb[i].fg = color;
        }
    }
}

fn term_color(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::White => style::Color::White,
        Color::Gray => style::Color::Grey,
        Color::Red => style::Color::Red,
        Color::Green => style::Color::Green,
    }
}
