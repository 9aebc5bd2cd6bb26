use std::fmt::Write as _;
use std::io::Write;

use blake3::Hash;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::config::RendererSettings;
use crate::error::Result;
use crate::logging::{LogLevel, Logger, default_logger, event_with_fields, json_kv};

use super::paint::PAINT_TARGET;
use super::surface::{Cell, Surface};

/// ANSI escape code renderer writing a [`Surface`] to a terminal handle.
///
/// Rows are hashed after each frame; a row whose hash matches the previous
/// frame is not written again unless `full_redraw` is set.
pub struct AnsiRenderer {
    settings: RendererSettings,
    row_hashes: Vec<Hash>,
    logger: Option<Logger>,
}

impl AnsiRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            settings,
            row_hashes: Vec::new(),
            logger: default_logger(),
        }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    /// Forget previous frames so the next render repaints every row.
    pub fn invalidate(&mut self) {
        self.row_hashes.clear();
    }

    /// Flush `surface`, returning the number of rows written.
    pub fn render(&mut self, writer: &mut impl Write, surface: &Surface) -> Result<usize> {
        if self.row_hashes.len() != surface.height() {
            self.row_hashes.clear();
        }
        if self.settings.hide_cursor {
            queue!(writer, Hide)?;
        }

        let origin = surface.area().top_left();
        let mut written = 0;
        let mut hashes = Vec::with_capacity(surface.height());
        for y in 0..surface.height() {
            let row = surface.row(y);
            let hash = hash_row(row);
            let unchanged = self.row_hashes.get(y) == Some(&hash);
            hashes.push(hash);
            if unchanged && !self.settings.full_redraw {
                continue;
            }

            queue!(writer, MoveTo(origin.x as u16, (origin.y as usize + y) as u16))?;
            write_row(writer, row)?;
            written += 1;
        }
        self.row_hashes = hashes;

        if let Some((row, col)) = self.settings.restore_cursor {
            queue!(writer, MoveTo(col, row))?;
            if self.settings.hide_cursor {
                queue!(writer, Show)?;
            }
        }

        writer.flush()?;

        if let Some(logger) = self.logger.as_ref() {
            let _ = logger.log_event(event_with_fields(
                LogLevel::Debug,
                PAINT_TARGET,
                "frame.flushed",
                [
                    json_kv("rows_written", written),
                    json_kv("rows_skipped", surface.height() - written),
                ],
            ));
        }
        Ok(written)
    }
}

fn write_row(writer: &mut impl Write, row: &[Cell]) -> Result<()> {
    let mut current: (Option<Color>, Option<Color>) = (None, None);
    for cell in row.iter().filter(|cell| !cell.is_continuation()) {
        let wanted = (cell.fg, cell.bg);
        if wanted != current {
            queue!(writer, ResetColor)?;
            if let Some(fg) = cell.fg {
                queue!(writer, SetForegroundColor(fg))?;
            }
            if let Some(bg) = cell.bg {
                queue!(writer, SetBackgroundColor(bg))?;
            }
            current = wanted;
        }
        queue!(writer, Print(&cell.symbol))?;
    }
    if current != (None, None) {
        queue!(writer, ResetColor)?;
    }
    Ok(())
}

fn hash_row(row: &[Cell]) -> Hash {
    let mut hasher = blake3::Hasher::new();
    let mut colors = String::new();
    for cell in row {
        colors.clear();
        let _ = write!(colors, "{:?}{:?}", cell.fg, cell.bg);
        hasher.update(cell.symbol.as_bytes());
        hasher.update(&[0]);
        hasher.update(colors.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};
    use crate::logging::MemorySink;
    use crate::model::Style;

    fn surface_with(text: &str) -> Surface {
        let mut surface = Surface::new(Size::new(6, 2));
        surface.set_string(Point::new(0, 0), text, Style::new(), surface.area());
        surface
    }

    fn quiet() -> AnsiRenderer {
        AnsiRenderer::with_default().with_logger(Logger::new(crate::logging::NullSink))
    }

    #[test]
    fn renderer_writes_cursor_sequences() {
        let mut output = Vec::new();
        let written = quiet().render(&mut output, &surface_with("hi")).unwrap();
        assert_eq!(written, 2);

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("\u{1b}[1;1Hhi    "));
        assert!(rendered.contains("\u{1b}[2;1H      "));
    }

    #[test]
    fn unchanged_rows_are_skipped() {
        let mut renderer = quiet();
        let mut sink = Vec::new();
        renderer.render(&mut sink, &surface_with("hi")).unwrap();

        let mut output = Vec::new();
        assert_eq!(renderer.render(&mut output, &surface_with("hi")).unwrap(), 0);
        assert_eq!(renderer.render(&mut output, &surface_with("ho")).unwrap(), 1);

        renderer.settings_mut().full_redraw = true;
        assert_eq!(renderer.render(&mut output, &surface_with("ho")).unwrap(), 2);

        renderer.settings_mut().full_redraw = false;
        renderer.invalidate();
        assert_eq!(renderer.render(&mut output, &surface_with("ho")).unwrap(), 2);
    }

    #[test]
    fn colors_are_set_and_reset() {
        let mut surface = Surface::new(Size::new(3, 1));
        surface.set_string(
            Point::new(0, 0),
            "ab",
            Style::new().fg(Color::Red),
            surface.area(),
        );
        let mut output = Vec::new();
        quiet().render(&mut output, &surface).unwrap();
        let rendered = String::from_utf8(output).unwrap();
        let ab = rendered.find("\u{1b}[38;5;9mab").unwrap();
        assert!(rendered[ab..].contains("\u{1b}[0m "));
    }

    #[test]
    fn restore_cursor_and_log_frame() {
        let sink = MemorySink::new();
        let mut renderer = AnsiRenderer::new(RendererSettings {
            restore_cursor: Some((1, 4)),
            hide_cursor: true,
            full_redraw: false,
        })
        .with_logger(Logger::new(sink.clone()));

        let mut output = Vec::new();
        renderer.render(&mut output, &surface_with("x")).unwrap();
        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.starts_with("\u{1b}[?25l"));
        assert!(rendered.ends_with("\u{1b}[2;5H\u{1b}[?25h"));

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].target, "render::paint");
        assert_eq!(events[0].fields["rows_written"], 2);
    }
}
