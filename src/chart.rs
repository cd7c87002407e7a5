//! Layout and emission of the character chart.
//!
//! The chart walks the printable ASCII range and places each glyph on a
//! fixed grid, flanked by two short vertical tick marks, with one
//! horizontal baseline tick at the left edge of every row.

use std::io::{self, Write};

use crate::ps::PsWriter;

/// The font face displayed by the chart
pub const FONT_NAME: &str = "Hershey-Plain-Simplex-Bold-Oblique";

/// First character code on the chart (space)
pub const FIRST_CHAR: u8 = 0x20;
/// Last character code on the chart (tilde); DEL is excluded
pub const LAST_CHAR: u8 = 0x7E;

/// Tiny rotate/un-rotate around `show`, working around a rendering
/// artifact with the Hershey fonts. The magnitude is not otherwise
/// meaningful; keep it as-is.
const GLYPH_TILT: f64 = 0.01;

/// Grid layout policy for the chart, in page units.
pub struct ChartLayout {
    /// Glyphs per row
    pub columns: u8,
    /// Horizontal advance per glyph
    pub col_width: isize,
    /// Vertical advance per row
    pub row_height: f64,
    /// `x` position of the first column
    pub left_margin: isize,
    /// `y` position of the first baseline
    pub first_baseline: f64,
    /// Font size passed to `scalefont`
    pub font_size: isize,
    /// Stroke width for the tick marks
    pub line_width: isize,
    /// Page origin offset passed to `translate`
    pub origin: (isize, isize),
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            columns: 16,
            col_width: 20,
            row_height: 37.0,
            left_margin: 20,
            first_baseline: 6.5,
            font_size: 10,
            line_width: 1,
            origin: (10, 414),
        }
    }
}

/// Pen position, reset to the left margin on every row break.
struct Cursor {
    x: isize,
    y: f64,
}

impl Cursor {
    fn new(layout: &ChartLayout) -> Self {
        Self {
            x: layout.left_margin,
            y: layout.first_baseline,
        }
    }

    fn advance(&mut self, layout: &ChartLayout) {
        self.x += layout.col_width;
    }

    fn carriage_return(&mut self, layout: &ChartLayout) {
        self.x = layout.left_margin;
        self.y += layout.row_height;
    }
}

/// `0 <y> moveto 10 0 rlineto stroke`
fn baseline_tick(pw: &mut PsWriter<impl Write>, y: f64) -> io::Result<()> {
    pw.isize(0)?;
    pw.double(y)?;
    pw.ps_moveto()?;
    pw.isize(10)?;
    pw.isize(0)?;
    pw.ps_rlineto()?;
    pw.ps_stroke()?;
    pw.crlf()
}

/// `0 12 rmoveto 0 10 rlineto 0 -22 rmoveto stroke`, relative to the
/// current point.
fn glyph_tick(pw: &mut PsWriter<impl Write>) -> io::Result<()> {
    pw.isize(0)?;
    pw.isize(12)?;
    pw.ps_rmoveto()?;
    pw.isize(0)?;
    pw.isize(10)?;
    pw.ps_rlineto()?;
    pw.isize(0)?;
    pw.isize(-22)?;
    pw.ps_rmoveto()?;
    pw.ps_stroke()?;
    pw.crlf()
}

fn write_header(
    pw: &mut PsWriter<impl Write>,
    layout: &ChartLayout,
    font_name: &str,
) -> io::Result<()> {
    pw.write_magic()?;
    pw.write_comment(" Header")?;
    pw.lit("fontsz")?;
    pw.isize(layout.font_size)?;
    pw.ps_def()?;
    pw.crlf()?;
    pw.lit(font_name)?;
    pw.ps_findfont()?;
    pw.name("fontsz")?;
    pw.ps_scalefont()?;
    pw.ps_setfont()?;
    pw.crlf()?;
    pw.isize(layout.line_width)?;
    pw.ps_setlinewidth()?;
    pw.crlf()?;
    pw.write_comment(" Page")?;
    pw.isize(layout.origin.0)?;
    pw.isize(layout.origin.1)?;
    pw.ps_translate()?;
    pw.crlf()
}

/// Write the complete chart document to `pw`.
///
/// For each character code a 3-line group is emitted: a tick mark at the
/// cursor, the glyph placement, and a second tick mark continuing from the
/// point left behind by `show`. The glyph is wrapped in a tiny
/// rotate/un-rotate pair, see `GLYPH_TILT`.
pub fn write_chart(
    pw: &mut PsWriter<impl Write>,
    layout: &ChartLayout,
    font_name: &str,
) -> io::Result<()> {
    write_header(pw, layout, font_name)?;

    let mut cursor = Cursor::new(layout);
    baseline_tick(pw, cursor.y)?;

    for c in FIRST_CHAR..=LAST_CHAR {
        pw.isize(cursor.x)?;
        pw.double(cursor.y)?;
        pw.ps_moveto()?;
        glyph_tick(pw)?;

        pw.isize(cursor.x)?;
        pw.double(cursor.y)?;
        pw.ps_moveto()?;
        pw.double(GLYPH_TILT)?;
        pw.ps_rotate()?;
        pw.string(&[c])?;
        pw.ps_show()?;
        pw.double(-GLYPH_TILT)?;
        pw.ps_rotate()?;
        pw.crlf()?;

        glyph_tick(pw)?;

        cursor.advance(layout);
        if (c - FIRST_CHAR) % layout.columns == layout.columns - 1 {
            cursor.carriage_return(layout);
            baseline_tick(pw, cursor.y)?;
        }
    }

    pw.ps_showpage()?;
    pw.crlf()
}

#[cfg(test)]
mod tests {
    use super::{write_chart, ChartLayout, FONT_NAME};
    use crate::ps::PsWriter;

    fn render() -> String {
        let mut buf = Vec::new();
        let mut pw = PsWriter::from(&mut buf);
        write_chart(&mut pw, &ChartLayout::default(), FONT_NAME).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn body_lines(doc: &str) -> Vec<&str> {
        doc.lines()
            .filter(|l| !l.starts_with('%') && !l.ends_with("def"))
            .filter(|l| !l.ends_with("setfont") && !l.ends_with("setlinewidth"))
            .filter(|l| !l.ends_with("translate"))
            .collect()
    }

    #[test]
    fn test_header() {
        let doc = render();
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines[0], "%!");
        assert_eq!(lines[1], "% Header");
        assert_eq!(lines[2], "/fontsz 10 def");
        assert_eq!(
            lines[3],
            "/Hershey-Plain-Simplex-Bold-Oblique findfont fontsz scalefont setfont"
        );
        assert_eq!(lines[4], "1 setlinewidth");
        assert_eq!(lines[5], "% Page");
        assert_eq!(lines[6], "10 414 translate");
    }

    #[test]
    fn test_first_body_line_is_initial_baseline() {
        let doc = render();
        let body = body_lines(&doc);
        assert_eq!(body[0], "0 6.5 moveto 10 0 rlineto stroke");
    }

    #[test]
    fn test_baseline_ticks() {
        let doc = render();
        let baselines: Vec<&str> = doc
            .lines()
            .filter(|l| l.starts_with("0 ") && l.ends_with("10 0 rlineto stroke"))
            .collect();
        assert_eq!(
            baselines,
            vec![
                "0 6.5 moveto 10 0 rlineto stroke",
                "0 43.5 moveto 10 0 rlineto stroke",
                "0 80.5 moveto 10 0 rlineto stroke",
                "0 117.5 moveto 10 0 rlineto stroke",
                "0 154.5 moveto 10 0 rlineto stroke",
                "0 191.5 moveto 10 0 rlineto stroke",
            ]
        );
    }

    #[test]
    fn test_glyph_count_and_bracketing() {
        let doc = render();
        let lines: Vec<&str> = doc.lines().collect();
        let show_indices: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.contains(" show "))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(show_indices.len(), 95);
        // every glyph placement sits between two tick-mark lines
        for &i in &show_indices {
            assert!(lines[i - 1].ends_with("0 12 rmoveto 0 10 rlineto 0 -22 rmoveto stroke"));
            assert_eq!(lines[i + 1], "0 12 rmoveto 0 10 rlineto 0 -22 rmoveto stroke");
        }
    }

    #[test]
    fn test_cursor_positions() {
        let doc = render();
        let glyphs: Vec<&str> = doc.lines().filter(|l| l.contains(" show ")).collect();
        for (i, line) in glyphs.iter().enumerate() {
            let x = 20 + 20 * (i % 16);
            let y = 6.5 + 37.0 * (i / 16) as f64;
            assert!(
                line.starts_with(&format!("{} {} moveto ", x, y)),
                "glyph {}: {}",
                i,
                line
            );
        }
    }

    #[test]
    fn test_escaped_glyphs() {
        let doc = render();
        let escaped: Vec<&str> = doc
            .lines()
            .filter(|l| l.contains(" show ") && l.contains('\\'))
            .collect();
        assert_eq!(escaped.len(), 4);
        assert!(escaped[0].contains("(\\\")"));
        assert!(escaped[1].contains("(\\()"));
        assert!(escaped[2].contains("(\\))"));
        assert!(escaped[3].contains("(\\\\)"));
    }

    #[test]
    fn test_space_and_tilde_are_bare() {
        let doc = render();
        assert!(doc.contains("20 6.5 moveto 0.01 rotate ( ) show -0.01 rotate"));
        assert!(doc.contains("300 191.5 moveto 0.01 rotate (~) show -0.01 rotate"));
    }

    #[test]
    fn test_footer() {
        let doc = render();
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(*lines.last().unwrap(), "showpage");
        // the last glyph group belongs to the tilde
        assert!(lines[lines.len() - 2].ends_with("rmoveto stroke"));
        assert!(lines[lines.len() - 3].contains("(~) show"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(render(), render());
    }

    #[test]
    fn test_custom_layout() {
        let layout = ChartLayout {
            columns: 8,
            col_width: 10,
            row_height: 20.0,
            left_margin: 5,
            first_baseline: 1.5,
            ..ChartLayout::default()
        };
        let mut buf = Vec::new();
        let mut pw = PsWriter::from(&mut buf);
        write_chart(&mut pw, &layout, FONT_NAME).unwrap();
        let doc = String::from_utf8(buf).unwrap();

        // 95 glyphs in rows of 8 complete 11 rows, so 12 baselines
        let baselines = doc
            .lines()
            .filter(|l| l.starts_with("0 ") && l.ends_with("10 0 rlineto stroke"))
            .count();
        assert_eq!(baselines, 12);
        // second row starts back at the left margin
        assert!(doc.contains("5 21.5 moveto 0.01 rotate (\\() show -0.01 rotate"));
    }
}
