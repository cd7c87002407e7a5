//! A minimal PostScript token writer.
//!
//! Tokens on one line are separated by single spaces; [`PsWriter::crlf`]
//! ends the line. There is no automatic line wrapping: the chart output is
//! line-structured and every command fits comfortably on one line, so line
//! breaks belong to the caller.

use std::io::{self, Stdout, Write};

pub struct PsWriter<W: Write> {
    // need a separator before the next token
    ns: bool,
    // writer
    inner: W,
}

impl PsWriter<Stdout> {
    pub fn new() -> Self {
        Self::from(io::stdout())
    }
}

impl Default for PsWriter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> From<W> for PsWriter<W> {
    fn from(inner: W) -> Self {
        Self { ns: false, inner }
    }
}

impl<W: Write> PsWriter<W> {
    fn sep(&mut self) -> io::Result<()> {
        if self.ns {
            write!(self.inner, " ")?;
            self.ns = false;
        }
        Ok(())
    }

    /// End the current line
    pub fn crlf(&mut self) -> io::Result<()> {
        writeln!(self.inner)?;
        self.ns = false;
        Ok(())
    }

    pub fn write_magic(&mut self) -> io::Result<()> {
        writeln!(self.inner, "%!")
    }

    pub fn write_comment(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.inner, "%{}", text)
    }

    /// An executable name, e.g. `moveto`
    pub fn name(&mut self, name: &str) -> io::Result<()> {
        self.sep()?;
        write!(self.inner, "{}", name)?;
        self.ns = true;
        Ok(())
    }

    /// A literal name, e.g. `/fontsz`
    pub fn lit(&mut self, lit: &str) -> io::Result<()> {
        self.sep()?;
        write!(self.inner, "/{}", lit)?;
        self.ns = true;
        Ok(())
    }

    pub fn isize(&mut self, val: isize) -> io::Result<()> {
        self.sep()?;
        write!(self.inner, "{}", val)?;
        self.ns = true;
        Ok(())
    }

    pub fn double(&mut self, val: f64) -> io::Result<()> {
        self.sep()?;
        write!(self.inner, "{}", val)?;
        self.ns = true;
        Ok(())
    }

    /// A `(...)` string literal.
    ///
    /// Exactly four bytes are escaped: `"`, `)`, `(` and `\`. PostScript
    /// itself only requires the parens and the backslash; the quote keeps
    /// the output identical to the established chart format (a backslash
    /// before `"` is dropped by the interpreter).
    pub fn string(&mut self, buf: &[u8]) -> io::Result<()> {
        self.sep()?;
        write!(self.inner, "(")?;
        for &byte in buf {
            if matches!(byte, b'"' | b')' | b'(' | b'\\') {
                write!(self.inner, "\\")?;
            }
            self.inner.write_all(&[byte])?;
        }
        write!(self.inner, ")")?;
        self.ns = true;
        Ok(())
    }

    pub fn ps_def(&mut self) -> io::Result<()> {
        self.name("def")
    }

    pub fn ps_findfont(&mut self) -> io::Result<()> {
        self.name("findfont")
    }

    pub fn ps_scalefont(&mut self) -> io::Result<()> {
        self.name("scalefont")
    }

    pub fn ps_setfont(&mut self) -> io::Result<()> {
        self.name("setfont")
    }

    pub fn ps_setlinewidth(&mut self) -> io::Result<()> {
        self.name("setlinewidth")
    }

    pub fn ps_translate(&mut self) -> io::Result<()> {
        self.name("translate")
    }

    pub fn ps_moveto(&mut self) -> io::Result<()> {
        self.name("moveto")
    }

    pub fn ps_rmoveto(&mut self) -> io::Result<()> {
        self.name("rmoveto")
    }

    pub fn ps_rlineto(&mut self) -> io::Result<()> {
        self.name("rlineto")
    }

    pub fn ps_stroke(&mut self) -> io::Result<()> {
        self.name("stroke")
    }

    pub fn ps_rotate(&mut self) -> io::Result<()> {
        self.name("rotate")
    }

    pub fn ps_show(&mut self) -> io::Result<()> {
        self.name("show")
    }

    pub fn ps_showpage(&mut self) -> io::Result<()> {
        self.name("showpage")
    }
}
