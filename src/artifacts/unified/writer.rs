use crate::artifacts::diff::edit_script::EditScript;
use crate::artifacts::diff::segment::{Op, Segment};
use crate::artifacts::diff::sequence::ElementWriter;
use crate::artifacts::unified::hunk::{Hunk, hunks};
use crate::artifacts::unified::options::UnifiedOptions;
use crate::artifacts::unified::sink::FailFastWriter;
use colored::Color;
use log::debug;
use std::io::{self, Write};
use thiserror::Error;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("writing unified diff failed after {written} bytes")]
    Sink {
        written: usize,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// Bytes successfully written before the failure.
    pub fn written(&self) -> usize {
        match self {
            WriteError::Sink { written, .. } => *written,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            WriteError::Sink { source, .. } => source.kind(),
        }
    }
}

fn escape(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}

/// Parts of the output that get their own color group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    HunkHeader,
    Delete,
    Insert,
}

impl Style {
    fn for_op(op: Op) -> Option<Self> {
        match op {
            Op::Delete => Some(Style::Delete),
            Op::Insert => Some(Style::Insert),
            Op::Equal => None,
        }
    }
}

/// Escape sequences opening each part of the output.
struct Palette {
    header: String,
    hunk: String,
    delete: String,
    insert: String,
}

impl Palette {
    fn new(enabled: bool) -> Option<Self> {
        enabled.then(|| Palette {
            header: BOLD.to_string(),
            hunk: escape(Color::Cyan),
            delete: escape(Color::Red),
            insert: escape(Color::Green),
        })
    }

    fn start(&self, style: Style) -> &str {
        match style {
            Style::Header => &self.header,
            Style::HunkHeader => &self.hunk,
            Style::Delete => &self.delete,
            Style::Insert => &self.insert,
        }
    }
}

/// Output state of one `write_unified` call.
struct Printer<'p, W, E: ?Sized> {
    out: FailFastWriter<W>,
    elements: &'p E,
    palette: Option<Palette>,
    /// Color group currently open, if any.
    open: Option<Style>,
}

impl<W: Write, E: ElementWriter + ?Sized> Printer<'_, W, E> {
    fn reset(&mut self) {
        if self.open.take().is_some() {
            self.out.emit(RESET.as_bytes());
        }
    }

    /// Switches the open color group to `style`, or closes it for `None`.
    ///
    /// Consecutive lines of one style share a single group.
    fn paint(&mut self, style: Option<Style>) {
        if self.open == style {
            return;
        }
        self.reset();
        let (Some(style), Some(palette)) = (style, &self.palette) else {
            return;
        };
        let start = palette.start(style).to_string();
        self.out.emit(start.as_bytes());
        self.open = Some(style);
    }

    /// Prints a complete line, written with a single sink call.
    fn styled_line(&mut self, style: Style, text: &str) {
        self.paint(Some(style));
        self.out.emit(format!("{text}\n").as_bytes());
    }

    fn element(&mut self, op: Op, index: usize) {
        self.paint(Style::for_op(op));
        self.out.emit(&[op.prefix()]);
        if self.out.has_failed() {
            return;
        }
        let written = match op {
            Op::Insert => self.elements.write_b_to(&mut self.out, index),
            Op::Delete | Op::Equal => self.elements.write_a_to(&mut self.out, index),
        };
        if let Err(error) = written {
            self.out.fail(error);
        }
        self.out.emit(b"\n");
    }

    fn segment(&mut self, segment: &Segment) {
        let op = segment.op();
        let indices = match op {
            Op::Insert => segment.from_b..segment.to_b,
            Op::Delete | Op::Equal => segment.from_a..segment.to_a,
        };
        for index in indices {
            if self.out.has_failed() {
                return;
            }
            self.element(op, index);
        }
    }

    fn hunk(&mut self, hunk: &Hunk<'_>) {
        self.styled_line(Style::HunkHeader, &hunk.header());
        for segment in hunk.segments() {
            self.segment(segment);
        }
    }
}

/// Renders `script` as a unified diff into `sink`.
///
/// Elements are serialized by `elements`. Returns the number of bytes written;
/// on the first sink failure nothing more is written and the error carries the
/// bytes written up to that point.
///
/// The script is usually reduced with [`EditScript::with_context`] first; every
/// gap in the script starts a new hunk.
pub fn write_unified<W, E>(
    script: &EditScript,
    sink: W,
    elements: &E,
    options: &UnifiedOptions,
) -> Result<usize, WriteError>
where
    W: Write,
    E: ElementWriter + ?Sized,
{
    let mut printer = Printer {
        out: FailFastWriter::new(sink),
        elements,
        palette: Palette::new(options.color_mode().is_enabled()),
        open: None,
    };

    printer.styled_line(Style::Header, &format!("--- {}", options.name_a()));
    printer.styled_line(Style::Header, &format!("+++ {}", options.name_b()));

    let mut count = 0;
    for hunk in hunks(script) {
        if printer.out.has_failed() {
            break;
        }
        printer.hunk(&hunk);
        count += 1;
    }
    printer.reset();

    let (written, error) = printer.out.finish();
    debug!("unified: {count} hunks, {written} bytes");
    match error {
        None => Ok(written),
        Some(source) => Err(WriteError::Sink { written, source }),
    }
}
