use derive_new::new;
use std::fmt::Display;
use std::io::{self, Write};

/// Two sequences that can be compared element by element.
///
/// `A` is the initial state and `B` the final state. Implementations must stay
/// unchanged for the duration of one diff computation.
pub trait SequencePair {
    /// Number of elements in `A`.
    fn len_a(&self) -> usize;
    /// Number of elements in `B`.
    fn len_b(&self) -> usize;
    /// Reports whether `a[ai]` equals `b[bi]`.
    fn equal(&self, ai: usize, bi: usize) -> bool;
}

/// Serializes single elements of either side into a sink.
///
/// Both methods return the number of bytes written. The trailing newline of a
/// diff line is written by the caller, not by the element writer.
pub trait ElementWriter {
    fn write_a_to(&self, w: &mut dyn Write, ai: usize) -> io::Result<usize>;
    fn write_b_to(&self, w: &mut dyn Write, bi: usize) -> io::Result<usize>;
}

impl<P: SequencePair + ?Sized> SequencePair for &P {
    fn len_a(&self) -> usize {
        (**self).len_a()
    }

    fn len_b(&self) -> usize {
        (**self).len_b()
    }

    fn equal(&self, ai: usize, bi: usize) -> bool {
        (**self).equal(ai, bi)
    }
}

impl<W: ElementWriter + ?Sized> ElementWriter for &W {
    fn write_a_to(&self, w: &mut dyn Write, ai: usize) -> io::Result<usize> {
        (**self).write_a_to(w, ai)
    }

    fn write_b_to(&self, w: &mut dyn Write, bi: usize) -> io::Result<usize> {
        (**self).write_b_to(w, bi)
    }
}

/// Borrowed pair of slices of any comparable element type.
///
/// Works for lines (`&str`, `String`) as well as numbers or any other value
/// that implements `Display` when rendering is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Pair<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T> Pair<'d, T> {
    pub fn a(&self) -> &'d [T] {
        self.a
    }

    pub fn b(&self) -> &'d [T] {
        self.b
    }
}

impl<T: PartialEq> SequencePair for Pair<'_, T> {
    fn len_a(&self) -> usize {
        self.a.len()
    }

    fn len_b(&self) -> usize {
        self.b.len()
    }

    fn equal(&self, ai: usize, bi: usize) -> bool {
        self.a[ai] == self.b[bi]
    }
}

impl<T: Display> ElementWriter for Pair<'_, T> {
    fn write_a_to(&self, w: &mut dyn Write, ai: usize) -> io::Result<usize> {
        write_display(w, &self.a[ai])
    }

    fn write_b_to(&self, w: &mut dyn Write, bi: usize) -> io::Result<usize> {
        write_display(w, &self.b[bi])
    }
}

fn write_display<T: Display + ?Sized>(w: &mut dyn Write, value: &T) -> io::Result<usize> {
    let rendered = value.to_string();
    w.write_all(rendered.as_bytes())?;
    Ok(rendered.len())
}

/// Pair of raw byte elements, written verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct BytesPair<'d, B> {
    a: &'d [B],
    b: &'d [B],
}

impl<B: AsRef<[u8]>> SequencePair for BytesPair<'_, B> {
    fn len_a(&self) -> usize {
        self.a.len()
    }

    fn len_b(&self) -> usize {
        self.b.len()
    }

    fn equal(&self, ai: usize, bi: usize) -> bool {
        self.a[ai].as_ref() == self.b[bi].as_ref()
    }
}

impl<B: AsRef<[u8]>> ElementWriter for BytesPair<'_, B> {
    fn write_a_to(&self, w: &mut dyn Write, ai: usize) -> io::Result<usize> {
        let bytes = self.a[ai].as_ref();
        w.write_all(bytes)?;
        Ok(bytes.len())
    }

    fn write_b_to(&self, w: &mut dyn Write, bi: usize) -> io::Result<usize> {
        let bytes = self.b[bi].as_ref();
        w.write_all(bytes)?;
        Ok(bytes.len())
    }
}

/// Splits raw contents into the line elements used for line-oriented diffs.
///
/// `\n` and `\r\n` terminators are stripped; a trailing terminator does not
/// produce an extra empty element. Bytes are never decoded.
pub fn split_lines(data: &[u8]) -> Vec<&[u8]> {
    data.split_inclusive(|&byte| byte == b'\n')
        .map(|line| match line.strip_suffix(b"\n") {
            Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
            None => line,
        })
        .collect()
}
