//! Output sinks for generated units.
//!
//! A sink receives complete units only; it decides how (and whether) to
//! persist them. Failures are returned to the caller and never retried.

use crate::generator::GeneratedUnit;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Destination for generated output units.
pub trait OutputSink {
    /// Persists one complete unit.
    ///
    /// # Errors
    /// Returns the underlying IO error if the unit cannot be written.
    fn write_unit(&mut self, unit: &GeneratedUnit) -> io::Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> io::Result<()> {
        (**self).write_unit(unit)
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> io::Result<()> {
        (**self).write_unit(unit)
    }
}

/// Writes each unit to `<root>/<output_unit>`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Creates a sink rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the output directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path a unit is written to.
    #[must_use]
    pub fn path_for(&self, unit: &GeneratedUnit) -> PathBuf {
        self.root.join(&unit.output_unit)
    }
}

impl OutputSink for DirectorySink {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(unit);
        fs::write(&path, &unit.contents)?;
        tracing::info!(
            "Wrote {} ({} bytes) for family {}",
            path.display(),
            unit.contents.len(),
            unit.family
        );
        Ok(())
    }
}

/// Mirrors each unit to a writer under a banner naming the unit.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl ConsoleSink<io::Stdout> {
    /// Creates a sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a sink writing to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> io::Result<()> {
        writeln!(self.writer, "/--------   {}   --------\\", unit.output_unit)?;
        self.writer.write_all(unit.contents.as_bytes())?;
        self.writer.flush()
    }
}

/// Collects units in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    units: Vec<GeneratedUnit>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected units.
    #[must_use]
    pub fn units(&self) -> &[GeneratedUnit] {
        &self.units
    }

    /// Consumes the sink, returning the collected units.
    #[must_use]
    pub fn into_units(self) -> Vec<GeneratedUnit> {
        self.units
    }
}

impl OutputSink for MemorySink {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> io::Result<()> {
        self.units.push(unit.clone());
        Ok(())
    }
}

/// Forwards each unit to two sinks, first then second.
#[derive(Debug)]
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: OutputSink, B: OutputSink> Tee<A, B> {
    /// Creates a tee over two sinks.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns both sinks.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: OutputSink, B: OutputSink> OutputSink for Tee<A, B> {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> io::Result<()> {
        self.first.write_unit(unit)?;
        self.second.write_unit(unit)
    }
}
