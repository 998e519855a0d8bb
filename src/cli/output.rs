//! Colored terminal output for release operations
//!
//! Progress goes to stdout, errors to stderr. Quiet mode silences everything
//! except errors.

use std::io::Write;
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    bufwtr: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.verbose, self.quiet)
    }
}

fn color(fg: Color, bold: bool) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(fg)).set_bold(bold);
    spec
}

/// Write `<marker> <message>` with the marker colored, and optionally the message too
fn write_marked(
    buffer: &mut Buffer,
    marker: &str,
    marker_color: &ColorSpec,
    message: &str,
    message_color: Option<&ColorSpec>,
) -> std::io::Result<()> {
    buffer.set_color(marker_color)?;
    write!(buffer, "{}", marker)?;
    buffer.reset()?;
    if let Some(spec) = message_color {
        buffer.set_color(spec)?;
    }
    writeln!(buffer, " {}", message)?;
    buffer.reset()
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    fn marked(
        &self,
        marker: &str,
        marker_color: ColorSpec,
        message: &str,
        message_color: Option<ColorSpec>,
    ) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        write_marked(
            &mut buffer,
            marker,
            &marker_color,
            message,
            message_color.as_ref(),
        )?;
        self.bufwtr.print(&buffer)
    }

    /// Print an info message (normal output)
    pub fn info(&self, message: &str) -> std::io::Result<()> {
        self.marked("ℹ", color(Color::Cyan, false), message, None)
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.marked("✅", color(Color::Green, true), message, None)
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.marked(
            "⚠",
            color(Color::Yellow, true),
            message,
            Some(color(Color::Yellow, false)),
        )
    }

    /// Print an error message (always shown)
    pub fn error(&self, message: &str) {
        let bufwtr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = bufwtr.buffer();

        let written = write_marked(
            &mut buffer,
            "✗",
            &color(Color::Red, true),
            message,
            Some(&color(Color::Red, false)),
        )
        .and_then(|()| bufwtr.print(&buffer));

        if written.is_err() {
            // Stderr failed - fallback to stdout as last resort
            println!("[STDERR ERROR] ✗ {}", message);
        }
    }

    /// Print a verbose/debug message (only in verbose mode)
    pub fn verbose(&self, message: &str) -> std::io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        self.marked(
            "→",
            color(Color::Blue, false),
            message,
            Some(color(Color::White, false)),
        )
    }

    /// Print a step header, preceded by a blank line
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        writeln!(&mut buffer)?;
        write_marked(&mut buffer, "✨", &ColorSpec::new(), title, Some(&color(Color::Cyan, true)))?;
        self.bufwtr.print(&buffer)
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.println(&format!("    {}", message))
    }

    /// Print a plain message (respects quiet mode)
    pub fn println(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        writeln!(&mut buffer, "{}", message)?;
        self.bufwtr.print(&buffer)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Check if verbose lines will be printed
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}
