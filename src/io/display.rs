//! Live terminal display of successive generations
//!
//! On a terminal each frame replaces the previous one by riding along as the
//! message of an `indicatif` progress bar. When output is redirected, or when
//! plain output is requested, frames are written one after another instead.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{Stdout, Write};
use std::sync::LazyLock;

use crate::io::error::Result;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg}\n{prefix} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Destination for rendered frames
pub enum FrameDisplay<W: Write = Stdout> {
    /// Redraw in place through a progress bar
    Live(ProgressBar),
    /// Append each frame to a writer
    Plain(W),
}

impl FrameDisplay<Stdout> {
    /// Choose live or plain output for stdout
    ///
    /// Falls back to plain output when stdout is not a terminal.
    pub fn for_stdout(total_steps: usize, plain: bool) -> Self {
        if plain {
            return Self::Plain(std::io::stdout());
        }

        let bar = ProgressBar::with_draw_target(
            Some(total_steps as u64),
            ProgressDrawTarget::stdout(),
        );
        if bar.is_hidden() {
            Self::Plain(std::io::stdout())
        } else {
            bar.set_style(FRAME_STYLE.clone());
            Self::Live(bar)
        }
    }
}

impl<W: Write> FrameDisplay<W> {
    /// Live display that draws nowhere
    pub fn hidden(total_steps: usize) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(total_steps as u64),
            ProgressDrawTarget::hidden(),
        );
        bar.set_style(FRAME_STYLE.clone());
        Self::Live(bar)
    }

    /// Show one generation
    ///
    /// # Errors
    ///
    /// Returns an error if writing to a plain writer fails
    pub fn show(&mut self, generation: usize, population: usize, frame: &str) -> Result<()> {
        let header = format!("Generation {generation} | population {population}");

        match self {
            Self::Live(bar) => {
                bar.set_prefix(header);
                bar.set_position(generation as u64);
                bar.set_message(frame.to_string());
            }
            Self::Plain(writer) => {
                writeln!(writer, "{header}")?;
                writeln!(writer, "{frame}")?;
                writer.flush()?;
            }
        }

        Ok(())
    }

    /// Leave the final frame on screen
    pub fn finish(&self) {
        if let Self::Live(bar) = self {
            bar.abandon();
        }
    }

    /// Generation most recently shown on a live display
    pub fn position(&self) -> Option<u64> {
        match self {
            Self::Live(bar) => Some(bar.position()),
            Self::Plain(_) => None,
        }
    }

    /// Recover the writer of a plain display
    pub fn into_writer(self) -> Option<W> {
        match self {
            Self::Live(_) => None,
            Self::Plain(writer) => Some(writer),
        }
    }
}
