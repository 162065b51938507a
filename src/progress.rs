//! Console progress reporting for trials.
//!
//! The trial driver reports the drained fraction of the queue through a
//! [`ProgressSink`]. [`ProgressBar`] draws it in place on a terminal line;
//! [`NoProgress`] swallows it.

use std::io::Write;

/// Receives progress samples from the trial driver.
pub trait ProgressSink {
    /// `fraction` is the share of the queue already taken, in `0.0..=1.0`.
    fn update(&mut self, fraction: f64);

    /// Called once after the last worker has joined.
    fn finish(&mut self);
}

/// Discards all progress updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn update(&mut self, _fraction: f64) {}
    fn finish(&mut self) {}
}

/// A single-line bar redrawn with a carriage return.
pub struct ProgressBar<W: Write> {
    out: W,
    width: usize,
    last_percent: Option<u8>,
}

impl<W: Write> ProgressBar<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
            last_percent: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, fraction: f64) -> std::io::Result<()> {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let percent = (fraction * 100.0).floor() as u8;
        if self.last_percent == Some(percent) {
            return Ok(());
        }
        self.last_percent = Some(percent);

        let filled = (fraction * self.width as f64).floor() as usize;
        write!(
            self.out,
            "\r[{}{}] {:>3}%",
            "#".repeat(filled),
            " ".repeat(self.width - filled),
            percent
        )?;
        self.out.flush()
    }
}

impl<W: Write> ProgressSink for ProgressBar<W> {
    fn update(&mut self, fraction: f64) {
        // Rendering is best effort; a closed terminal must not abort a trial.
        if let Err(e) = self.draw(fraction) {
            tracing::debug!("progress bar write failed: {e}");
        }
    }

    fn finish(&mut self) {
        let result = self.draw(1.0).and_then(|()| {
            writeln!(self.out)?;
            self.out.flush()
        });
        if let Err(e) = result {
            tracing::debug!("progress bar write failed: {e}");
        }
        self.last_percent = None;
    }
}
