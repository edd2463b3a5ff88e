/// ==============================================================================================
/// ==================================== Progress / Result Surface ================================
/// ==============================================================================================
///
/// The host-facing notification boundary. The driver never renders anything itself — it pushes
/// step completions and warnings through a `ProgressSink`. Two implementations are provided:
/// an `indicatif` console bar and a `crossbeam`-channel sink for a host that wants to consume
/// events from another thread.

use indicatif::{ProgressBar, ProgressStyle};

/// Notification boundary the driver pushes through; never touched from inside the parallel
/// kernel, only from the serial region between steps.
pub trait ProgressSink: Send + Sync {
    /// Called once per completed step with a human-readable "NN% recrystallized" message.
    fn on_step(&self, time_step: u32, percent_recrystallized: f64);
    /// Called for non-fatal conditions (nucleation suppressed at a notable rate, Avrami fit
    /// degenerate, …).
    fn on_warning(&self, message: &str);
}

/// No-op sink, useful for tests that don't care about progress output.
#[derive(Debug, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn on_step(&self, _time_step: u32, _percent_recrystallized: f64) {}
    fn on_warning(&self, _message: &str) {}
}

/// Console progress bar, an `indicatif` bar tracking voxels recrystallized.
pub struct IndicatifProgressSink {
    bar: ProgressBar,
}

impl IndicatifProgressSink {
    /// `total_voxels` sizes the bar's length; it advances to `100%` only once every voxel
    /// has recrystallized. Steps that make no progress are never reported, since the driver
    /// does not advance its step counter or history for them, so the bar may jump by more
    /// than one "tick" worth of wall-clock steps at once.
    pub fn new(total_voxels: u64) -> Self {
        let bar = ProgressBar::new(total_voxels);
        bar.set_style(
            ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {percent}%")
                .unwrap()
                .progress_chars("=>-"),
        );
        Self { bar }
    }
}

impl ProgressSink for IndicatifProgressSink {
    fn on_step(&self, time_step: u32, percent_recrystallized: f64) {
        self.bar.set_message(format!("step {time_step}"));
        self.bar.set_position((percent_recrystallized * self.bar.length().unwrap_or(100) as f64) as u64);
        if percent_recrystallized >= 1.0 {
            self.bar.finish_with_message("recrystallization complete");
        }
    }

    fn on_warning(&self, message: &str) {
        self.bar.println(format!("warning: {message}"));
    }
}

/// Progress/warning events forwarded over a `crossbeam` channel, for hosts that want to
/// consume them on a separate thread instead of via a direct trait callback.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    Step { time_step: u32, percent_recrystallized: f64 },
    Warning { message: String },
}

pub struct ChannelProgressSink {
    tx: crossbeam::channel::Sender<ProgressEvent>,
}

impl ChannelProgressSink {
    pub fn new() -> (Self, crossbeam::channel::Receiver<ProgressEvent>) {
        let (tx, rx) = crossbeam::channel::unbounded();
        (Self { tx }, rx)
    }
}

impl ProgressSink for ChannelProgressSink {
    fn on_step(&self, time_step: u32, percent_recrystallized: f64) {
        let _ = self.tx.send(ProgressEvent::Step { time_step, percent_recrystallized });
    }

    fn on_warning(&self, message: &str) {
        let _ = self.tx.send(ProgressEvent::Warning { message: message.to_string() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_sink_forwards_step_and_warning_events() {
        let (sink, rx) = ChannelProgressSink::new();
        sink.on_step(3, 0.5);
        sink.on_warning("fit degenerate");

        match rx.recv().unwrap() {
            ProgressEvent::Step { time_step, percent_recrystallized } => {
                assert_eq!(time_step, 3);
                assert_eq!(percent_recrystallized, 0.5);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        match rx.recv().unwrap() {
            ProgressEvent::Warning { message } => assert_eq!(message, "fit degenerate"),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
