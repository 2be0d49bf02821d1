//! Per-pick feedback cues.
//!
//! The engine does not make sound. It describes a short tone per color and
//! hands it to whatever `Feedback` the host plugs in.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{Color, ColorMap};

/// A short square-wave tone announcing a pick by `color`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub color: Color,
    pub frequency_hz: f32,
    pub gain: f32,
    pub duration: Duration,
}

impl Cue {
    /// The standard cue: a 100 ms square wave, high for Red and low for Blue.
    #[must_use]
    pub fn for_color(color: Color) -> Self {
        let pitch: ColorMap<f32> = ColorMap::new(|c| match c {
            Color::Red => 520.0,
            Color::Blue => 360.0,
        });
        Self {
            color,
            frequency_hz: pitch[color],
            gain: 0.1,
            duration: Duration::from_millis(100),
        }
    }
}

/// Receives cues from a `Session`.
pub trait Feedback {
    fn cue(&mut self, cue: &Cue);
}

/// Drops every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentFeedback;

impl Feedback for SilentFeedback {
    fn cue(&mut self, _cue: &Cue) {}
}

/// Keeps every cue, oldest first.
#[derive(Clone, Debug, Default)]
pub struct RecordingFeedback {
    pub cues: Vec<Cue>,
}

impl Feedback for RecordingFeedback {
    fn cue(&mut self, cue: &Cue) {
        self.cues.push(*cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_pitch_by_color() {
        assert_eq!(Cue::for_color(Color::Red).frequency_hz, 520.0);
        assert_eq!(Cue::for_color(Color::Blue).frequency_hz, 360.0);
    }

    #[test]
    fn test_cue_shape() {
        let cue = Cue::for_color(Color::Red);
        assert_eq!(cue.gain, 0.1);
        assert_eq!(cue.duration, Duration::from_millis(100));
    }

    #[test]
    fn test_recording_feedback() {
        let mut feedback = RecordingFeedback::default();
        feedback.cue(&Cue::for_color(Color::Blue));
        feedback.cue(&Cue::for_color(Color::Red));

        let colors: Vec<_> = feedback.cues.iter().map(|c| c.color).collect();
        assert_eq!(colors, vec![Color::Blue, Color::Red]);
    }
}
