//! Vertical sine-wave layout.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::{Position, Positioned};

/// Shape of the vertical wave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SineWaveOptions {
    /// Horizontal swing either side of `x = 0`.
    pub amplitude: f64,
    /// Distance between consecutive nodes on the y axis.
    pub vertical_gap: f64,
    /// y of the first node.
    pub start_y: f64,
    /// Added to every node's angle, in radians.
    pub phase_offset: f64,
}

impl Default for SineWaveOptions {
    fn default() -> Self {
        Self {
            amplitude: 80.0,
            vertical_gap: 130.0,
            start_y: 50.0,
            phase_offset: 0.0,
        }
    }
}

impl SineWaveOptions {
    /// Set the amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the vertical gap.
    pub fn with_vertical_gap(mut self, vertical_gap: f64) -> Self {
        self.vertical_gap = vertical_gap;
        self
    }

    /// Set the starting y.
    pub fn with_start_y(mut self, start_y: f64) -> Self {
        self.start_y = start_y;
        self
    }

    /// Set the phase offset.
    pub fn with_phase_offset(mut self, phase_offset: f64) -> Self {
        self.phase_offset = phase_offset;
        self
    }

    /// Position of the node at `index`.
    ///
    /// The angle advances by π per node, so with a zero phase offset x
    /// alternates between `+amplitude` and `-amplitude`.
    pub fn position_at(&self, index: usize) -> Position {
        let i = index as f64;
        let theta = i * PI + FRAC_PI_2 + self.phase_offset;
        Position::new(
            self.amplitude * theta.sin(),
            self.start_y + i * self.vertical_gap,
        )
    }
}

/// Lay `nodes` out top to bottom along a vertical sine wave.
///
/// Returns clones of the inputs, in order, with only `position` replaced.
pub fn position_on_vertical_sine_wave<T>(nodes: &[T], options: &SineWaveOptions) -> Vec<T>
where
    T: Positioned + Clone,
{
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| node.clone().with_position(options.position_at(index)))
        .collect()
}
