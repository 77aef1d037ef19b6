//! Shuffling and path layout helpers for the HackBee frontend.
//!
//! Both helpers return fresh vectors and leave their input alone.
//!
//! # Example
//!
//! ```rust,ignore
//! use hackbee_layout::{position_on_vertical_sine_wave, shuffle, PositionedNode, SineWaveOptions};
//!
//! let answers = shuffle(&["a", "b", "c", "d"]);
//!
//! let levels: Vec<PositionedNode<u32>> = (1..=5).map(PositionedNode::new).collect();
//! let path = position_on_vertical_sine_wave(&levels, &SineWaveOptions::default());
//! ```

mod position;
mod shuffle;
mod wave;

pub use position::{Position, Positioned, PositionedNode};
pub use shuffle::{shuffle, shuffle_with_rng};
pub use wave::{position_on_vertical_sine_wave, SineWaveOptions};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        position_on_vertical_sine_wave, shuffle, Position, Positioned, PositionedNode,
        SineWaveOptions,
    };
}
