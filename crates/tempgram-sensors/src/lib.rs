//! Tempgram Sensors Library
//!
//! Decodes the JSON output of the lm-sensors `sensors -j` utility into a
//! typed snapshot of temperature readings and answers aggregation queries
//! (highest reading, threshold crossing) over it.

pub mod decode;
pub mod error;
pub mod model;
pub mod source;

pub use decode::decode;
pub use error::{Error, Result};
pub use model::{Module, Reading, SensorSnapshot};
pub use source::{FixtureFile, SensorsCommand, SnapshotSource};
