//! This module contains all the sub-modules of the project.

pub mod control; // Control module: panel poll loop and its state machines.
pub mod define; // Definition module: constants used throughout the project.
pub mod device; // Device module: panel hardware devices and interactions.
pub mod postprocess; // Post-processing module: capture queue consumer.
pub mod util; // Utility module: paths, config and resource bootstrap.
pub mod vision; // Vision module: camera backend and image operations.
