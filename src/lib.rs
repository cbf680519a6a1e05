//! # better-locomotion - Body-referenced VR locomotion correction
//!
//! Geometric core that re-expresses a VR game's locomotion velocity
//! relative to a configurable body reference (head, hips, or chest)
//! instead of the full head orientation, with analog-stick drift
//! suppression. Provides:
//! - Greedy tracker-to-bone assignment for full-body tracking pucks
//! - Calibration-time reference frames with a fixed orientation offset
//! - A per-tick, magnitude-preserving direction correction
//! - Amortized polling of the host's full-body tracking state
//!
//! The host hook layer implements [`HostBody`] and owns a
//! [`LocomotionSession`], calling [`LocomotionSession::correct`] once
//! per locomotion tick and [`LocomotionSession::on_calibration_complete`]
//! when tracking is (re)aligned.
//!
//! ## Quick start
//! ```
//! use better_locomotion::{LocomotionConfig, LocomotionSession};
//! use better_locomotion::mock::MockHost;
//! use glam::Vec3;
//!
//! let host = MockHost::new();
//! let config = LocomotionConfig::default();
//! let mut session = LocomotionSession::new();
//! session.initialize(&host).unwrap();
//! session.on_calibration_complete(&host, &config);
//!
//! // Head facing straight ahead: forward stays forward.
//! let corrected = session.correct(&host, &config, Vec3::Z);
//! assert!((corrected - Vec3::Z).length() < 1e-5);
//! ```

pub mod error;
pub mod types;
pub mod config;
pub mod host;
pub mod assign;
pub mod calibrate;
pub mod monitor;
pub mod session;
pub mod mock;

pub use config::{LocomotionConfig, LocomotionMode};
pub use error::LocomotionError;
pub use host::HostBody;
pub use session::LocomotionSession;
pub use types::*;

/// Result type alias for locomotion-core operations.
pub type Result<T> = std::result::Result<T, LocomotionError>;
