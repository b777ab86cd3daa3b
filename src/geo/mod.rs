//! Geolocation seam.
//!
//! The school form takes a one-shot position reading on startup when the
//! host has the capability. Absence or denial is tolerated, never an error.

/// A device position reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// One-shot position source, implemented by the host over whatever
/// geolocation capability it has.
pub trait PositionSource {
    /// `None` when the capability is absent, denied, or the read failed.
    fn current_position(&self) -> Option<Position>;
}

/// Source for hosts without a geolocation capability.
pub struct NoGeolocation;

impl PositionSource for NoGeolocation {
    fn current_position(&self) -> Option<Position> {
        None
    }
}
