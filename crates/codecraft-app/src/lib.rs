// Application layer - query services, DTOs and the refresh adapter
// that re-runs the pure calendar pipeline on external triggers.

pub mod application;
