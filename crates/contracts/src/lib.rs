//! Types shared between the dashboard frontend and the site host.
//!
//! Nothing in this crate touches the DOM or the network, so everything here
//! is testable natively.

pub mod dashboards;
pub mod shared;
pub mod system;
