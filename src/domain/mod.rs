//! Domain layer - the pure scoring and aggregation core.
//!
//! No I/O, no clock, no global state: every function here is a synchronous
//! transform over the inputs it is handed. The application layer owns
//! fetching consistent snapshots and persisting results through ports.

pub mod assessment;
pub mod classroom;
pub mod foundation;
pub mod insights;
pub mod teams;
