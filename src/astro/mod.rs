//! Celestial coordinate pipeline.
//!
//! Sexagesimal catalog strings -> decimal degrees -> Julian Date and
//! Greenwich Sidereal Time -> local sidereal time and hour angle ->
//! topocentric altitude -> visibility classification. Everything in this
//! module tree is a pure function of its inputs.

pub mod horizontal;
pub mod sexagesimal;
pub mod time;
pub mod visibility;

pub use horizontal::altitude_degrees;
pub use sexagesimal::{parse_dec_to_degrees, parse_ra_to_degrees};
pub use time::{greenwich_sidereal_time, julian_date};
pub use visibility::{annotate_all, visible_objects, ObserverContext, VisibilityResult};
