//! Integration suites, one module per engine surface.

mod borrow;
mod curriculum;
mod room;
mod verifier;
