//! Identity-onboarding core: role-specific signup flows, login, and the
//! profile factory behind them.

pub mod adapters;
pub mod config;
pub mod error;
pub mod factory;
pub mod model;
pub mod outcome;
pub mod ports;
pub mod session;
pub mod signup;
pub mod validate;
