//! Core data model.

pub mod profile;
pub mod role;

pub use profile::{Patient, Professional, UserProfile};
pub use role::{Discipline, Gender, Role};
