//! Core trait definitions

mod api;

pub use api::{RecordStream, RpkiApi};
