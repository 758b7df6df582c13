//! Domain events shared by the ordering bounded contexts.

pub mod event;

pub use event::Event;
