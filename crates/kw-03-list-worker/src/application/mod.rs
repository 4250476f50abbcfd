//! Application layer for the List Worker

pub mod worker;

pub use worker::{Worker, WorkerHandle};
