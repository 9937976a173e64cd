//! Latency benchmark for batched similarity search over a pooled HTTP
//! connection with compressed responses.

pub mod bench;
pub mod client;
pub mod codec;
pub mod common;
pub mod deadline;
pub mod error;
pub mod fixtures;
pub mod message;
pub mod pool;
