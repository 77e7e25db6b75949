//! Response decoder module
//!
//! # Overview
//!
//! Turns a catalog response body into product records. The body is parsed as
//! JSON, the records field is projected out of the envelope, and a missing or
//! falsy field becomes an empty collection.

mod decoders;
mod types;

pub use decoders::EnvelopeDecoder;
pub use types::RecordDecoder;

#[cfg(test)]
mod tests;
