mod signature;

pub use signature::{EventVerifier, SIGNATURE_HEADER};
