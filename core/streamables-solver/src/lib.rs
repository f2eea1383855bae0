//! Signature solver for Streamables.
//!
//! A solve is an HMAC-SHA256 of the request payload keyed with the deployment
//! secret, encoded as `"3" + base64(mac)`. The resulting string is what the UI
//! descriptor's `onSolveSuccess` action displays.

mod error;
mod solver;

pub use error::{SolverError, SolverResult};
pub use solver::{SECRET_ENV, SIGNATURE_VERSION, Solver};
