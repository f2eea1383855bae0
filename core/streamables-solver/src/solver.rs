use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{
    Hmac, Mac,
    digest::{Key, KeyInit},
};
use sha2::{Digest, Sha256};
use std::fmt;
use tracing::debug;

use crate::error::{SolverError, SolverResult};

type HmacSha256 = Hmac<Sha256>;

/// Environment variable holding the solver secret.
pub const SECRET_ENV: &str = "SECRET";

/// Leading tag of every signature, identifying the signing scheme.
pub const SIGNATURE_VERSION: &str = "3";

/// Signs payloads with a fixed secret.
///
/// The keyed MAC state is prepared once; each solve works on a clone of it,
/// so a `Solver` can be shared freely between tasks.
#[derive(Clone)]
pub struct Solver {
    mac: HmacSha256,
}

impl Solver {
    /// Creates a solver keyed with `secret`. An empty secret is rejected.
    pub fn new(secret: impl AsRef<[u8]>) -> SolverResult<Self> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(SolverError::MissingSecret);
        }
        let mac = <HmacSha256 as KeyInit>::new(&block_key(secret));
        Ok(Self { mac })
    }

    /// Creates a solver from the [`SECRET_ENV`] environment variable.
    pub fn from_env() -> SolverResult<Self> {
        Self::from_env_var(SECRET_ENV)
    }

    /// Creates a solver from the named environment variable. Unset, empty and
    /// non-UTF-8 values all count as missing.
    pub fn from_env_var(name: &str) -> SolverResult<Self> {
        let secret = std::env::var(name).map_err(|_| SolverError::MissingSecret)?;
        Self::new(secret)
    }

    /// Signs `data`. Deterministic for a given secret.
    pub fn solve(&self, data: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(data);
        let digest = mac.finalize().into_bytes();
        debug!(payload_len = data.len(), "Payload solved");
        format!("{SIGNATURE_VERSION}{}", BASE64.encode(digest))
    }
}

/// Brings a secret of any length to the SHA-256 block size: longer secrets
/// are hashed first, shorter ones are zero-padded (RFC 2104 key preparation).
fn block_key(secret: &[u8]) -> Key<HmacSha256> {
    let mut key = Key::<HmacSha256>::default();
    if secret.len() > key.len() {
        let digest = Sha256::digest(secret);
        key[..digest.len()].copy_from_slice(&digest);
    } else {
        key[..secret.len()].copy_from_slice(secret);
    }
    key
}

impl fmt::Debug for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver").finish_non_exhaustive()
    }
}
