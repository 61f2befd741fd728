use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::ports::TokenSource;

pub const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const TOKEN_LENGTH: usize = 12;

// Upper bound accepted for externally supplied ids.
const MAX_TOKEN_LENGTH: usize = 64;

/// Mints fixed-length share tokens from an injected random source.
///
/// Tokens are unguessable enough for casual link sharing, not for access
/// control: the generator is not cryptographically secure.
pub struct RandomTokenGenerator {
    rng: Mutex<StdRng>,
}

impl RandomTokenGenerator {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Seeds the generator once from the wall clock.
    pub fn from_time_seed() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl TokenSource for RandomTokenGenerator {
    fn next_token(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        (0..TOKEN_LENGTH)
            .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
            .collect()
    }
}

/// Returns true when `value` only uses the token alphabet and has a sane length.
pub fn is_well_formed_token(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_TOKEN_LENGTH
        && value.bytes().all(|byte| byte.is_ascii_alphanumeric())
}
