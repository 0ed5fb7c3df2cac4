//! Seed management for board generation.
//!
//! A `GameRng` is a session seed plus a round counter. Each generated board
//! takes the next round seed, and each aspect of a board (letters, owners)
//! draws from its own named ChaCha8 stream derived from that seed. The
//! derivation uses splitmix64 and FNV-1a only, so a seed maps to the same
//! boards on every platform and toolchain.
//!
//! ```
//! use word_bridge::core::GameRng;
//! use rand::Rng;
//!
//! let mut session = GameRng::new(42);
//! let round = session.next_round();
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(again.next_round(), round);
//!
//! let mut letters = round.stream("letters");
//! let _tile: usize = letters.gen_range(0..26);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// One step of the splitmix64 generator, used as a 64-bit mixer.
#[must_use]
pub(crate) const fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// 64-bit FNV-1a over `bytes`.
#[must_use]
pub(crate) fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xCBF2_9CE4_8422_2325, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01B3)
    })
}

/// Deterministic seed source for generated boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRng {
    seed: u64,
    rounds: u64,
}

impl GameRng {
    /// Start a session from `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed, rounds: 0 }
    }

    /// The seed this generator was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed source for the next round. Successive calls never repeat.
    #[must_use]
    pub fn next_round(&mut self) -> Self {
        self.rounds += 1;
        Self::new(splitmix64(self.seed ^ splitmix64(self.rounds)))
    }

    /// Random stream for one named aspect of generation.
    #[must_use]
    pub fn stream(&self, context: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(splitmix64(self.seed ^ fnv1a(context.as_bytes())))
    }
}
