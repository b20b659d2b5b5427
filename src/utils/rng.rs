use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a, fixed across platforms and compiler releases.
fn fnv1a(bytes: impl IntoIterator<Item = u8>, hash: u64) -> u64 {
    bytes
        .into_iter()
        .fold(hash, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}

/// A simplified RNG manager that provides deterministic seeding.
///
/// The simulation never touches ambient random state: every consumer of
/// randomness (currently only the turbulence generator) receives its own
/// `ChaCha8Rng` derived from the master seed and a stable name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Stream seed of a consumer: FNV-1a over the little-endian master seed
    /// followed by the name bytes.
    pub fn consumer_seed(&self, name: &str) -> u64 {
        let seeded = fnv1a(self.master_seed.to_le_bytes(), FNV_OFFSET);
        fnv1a(name.bytes(), seeded)
    }

    // Get a new RNG for a consumer by hashing its name with master seed
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.consumer_seed(name))
    }
}
