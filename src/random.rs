// SPDX-License-Identifier: PMPL-1.0-or-later

//! Source of randomness for the simulated diagnosis and listening.
//!
//! Always a seeded `StdRng`. Without an explicit seed one is drawn from the
//! OS with `getrandom` and logged, so any run can be replayed with `--seed`.

use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(entropy_seed);
    tracing::info!(seed, "random generator seeded");
    (StdRng::seed_from_u64(seed), seed)
}

fn entropy_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(err) => {
            tracing::warn!(%err, "OS entropy unavailable, seeding from the clock");
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_sequence() {
        let (mut a, seed) = seeded_rng(Some(42));
        let (mut b, _) = seeded_rng(Some(seed));
        let xs: Vec<u32> = (0..5).map(|_| a.gen()).collect();
        let ys: Vec<u32> = (0..5).map(|_| b.gen()).collect();
        assert_eq!(xs, ys);
    }
}
