use rand::SeedableRng;
use rand_xoshiro::Xoroshiro64StarStar;

/// A small rng with a fixed seed, for reproducible tests.
pub fn consistent_rng() -> Xoroshiro64StarStar {
    Xoroshiro64StarStar::seed_from_u64(0)
}
