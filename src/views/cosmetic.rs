//! Random source for purely decorative values (tilts, confetti, smoke).
//!
//! Nothing here needs to be reproducible; the host seeds it once per page.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;

const DEFAULT_SEED: u64 = 0x5EED_CA4D;

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::seed_from_u64(DEFAULT_SEED));
}

pub fn reseed(seed: u64) {
    RNG.with(|r| *r.borrow_mut() = SmallRng::seed_from_u64(seed));
}

pub fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|r| f(&mut r.borrow_mut()))
}
