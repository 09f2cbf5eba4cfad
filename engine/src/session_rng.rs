use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random source owned by a single game.
///
/// Every random decision of a game (who moves first, whether the bot plays
/// its best move) is drawn from here, so a game replays identically from the
/// same seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    /// Single Bernoulli draw. `probability` must lie in `[0, 1]`.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability)
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..items.len());
        Some(items[idx])
    }
}

impl std::fmt::Debug for SessionRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRng").field("seed", &self.seed).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let items = [0usize, 1, 2, 3, 4, 5, 6, 7, 8];
        for _ in 0..32 {
            assert_eq!(a.random_bool(), b.random_bool());
            assert_eq!(a.pick(&items), b.pick(&items));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SessionRng::new(1);
        for _ in 0..100 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
    }

    #[test]
    fn test_pick_empty_is_none() {
        let mut rng = SessionRng::new(3);
        let empty: [usize; 0] = [];
        assert_eq!(rng.pick(&empty), None);
    }

    #[test]
    fn test_pick_returns_member() {
        let mut rng = SessionRng::new(3);
        let items = [2usize, 5, 8];
        for _ in 0..20 {
            let picked = rng.pick(&items).unwrap();
            assert!(items.contains(&picked));
        }
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(SessionRng::new(42).seed(), 42);
    }
}
