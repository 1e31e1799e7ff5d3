use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform pick from a small discrete set of values.
///
/// Implementations must return one of `options`. Callers never pass an empty
/// slice.
pub trait UniformChoice {
    fn choose(&mut self, options: &[f64]) -> f64;
}

#[derive(Debug, Clone)]
pub struct RandomChoice {
    rng: StdRng,
}

impl RandomChoice {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformChoice for RandomChoice {
    fn choose(&mut self, options: &[f64]) -> f64 {
        if options.is_empty() {
            return 0.0;
        }
        options[self.rng.random_range(0..options.len())]
    }
}

/// Always picks the same position, clamped to the last option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedChoice {
    index: usize,
}

impl FixedChoice {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Picks the first option. The momentum sets are listed in ascending
    /// order, so this is the smallest move.
    pub fn minimum() -> Self {
        Self::new(0)
    }

    pub fn maximum() -> Self {
        Self::new(usize::MAX)
    }
}

impl UniformChoice for FixedChoice {
    fn choose(&mut self, options: &[f64]) -> f64 {
        let index = self.index.min(options.len().saturating_sub(1));
        options.get(index).copied().unwrap_or(0.0)
    }
}

/// Replays a fixed cycle of option positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedChoice {
    indices: Vec<usize>,
    cursor: usize,
}

impl ScriptedChoice {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }

    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformChoice for ScriptedChoice {
    fn choose(&mut self, options: &[f64]) -> f64 {
        if self.indices.is_empty() {
            return FixedChoice::minimum().choose(options);
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        FixedChoice::new(index).choose(options)
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedChoice, RandomChoice, ScriptedChoice, UniformChoice};

    const OPTIONS: [f64; 3] = [0.5, 1.0, 2.0];

    #[test]
    fn seeded_choices_are_deterministic() {
        let mut left = RandomChoice::seeded(42);
        let mut right = RandomChoice::seeded(42);

        let draws_left: Vec<f64> = (0..32).map(|_| left.choose(&OPTIONS)).collect();
        let draws_right: Vec<f64> = (0..32).map(|_| right.choose(&OPTIONS)).collect();

        assert_eq!(draws_left, draws_right);
    }

    #[test]
    fn random_choice_only_returns_listed_options() {
        let mut sampler = RandomChoice::seeded(7);

        for _ in 0..1_000 {
            let draw = sampler.choose(&OPTIONS);
            assert!(OPTIONS.contains(&draw));
        }
    }

    #[test]
    fn random_choice_eventually_hits_every_option() {
        let mut sampler = RandomChoice::seeded(3);
        let draws: Vec<f64> = (0..300).map(|_| sampler.choose(&OPTIONS)).collect();

        for option in OPTIONS {
            assert!(draws.contains(&option));
        }
    }

    #[test]
    fn fixed_choice_clamps_to_last_option() {
        assert_eq!(FixedChoice::minimum().choose(&OPTIONS), 0.5);
        assert_eq!(FixedChoice::maximum().choose(&OPTIONS), 2.0);
        assert_eq!(FixedChoice::new(1).choose(&OPTIONS), 1.0);
    }

    #[test]
    fn scripted_choice_cycles_through_indices() {
        let mut sampler = ScriptedChoice::new(vec![2, 0]);

        assert_eq!(sampler.choose(&OPTIONS), 2.0);
        assert_eq!(sampler.choose(&OPTIONS), 0.5);
        assert_eq!(sampler.choose(&OPTIONS), 2.0);
        assert_eq!(sampler.draws(), 3);
    }
}
