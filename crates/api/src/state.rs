use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StartRunError {
    #[error("run id counter overflowed")]
    RunIdOverflow,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    next_run_id: Arc<AtomicU64>,
    fixed_seed: Option<u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every run uses `seed` unless the request names its own.
    pub fn with_fixed_seed(seed: u64) -> Self {
        Self {
            fixed_seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn start_run(&self) -> Result<u64, StartRunError> {
        let previous = self
            .next_run_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .map_err(|_| StartRunError::RunIdOverflow)?;

        Ok(previous + 1)
    }

    pub fn resolve_seed(&self, requested: Option<u64>) -> u64 {
        requested
            .or(self.fixed_seed)
            .unwrap_or_else(rand::random::<u64>)
    }

    #[cfg(test)]
    pub(crate) fn with_next_run_id_for_test(next_run_id: u64) -> Self {
        Self {
            next_run_id: Arc::new(AtomicU64::new(next_run_id)),
            fixed_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppState, StartRunError};

    #[test]
    fn start_run_returns_overflow_error_at_u64_max() {
        let state = AppState::with_next_run_id_for_test(u64::MAX);

        assert_eq!(state.start_run(), Err(StartRunError::RunIdOverflow));
    }

    #[test]
    fn run_ids_start_at_one_and_increase() {
        let state = AppState::new();

        assert_eq!(state.start_run(), Ok(1));
        assert_eq!(state.start_run(), Ok(2));
    }

    #[test]
    fn request_seed_wins_over_fixed_seed() {
        let state = AppState::with_fixed_seed(11);

        assert_eq!(state.resolve_seed(Some(3)), 3);
        assert_eq!(state.resolve_seed(None), 11);
    }
}
