use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::StakeoutError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(2);

/// Poll-loop termination policy: a fixed attempt budget and a fixed
/// inter-attempt pause. The pause never grows and carries no jitter; this is
/// a test-support primitive, not a resilience layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub pause: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            pause: DEFAULT_PAUSE,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, pause: Duration) -> Self {
        Self {
            max_attempts,
            pause,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), StakeoutError> {
        if self.max_attempts == 0 {
            return Err(StakeoutError::Validation(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
