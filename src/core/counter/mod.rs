use tracing::instrument;

use crate::core::increment::{PostIncrement, PreIncrement};

/// A counter whose increment operators both hand back the counter itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    pub value: u64,
}

impl Counter {
    pub fn new(initial_value: u64) -> Self {
        tracing::debug!("Creating a new counter with initial value: {}", initial_value);
        Self { value: initial_value }
    }

    #[instrument(name = "increment_counter", level = "debug")]
    pub fn increment(&mut self) {
        self.value += 1;
        tracing::debug!("Counter incremented to: {}", self.value);
    }
}

impl PreIncrement for Counter {
    type Target = Counter;

    fn pre_increment(&mut self) -> &mut Counter {
        self.increment();
        self
    }
}

impl PostIncrement for Counter {
    type Output = Counter;

    fn post_increment(&mut self) -> Counter {
        let previous = self.clone();
        self.increment();
        previous
    }
}

/// A counter whose pre-increment returns its inner field rather than
/// itself. It cannot be passed to `double_increment`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCounter {
    pub value: u64,
}

impl FieldCounter {
    pub fn new(initial_value: u64) -> Self {
        Self { value: initial_value }
    }
}

impl PreIncrement for FieldCounter {
    // u64 is not FieldCounter
    type Target = u64;

    fn pre_increment(&mut self) -> &mut u64 {
        self.value += 1;
        &mut self.value
    }
}

impl PostIncrement for FieldCounter {
    type Output = FieldCounter;

    fn post_increment(&mut self) -> FieldCounter {
        let previous = self.clone();
        self.value += 1;
        previous
    }
}
