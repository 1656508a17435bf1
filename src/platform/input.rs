//! Input collaborator

use crate::sim::InputEvent;

/// Source of discrete input events, polled once per tick
pub trait InputSource {
    /// Everything that arrived since the previous poll, oldest first
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Replays a fixed script, one batch per poll; quits when the script runs out
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    batches: std::collections::VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.batches
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}
