//! State carried across the segments of one sequence.

/// Progress of between-location matching on conditional segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CondDirState {
    /// No conditional segment has been checked yet.
    #[default]
    NoValidation,
    /// A conditional segment matched the sector; later segments pass.
    Matched,
    /// A conditional segment missed the sector.
    NotMatched,
}

/// Per-sequence evaluation state.
///
/// Reset at the start of every sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequencePass {
    pub state: CondDirState,
    /// A round-trip location rescue makes every segment of the sequence
    /// conditional.
    pub force_conditional: bool,
}

impl SequencePass {
    pub fn new() -> Self {
        Self::default()
    }
}
