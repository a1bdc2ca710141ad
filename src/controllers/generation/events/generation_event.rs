use crate::controllers::generation::data::completion_data::CompletionData;
use crate::controllers::generation::errors::generation::GenerationFailure;

/// Outcome of one accepted, non-superseded run.
///
/// Cancelled runs emit no event at all; their results are silently
/// discarded.
#[derive(Debug)]
pub enum GenerationEvent {
    Completed(CompletionData),
    Failed(GenerationFailure),
}
