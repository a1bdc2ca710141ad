/// Describes a run that failed from a worker fault.
///
/// Carries no image: a failed run never publishes partial results.
#[derive(Debug)]
pub struct GenerationFailure {
    pub generation: u64,
    pub message: String,
}
