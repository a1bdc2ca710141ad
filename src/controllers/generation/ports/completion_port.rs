use crate::controllers::generation::events::generation_event::GenerationEvent;

/// Sole notification channel back to the consuming layer.
///
/// `Completed` fires at most once per accepted request and never for a
/// superseded one.
pub trait GenerationCompletionPort: Send + Sync {
    fn notify(&self, event: GenerationEvent);
}
