use async_trait::async_trait;

use arena_battle::{CreatureDetail, PlayerSlot, Verdict};

/// Trait for reacting to arena events.
///
/// Implement this trait to drive a presentation layer. All methods have
/// default no-op implementations, so you only need to implement the
/// events you care about.
///
/// # Example
///
/// ```ignore
/// struct Banner;
///
/// #[async_trait]
/// impl ArenaHandler for Banner {
///     async fn on_verdict(&mut self, verdict: Verdict) {
///         println!("{}", verdict);
///     }
/// }
/// ```
#[async_trait]
pub trait ArenaHandler: Send {
    /// Called when a slot is filled (`Some`) or emptied by a reset (`None`).
    async fn on_slot_changed(&mut self, slot: PlayerSlot, creature: Option<&CreatureDetail>) {
        let _ = (slot, creature);
    }

    /// Called when a battle starts resolving.
    /// Any previously shown verdict is stale from here on.
    async fn on_resolution_started(&mut self) {}

    /// Called when a battle finishes.
    async fn on_verdict(&mut self, verdict: Verdict) {
        let _ = verdict;
    }

    /// Called after a reset. Front ends clear their search text here.
    async fn on_cleared(&mut self) {}
}
