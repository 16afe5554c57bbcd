use async_trait::async_trait;

use crate::recipe::Recipe;

/// Screen navigation collaborator of a wizard session.
///
/// Exactly one of the two methods is called, once, per session.
#[async_trait]
pub trait NavigationPort: Send + Sync {
    async fn on_complete(&self, recipe: Recipe);
    async fn on_cancel(&self);
}
