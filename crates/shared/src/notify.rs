use tokio::sync::broadcast;

/// A committed mutation on one of the stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Recipe(String),
    Shopping(String),
    ShoppingCleared(u64),
    MealPlan(String),
}

#[derive(Clone)]
pub struct Notifier(broadcast::Sender<Change>);

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);

        Self(sender)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Change> {
        self.0.subscribe()
    }

    pub fn publish(&self, change: Change) {
        // no subscribers is fine, readers re-query on their own schedule
        if self.0.send(change).is_err() {
            tracing::trace!("change published without subscribers");
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(64)
    }
}
