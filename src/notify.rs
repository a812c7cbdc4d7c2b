//! Bank change notifications.
//!
//! Subscribers register a callback against a bank id and are invoked, in
//! registration order, whenever that bank's classification changes.

use std::collections::BTreeMap;

use crate::bank::{BankId, BankSummary};

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&BankSummary)>;

/// Publish/subscribe registry keyed by bank id.
#[derive(Default)]
pub struct Notifier {
    next_id: u64,
    subscribers: BTreeMap<BankId, Vec<(SubscriptionId, Callback)>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for changes to `bank`.
    pub fn subscribe<F>(&mut self, bank: BankId, callback: F) -> SubscriptionId
    where
        F: FnMut(&BankSummary) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        self.subscribers
            .entry(bank)
            .or_default()
            .push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for list in self.subscribers.values_mut() {
            if let Some(pos) = list.iter().position(|(sub, _)| *sub == id) {
                list.remove(pos);
                return true;
            }
        }

        false
    }

    /// Number of callbacks registered for `bank`.
    pub fn subscriber_count(&self, bank: BankId) -> usize {
        self.subscribers.get(&bank).map_or(0, Vec::len)
    }

    /// Invoke every callback registered for `summary.id`.
    ///
    /// Returns the number of callbacks invoked.
    pub fn publish(&mut self, summary: &BankSummary) -> usize {
        match self.subscribers.get_mut(&summary.id) {
            Some(list) => {
                for (_, callback) in list.iter_mut() {
                    callback(summary);
                }
                list.len()
            }
            None => 0,
        }
    }
}
