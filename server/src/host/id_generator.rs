use scenewire_shared::ElementId;

/// Hands out sequential instance ids.
///
/// Ids are never recycled, even after the instance is removed: a host may
/// still hold a stale reference to a removed id and must never see it reused.
#[derive(Debug)]
pub struct InstanceIdGenerator {
    next: u64,
}

impl InstanceIdGenerator {
    pub fn new(first: u64) -> Self {
        Self { next: first }
    }

    pub fn generate(&mut self) -> ElementId {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }

    /// The id the next call to [`generate`](Self::generate) returns
    pub fn peek(&self) -> u64 {
        self.next
    }
}
