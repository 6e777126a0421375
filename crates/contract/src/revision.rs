//! Container identity and structural-revision tracking
//!
//! Cursors and views are detached handles: they do not borrow the
//! container they traverse. To make fail-fast invalidation possible they
//! need two facts about the container at every call: *which* container
//! they are bound to, and whether it has structurally changed since the
//! handle last synchronized with it. `ContainerId` answers the first,
//! the revision generation answers the second.
//!
//! Implementations embed a [`Revision`] and bump it on every structural
//! mutation (insert, remove, clear). Replacing an element in place via
//! `set` is not structural and must not bump the revision, so cursors
//! survive it.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one container instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Allocate a fresh identity, unique for the life of the process
    pub fn allocate() -> Self {
        ContainerId(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identity value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Structural-revision bookkeeping embedded by container implementations
///
/// Pairs the container's identity with a generation counter that advances
/// on every structural mutation. Detached cursors and views snapshot the
/// generation when created and compare it on every subsequent operation.
#[derive(Debug)]
pub struct Revision {
    id: ContainerId,
    generation: u64,
}

impl Revision {
    /// Fresh revision for a newly constructed container
    pub fn new() -> Self {
        Revision {
            id: ContainerId::allocate(),
            generation: 0,
        }
    }

    /// Identity of the owning container
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Current structural generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Record a structural mutation
    pub fn bump(&mut self) {
        self.generation += 1;
    }
}

impl Default for Revision {
    fn default() -> Self {
        Revision::new()
    }
}

/// A cloned container is a new container: it starts with a fresh identity
/// and generation, so cursors bound to the original never accept the clone.
impl Clone for Revision {
    fn clone(&self) -> Self {
        Revision::new()
    }
}
