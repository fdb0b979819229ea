// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::AuditEvent;
use depot_domain::EntityKind;

/// Append-only, in-memory audit trail.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    events: Vec<AuditEvent>,
}

impl AuditLog {
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event, assigning it the next sequence number.
    ///
    /// Returns the assigned sequence number. Numbers start at 1.
    pub fn append(&mut self, mut event: AuditEvent) -> u64 {
        let event_id: u64 = self.events.len() as u64 + 1;
        event.event_id = Some(event_id);
        self.events.push(event);
        event_id
    }

    /// All events in append order.
    #[must_use]
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// Events that acted on one entity, in append order.
    #[must_use]
    pub fn for_subject(&self, kind: EntityKind, id: &str) -> Vec<&AuditEvent> {
        self.events
            .iter()
            .filter(|event| event.subject.kind == kind && event.subject.id == id)
            .collect()
    }

    #[must_use]
    pub fn get(&self, event_id: u64) -> Option<&AuditEvent> {
        let index: usize = usize::try_from(event_id.checked_sub(1)?).ok()?;
        self.events.get(index)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
