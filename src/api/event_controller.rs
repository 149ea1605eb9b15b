use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{DeclarationId, EventDeclaration, Occurrence, OccurrenceId, expand_recurrence};
use crate::error::{TimelineError, TimelineResult};

use super::validation::validate_declaration;
use super::{DeclarationRecord, TimelineEngine};

impl TimelineEngine {
    /// Admits a declaration and its expanded occurrences.
    ///
    /// On failure nothing is inserted and no identifier is consumed.
    pub fn add_event(&mut self, declaration: EventDeclaration) -> TimelineResult<DeclarationId> {
        if let Err(err) = validate_declaration(&declaration) {
            warn!(error = %err, title = %declaration.title, "rejecting event declaration");
            return Err(err);
        }
        let drafts = expand_recurrence(&declaration)?;

        let declaration_id = DeclarationId(self.next_declaration_id);
        self.next_declaration_id += 1;
        let side = self.placement.resolve_side(&declaration, declaration_id);

        let mut occurrence_ids = SmallVec::with_capacity(drafts.len());
        for draft in drafts {
            let id = OccurrenceId(self.next_occurrence_id);
            self.next_occurrence_id += 1;
            self.occurrences
                .insert(id, draft.into_occurrence(id, declaration_id, side));
            occurrence_ids.push(id);
        }

        debug!(
            declaration = %declaration_id,
            event_type = declaration.event_type.as_str(),
            occurrences = occurrence_ids.len(),
            ?side,
            strategy = ?self.placement.strategy(),
            "add event"
        );
        self.declarations.insert(
            declaration_id,
            DeclarationRecord {
                declaration,
                side,
                occurrence_ids,
            },
        );
        Ok(declaration_id)
    }

    /// Removes a declaration and every occurrence derived from it.
    ///
    /// Returns the removed occurrence ids in their original order.
    pub fn remove_declaration(&mut self, id: DeclarationId) -> TimelineResult<Vec<OccurrenceId>> {
        let record = self
            .declarations
            .shift_remove(&id)
            .ok_or(TimelineError::UnknownDeclaration(id))?;

        for occurrence_id in &record.occurrence_ids {
            self.occurrences.shift_remove(occurrence_id);
        }

        debug!(
            declaration = %id,
            occurrences = record.occurrence_ids.len(),
            "remove declaration"
        );
        Ok(record.occurrence_ids.into_vec())
    }

    /// Removes a single occurrence by identifier.
    ///
    /// The owning declaration is dropped together with its last occurrence.
    pub fn remove_occurrence(&mut self, id: OccurrenceId) -> TimelineResult<Occurrence> {
        let occurrence = self
            .occurrences
            .shift_remove(&id)
            .ok_or(TimelineError::UnknownOccurrence(id))?;

        let declaration_id = occurrence.declaration_id;
        let now_empty = match self.declarations.get_mut(&declaration_id) {
            Some(record) => {
                record.occurrence_ids.retain(|candidate| *candidate != id);
                record.occurrence_ids.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.declarations.shift_remove(&declaration_id);
        }

        trace!(
            occurrence = %id,
            declaration = %declaration_id,
            declaration_removed = now_empty,
            "remove occurrence"
        );
        Ok(occurrence)
    }

    /// Drops every declaration and occurrence. Identifiers are not reused.
    pub fn clear_events(&mut self) {
        debug!(
            declarations = self.declarations.len(),
            occurrences = self.occurrences.len(),
            "clear events"
        );
        self.declarations.clear();
        self.occurrences.clear();
    }
}
