use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{
    DeclarationId, EventDeclaration, Occurrence, OccurrenceId, PlacementResolver, Side, ZoomState,
};
use crate::error::TimelineResult;

use super::TimelineEngineConfig;

/// A declaration admitted into the engine together with its derived state.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationRecord {
    pub declaration: EventDeclaration,
    /// Side resolved once at creation and shared by every occurrence.
    pub side: Side,
    pub(super) occurrence_ids: SmallVec<[OccurrenceId; 4]>,
}

impl DeclarationRecord {
    #[must_use]
    pub fn occurrence_ids(&self) -> &[OccurrenceId] {
        &self.occurrence_ids
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the declarations, their expanded occurrences and the
/// zoom state. Every mutation is applied as a whole before returning, so the
/// derived views (amount axis, layout, labels) always reflect the latest
/// complete state.
#[derive(Debug, Clone)]
pub struct TimelineEngine {
    pub(super) config: TimelineEngineConfig,
    pub(super) declarations: IndexMap<DeclarationId, DeclarationRecord>,
    pub(super) occurrences: IndexMap<OccurrenceId, Occurrence>,
    pub(super) zoom: ZoomState,
    pub(super) placement: PlacementResolver,
    pub(super) next_declaration_id: u64,
    pub(super) next_occurrence_id: u64,
}

impl TimelineEngine {
    pub fn new(config: TimelineEngineConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            declarations: IndexMap::new(),
            occurrences: IndexMap::new(),
            zoom: config.initial_zoom,
            placement: PlacementResolver::new(config.side_strategy),
            next_declaration_id: 1,
            next_occurrence_id: 1,
        })
    }

    /// Creates an engine preloaded with `declarations`.
    ///
    /// Fails on the first invalid declaration.
    pub fn with_declarations<I>(
        config: TimelineEngineConfig,
        declarations: I,
    ) -> TimelineResult<Self>
    where
        I: IntoIterator<Item = EventDeclaration>,
    {
        let mut engine = Self::new(config)?;
        for declaration in declarations {
            engine.add_event(declaration)?;
        }
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> TimelineEngineConfig {
        self.config
    }

    #[must_use]
    pub fn zoom_state(&self) -> ZoomState {
        self.zoom
    }

    #[must_use]
    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }

    #[must_use]
    pub fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }

    /// Declarations in insertion order.
    pub fn declarations(&self) -> impl Iterator<Item = (DeclarationId, &DeclarationRecord)> {
        self.declarations.iter().map(|(id, record)| (*id, record))
    }

    #[must_use]
    pub fn declaration(&self, id: DeclarationId) -> Option<&DeclarationRecord> {
        self.declarations.get(&id)
    }

    /// Occurrences in insertion order.
    pub fn occurrences(&self) -> impl Iterator<Item = &Occurrence> {
        self.occurrences.values()
    }

    #[must_use]
    pub fn occurrence(&self, id: OccurrenceId) -> Option<&Occurrence> {
        self.occurrences.get(&id)
    }

    /// Occurrences ordered by age, ties kept in insertion order.
    #[must_use]
    pub fn occurrences_by_age(&self) -> Vec<&Occurrence> {
        let mut ordered: Vec<&Occurrence> = self.occurrences.values().collect();
        ordered.sort_by_key(|occurrence| OrderedFloat(occurrence.age));
        ordered
    }
}
