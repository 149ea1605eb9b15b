use serde::{Deserialize, Serialize};

use crate::core::types::{DeclarationId, EventDeclaration, EventType, Side};

/// Tie-break used for types without a fixed side (goals and milestones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideStrategy {
    /// Round-robin: each new goal/milestone takes the side opposite the previous one.
    #[default]
    Alternate,
    /// Even declaration ids go on top, odd ones below.
    IdParity,
}

/// Side fixed by the event type alone, if any.
#[must_use]
pub fn side_for_type(event_type: EventType) -> Option<Side> {
    match event_type {
        EventType::Income => Some(Side::Top),
        EventType::Expense => Some(Side::Bottom),
        EventType::Goal | EventType::Milestone => None,
    }
}

/// Assigns sides at creation time.
///
/// The side is resolved once per declaration and stored on its occurrences;
/// nothing recomputes it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementResolver {
    strategy: SideStrategy,
    next_free_side: Side,
}

impl PlacementResolver {
    #[must_use]
    pub fn new(strategy: SideStrategy) -> Self {
        Self {
            strategy,
            next_free_side: Side::Top,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> SideStrategy {
        self.strategy
    }

    pub fn resolve_side(&mut self, declaration: &EventDeclaration, id: DeclarationId) -> Side {
        if let Some(side) = side_for_type(declaration.event_type) {
            return side;
        }

        match self.strategy {
            SideStrategy::Alternate => {
                let side = self.next_free_side;
                self.next_free_side = side.opposite();
                side
            }
            SideStrategy::IdParity => {
                if id.0 % 2 == 0 {
                    Side::Top
                } else {
                    Side::Bottom
                }
            }
        }
    }
}

impl Default for PlacementResolver {
    fn default() -> Self {
        Self::new(SideStrategy::default())
    }
}
