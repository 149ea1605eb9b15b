use serde::{Deserialize, Serialize};

use crate::core::{
    AmountAxis, AxisLabel, DeclarationId, EventDeclaration, OccurrenceId, Side, ZoomState,
};
use crate::error::{TimelineError, TimelineResult};

use super::{OccurrenceLayout, TimelineEngine, TimelineSummary};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationSnapshot {
    pub id: DeclarationId,
    pub declaration: EventDeclaration,
    pub side: Side,
    pub occurrence_ids: Vec<OccurrenceId>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub zoom: ZoomState,
    pub current_age: f64,
    pub declarations: Vec<DeclarationSnapshot>,
    pub amount_axis: AmountAxis,
    pub layout: Vec<OccurrenceLayout>,
    pub labels: Vec<AxisLabel>,
    pub summary: TimelineSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl TimelineEngine {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let declarations = self
            .declarations
            .iter()
            .map(|(id, record)| DeclarationSnapshot {
                id: *id,
                declaration: record.declaration.clone(),
                side: record.side,
                occurrence_ids: record.occurrence_ids().to_vec(),
            })
            .collect();

        EngineSnapshot {
            zoom: self.zoom,
            current_age: self.config.current_age,
            declarations,
            amount_axis: self.amount_axis(),
            layout: self.layout(),
            labels: self.axis_labels(),
            summary: self.summary(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> TimelineResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(TimelineError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
