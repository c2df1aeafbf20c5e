use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartComponent, Clock, RenderState, TransitionPlan};

pub const RENDER_STATE_JSON_SCHEMA_V1: u32 = 1;
pub const TRANSITION_PLAN_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStateJsonContractV1 {
    pub schema_version: u32,
    pub state: RenderState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionPlanJsonContractV1 {
    pub schema_version: u32,
    pub plan: TransitionPlan,
}

impl RenderState {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderStateJsonContractV1 {
            schema_version: RENDER_STATE_JSON_SCHEMA_V1,
            state: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render state contract v1: {e}"))
        })
    }

    /// Accepts either a bare render state or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(state) = serde_json::from_str::<RenderState>(input) {
            return Ok(state);
        }
        let payload: RenderStateJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render state json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_STATE_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported render state schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.state)
    }
}

impl TransitionPlan {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize transition plan json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = TransitionPlanJsonContractV1 {
            schema_version: TRANSITION_PLAN_JSON_SCHEMA_V1,
            plan: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize transition plan contract v1: {e}"
            ))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(plan) = serde_json::from_str::<TransitionPlan>(input) {
            return Ok(plan);
        }
        let payload: TransitionPlanJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse transition plan json payload: {e}"))
        })?;
        if payload.schema_version != TRANSITION_PLAN_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported transition plan schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.plan)
    }
}

impl<R: Renderer, C: Clock> ChartComponent<R, C> {
    /// Versioned dump of the retained geometry; `None` once unmounted.
    pub fn render_state_json_contract_v1_pretty(&self) -> ChartResult<Option<String>> {
        self.state()
            .map(RenderState::to_json_contract_v1_pretty)
            .transpose()
    }

    pub fn active_plan_json_contract_v1_pretty(&self) -> ChartResult<Option<String>> {
        self.active_plan()
            .map(TransitionPlan::to_json_contract_v1_pretty)
            .transpose()
    }
}
