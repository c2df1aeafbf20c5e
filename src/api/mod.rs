mod chart_component;
mod chart_config;
mod chart_renderer;
mod clock;
mod frame_builder;
mod id_allocator;
mod json_contract;
mod render_state;
mod shape_generator;
mod transition_plan;
mod transition_scheduler;
mod validation;

pub use chart_component::{ChartComponent, TickOutcome};
pub use chart_config::{ArcTween, ChartConfig, ChartKind, DEFAULT_TRANSITION_DURATION_MS};
pub use chart_renderer::{ChartRenderer, FrameSample};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use id_allocator::{ElementId, IdAllocator};
pub use json_contract::{
    RENDER_STATE_JSON_SCHEMA_V1, RenderStateJsonContractV1, TRANSITION_PLAN_JSON_SCHEMA_V1,
    TransitionPlanJsonContractV1,
};
pub use render_state::RenderState;
pub use shape_generator::{
    ArcGenerator, BarGenerator, CircleGenerator, LineGenerator, ShapeGenerator, ShapeLayout,
};
pub use transition_plan::{SampledShape, ShapeTransition, TransitionPhase, TransitionPlan};
pub use transition_scheduler::{TaskId, TaskStatus, TransitionScheduler};
