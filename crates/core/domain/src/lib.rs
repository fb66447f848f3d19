pub mod data;
pub mod envelope;

pub use data::{Point, SourceLocator};
pub use envelope::{
    BaselineEntry, BaselineForecast, ConstraintsEntry, ConstraintsForecast, DemandResponseEntry,
    DemandResponseForecast, FlexstatState, ParkerActuation, ParkerSetpoint, ParkerState,
    RtacActuation, RtacSetpoint, RtacState, TelemetryEnvelope,
};
