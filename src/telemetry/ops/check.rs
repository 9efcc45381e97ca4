use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Check;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Report }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Report => "report" } }
    fn span(&self) -> Span { match self { Phase::Report => info_span!("report") } }
}

impl OpMarker for Check {
    const NAME: &'static str = "check";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("check") }
}
