use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Show;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Paginate, Render }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Paginate => "paginate", Phase::Render => "render" } }
    fn span(&self) -> Span { match self { Phase::Paginate => info_span!("paginate"), Phase::Render => info_span!("render") } }
}

impl OpMarker for Show {
    const NAME: &'static str = "show";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("show") }
}
