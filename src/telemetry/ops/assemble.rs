use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Assemble;

#[derive(Copy, Clone, Debug)]
pub enum Phase { FetchFeed, ParseFeed, Extract }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::FetchFeed => "fetch_feed",
        Phase::ParseFeed => "parse_feed",
        Phase::Extract => "extract",
    }}
    fn span(&self) -> Span { match self {
        Phase::FetchFeed => info_span!("fetch_feed"),
        Phase::ParseFeed => info_span!("parse_feed"),
        Phase::Extract => info_span!("extract"),
    }}
}

impl OpMarker for Assemble {
    const NAME: &'static str = "assemble";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("assemble") }
}
