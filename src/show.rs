use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use chrono::Local;
use clap::Args;

use crate::config::AppConfig;
use crate::feed;
use crate::output::config::OutputConfig;
use crate::output::types::{Envelope, Meta};
use crate::output::Emitter;
use crate::source::SourceArgs;
use crate::telemetry::{self};
use crate::telemetry::ops::show::Phase as ShowPhase;
use crate::timefmt::format_stamp;
use crate::view::pagination::{PageState, Paginator};
use crate::view::EventsView;

/// events show: fetch the feed and render one page of event cards
#[derive(Args)]
pub struct ShowCmd {
    #[command(flatten)]
    pub source: SourceArgs,
    /// 1-based page to display
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Cards per page (defaults to EVENTS_CARD_LIMIT or 6)
    #[arg(long)]
    pub card_limit: Option<usize>,
}

pub async fn run(cfg: AppConfig, out: OutputConfig, args: ShowCmd) -> Result<ExitCode> {
    let log = telemetry::show();
    let _g = log.root_span_kv([
        ("page", args.page.to_string()),
        ("card_limit", format!("{:?}", args.card_limit)),
        ("zone", format!("{:?}", args.source.zone)),
    ]).entered();
    let t0 = Instant::now();

    let cfg = args.source.apply(cfg)?;
    let (fetcher, location) = args.source.fetcher(&cfg)?;
    let extractor = cfg.extractor()?;

    let (view, ok) = match feed::assemble(fetcher.as_ref(), &location, &extractor).await {
        Ok(list) => {
            let _s = log.span(&ShowPhase::Paginate).entered();
            let paginator = Paginator::new(args.card_limit.unwrap_or(cfg.card_limit));
            let state = PageState { current: args.page };
            let view = EventsView::from_list(&list, &paginator, state, &cfg.more_url, format_stamp(&Local::now()));
            let ok = !matches!(view, EventsView::Error { .. });
            (view, ok)
        }
        Err(err) => {
            log.warn_kv("❌ Feed unavailable", [("source", location.clone()), ("error", err.to_string())]);
            (EventsView::error(err.to_string()), false)
        }
    };

    let _s = log.span(&ShowPhase::Render).entered();
    let meta = Meta { duration_ms: Some(t0.elapsed().as_millis()), source: Some(location) };
    let env = Envelope::result("show", &view, Some(meta))?;
    Emitter::from_config(out).emit(&env)?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
