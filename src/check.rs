use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::extraction::types::EventRecord;
use crate::feed::{self, types::{EventList, FeedError}};
use crate::output::config::OutputConfig;
use crate::output::types::{Envelope, Meta};
use crate::output::Emitter;
use crate::source::SourceArgs;
use crate::telemetry::{self};
use crate::telemetry::ops::check::Phase as CheckPhase;

/// events check: report which feed items extract and which are skipped
#[derive(Args)]
pub struct CheckCmd {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipRow {
    pub index: usize,
    pub title: Option<String>,
    pub reason: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub source: String,
    pub extracted: Vec<EventRecord>,
    pub skipped: Vec<SkipRow>,
    /// Set when the feed itself could not be fetched or parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    pub fn new(source: String, list: EventList) -> Self {
        let skipped = list
            .skipped
            .into_iter()
            .map(|s| SkipRow { index: s.index, title: s.title, reason: s.reason.to_string(), detail: s.detail })
            .collect();
        CheckReport { source, extracted: list.events, skipped, error: None }
    }

    pub fn failed(source: String, err: &FeedError) -> Self {
        CheckReport { source, extracted: Vec::new(), skipped: Vec::new(), error: Some(err.to_string()) }
    }

    pub fn render_text(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "Feed: {}", self.source)?;
        if let Some(err) = &self.error {
            return writeln!(w, "  ❌ {}", err);
        }
        for ev in &self.extracted {
            writeln!(
                w,
                "  ✓ {} | {} {} | {} min | {}",
                ev.title, ev.start_date, ev.start_time_display, ev.duration_minutes, ev.location
            )?;
        }
        for s in &self.skipped {
            writeln!(w, "  ✗ #{} {} | {}", s.index, s.title.as_deref().unwrap_or("(untitled)"), s.detail)?;
        }
        writeln!(w, "extracted={} skipped={}", self.extracted.len(), self.skipped.len())
    }
}

pub async fn run(cfg: AppConfig, out: OutputConfig, args: CheckCmd) -> Result<ExitCode> {
    let log = telemetry::check();
    let _g = log.root_span_kv([("zone", format!("{:?}", args.source.zone))]).entered();
    let t0 = Instant::now();

    let cfg = args.source.apply(cfg)?;
    let (fetcher, location) = args.source.fetcher(&cfg)?;
    let extractor = cfg.extractor()?;
    let assembled = feed::assemble(fetcher.as_ref(), &location, &extractor).await;

    let _s = log.span(&CheckPhase::Report).entered();
    let report = match assembled {
        Ok(list) => {
            if list.skipped.is_empty() {
                log.info_kv("✅ every item extracted", [("events", list.len().to_string())]);
            } else {
                log.info_kv("⚠️ some items skipped", [("events", list.len().to_string()), ("skipped", list.skipped.len().to_string())]);
            }
            CheckReport::new(location.clone(), list)
        }
        Err(err) => {
            log.warn_kv("❌ Feed unavailable", [("source", location.clone()), ("error", err.to_string())]);
            CheckReport::failed(location.clone(), &err)
        }
    };
    let meta = Meta { duration_ms: Some(t0.elapsed().as_millis()), source: Some(location) };
    Emitter::from_config(out).emit(&Envelope::result("check", &report, Some(meta))?)?;
    Ok(if report.error.is_none() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
