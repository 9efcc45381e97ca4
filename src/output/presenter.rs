use std::io::{self, Write};

use super::config::{OutputConfig, OutputFormat};
use super::types::Envelope;
use crate::check::CheckReport;
use crate::view::{self, EventsView};

pub trait Presenter: Send + Sync {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()>;
}

pub struct JsonPresenter { pub pretty: bool }
impl Presenter for JsonPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty { serde_json::to_writer_pretty(&mut *w, env).map_err(to_io)? } else { serde_json::to_writer(&mut *w, env).map_err(to_io)? }
        writeln!(w)
    }
}

/// Human output: event cards for `show`, an item table for `check`.
pub struct TextPresenter { pub pretty: bool }
impl Presenter for TextPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        match env.op {
            "show" => {
                let v: EventsView = serde_json::from_value(env.result.clone()).map_err(to_io)?;
                view::render_text(&v, w)
            }
            "check" => {
                let report: CheckReport = serde_json::from_value(env.result.clone()).map_err(to_io)?;
                report.render_text(w)
            }
            _ => {
                writeln!(w, "Result: {}", env.op)?;
                if self.pretty { serde_json::to_writer_pretty(&mut *w, &env.result).map_err(to_io)?; writeln!(w)?; }
                Ok(())
            }
        }
    }
}

pub struct Emitter {
    presenter: Box<dyn Presenter>,
}

impl Emitter {
    pub fn from_config(cfg: OutputConfig) -> Self {
        let presenter: Box<dyn Presenter> = match cfg.format {
            OutputFormat::Json => Box::new(JsonPresenter { pretty: cfg.pretty }),
            OutputFormat::Text => Box::new(TextPresenter { pretty: cfg.pretty }),
        };
        Emitter { presenter }
    }

    pub fn emit(&self, env: &Envelope) -> io::Result<()> {
        let mut out = io::stdout().lock();
        self.presenter.emit(env, &mut out)?;
        out.flush()
    }
}

fn to_io(e: serde_json::Error) -> io::Error { io::Error::new(io::ErrorKind::Other, e) }
