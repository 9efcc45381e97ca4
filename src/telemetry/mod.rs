pub mod config;
pub mod ctx;
pub mod ops;

use ctx::LogCtx;

pub fn assemble() -> LogCtx<ops::assemble::Assemble> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn show() -> LogCtx<ops::show::Show> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn check() -> LogCtx<ops::check::Check> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
