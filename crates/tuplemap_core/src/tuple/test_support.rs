use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, registry};

pub(crate) fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
	NaiveDate::from_ymd_opt(y, m, d)
		.and_then(|date| date.and_hms_opt(h, min, s))
		.expect("valid datetime")
}

pub(crate) fn day(y: i32, m: u32, d: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub(crate) fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
	NaiveTime::from_hms_opt(h, m, s).expect("valid time")
}

/// Run `f` with a subscriber that records every event as
/// `"<message> key=value ..."`, and return the recorded lines.
pub(crate) fn capture_events<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
	let lines = Arc::new(Mutex::new(Vec::new()));
	let subscriber = registry().with(CaptureLayer { lines: Arc::clone(&lines) });
	let out = tracing::subscriber::with_default(subscriber, f);
	let lines = lines.lock().expect("capture lock").clone();
	(out, lines)
}

struct CaptureLayer {
	lines: Arc<Mutex<Vec<String>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let mut visitor = LineVisitor::default();
		event.record(&mut visitor);
		let mut line = visitor.message;
		for (name, value) in visitor.fields {
			line.push_str(&format!(" {name}={value}"));
		}
		self.lines.lock().expect("capture lock").push(line);
	}
}

#[derive(Default)]
struct LineVisitor {
	message: String,
	fields: Vec<(&'static str, String)>,
}

impl Visit for LineVisitor {
	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "message" {
			self.message = value.to_owned();
		} else {
			self.fields.push((field.name(), value.to_owned()));
		}
	}

	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		if field.name() == "message" {
			self.message = format!("{value:?}");
		} else {
			self.fields.push((field.name(), format!("{value:?}")));
		}
	}
}
