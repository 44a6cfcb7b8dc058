use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "warn,backend=info,tower_http=debug";

/// Collects the event message plus any structured fields (`relay`,
/// `status`, `upstream`...) as `key=value` pairs.
#[derive(Default)]
struct RelayVisitor {
    message: String,
    fields: Vec<String>,
}

impl Visit for RelayVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message.push_str(&format!("{:?}", value));
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}

impl RelayVisitor {
    fn line(&self) -> String {
        if self.fields.is_empty() {
            self.message.clone()
        } else {
            format!("{} [{}]", self.message, self.fields.join(" "))
        }
    }
}

struct RelayLayer;

impl<S: Subscriber> Layer<S> for RelayLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if target.starts_with("hyper") || target.starts_with("reqwest") {
            return;
        }

        let mut visitor = RelayVisitor::default();
        event.record(&mut visitor);
        if visitor.message.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let line = visitor.line();

        match *metadata.level() {
            Level::ERROR => println!("[{}] ❌ Error: {} - {}", timestamp, target, line),
            Level::WARN => println!("[{}] ⚠️ Warning: {} - {}", timestamp, target, line),
            Level::INFO => println!("[{}] ℹ️ {} - {}", timestamp, target, line),
            Level::DEBUG if target.starts_with("tower_http") || target.contains("routes") => {
                println!("[{}] 🔄 {} - {}", timestamp, target, line)
            }
            _ => {}
        }
    }
}

pub fn setup() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = Registry::default()
        .with(env_filter)
        .with(RelayLayer);

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set subscriber");
}
