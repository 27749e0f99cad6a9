//! Interactive demo over the symbol-group matching engine.
//!
//! Reads symbol names from stdin, one per line, toggling each in or out of
//! the selection, which is exactly the flow a click-driven front end would
//! feed the session. Pass a YAML config path as the first argument to load a custom
//! catalog; otherwise the built-in table is used.

use std::error::Error;
use std::io::{self, BufRead};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use symmatch::{EngineConfig, RenderSink, SelectionSession, ToggleEffect};

/// Plain-text sink: one line per rendered symbol, in order.
struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn show_match(&self, symbols: &[String]) {
        println!("match: {}", symbols.join(" "));
    }

    fn show_no_match(&self) {
        println!("no matching group found");
    }

    fn clear(&self) {}
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let matcher = config.build()?;
    info!(
        groups = matcher.catalog().len(),
        required = matcher.config().required_overlap,
        "engine ready"
    );

    let mut session = SelectionSession::new(matcher, Arc::new(ConsoleSink));

    println!("toggle symbols one per line (blank line quits):");
    for line in io::stdin().lock().lines() {
        let line = line?;
        let symbol = line.trim();
        if symbol.is_empty() {
            break;
        }

        let report = session.toggle(symbol)?;
        if report.effect == ToggleEffect::AtCapacity {
            println!("selection is full; deselect a symbol first");
        }
        println!("selected: [{}]", session.selection().symbols().join(" "));
    }

    Ok(())
}
