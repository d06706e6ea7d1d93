//! Interactive triage chat over the Turn API.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use clinsight::application::TriageEngine;
use clinsight::config::ArtifactConfig;
use clinsight::domain::conversation::SessionContext;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ArtifactConfig::from_env();
    let engine = TriageEngine::from_artifact_dir(&config.model_dir);

    println!("Clinsight triage assistant. Describe symptoms or lab values; Ctrl-D to exit.");
    if !engine.is_ready() {
        println!("(model artifacts missing - running in degraded mode)");
    }

    let stdin = io::stdin();
    let mut context: Option<SessionContext> = None;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = engine.process_turn(line, context.take());
        println!("{}", response.text);
        context = Some(response.context);
    }

    Ok(())
}
