use std::io::{self, BufRead};

use colored::Colorize;

use wb_engine::{EvalPolicy, MessageOrigin};

/// Auto-evaluation toggle, standing in for a chat host's per-channel and
/// per-query configuration.
struct FlagPolicy {
    enabled: bool,
}

impl EvalPolicy for FlagPolicy {
    fn auto_eval_enabled(&self, _origin: &MessageOrigin) -> bool {
        self.enabled
    }
}

pub fn run(seed: Option<u64>, channel: Option<&str>, no_auto: bool) -> Result<(), String> {
    let mut dispatcher = super::dispatcher(seed);
    let origin = match channel {
        Some(name) => MessageOrigin::Channel(name.to_string()),
        None => MessageOrigin::Direct,
    };
    let policy = FlagPolicy { enabled: !no_auto };

    eprintln!(
        "{}",
        "listening — one message per line, ctrl-d ends".dimmed()
    );
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        if let Some(reply) = dispatcher
            .process_message(&origin, &line, &policy)
            .map_err(|e| e.to_string())?
        {
            println!("{reply}");
        }
    }
    Ok(())
}
