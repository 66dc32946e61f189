use clap::Args;
use std::io::Write;
use std::time::{Duration, Instant};

/// Session stopwatch: prints elapsed MM:SS once per second. Purely local
/// display state, nothing is persisted and logs are unaffected.
#[derive(Args)]
pub struct TimerCommand {
    /// Stop automatically after this many seconds (runs until interrupted
    /// otherwise)
    #[arg(long, short)]
    pub seconds: Option<u64>,
}

impl TimerCommand {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let started = Instant::now();
        loop {
            let elapsed = started.elapsed().as_secs();
            print!("\r{}", format_elapsed(elapsed));
            std::io::stdout().flush()?;

            if let Some(limit) = self.seconds {
                if elapsed >= limit {
                    println!();
                    return Ok(());
                }
            }
            std::thread::sleep(Duration::from_secs(1));
        }
    }
}

fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
