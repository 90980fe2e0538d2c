use std::io;

use tracing_subscriber::EnvFilter;

/// Log targets owned by this workspace; everything else stays silent.
const TARGETS: [&str; 2] = ["lifecount", "lifecount_core"];

/// `-v` count to level name. Warnings are always on.
fn level_name(verbose: u8) -> &'static str {
    ["warn", "info", "debug"]
        .get(verbose as usize)
        .copied()
        .unwrap_or("trace")
}

fn directives(verbose: u8) -> String {
    let level = level_name(verbose);
    TARGETS.map(|target| format!("{target}={level}")).join(",")
}

/// Installs the stderr subscriber. `RUST_LOG`, when set, wins over `-v`.
pub fn init(verbose: u8) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(directives(verbose)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
