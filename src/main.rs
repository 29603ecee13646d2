use tracing::info;

use ordered_init::{run_all, InitError, InitRunner, OrderedInit};

/// Demo boot sequence: three steps registered out of order, run in order.
struct BootSequence;

impl OrderedInit for BootSequence {
    fn register<'a>(&'a self, runner: &mut InitRunner<'a>) -> Result<(), InitError> {
        runner.register(3, "cache", || info!("cache warmed"))?;
        runner.register(1, "logging", || info!("logging backend ready"))?;
        runner.register(2, "database", || info!("database pool ready"))?;
        Ok(())
    }
}

/// Configure tracing once at startup for the entire process.
///
/// Use `RUST_LOG` to control verbosity, e.g. `RUST_LOG=debug` to watch the
/// runner register and invoke each step.
fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

fn main() -> Result<(), InitError> {
    setup_tracing();

    info!("Running boot sequence");
    run_all(Some(&BootSequence))?;
    info!("Boot sequence complete");

    Ok(())
}
