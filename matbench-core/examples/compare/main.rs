use matbench_core::{ComparisonSession, KernelRegistry};

fn main() -> matbench_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matbench_core=info".into()),
        )
        .init();

    let mut session = ComparisonSession::new(KernelRegistry::standard());
    session.set_size(128)?;
    session.set_repetitions(20)?;

    let report = session.run_comparison()?;
    println!("average latency over 20 repetitions, 128x128 operands:");
    for (name, latency) in report.formatted() {
        println!("  {name:>8}: {latency} ms");
    }
    Ok(())
}
