use clap::Parser;
use leasedns_domain::CliOverrides;
use leasedns_infrastructure::capture::PcapPacketSource;
use leasedns_infrastructure::dns::DnsServerHandler;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "leasedns")]
#[command(version)]
#[command(about = "leasedns - Serve DNS for hosts seen taking DHCP leases")]
struct Cli {
    /// Network interface to watch for DHCP traffic
    #[arg(value_name = "INTERFACE")]
    interface: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Do not register this machine's own hostname
    #[arg(long)]
    no_self_register: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        interface: cli.interface,
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        log_level: cli.log_level,
        no_self_register: cli.no_self_register,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting leasedns v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_summary(&config);

    let use_cases = di::UseCases::new(&config);

    // Capture must open before anything else runs; without it there is nothing to serve.
    let source = PcapPacketSource::open(&config.capture)?;

    if config.registry.self_register {
        let registered = use_cases
            .register_local_host
            .execute(&config.capture.interface)
            .await?;
        info!(addresses = registered, "Self-registration complete");
    }

    let dns_handler = DnsServerHandler::new(use_cases.resolve_host.clone());
    let dns_server =
        server::start_dns_server(&config.server.dns_listen_address(), dns_handler)?;
    tokio::spawn(dns_server);

    let capacity = config.capture.queue_capacity;
    let (packets, capture_task) = source.spawn(capacity);
    let (leases, correlator_task) = use_cases.correlate_leases.clone().spawn(packets, capacity);

    let applied = use_cases.record_lease.run(leases).await;

    match correlator_task.await {
        Ok(stats) => info!(applied, packets = stats.packets, leases = stats.leases, "Lease pipeline stopped"),
        Err(e) => warn!(error = %e, "Correlator task ended abnormally"),
    }

    // The pipeline only drains when capture stops, so surface why it did.
    let captured = capture_task.await??;
    info!(captured, "Server shutdown complete");
    Ok(())
}
