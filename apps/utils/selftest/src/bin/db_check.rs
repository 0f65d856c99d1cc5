//! Connect to and close each configured backend, printing one status line per step.

use clap::Parser;
use database::mongodb::MongoConnector;
use database::mysql::MySqlConnector;
use database::redshift::RedshiftConnector;
use database::{BackendKind, ConnectionConfig, Connector};
use selftest::{bootstrap, status_line};

#[derive(Parser, Debug)]
#[command(about = "Check connectivity to MongoDB, MySQL and Redshift")]
struct Args {
    /// Backends to check (default: all)
    #[arg(short, long, value_enum, num_args = 1..)]
    only: Option<Vec<Backend>>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Backend {
    Mongo,
    Mysql,
    Redshift,
}

impl Backend {
    fn kind(self) -> BackendKind {
        match self {
            Backend::Mongo => BackendKind::Document,
            Backend::Mysql => BackendKind::RelationalSql,
            Backend::Redshift => BackendKind::Warehouse,
        }
    }
}

async fn check<C: Connector>(mut connector: C) {
    let kind = connector.kind();
    let database = connector.config().database.clone();

    let connected = connector.connect().await.map(|_| ());
    println!(
        "{}",
        status_line(&format!("Connected to {}: {}", kind, database), &connected)
    );

    connector.close().await;
    if connected.is_ok() {
        println!("✓ {} connection closed", kind);
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    bootstrap();
    let args = Args::parse();

    let backends = args
        .only
        .unwrap_or_else(|| vec![Backend::Mongo, Backend::Mysql, Backend::Redshift]);

    println!("Testing database connections...\n");

    for backend in backends {
        let config = match ConnectionConfig::from_env(backend.kind()) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ {} test skipped: {}\n", backend.kind(), e);
                continue;
            }
        };

        match backend {
            Backend::Mongo => check(MongoConnector::new(config)).await,
            Backend::Mysql => check(MySqlConnector::new(config)).await,
            Backend::Redshift => check(RedshiftConnector::new(config)).await,
        }
        println!();
    }

    Ok(())
}
