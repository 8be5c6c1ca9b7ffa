use chrono::Utc;
use log::info;
use std::io::Write;

/// Inizializza il logger condiviso da GUI e CLI.
///
/// `RUST_LOG` overrides the default `info` filter. Calling it twice is harmless:
/// the second registration fails quietly.
pub fn init() {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        info!("buscacep logger initialized");
    }
}
