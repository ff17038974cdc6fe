use chrono::Utc;
use log::info;
use std::io::Write;

/// Inizializza env_logger con il filtro dato (es. "info", "crew_form=debug").
///
/// `RUST_LOG`, when set, wins over `level` so one-off debugging needs no config edit.
pub fn init(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(level);
    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    info!("Logger initialized (level: {})", level);
}
