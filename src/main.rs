use prequel::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;
    info!(
        driver = %config.connection.driver,
        host = %config.connection.host,
        port = config.connection.port,
        database = ?config.connection.database,
        "configuration loaded"
    );

    let draft = Draft::new(&config.draft_file);
    let mut buffer = Buffer::from_text(&draft.load()?);
    buffer.set_cursor(buffer.end_cursor());

    for statement in buffer.statements() {
        info!(%statement, "statement");
    }

    match buffer.active_query() {
        Ok(query) => info!(query = %query.trim_end(), "active statement"),
        Err(e) => warn!("{e}"),
    }

    let widths = config.column_widths();
    info!(min = widths.min, max = widths.max, "column widths");
    Ok(())
}
