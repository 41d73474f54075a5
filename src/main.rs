use applicant_dashboard::{
    cli::{self, Command},
    config::{get_config, init_config, LogFormat},
    Dashboard,
};
use tokio::io::{stdin, stdout, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    init_tracing(config.log_format);

    info!(
        backend = ?config.storage_backend,
        data_dir = %config.data_dir.display(),
        key = %config.storage_key,
        "Starting applicant dashboard"
    );

    let mut dashboard = Dashboard::from_config(config);
    dashboard.load().await;

    let mut out = stdout();
    let mut lines = BufReader::new(stdin()).lines();

    out.write_all(format!("{}\n\n", cli::HELP).as_bytes()).await?;
    out.write_all(cli::execute(&mut dashboard, Command::Show(None)).await?.as_bytes())
        .await?;

    loop {
        out.write_all(format!("\n{}", cli::prompt(&dashboard)).as_bytes())
            .await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                out.write_all(format!("{}\n", e).as_bytes()).await?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        let text = match cli::execute(&mut dashboard, command).await {
            Ok(text) => text,
            Err(e) => format!("{:#}", e),
        };
        out.write_all(format!("{}\n", text).as_bytes()).await?;
    }

    if dashboard.is_dirty() {
        tracing::warn!(id = ?dashboard.editing_id(), "Exiting with unsaved changes");
    }
    Ok(())
}
