use invoice_client::{config::Config, observability, sample_invoice, startup};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    observability::init_tracing(&config.log_level);

    let invoice = sample_invoice();
    startup::run(&config, &invoice, &mut std::io::stdout().lock()).await?;

    Ok(())
}
