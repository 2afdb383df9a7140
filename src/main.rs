mod app;

use anyhow::Result;
use lumen::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    if let Some(arg) = args.next() {
        match arg.as_str() {
            "--init-config" => {
                let path = Config::get_default_config_path()?;
                Config::generate_default_config(path)?;
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Usage: lumen-admin [--init-config]");
                std::process::exit(2);
            }
        }
    }

    app::run().await
}
