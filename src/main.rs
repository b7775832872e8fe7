use std::error::Error;
use std::io;
use subnet_calc::config::Config;
use subnet_calc::logging::init_logging;
use subnet_calc::shell::{write_abort_message, Shell};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    if let Some(color) = config.color {
        colored::control::set_override(color);
    }
    //
    log::info!("#Start main() {config:?}");

    let format = config.output;
    let session = tokio::task::spawn_blocking(move || {
        let mut shell = Shell::new(io::stdin().lock(), io::stdout(), format);
        shell.run()
    });

    tokio::select! {
        joined = session => {
            let outcome = joined??;
            log::info!("#End main() {outcome:?}");
        }
        _ = tokio::signal::ctrl_c() => {
            log::warn!("Interrupted by the user");
            // The session thread is still blocked reading stdin.
            println!();
            write_abort_message(&mut io::stdout())?;
            std::process::exit(0);
        }
    }

    Ok(())
}
