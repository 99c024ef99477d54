use lakescan::cli::{Cli, CliHandler};
use std::process;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("❌ Argument parsing failed: {}", e);
            process::exit(2);
        }
    };

    // Create and run the CLI handler
    let handler = CliHandler::new(cli);

    // Execute the main workflow
    let exit_code = match handler.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ Execution failed: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
