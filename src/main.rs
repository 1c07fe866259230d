use clap::Parser;
use pinmap::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Create cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        // Set up graceful shutdown handling
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");

            // Cancel all operations when Ctrl+C is received
            cancellation_token.cancel();
        };

        // Run the main command with cancellation support
        tokio::select! {
            result = commands::run(args, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(pinmap::Error::processing_interrupted(
                    "Rendering interrupted by user".to_string()
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("pinmap - Marker Map Generator for Status-Tagged Coordinates");
    println!("===========================================================");
    println!();
    println!("Render plain latitude,longitude,status CSV files as marker maps.");
    println!("Each status category gets its own marker color, and markers within");
    println!("a category are lettered A-Z in record order.");
    println!();
    println!("USAGE:");
    println!("    pinmap <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    render      Render marker CSV files into a map document (main command)");
    println!("    report      Summarize marker CSV files without rendering a map");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Render a CSV file to a self-contained Leaflet HTML map:");
    println!("    pinmap render candidates.csv");
    println!();
    println!("    # Render several files to KML with a custom center and title:");
    println!("    pinmap render north.csv south.csv --format kml \\");
    println!("                  --center 18.520679,73.8565 --title \"Pune placements\"");
    println!();
    println!("    # Summarize inputs without rendering:");
    println!("    pinmap report candidates.csv --detailed --format json");
    println!("    pinmap report region/ --status placed");
    println!();
    println!("    # Get help for specific commands:");
    println!("    pinmap render --help");
    println!("    pinmap report --help");
    println!();
    println!("For detailed help on any command, use:");
    println!("    pinmap <COMMAND> --help");
}
