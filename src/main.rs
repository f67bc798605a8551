// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Glasswing CLI - Transparent Fetch Pass-Through Worker
//!
//! Example usage and demonstration of the glasswing library.

use std::env;
use std::process::ExitCode;

use glasswing::{HandlerRegistry, InstallLogger, PassThrough, Request, Worker};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("glasswing=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "fetch" => {
            if args.len() < 3 {
                eprintln!("Usage: glasswing fetch <url>");
                return ExitCode::from(1);
            }
            fetch_url(&args[2]).await
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("glasswing {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"Glasswing - Transparent Fetch Pass-Through Worker

USAGE:
    glasswing <COMMAND> [OPTIONS]

COMMANDS:
    fetch <url>     Dispatch a request through the worker and show the response
    help            Show this help message
    version         Show version information

EXAMPLES:
    glasswing fetch https://example.com
    glasswing fetch https://example.com/api/data

For more information, see: https://github.com/bountyyfi/glasswing
"#
    );
}

async fn fetch_url(url: &str) -> ExitCode {
    println!("Dispatching: {}", url);

    let forwarder = match PassThrough::new() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to create forwarder: {}", e);
            return ExitCode::from(1);
        }
    };

    let registry = HandlerRegistry::new()
        .on_install(InstallLogger)
        .on_fetch(forwarder);

    let worker = match Worker::new(registry) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to create worker: {}", e);
            return ExitCode::from(1);
        }
    };

    if let Err(e) = worker.install().await {
        eprintln!("Failed to install worker: {}", e);
        return ExitCode::from(1);
    }

    let request = match Request::get(url) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid URL: {}", e);
            return ExitCode::from(1);
        }
    };

    match worker.dispatch_fetch(request).await {
        Ok(response) => {
            println!("\n=== Response ===");
            println!("Status: {}", response.status);
            println!("URL: {}", response.url);
            println!("Content-Type: {:?}", response.content_type());
            println!("Size: {} bytes", response.body_len());
            println!("Time: {}ms", response.response_time_ms);

            if response.redirected {
                println!("Redirected: yes");
            }

            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Forwarded request failed: {}", e);
            ExitCode::from(1)
        }
    }
}
