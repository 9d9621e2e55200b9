//! tinyrc4: command-line front end for the TinyRC4 engine.
//!
//! Requests go through the same `CipherRequestHandler` as the HTTP gateway,
//! so validation and error messages are identical.

mod render;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tinyrc4_engine::{
    CipherRequest, CipherRequestHandler, CipherResponse, CipherService, Operation,
};

const EXAMPLE_PLAINTEXT: &str = "BAG";
const EXAMPLE_KEY: &str = "2,1,3";

/// TinyRC4: RC4-style stream cipher over the eight-letter alphabet A-H
#[derive(Parser, Debug)]
#[command(name = "tinyrc4")]
#[command(about = "Encrypt, decrypt and trace TinyRC4 over the A-H alphabet")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt plaintext
    Encrypt(CipherArgs),
    /// Decrypt ciphertext
    Decrypt(CipherArgs),
    /// Encrypt BAG with key 2,1,3 and decrypt the result
    Example {
        /// Print JSON responses instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct CipherArgs {
    /// Letters A-H (case-insensitive)
    #[arg(short, long)]
    text: String,

    /// Comma-separated key values 0-7, 1 to 8 of them
    #[arg(short, long)]
    key: String,

    /// Print every step of the run
    #[arg(long)]
    steps: bool,

    /// Print the JSON response instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(command = ?cli.command, "Parsed command line");

    let handler = CipherRequestHandler::new(Arc::new(CipherService::new()));

    let succeeded = match cli.command {
        Command::Encrypt(args) => run_one(&handler, Operation::Encrypt, args)?,
        Command::Decrypt(args) => run_one(&handler, Operation::Decrypt, args)?,
        Command::Example { json } => run_example(&handler, json)?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_one(
    handler: &CipherRequestHandler<CipherService>,
    operation: Operation,
    args: CipherArgs,
) -> Result<bool> {
    let request = CipherRequest::new(operation, args.text, args.key, args.steps);
    let response = handler.handle(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(operation, &response);
    }
    Ok(response.is_success())
}

fn run_example(handler: &CipherRequestHandler<CipherService>, json: bool) -> Result<bool> {
    let encrypted = handler.handle(&CipherRequest::new(
        Operation::Encrypt,
        EXAMPLE_PLAINTEXT,
        EXAMPLE_KEY,
        false,
    ));
    let Some(ciphertext) = encrypted.outcome().map(|o| o.ciphertext.clone()) else {
        print_response(Operation::Encrypt, &encrypted);
        return Ok(false);
    };

    let decrypted = handler.handle(&CipherRequest::new(
        Operation::Decrypt,
        ciphertext,
        EXAMPLE_KEY,
        false,
    ));
    let verified = decrypted
        .outcome()
        .is_some_and(|o| o.plaintext == EXAMPLE_PLAINTEXT);

    if json {
        let report = serde_json::json!({
            "encryption": encrypted,
            "decryption": decrypted,
            "verified": verified,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(verified);
    }

    println!("Example: encrypt {EXAMPLE_PLAINTEXT} with key [{EXAMPLE_KEY}]\n");
    print_response(Operation::Encrypt, &encrypted);
    println!();
    print_response(Operation::Decrypt, &decrypted);
    println!();
    if verified {
        println!("✓ Decrypted text matches the original plaintext");
    } else {
        println!("✗ Decrypted text does not match the original plaintext");
    }
    Ok(verified)
}

fn print_response(operation: Operation, response: &CipherResponse) {
    match response {
        CipherResponse::Success(outcome) => {
            if let Some(steps) = &outcome.steps {
                print!("{}", render::render_steps(steps));
                println!();
            }
            print!("{}", render::render_outcome(operation, outcome));
        }
        CipherResponse::Failure(failure) => {
            print!("{}", render::render_failure(operation, &failure.error));
        }
    }
}
