use clap::Parser;

use bitops::demo;

/// Demonstrates the fundamental bitwise operations on 8-bit values,
/// printing each operand and result as decimal plus binary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<(), String> {
    env_logger::init();

    let _args = Args::parse();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    demo::run(&mut handle).map_err(|e| e.to_string())
}
