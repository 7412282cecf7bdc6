//! Host-side helper: `cargo run [port]` builds the WASM bundle into
//! `static/pkg` and serves `static/` locally.

use std::process::{Command, ExitCode};
use std::env;

const DEFAULT_PORT: u16 = 8000;

fn main() -> ExitCode {
    let port = match env::args().nth(1) {
        None => DEFAULT_PORT,
        Some(arg) => match arg.parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                eprintln!("invalid port {arg:?}; usage: liquid_wasm [port]");
                return ExitCode::FAILURE;
            }
        },
    };

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors.");
            return ExitCode::FAILURE;
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH; serving whatever is already in static/pkg.");
        }
    }

    println!("Serving static/ at http://127.0.0.1:{port} …");
    match Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .status()
    {
        Ok(st) if st.success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("failed to start http server: {e}");
            ExitCode::FAILURE
        }
    }
}
