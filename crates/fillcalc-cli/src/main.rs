use std::io;
use std::process;

use fillcalc_cli::prompt::Console;
use fillcalc_cli::session;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                eprintln!("Usage: fillcalc");
                eprintln!();
                eprintln!("Interactive calculator for fill-command corner coordinates.");
                eprintln!("Prompts for two X,Y,Z corners, then lets you expand or contract");
                eprintln!("the X/Z footprint, shift the height, and clamp the vertical span");
                eprintln!("to an exact block count. All input is read from stdin.");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
    }

    log::debug!("starting interactive session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    session::run(&mut console)
}
