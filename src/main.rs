//! vimode - demo host for the modal editing engine
//! Main entry point

use std::path::PathBuf;

use vimode::app::App;
use vimode::term::crossterm::CrosstermTerminal;

fn main() {
    let path = std::env::args().nth(1).map(PathBuf::from);

    let term = match CrosstermTerminal::new() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to create terminal backend: {e}");
            std::process::exit(1);
        }
    };

    let mut app = match path {
        Some(path) => App::open(term, path),
        None => App::new(term),
    };

    if let Err(e) = app.run() {
        eprintln!("vimode error: {e:#}");
        std::process::exit(1);
    }
}
