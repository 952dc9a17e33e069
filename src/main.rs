// ABOUTME: Binary entry point for the stencil CLI
// ABOUTME: Runs the application and reports failures on stderr with exit code 1

use stencil::cli::App;

fn main() {
    let result = App::from_args().and_then(|app| app.run());
    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
