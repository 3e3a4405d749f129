fn main() {
    if let Err(e) = benchview_cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
