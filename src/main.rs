fn main() {
    if let Err(e) = cfgkit::cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
