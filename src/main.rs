fn main() {
    if let Err(e) = digital_artifacts_parser::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
