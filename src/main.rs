fn main() {
    if let Err(err) = appauth_bridge::cli::main() {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
}
