fn main() {
    if let Err(err) = csms_client::app::run() {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}
