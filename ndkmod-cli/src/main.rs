//! Binary entrypoint for ndkmod

fn main() {
    if let Err(err) = ndkmod_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
