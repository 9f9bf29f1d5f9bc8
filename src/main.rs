fn main() {
    if let Err(err) = starmap_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
