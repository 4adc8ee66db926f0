fn main() {
    if let Err(error) = snipdeck_core::runtime::run() {
        eprintln!("[snipdeck-core] runtime failed: {error}");
        std::process::exit(1);
    }
}
