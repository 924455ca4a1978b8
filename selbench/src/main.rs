fn main() {
    // Any failure (including a parser error mid-run) ends the process with
    // status 1 after the lines already streamed
    if let Err(e) = selbench::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
