mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", cli::error_message(&e));
        std::process::exit(cli::exit_code(&e));
    }
}
