use std::io;

fn main() {
    pig_cli::logging::init_logging();
    let code = pig_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
