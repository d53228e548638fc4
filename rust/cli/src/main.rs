use std::io;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let code = doumate_cli::run(args, &mut io::stdout(), &mut io::stderr());
    process::exit(code);
}
