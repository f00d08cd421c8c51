//! Binary entrypoint for ttcx-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = ttcx_cli::run() {
        eprintln!("{}", ttcx_cli::render_error(&err));
        std::process::exit(ttcx_cli::exit_code_for_error(&err));
    }
}
