fn main() {
    let code = match venvkit::run_cli() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            venvkit::exit_code_for(&e)
        }
    };
    std::process::exit(code);
}
