use onboard_cli::{cli, commands, init_tracing};

fn main() {
    let matches = cli::command().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match commands::dispatch(&matches) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
