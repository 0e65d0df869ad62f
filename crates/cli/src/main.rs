use clap::Parser;

use cheat_sheet::{Cli, init_tracing, normalize_args, run_command};

const ERROR_PREFIX: &str = "error occurred:";

fn main() {
    let args = normalize_args(std::env::args_os());

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let rendered = e.render().to_string();
            println!("{ERROR_PREFIX} {}", rendered.trim_start_matches("error: ").trim_end());
            return;
        }
    };

    let request = cli.into_request();
    init_tracing(request.verbose);

    let result = run_command(&request, &mut std::io::stdout().lock());
    if let Err(e) = result {
        // Errors are reported, not signalled through the exit status.
        println!("{ERROR_PREFIX} {e:#}");
    }
}
