use drill::{get_opts, run_drill, DrillResult};
use std::io::Write;
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr, filtered by `RUST_LOG` if it is set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let is_tty = atty::is(atty::Stream::Stdout);
    let use_color = is_tty && ch_stdout.supports_color();

    let opts = get_opts(|app| app.get_matches_safe(), use_color).unwrap_or_else(|e| e.exit());
    init_logging(opts.verbose);

    let DrillResult {
        code,
        stdout,
        stderr,
    } = run_drill(opts);

    if !stderr.is_empty() {
        writeln!(&mut ch_stderr, "{}", stderr)?;
        ch_stderr.flush()?;
    }
    if !stdout.is_empty() {
        writeln!(&mut ch_stdout, "{}", stdout)?;
        ch_stdout.flush()?;
    }

    std::process::exit(code)
}

fn main() {
    let out = std::panic::catch_unwind(main_impl);

    match out {
        Ok(Err(e)) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
        Err(..) => {
            eprint!("\nnote: you found an internal drill error; the problem generator panicked.\n");
            std::process::exit(2);
        }
        Ok(Ok(())) => {}
    }
}
