use std::env::args;
use std::io;
use std::path::Path;
use std::process;
use std::time::Instant;

use extract_triplets::document::{output_path, process, Options};
use extract_triplets::{or_exit, or_stdin, or_stdout};
use getopts::Options as GetOpts;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str, opts: GetOpts) {
    let brief = format!("Usage: {} [options] [INPUT_FILE] [OUTPUT_FILE]", program);
    print!("{}", opts.usage(&brief));
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args: Vec<String> = args().collect();
    let program = args[0].clone();

    let mut opts = GetOpts::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optflag("l", "lemma", "use lemmas instead of forms");
    opts.optflag("p", "projective", "use projective heads");
    opts.optflag("c", "keep-case", "do not lowercase forms and sentence text");
    opts.optflag("s", "senses", "write lexical-sense categories instead of tags");
    opts.optflag(
        "d",
        "derive-output",
        "write to INPUT_FILE with its extension replaced by triplets.txt",
    );
    opts.optflag("v", "verbose", "log progress to stderr");
    let matches = or_exit(opts.parse(&args[1..]));

    if matches.opt_present("h") {
        print_usage(&program, opts);
        return;
    }

    if matches.free.len() > 2 {
        print_usage(&program, opts);
        process::exit(1);
    }

    let derive = matches.opt_present("d");
    if derive && matches.free.len() != 1 {
        print_usage(&program, opts);
        process::exit(1);
    }

    init_logging(matches.opt_present("v"));

    let options = Options {
        lemma: matches.opt_present("l"),
        projective: matches.opt_present("p"),
        lowercase: !matches.opt_present("c"),
        senses: matches.opt_present("s"),
    };

    // Read CoNLL-X from stdin or file.
    let input = or_stdin(matches.free.get(0));
    let reader = or_exit(input.buf_read());

    let output = if derive {
        let path = output_path(Path::new(&matches.free[0]));
        info!("writing triplets to {}", path.display());
        or_stdout(Some(path))
    } else {
        or_stdout(matches.free.get(1))
    };
    let mut writer = or_exit(output.buf_write());

    let start = Instant::now();
    let stats = or_exit(process(reader, &mut writer, &options));

    info!(
        "extracted {} triplets from {} sentences in {:.2?}",
        stats.triplets,
        stats.sentences,
        start.elapsed()
    );
}
