use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Unwrap a result, or print the error and exit with status 1.
pub fn or_exit<T, E: Display>(r: Result<T, E>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1)
        }
    }
}

pub enum Input {
    File(PathBuf),
    Stdin(io::Stdin),
}

impl Input {
    pub fn buf_read(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            Input::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            Input::Stdin(stdin) => Ok(Box::new(stdin.lock())),
        }
    }
}

pub enum Output {
    File(PathBuf),
    Stdout(io::Stdout),
}

impl Output {
    pub fn buf_write(&self) -> io::Result<Box<dyn Write>> {
        match self {
            Output::File(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            Output::Stdout(stdout) => Ok(Box::new(BufWriter::new(stdout.lock()))),
        }
    }
}

/// Read from the given file, or from stdin when there is none.
pub fn or_stdin<P: AsRef<Path>>(path: Option<P>) -> Input {
    match path {
        Some(path) => Input::File(path.as_ref().to_owned()),
        None => Input::Stdin(io::stdin()),
    }
}

/// Write to the given file, or to stdout when there is none.
pub fn or_stdout<P: AsRef<Path>>(path: Option<P>) -> Output {
    match path {
        Some(path) => Output::File(path.as_ref().to_owned()),
        None => Output::Stdout(io::stdout()),
    }
}
