use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use wordbook_core::{Command, Dictionary, Lookup, QueryError};
use wordbook_dictionary::{DictionaryLoader, LoadError};

use crate::render;
use crate::state::AppState;

/// Whether the loop keeps reading after a search line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Load the data file, asking for another path until one opens.
///
/// Returns `None` when input ends before a file could be loaded.
pub fn open_dictionary<R: BufRead, W: Write>(
    loader: &DictionaryLoader,
    initial: Option<PathBuf>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Dictionary>> {
    let mut path = match initial {
        Some(path) => path,
        None => {
            render::path_request(output)?;
            match read_path(input)? {
                Some(path) => path,
                None => return Ok(None),
            }
        }
    };

    loop {
        match loader.load_from_file(&path) {
            Ok(dictionary) => {
                render::loaded(output, &path)?;
                return Ok(Some(dictionary));
            }
            Err(e) => {
                match &e {
                    LoadError::FileOpen { .. } => tracing::warn!("{e}"),
                    LoadError::Read { source, .. } => tracing::warn!("{e}: {source}"),
                }
                render::open_error(output, &path)?;
            }
        }

        path = match read_path(input)? {
            Some(path) => path,
            None => return Ok(None),
        };
    }
}

fn read_path<R: BufRead>(input: &mut R) -> io::Result<Option<PathBuf>> {
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if !line.is_empty() {
            return Ok(Some(PathBuf::from(line)));
        }
    }
}

/// Interactive search loop over a loaded dictionary
pub struct Session<'a, R, W> {
    state: &'a AppState,
    input: R,
    output: W,
    searches: usize,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(state: &'a AppState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
            searches: 0,
        }
    }

    /// Serve searches until `!q` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        render::introduction(&mut self.output, self.state.service.dictionary().stats())?;

        loop {
            self.searches += 1;
            render::search_prompt(&mut self.output, self.searches)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("Input closed after {} searches", self.searches - 1);
                render::thank_you(&mut self.output)?;
                break;
            }

            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        self.output.flush()
    }

    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let out = &mut self.output;

        let query = match Command::parse(line, self.state.uppercase_prefix()) {
            Ok(Command::Quit) => {
                render::thank_you(out)?;
                return Ok(Flow::Quit);
            }
            Ok(Command::Help) => {
                render::manual(out)?;
                return Ok(Flow::Continue);
            }
            Ok(Command::Lookup(query)) => query,
            Err(e) => {
                tracing::debug!("{e}");
                render::manual(out)?;
                return Ok(Flow::Continue);
            }
        };

        let modified = match self.state.service.lookup(&query) {
            Ok(modified) => modified,
            Err(QueryError::UnknownWord(word)) => {
                tracing::debug!("No entries for '{}'", word);
                render::not_found(out)?;
                render::manual(out)?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                tracing::debug!("{e}");
                render::manual(out)?;
                return Ok(Flow::Continue);
            }
        };

        for err in &modified.rejected {
            render::parameter_error(out, err)?;
        }

        match modified.outcome() {
            Lookup::Found(entries) => render::entries(out, &entries)?,
            Lookup::NotFound => {
                render::not_found(out)?;
                render::manual(out)?;
            }
        }

        Ok(Flow::Continue)
    }
}
