//! The command interpreter: lines in, descriptions and `ERROR n` lines out.

use std::io::{self, BufRead, Write};

use log::debug;

use rn_routes::{RoadMap, RouteResult};

use crate::parser::{Command, Parsed, parse_line};

/// Owns the [`RoadMap`] plus the two output channels and drives both from a
/// line stream.
///
/// Output contract: a failing command — malformed or rejected by the engine —
/// writes exactly `ERROR n` (1-based line number, counting no-op lines) to
/// the error channel.  A successful `getRouteDescription` writes the
/// description and a newline to the output channel; every other success is
/// silent.
///
/// Both channels are generic `Write`rs, so tests can drive a session with
/// in-memory buffers.
pub struct Session<O: Write, E: Write> {
    map: RoadMap,
    out: O,
    err: E,
    line_no: u64,
}

impl<O: Write, E: Write> Session<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { map: RoadMap::new(), out, err, line_no: 0 }
    }

    /// Read access to the engine state, for inspection after a run.
    pub fn map(&self) -> &RoadMap {
        &self.map
    }

    /// Process every line of `input` in order.
    ///
    /// Only I/O errors on the channels abort the run; command failures are
    /// reported and processing continues.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            self.feed(&line?)?;
        }
        Ok(())
    }

    /// Process a single line.
    pub fn feed(&mut self, line: &str) -> io::Result<()> {
        self.line_no += 1;
        match parse_line(line) {
            Parsed::Noop => Ok(()),
            Parsed::Invalid => self.report_error(),
            Parsed::Command(cmd) => match self.exec(cmd) {
                Ok(None) => Ok(()),
                Ok(Some(text)) => writeln!(self.out, "{text}"),
                Err(e) => {
                    debug!("line {}: {e}", self.line_no);
                    self.report_error()
                }
            },
        }
    }

    /// Dispatch one parsed command; `Some` carries text for the output
    /// channel.
    fn exec(&mut self, cmd: Command<'_>) -> RouteResult<Option<String>> {
        match cmd {
            Command::AddRoad { city1, city2, length, year } => {
                self.map.add_road(city1, city2, length, year).map(|_| None)
            }
            Command::RepairRoad { city1, city2, year } => {
                self.map.repair_road(city1, city2, year).map(|_| None)
            }
            Command::RouteDescription { route } => {
                Ok(Some(self.map.route_description(route)))
            }
            Command::NewRoute { route, city1, city2 } => {
                self.map.new_route(route, city1, city2).map(|_| None)
            }
            Command::ExtendRoute { route, city } => {
                self.map.extend_route(route, city).map(|_| None)
            }
            Command::RemoveRoad { city1, city2 } => {
                self.map.remove_road(city1, city2).map(|_| None)
            }
            Command::RemoveRoute { route } => self.map.remove_route(route).map(|_| None),
            Command::RouteThrough { route, cities, links } => self
                .map
                .route_through(route, &cities, &links)
                .map(|_| None),
        }
    }

    fn report_error(&mut self) -> io::Result<()> {
        writeln!(self.err, "ERROR {}", self.line_no)
    }
}
