//! CLI command implementations
//!
//! A `Session` owns the configuration, logger, and counters for one process
//! run. Request failures become error responses; only config and stdio
//! failures end the run.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::host::{request_id, HostError, Operation, Request};
use crate::observability::{
    log_event, Event, Logger, MetricsRegistry, MetricsSnapshot, ObservationScope,
};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{error_response, ok_response, read_request, read_requests, write_line};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Filter { config } => filter(config.as_deref()),
        Command::Serve { config } => serve(config.as_deref()),
        Command::Ops => ops(),
    }
}

/// Answer exactly one request from stdin
pub fn filter(config_path: Option<&Path>) -> CliResult<()> {
    let session = Session::open(config_path)?;
    let stdin = io::stdin();
    session.filter_once(&mut stdin.lock(), &mut io::stdout())
}

/// Answer requests from stdin until EOF
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    let session = Session::open(config_path)?;
    let stdin = io::stdin();
    session.serve(stdin.lock(), &mut io::stdout())
}

/// Print the operation registry
pub fn ops() -> CliResult<()> {
    write_line(&mut io::stdout(), &operation_names())
}

/// Registered operation names as a JSON array
pub fn operation_names() -> Value {
    Value::Array(
        Operation::ALL
            .iter()
            .map(|op| Value::from(op.name()))
            .collect(),
    )
}

/// State for one CLI run
#[derive(Debug)]
pub struct Session {
    config: Config,
    logger: Logger,
    metrics: MetricsRegistry,
}

impl Session {
    /// Create a session from a validated config
    pub fn new(config: Config) -> CliResult<Self> {
        let logger = Logger::new(config.severity()?);
        Ok(Self::with_logger(config, logger))
    }

    /// Create a session that logs to `writer` instead of stderr
    pub fn with_writer(
        config: Config,
        writer: Arc<Mutex<dyn Write + Send>>,
    ) -> CliResult<Self> {
        let logger = Logger::with_writer(config.severity()?, writer);
        Ok(Self::with_logger(config, logger))
    }

    fn with_logger(config: Config, logger: Logger) -> Self {
        Self {
            config,
            logger,
            metrics: MetricsRegistry::new(),
        }
    }

    /// Load config (or defaults) and create a session
    pub fn open(config_path: Option<&Path>) -> CliResult<Self> {
        let config = Config::load_or_default(config_path)?;
        let session = Self::new(config)?;

        let max_input_len = session.config.max_input_len.to_string();
        log_event(
            &session.logger,
            Event::ConfigLoaded,
            &[
                ("log_level", session.config.log_level.as_str()),
                ("max_input_len", max_input_len.as_str()),
            ],
        );

        Ok(session)
    }

    /// Counters so far
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Read one request, write one response
    pub fn filter_once<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> CliResult<()> {
        let line = read_request(reader)?;
        let response = self.handle_line(&line);
        write_line(writer, &response)
    }

    /// Read requests until EOF, writing one response per request
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> CliResult<()> {
        log_event(&self.logger, Event::SessionBegin, &[]);

        for line in read_requests(reader) {
            let line = line.map_err(|e| self.abort(e))?;
            let response = self.handle_line(&line);
            write_line(writer, &response).map_err(|e| self.abort(e))?;
        }

        log_event(&self.logger, Event::SessionEnd, &[]);
        self.log_metrics();

        Ok(())
    }

    /// Turn one request line into one response object
    pub fn handle_line(&self, line: &str) -> Value {
        match Request::parse_line(line) {
            Ok(request) => self.handle(&request),
            Err(err) => self.reject(request_id(line), &err),
        }
    }

    /// Run a parsed request
    pub fn handle(&self, request: &Request) -> Value {
        let scanned = request.input_len().unwrap_or(0);
        let scanned_field = scanned.to_string();
        let scope = self.config.log_requests.then(|| {
            ObservationScope::with_fields(
                &self.logger,
                "FILTER",
                &[("op", request.op.name()), ("len", scanned_field.as_str())],
            )
        });

        match request.execute(self.config.max_input_len) {
            Ok(data) => {
                let returned = data.as_array().map_or(0, Vec::len);
                self.metrics.record_served(scanned, returned);

                if let Some(scope) = scope {
                    scope.complete_with_fields(&[("matched", returned.to_string().as_str())]);
                }

                ok_response(request.id.clone(), data)
            }
            Err(err) => {
                self.metrics.record_rejected();

                let message = err.to_string();
                if let Some(scope) = scope {
                    scope.fail(err.code(), &message);
                }

                error_response(request.id.clone(), err.code(), &message)
            }
        }
    }

    fn reject(&self, id: Option<Value>, err: &HostError) -> Value {
        self.metrics.record_rejected();

        let message = err.to_string();
        self.logger.warn(
            Event::RequestRejected.as_str(),
            &[("code", err.code()), ("reason", message.as_str())],
        );

        error_response(id, err.code(), &message)
    }

    fn abort(&self, err: CliError) -> CliError {
        log_event(
            &self.logger,
            Event::SessionAborted,
            &[("code", err.code_str()), ("reason", err.message())],
        );
        self.log_metrics();
        err
    }

    fn log_metrics(&self) {
        let fields = self.metrics.snapshot().fields();
        let field_refs: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        log_event(&self.logger, Event::SessionMetrics, &field_refs);
    }
}
