//! Line-driven terminal front end.
//!
//! Runs on a single task: stdin lines and finished searches are handled in
//! one `select!` loop, so screen state is never touched concurrently. Each
//! search runs as a spawned task that reports back over a channel; starting
//! a new search aborts the previous one.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::domain::{Credentials, DomainError};
use crate::models::{BookRecord, SearchKind};
use crate::openlibrary::{CatalogClient, CatalogError, OpenLibraryClient};
use crate::ui::render::{render_login, render_picker, render_search};
use crate::ui::{Alert, LoginField, LoginOutcome, Screen, SearchScreen, SessionGate};

pub const QUIT_COMMAND: &str = ":quit";
pub const KIND_COMMAND: &str = ":kind";

struct SearchDone {
    seq: u64,
    outcome: Result<Vec<BookRecord>, CatalogError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    gate: SessionGate,
    client: Arc<dyn CatalogClient>,
    login_step: LoginField,
    in_flight: Option<JoinHandle<()>>,
    done_tx: mpsc::UnboundedSender<SearchDone>,
    done_rx: mpsc::UnboundedReceiver<SearchDone>,
}

impl App {
    pub fn new(gate: SessionGate, client: Arc<dyn CatalogClient>) -> Self {
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Self {
            gate,
            client,
            login_step: LoginField::Identifier,
            in_flight: None,
            done_tx,
            done_rx,
        }
    }

    pub fn from_config(config: &Config, credentials: Credentials) -> Result<Self, DomainError> {
        let client = OpenLibraryClient::new(config)
            .map_err(|e| DomainError::External(e.to_string()))?;
        let gate = SessionGate::new(credentials, config.catalog_base_url.clone());
        Ok(Self::new(gate, Arc::new(client)))
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    /// Drive the screens from `input` until `:quit` or end of input.
    ///
    /// At end of input a search still in flight is awaited so its result
    /// gets rendered.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), DomainError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        write!(out, "{}", render_login(self.gate.login()))?;
        self.focus_login_step(out)?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if self.handle_line(line.trim_end(), out)? == Flow::Quit {
                                self.abort_in_flight();
                                return Ok(());
                            }
                        }
                        None => break,
                    }
                }
                Some(done) = self.done_rx.recv() => {
                    self.apply_search_done(done, out)?;
                }
            }
        }

        while self.search_loading() {
            match self.done_rx.recv().await {
                Some(done) => self.apply_search_done(done, out)?,
                None => break,
            }
        }
        Ok(())
    }

    fn search_loading(&self) -> bool {
        self.gate.search().is_some_and(SearchScreen::is_loading)
    }

    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, DomainError> {
        if line == QUIT_COMMAND {
            return Ok(Flow::Quit);
        }
        match self.gate.active_screen() {
            Screen::Login => self.handle_login_line(line, out)?,
            Screen::Search => self.handle_search_line(line, out)?,
        }
        Ok(Flow::Continue)
    }

    fn focus_login_step<W: Write>(&mut self, out: &mut W) -> Result<(), DomainError> {
        self.gate.login_mut().on_focus(self.login_step);
        let prompt = match self.login_step {
            LoginField::Identifier => "Username",
            LoginField::Secret => "Password",
        };
        writeln!(out, "{}:", prompt)?;
        out.flush()?;
        Ok(())
    }

    fn handle_login_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), DomainError> {
        let field = self.login_step;
        let login = self.gate.login_mut();
        login.update_field(field, line);
        login.on_blur(field);
        if let Some(error) = &login.field(field).error {
            writeln!(out, "! {}", error)?;
        }

        if field == LoginField::Identifier {
            self.login_step = LoginField::Secret;
            return self.focus_login_step(out);
        }

        match self.gate.submit_login() {
            LoginOutcome::Success => {
                if let Some(search) = self.gate.search() {
                    write!(out, "{}", render_search(search))?;
                }
                out.flush()?;
                Ok(())
            }
            LoginOutcome::Invalid => {
                write!(out, "{}", render_login(self.gate.login()))?;
                self.login_step = LoginField::Identifier;
                self.focus_login_step(out)
            }
            LoginOutcome::Rejected(alert) => {
                write_alert(out, &alert)?;
                self.login_step = LoginField::Identifier;
                self.focus_login_step(out)
            }
        }
    }

    fn handle_search_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), DomainError> {
        let Some(search) = self.gate.search_mut() else {
            return Ok(());
        };

        if search.picker().is_visible() {
            let choice = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| search.picker().option_at(n));
            match choice {
                Some(kind) => search.choose_kind(kind),
                None => search.dismiss_picker(),
            }
            write!(out, "{}", render_search(search))?;
            out.flush()?;
            return Ok(());
        }

        if line == KIND_COMMAND {
            search.open_picker();
            write!(out, "{}", render_picker(search.picker()))?;
            out.flush()?;
            return Ok(());
        }

        search.set_query(line);
        match search.begin_search() {
            Ok(request) => {
                write!(out, "{}", render_search(search))?;
                self.spawn_search(request.seq, request.kind, request.url);
            }
            Err(alert) => write_alert(out, &alert)?,
        }
        out.flush()?;
        Ok(())
    }

    fn spawn_search(&mut self, seq: u64, kind: SearchKind, url: String) {
        self.abort_in_flight();
        let client = Arc::clone(&self.client);
        let done_tx = self.done_tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = client.fetch_records(kind, &url).await;
            let _ = done_tx.send(SearchDone { seq, outcome });
        }));
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    fn apply_search_done<W: Write>(
        &mut self,
        done: SearchDone,
        out: &mut W,
    ) -> Result<(), DomainError> {
        let Some(search) = self.gate.search_mut() else {
            return Ok(());
        };
        if let Some(alert) = search.complete_search(done.seq, done.outcome) {
            write_alert(out, &alert)?;
        }
        write!(out, "{}", render_search(search))?;
        out.flush()?;
        Ok(())
    }
}

fn write_alert<W: Write>(out: &mut W, alert: &Alert) -> Result<(), DomainError> {
    writeln!(out, "! {}", alert)?;
    Ok(())
}
