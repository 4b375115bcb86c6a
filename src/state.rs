use std::path::Path;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::data::format::serialize_rows;
use crate::data::loader::{parse_raw_to_rows, read_input_file};
use crate::data::model::{ParseOptions, ParsedInput, Row};
use crate::data::window::window_rows;
use crate::error::ServiceError;
use crate::service::client::{DescriptorService, Ro5Client};
use crate::service::model::{DownloadPayload, Ro5Item, Ro5Request, Ro5Response, Ro5Summary};

type ServiceReply = Result<Ro5Response, ServiceError>;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,
    service: Option<Arc<dyn DescriptorService>>,

    /// Original pasted or uploaded text. Re-parses always start from here.
    pub raw_text: String,

    /// Name of the uploaded file, used for delimiter detection.
    pub filename: Option<String>,

    /// Options for the next re-parse.
    pub options: ParseOptions,

    /// Rows (inside the window) that will be submitted.
    pub parsed: ParsedInput,

    /// Row count before the window was applied.
    pub total_rows: usize,

    /// Editable `SMILES\tName` rendering of `parsed.rows`.
    pub review_text: String,

    pub items: Vec<Ro5Item>,
    pub summary: Option<Ro5Summary>,
    pub download: Option<DownloadPayload>,

    /// Informational note sent along with the results.
    pub note: Option<String>,

    /// 1-based page of the results table.
    pub page: usize,
    pub show_all: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a request to the descriptor service is in flight.
    pub loading: bool,

    pending: Option<Receiver<ServiceReply>>,
}

impl AppState {
    /// State talking to the HTTP service named in `config`.
    pub fn new(config: AppConfig) -> Self {
        match Ro5Client::new(&config) {
            Ok(client) => Self::with_service(config, Arc::new(client)),
            Err(e) => {
                log::error!("Failed to build HTTP client: {e}");
                let mut state = Self::empty(config, None);
                state.status_message = Some(format!("Error: {e}"));
                state
            }
        }
    }

    pub fn with_service(config: AppConfig, service: Arc<dyn DescriptorService>) -> Self {
        Self::empty(config, Some(service))
    }

    fn empty(config: AppConfig, service: Option<Arc<dyn DescriptorService>>) -> Self {
        Self {
            config,
            service,
            raw_text: String::new(),
            filename: None,
            options: ParseOptions::default(),
            parsed: ParsedInput::default(),
            total_rows: 0,
            review_text: String::new(),
            items: Vec::new(),
            summary: None,
            download: None,
            note: None,
            page: 1,
            show_all: false,
            status_message: None,
            loading: false,
            pending: None,
        }
    }

    // -- Input --

    /// Replace the input text and parse it with the current options.
    pub fn load_text(&mut self, text: String, filename: Option<String>) {
        self.raw_text = text;
        self.filename = filename;
        self.reparse();
    }

    /// The paste box was edited by hand: the text no longer comes from the
    /// uploaded file, so its extension stops steering delimiter detection.
    pub fn raw_text_edited(&mut self) {
        if let Some(name) = self.filename.take() {
            log::debug!("Input text edited; detaching it from {name}");
        }
    }

    /// Read an uploaded file and parse it. Errors end up in the status line.
    pub fn load_file(&mut self, path: &Path) {
        match read_input_file(path, self.config.max_upload_bytes) {
            Ok(file) => {
                log::info!("Loaded {} ({} bytes)", file.filename, file.text.len());
                self.status_message = None;
                self.load_text(file.text, Some(file.filename));
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Parse `raw_text` again, apply the row window, and refresh the review
    /// text.
    ///
    /// The window (`start_index`, `n_molecules`) is reset afterwards, so it
    /// applies to this re-parse only.
    pub fn reparse(&mut self) {
        let parsed = parse_raw_to_rows(&self.raw_text, self.filename.as_deref(), &self.options);
        self.total_rows = parsed.rows.len();

        let rows = window_rows(&parsed.rows, self.options.start_index, self.options.n_molecules);
        log::info!(
            "Parsed {} row(s), {} inside window [{}, {:?}]",
            self.total_rows,
            rows.len(),
            self.options.start_index,
            self.options.n_molecules
        );

        self.set_rows(rows, parsed.header);
        self.options.reset_window();
    }

    /// Take the user's edits of `review_text` as the rows to submit.
    pub fn apply_review_text(&mut self) {
        let parsed = parse_raw_to_rows(&self.review_text, None, &ParseOptions::review());
        self.total_rows = parsed.rows.len();
        self.set_rows(parsed.rows, parsed.header);
    }

    fn set_rows(&mut self, rows: Vec<Row>, header: Option<Vec<String>>) {
        self.review_text = serialize_rows(&rows, true, "\t");
        self.parsed = ParsedInput { rows, header };
    }

    pub fn clear_input(&mut self) {
        self.raw_text.clear();
        self.filename = None;
        self.parsed = ParsedInput::default();
        self.total_rows = 0;
        self.review_text.clear();
    }

    // -- Submission --

    /// Send the current rows to the descriptor service on a worker thread.
    ///
    /// Ignored while a request is already in flight.
    pub fn submit(&mut self) {
        if self.loading {
            return;
        }
        let Some(service) = self.service.clone() else {
            self.status_message = Some("Error: descriptor service unavailable".to_string());
            return;
        };
        if self.parsed.is_empty() {
            self.status_message = Some(format!("Error: {}", ServiceError::Empty));
            return;
        }

        self.clear_results();
        self.status_message = None;
        self.loading = true;

        let request = Ro5Request::from_rows(&self.parsed.rows, self.config.vmax);
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            // The receiver is gone only if the state was dropped.
            let _ = tx.send(service.compute(&request));
        });
        self.pending = Some(rx);
    }

    /// Pick up a finished request, if any. Returns `true` when state changed.
    pub fn poll_response(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let reply = match rx.try_recv() {
            Ok(reply) => reply,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                Err(ServiceError::Decode("worker exited without a reply".to_string()))
            }
        };

        self.pending = None;
        self.loading = false;
        match reply {
            Ok(response) => self.apply_response(response),
            Err(e) => {
                log::error!("Descriptor request failed: {e}");
                self.status_message = Some(e.to_string());
            }
        }
        true
    }

    fn apply_response(&mut self, response: Ro5Response) {
        log::info!(
            "Received {} result(s), summary: {}, download: {}",
            response.items.len(),
            response.summary.is_some(),
            response.download.is_some()
        );
        if let Some(note) = &response.note {
            log::warn!("Service note: {note}");
        }
        self.items = response.items;
        self.summary = response.summary;
        self.download = response.download;
        self.note = response.note;
        self.page = 1;
        self.show_all = false;
    }

    pub fn clear_results(&mut self) {
        self.items.clear();
        self.summary = None;
        self.download = None;
        self.note = None;
        self.page = 1;
        self.show_all = false;
    }

    // -- Results table paging --

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.config.page_size.max(1))
    }

    /// Items on the current page, or all of them with `show_all`.
    pub fn visible_items(&self) -> &[Ro5Item] {
        if self.show_all {
            return &self.items;
        }
        let size = self.config.page_size.max(1);
        let start = (self.page.saturating_sub(1) * size).min(self.items.len());
        let end = (start + size).min(self.items.len());
        &self.items[start..end]
    }

    pub fn next_page(&mut self) {
        self.page = (self.page + 1).min(self.total_pages().max(1));
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
        if !show_all {
            self.page = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::data::model::Delimiter;

    /// Echoes every submitted SMILES back as a passing item.
    #[derive(Default)]
    struct EchoService {
        seen: Mutex<Vec<Ro5Request>>,
    }

    impl DescriptorService for EchoService {
        fn compute(&self, request: &Ro5Request) -> Result<Ro5Response, ServiceError> {
            self.seen.lock().unwrap().push(request.clone());
            let items = request
                .smiles
                .iter()
                .zip(&request.names)
                .map(|(s, n)| Ro5Item {
                    smiles: s.clone(),
                    name: Some(n.clone()).filter(|n| !n.is_empty()),
                    mwt: 100.0,
                    logp: 1.0,
                    hbd: 1,
                    hba: 2,
                    violations: 0,
                    passes_ro5: true,
                    vmax: request.vmax,
                    mwt_violation: false,
                    hbd_violation: false,
                    hba_violation: false,
                    logp_violation: false,
                })
                .collect();
            Ok(Ro5Response {
                items,
                note: Some("echo".into()),
                ..Ro5Response::default()
            })
        }
    }

    struct RejectingService;

    impl DescriptorService for RejectingService {
        fn compute(&self, _request: &Ro5Request) -> Result<Ro5Response, ServiceError> {
            Err(ServiceError::TooLarge("Too many molecules".into()))
        }
    }

    fn wait_for_reply(state: &mut AppState) {
        for _ in 0..500 {
            if state.poll_response() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("no reply from service");
    }

    fn smi_lines(n: usize) -> String {
        (0..n).map(|i| format!("C{i} mol{i}\n")).collect()
    }

    #[test]
    fn window_applies_to_a_single_reparse() {
        let mut state = AppState::with_service(AppConfig::default(), Arc::new(EchoService::default()));
        state.options.start_index = 2;
        state.options.n_molecules = Some(3);
        state.load_text(smi_lines(10), Some("list.smi".into()));

        assert_eq!(state.total_rows, 10);
        let smiles: Vec<&str> = state.parsed.rows.iter().map(|r| r.smiles.as_str()).collect();
        assert_eq!(smiles, vec!["C2", "C3", "C4"]);
        assert_eq!(state.options.start_index, 0);
        assert_eq!(state.options.n_molecules, None);

        state.reparse();
        assert_eq!(state.parsed.len(), 10);
    }

    #[test]
    fn pasted_text_no_longer_follows_the_file_extension() {
        let mut state = AppState::with_service(AppConfig::default(), Arc::new(EchoService::default()));
        state.load_text("CCO,ethanol\n".into(), Some("a.csv".into()));
        assert_eq!(state.parsed.rows, vec![Row::new("CCO", Some("ethanol".into()))]);

        state.raw_text = "CO\tmethanol\nCCC\tpropane\n".into();
        state.raw_text_edited();
        assert_eq!(state.filename, None);

        state.reparse();
        assert_eq!(
            state.parsed.rows,
            vec![
                Row::new("CO", Some("methanol".into())),
                Row::new("CCC", Some("propane".into())),
            ]
        );
    }

    #[test]
    fn review_text_round_trips_and_accepts_edits() {
        let mut state = AppState::with_service(AppConfig::default(), Arc::new(EchoService::default()));
        state.options.delimiter = Delimiter::Space;
        state.load_text("CCO ethanol\nc1ccccc1\n".into(), None);
        assert_eq!(state.review_text, "SMILES\tName\nCCO\tethanol\nc1ccccc1\t");

        state.review_text.push_str("\nCO\tmethanol");
        state.apply_review_text();
        assert_eq!(
            state.parsed.rows,
            vec![
                Row::new("CCO", Some("ethanol".into())),
                Row::new("c1ccccc1", None),
                Row::new("CO", Some("methanol".into())),
            ]
        );
    }

    #[test]
    fn submit_sends_rows_and_pages_results() {
        let service = Arc::new(EchoService::default());
        let mut state = AppState::with_service(AppConfig::default(), service.clone());
        state.load_text(smi_lines(12), None);

        state.submit();
        assert!(state.loading);
        wait_for_reply(&mut state);

        assert!(!state.loading);
        assert_eq!(state.items.len(), 12);
        assert_eq!(state.note.as_deref(), Some("echo"));

        let seen = service.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].names[0], "mol0");
        assert_eq!(seen[0].vmax, 1);
        drop(seen);

        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.visible_items().len(), 5);
        state.next_page();
        state.next_page();
        state.next_page();
        assert_eq!(state.page, 3);
        assert_eq!(state.visible_items().len(), 2);
        assert_eq!(state.visible_items()[0].smiles, "C10");
        state.prev_page();
        assert_eq!(state.page, 2);

        state.set_show_all(true);
        assert_eq!(state.visible_items().len(), 12);
        state.set_show_all(false);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn service_errors_reach_the_status_line() {
        let mut state = AppState::with_service(AppConfig::default(), Arc::new(RejectingService));
        state.load_text("CCO\n".into(), None);
        state.submit();
        wait_for_reply(&mut state);

        assert!(state.items.is_empty());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Input too large: Too many molecules")
        );
    }

    #[test]
    fn empty_input_is_not_submitted() {
        let service = Arc::new(EchoService::default());
        let mut state = AppState::with_service(AppConfig::default(), service.clone());
        state.load_text("# nothing here\n".into(), None);
        state.submit();

        assert!(!state.loading);
        assert!(state.status_message.is_some());
        assert!(service.seen.lock().unwrap().is_empty());
    }
}
