// src/state/mod.rs
use crate::api::AnalysisResult;
use crate::settings::Settings;

/// Everything the claims view renders from, all mutated on the UI thread.
/// The request lifecycle fields (`result`, `loading`, `error`) change only
/// through the named transitions below; the input-side fields
/// (`last_file_name`, `drop_active`) are written directly by the upload
/// view as the user interacts with it.
///
/// After every settled request exactly one of `error` / `result` has been
/// meaningfully updated, and `loading` is back to false.
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    /// Last successful analysis. Kept across failed re-analyses; the error
    /// banner merely takes render precedence over it.
    pub result: Option<AnalysisResult>,
    pub loading: bool,
    pub error: Option<String>,
    /// Display name of the most recently chosen file, recorded before the
    /// request goes out so the drop zone can show it while pending.
    pub last_file_name: Option<String>,
    /// Whether a file is currently hovering the drop zone.
    pub drop_active: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            result: None,
            loading: false,
            error: None,
            last_file_name: None,
            drop_active: false,
        }
    }

    /// A new request is going out. Clears the banner from any previous
    /// attempt; the last good result stays until a new one replaces it.
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.loading = false;
    }

    /// Service-reported rejection; the message is shown verbatim.
    pub fn fail_logical(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Transport-level failure; the caller passes the fixed diagnostic.
    pub fn fail_transport(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Failure that never reached the service (unreadable file, export
    /// write error). Shares the banner with the request failures.
    pub fn fail_local(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}
