// src/api/mod.rs
use anyhow::{anyhow, Context, Result};
use eframe::egui;
use reqwest::blocking::{multipart, Client};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{error, info, warn};

pub mod types;

pub use types::{AnalysisResult, ApiResponse, ClaimAppeal};

/// Shown for any failure the view cannot attribute to the service itself:
/// connection refused, network outage, bodies that are not JSON.
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Could not reach the analysis service. Check your connection and try again.";

/// One dataset submission: an uploaded claims file or the service-side
/// sample dataset.
#[derive(Debug, Clone)]
pub enum AnalysisRequest {
    File { name: String, bytes: Vec<u8> },
    Sample,
}

/// What a completed request settles to. Exactly one outcome is delivered
/// per submission, whatever went wrong on the way.
#[derive(Debug)]
pub enum AnalysisOutcome {
    Success(AnalysisResult),
    /// The service answered but rejected the dataset; message is verbatim.
    Logical(String),
    /// The request or its response never made it back in usable form.
    Transport(String),
}

/// Hands requests to a worker thread and collects the outcome over a
/// channel drained from the UI loop. At most one request is in flight.
pub struct AnalysisClient {
    api_url: String,
    tx: Sender<AnalysisOutcome>,
    rx: Receiver<AnalysisOutcome>,
    in_flight: bool,
}

impl AnalysisClient {
    pub fn new(api_url: String) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            api_url,
            tx,
            rx,
            in_flight: false,
        }
    }

    /// Dispatches one request on a worker thread. A second submission while
    /// one is pending is rejected here rather than relying on the trigger
    /// controls being disabled.
    pub fn submit(&mut self, request: AnalysisRequest, ctx: &egui::Context) -> Result<()> {
        if self.in_flight {
            return Err(anyhow!("An analysis is already in progress"));
        }
        self.in_flight = true;

        let url = self.api_url.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let outcome = perform(&url, request);
            // A dead channel just means nobody is left to render the outcome.
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });

        Ok(())
    }

    /// Drains the settled outcome, if any, clearing the in-flight latch so
    /// the next trigger is accepted.
    pub fn poll(&mut self) -> Option<AnalysisOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => {
                self.in_flight = false;
                Some(outcome)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

fn perform(url: &str, request: AnalysisRequest) -> AnalysisOutcome {
    match send(url, request) {
        Ok(ApiResponse::Failure { error }) => {
            warn!(message = %error, "service rejected the dataset");
            AnalysisOutcome::Logical(error)
        }
        Ok(ApiResponse::Success(result)) => {
            info!(
                total_claims = result.total_claims,
                recommended = result.recommended_appeals,
                "analysis complete"
            );
            AnalysisOutcome::Success(result)
        }
        Err(e) => {
            error!("analysis request failed: {:#}", e);
            AnalysisOutcome::Transport(TRANSPORT_ERROR_MESSAGE.to_string())
        }
    }
}

fn send(url: &str, request: AnalysisRequest) -> Result<ApiResponse> {
    // The hosted service can take a while on cold starts; requests run to
    // completion rather than racing a timeout.
    let client = Client::builder().timeout(None::<Duration>).build()?;

    let response = match request {
        AnalysisRequest::File { name, bytes } => {
            let part = multipart::Part::bytes(bytes).file_name(name);
            let form = multipart::Form::new().part("file", part);
            client.post(url).multipart(form).send()?
        }
        AnalysisRequest::Sample => client.post(url).json(&serde_json::json!({})).send()?,
    };

    let body = response.text()?;
    let parsed: ApiResponse =
        serde_json::from_str(&body).context("response body was not valid JSON")?;
    Ok(parsed)
}
