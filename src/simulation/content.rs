//! Boundary with the generative content provider
//!
//! Titles, commentary, store copy, player comments and cover art are
//! decoration. Every request is a `ContentTicket`; only the newest ticket
//! for a field may land, and anything that fails, times out or arrives for
//! a cancelled generation is replaced by a local fallback.

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ContentError;
use super::market::{local_comments, PlayerComment};
use super::types::{StaffId, StaffMember};

pub const FALLBACK_TITLE: &str = "Untitled Project";
pub const FALLBACK_COMMENTARY: &str = "Looks ordinary. Turns out to be genuinely ordinary.";
pub const FALLBACK_SUMMARY: &str = "The ultimate masterpiece that will change your life.";

/// Which piece of state a request fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContentField {
    Title,
    CandidateCommentary(StaffId),
    StoreSummary,
    PlayerComments,
    CoverArt,
}

/// Handle for one outstanding request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ContentTicket {
    pub id: u64,
    pub field: ContentField,
    /// Session generation the request belongs to; restart bumps it
    pub generation: u64,
}

/// What the provider is asked to produce
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ContentPrompt {
    Title { themes: String, genre: String },
    CandidateCommentary { candidate: StaffMember },
    StoreSummary { title: String, themes: String, genre: String },
    PlayerComments { title: String, score: u32, bugs: f64 },
    CoverArt { title: String, themes: String },
}

impl ContentPrompt {
    pub fn field(&self) -> ContentField {
        match self {
            ContentPrompt::Title { .. } => ContentField::Title,
            ContentPrompt::CandidateCommentary { candidate } => {
                ContentField::CandidateCommentary(candidate.id)
            }
            ContentPrompt::StoreSummary { .. } => ContentField::StoreSummary,
            ContentPrompt::PlayerComments { .. } => ContentField::PlayerComments,
            ContentPrompt::CoverArt { .. } => ContentField::CoverArt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRequest {
    pub ticket: ContentTicket,
    pub prompt: ContentPrompt,
}

/// Generated box art, base64 encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverArt {
    pub mime_type: String,
    pub data: String,
}

impl CoverArt {
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Raw answer from a provider, before parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ContentResponse {
    /// Plain text or JSON, possibly wrapped in a ```json fence
    Text(String),
    /// Image answer; `None` means the provider produced no image
    Image(Option<CoverArt>),
}

/// Parsed content ready to merge into the game state
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedContent {
    Title(String),
    CandidateCommentary(StaffId, String),
    StoreSummary(String),
    PlayerComments(Vec<PlayerComment>),
    CoverArt(Option<CoverArt>),
}

/// A source of generated decoration
///
/// Implementations may talk to a remote model; the session never depends on
/// any call succeeding.
pub trait ContentProvider {
    fn title(&mut self, themes: &str, genre: &str) -> Result<String, ContentError>;
    fn candidate_commentary(&mut self, candidate: &StaffMember) -> Result<String, ContentError>;
    fn store_summary(&mut self, title: &str, themes: &str, genre: &str) -> Result<String, ContentError>;
    fn player_comments(&mut self, title: &str, score: u32, bugs: f64) -> Result<String, ContentError>;
    fn cover_art(&mut self, title: &str, themes: &str) -> Result<Option<CoverArt>, ContentError>;

    /// Answer any prompt through the typed methods above
    fn respond(&mut self, prompt: &ContentPrompt) -> Result<ContentResponse, ContentError> {
        match prompt {
            ContentPrompt::Title { themes, genre } => self.title(themes, genre).map(ContentResponse::Text),
            ContentPrompt::CandidateCommentary { candidate } => {
                self.candidate_commentary(candidate).map(ContentResponse::Text)
            }
            ContentPrompt::StoreSummary { title, themes, genre } => {
                self.store_summary(title, themes, genre).map(ContentResponse::Text)
            }
            ContentPrompt::PlayerComments { title, score, bugs } => {
                self.player_comments(title, *score, *bugs).map(ContentResponse::Text)
            }
            ContentPrompt::CoverArt { title, themes } => {
                self.cover_art(title, themes).map(ContentResponse::Image)
            }
        }
    }
}

/// A provider that is never there
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProvider;

impl ContentProvider for NoProvider {
    fn title(&mut self, _: &str, _: &str) -> Result<String, ContentError> {
        Err(ContentError::Unavailable)
    }

    fn candidate_commentary(&mut self, _: &StaffMember) -> Result<String, ContentError> {
        Err(ContentError::Unavailable)
    }

    fn store_summary(&mut self, _: &str, _: &str, _: &str) -> Result<String, ContentError> {
        Err(ContentError::Unavailable)
    }

    fn player_comments(&mut self, _: &str, _: u32, _: f64) -> Result<String, ContentError> {
        Err(ContentError::Unavailable)
    }

    fn cover_art(&mut self, _: &str, _: &str) -> Result<Option<CoverArt>, ContentError> {
        Err(ContentError::Unavailable)
    }
}

/// Whether requests go out at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ContentMode {
    /// Requests are queued for a host to answer
    #[default]
    Online,
    /// Every request resolves to its fallback immediately
    Offline,
}

fn strip_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn parse_json(raw: &str) -> Option<Value> {
    serde_json::from_str(strip_fence(raw)).ok()
}

fn non_empty(text: &str) -> Result<String, ContentError> {
    let text = text.trim();
    if text.is_empty() {
        Err(ContentError::Malformed("empty payload".to_string()))
    } else {
        Ok(text.to_string())
    }
}

/// `{"title": ..}` or plain text
pub fn parse_title(raw: &str) -> Result<String, ContentError> {
    match parse_json(raw) {
        Some(Value::Object(map)) => match map.get("title") {
            Some(Value::String(title)) => non_empty(title),
            _ => Err(ContentError::Malformed("missing title".to_string())),
        },
        Some(Value::String(title)) => non_empty(&title),
        Some(_) => Err(ContentError::Malformed("unexpected title payload".to_string())),
        None => non_empty(strip_fence(raw)),
    }
}

/// `{"text": ..}`, a JSON string, or plain text
pub fn parse_text(raw: &str) -> Result<String, ContentError> {
    match parse_json(raw) {
        Some(Value::Object(map)) => match map.get("text") {
            Some(Value::String(text)) => non_empty(text),
            _ => Err(ContentError::Malformed("missing text".to_string())),
        },
        Some(Value::String(text)) => non_empty(&text),
        Some(_) => Err(ContentError::Malformed("unexpected text payload".to_string())),
        None => non_empty(strip_fence(raw)),
    }
}

/// A non-empty JSON array of `{user, text, sentiment}`
pub fn parse_comments(raw: &str) -> Result<Vec<PlayerComment>, ContentError> {
    let comments: Vec<PlayerComment> = serde_json::from_str(strip_fence(raw))
        .map_err(|e| ContentError::Malformed(e.to_string()))?;
    if comments.is_empty() {
        return Err(ContentError::Malformed("no comments".to_string()));
    }
    Ok(comments)
}

/// Turn a provider answer into state content
pub fn resolve(prompt: &ContentPrompt, response: ContentResponse) -> Result<ResolvedContent, ContentError> {
    match (prompt, response) {
        (ContentPrompt::Title { .. }, ContentResponse::Text(raw)) => {
            parse_title(&raw).map(ResolvedContent::Title)
        }
        (ContentPrompt::CandidateCommentary { candidate }, ContentResponse::Text(raw)) => {
            parse_text(&raw).map(|text| ResolvedContent::CandidateCommentary(candidate.id, text))
        }
        (ContentPrompt::StoreSummary { .. }, ContentResponse::Text(raw)) => {
            parse_text(&raw).map(ResolvedContent::StoreSummary)
        }
        (ContentPrompt::PlayerComments { .. }, ContentResponse::Text(raw)) => {
            parse_comments(&raw).map(ResolvedContent::PlayerComments)
        }
        (ContentPrompt::CoverArt { .. }, ContentResponse::Image(image)) => {
            Ok(ResolvedContent::CoverArt(image))
        }
        _ => Err(ContentError::Malformed("response kind does not match request".to_string())),
    }
}

/// Deterministic local stand-in for a prompt
pub fn fallback<R: Rng + ?Sized>(prompt: &ContentPrompt, rng: &mut R) -> ResolvedContent {
    match prompt {
        ContentPrompt::Title { .. } => ResolvedContent::Title(FALLBACK_TITLE.to_string()),
        ContentPrompt::CandidateCommentary { candidate } => {
            ResolvedContent::CandidateCommentary(candidate.id, FALLBACK_COMMENTARY.to_string())
        }
        ContentPrompt::StoreSummary { .. } => {
            ResolvedContent::StoreSummary(FALLBACK_SUMMARY.to_string())
        }
        ContentPrompt::PlayerComments { score, bugs, .. } => {
            ResolvedContent::PlayerComments(local_comments(*score, *bugs, rng))
        }
        ContentPrompt::CoverArt { .. } => ResolvedContent::CoverArt(None),
    }
}

#[derive(Debug, Clone)]
struct Outstanding {
    request: ContentRequest,
    age_secs: f32,
}

/// Tracks outstanding tickets, newest wins per field
#[derive(Debug, Clone)]
pub struct ContentDesk {
    mode: ContentMode,
    timeout_secs: f32,
    generation: u64,
    next_id: u64,
    outstanding: Vec<Outstanding>,
    queue: Vec<ContentRequest>,
}

impl ContentDesk {
    pub fn new(mode: ContentMode, timeout_secs: f32) -> Self {
        Self {
            mode,
            timeout_secs,
            generation: 0,
            next_id: 0,
            outstanding: Vec::new(),
            queue: Vec::new(),
        }
    }

    pub fn mode(&self) -> ContentMode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Open a ticket, superseding any older one for the same field
    pub fn submit(&mut self, prompt: ContentPrompt) -> ContentTicket {
        let field = prompt.field();
        let ticket = ContentTicket {
            id: self.next_id,
            field,
            generation: self.generation,
        };
        self.next_id += 1;

        self.outstanding.retain(|o| o.request.ticket.field != field);
        self.queue.retain(|r| r.ticket.field != field);

        let request = ContentRequest { ticket, prompt };
        self.queue.push(request.clone());
        self.outstanding.push(Outstanding { request, age_secs: 0.0 });
        ticket
    }

    /// Requests not yet handed to a host
    pub fn take_requests(&mut self) -> Vec<ContentRequest> {
        std::mem::take(&mut self.queue)
    }

    /// Close a ticket; returns its prompt only if it is still the latest one
    pub fn accept(&mut self, ticket: ContentTicket) -> Option<ContentPrompt> {
        if ticket.generation != self.generation {
            return None;
        }
        let index = self
            .outstanding
            .iter()
            .position(|o| o.request.ticket == ticket)?;
        self.queue.retain(|r| r.ticket != ticket);
        Some(self.outstanding.remove(index).request.prompt)
    }

    /// Age outstanding tickets; returns the ones that just timed out
    pub fn advance(&mut self, delta_secs: f32) -> Vec<ContentRequest> {
        let timeout = self.timeout_secs;
        let mut expired = Vec::new();
        self.outstanding.retain_mut(|o| {
            o.age_secs += delta_secs;
            if o.age_secs >= timeout {
                expired.push(o.request.clone());
                false
            } else {
                true
            }
        });
        if !expired.is_empty() {
            self.queue
                .retain(|r| !expired.iter().any(|e| e.ticket == r.ticket));
        }
        expired
    }

    pub fn is_pending(&self, field: ContentField) -> bool {
        self.outstanding.iter().any(|o| o.request.ticket.field == field)
    }

    /// Forget the outstanding ticket for one field
    pub fn cancel(&mut self, field: ContentField) {
        self.outstanding.retain(|o| o.request.ticket.field != field);
        self.queue.retain(|r| r.ticket.field != field);
    }

    pub fn pending_count(&self) -> usize {
        self.outstanding.len()
    }

    /// Drop every ticket and start a new generation
    pub fn cancel_all(&mut self) {
        self.generation += 1;
        self.outstanding.clear();
        self.queue.clear();
    }
}
