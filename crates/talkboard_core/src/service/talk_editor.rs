//! Talk edit dialog state and draft logic.
//!
//! # Responsibility
//! - Hold an editable draft of one talk, including its tag list.
//! - Model the dialog as `Closed -> Open -> Committed | Cancelled`.
//! - Hand validated values back as an [`EditCommit`] for the board service.
//!
//! # Invariants
//! - Only a committed session yields values; cancelling has no effect.
//! - A draft never touches the talk it was created from.
//! - Tags keep insertion order and may contain duplicates.

use crate::config::EditorPolicy;
use crate::model::talk::{Talk, TalkFields, TalkId, TalkValidationError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from editor session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Action is not allowed in the current dialog state.
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },
    /// Submitted values miss required fields; the dialog stays open.
    Validation(TalkValidationError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { state, action } => {
                write!(f, "cannot {action} editor in state `{state}`")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::InvalidTransition { .. } => None,
        }
    }
}

impl From<TalkValidationError> for EditorError {
    fn from(value: TalkValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Editable, uncommitted copy of a talk's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkDraft {
    talk_id: TalkId,
    fields: TalkFields,
}

impl TalkDraft {
    /// Seeds a draft from the talk's current values.
    pub fn from_talk(talk: &Talk) -> Self {
        Self {
            talk_id: talk.id,
            fields: TalkFields::from_talk(talk),
        }
    }

    /// Handle of the talk this draft will be committed into.
    pub fn talk_id(&self) -> TalkId {
        self.talk_id
    }

    pub fn fields(&self) -> &TalkFields {
        &self.fields
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.fields.text = text.into();
    }

    pub fn set_speaker(&mut self, speaker: impl Into<String>) {
        self.fields.speaker = speaker.into();
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.fields.image = image.into();
    }

    pub fn tags(&self) -> &[String] {
        &self.fields.tags
    }

    /// Appends a trimmed tag. Blank input is ignored.
    ///
    /// Returns whether a tag was added.
    pub fn add_tag(&mut self, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.fields.tags.push(trimmed.to_string());
        true
    }

    /// Removes the first occurrence of the trimmed `value`.
    ///
    /// Returns whether a tag was removed.
    pub fn remove_tag(&mut self, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.fields.tags.iter().position(|tag| tag == trimmed) {
            Some(index) => {
                self.fields.tags.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn validate(&self, policy: &EditorPolicy) -> Result<(), TalkValidationError> {
        self.fields.validate(policy)
    }

    /// Consumes the draft into commit values when validation passes.
    pub fn into_commit(self, policy: &EditorPolicy) -> Result<EditCommit, TalkValidationError> {
        self.validate(policy)?;
        Ok(EditCommit {
            talk_id: self.talk_id,
            fields: self.fields,
        })
    }
}

/// Validated values ready to overwrite a talk in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommit {
    pub talk_id: TalkId,
    pub fields: TalkFields,
}

/// Pending request handed to the dialog host when the editor opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub talk_id: TalkId,
    pub fields: TalkFields,
}

/// Result the dialog host delivers when it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Form submitted with these values.
    Submitted(TalkFields),
    /// Dialog dismissed without saving.
    Cancelled,
}

/// Dialog state of one editor session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Closed,
    Open(TalkDraft),
    Committed(EditCommit),
    Cancelled,
}

impl EditorState {
    fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open(_) => "open",
            Self::Committed(_) => "committed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Editor dialog state machine, independent of any UI toolkit.
#[derive(Debug)]
pub struct EditorSession {
    state: EditorState,
    policy: EditorPolicy,
}

impl EditorSession {
    pub fn new(policy: EditorPolicy) -> Self {
        Self {
            state: EditorState::Closed,
            policy,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Opens the dialog on `talk`. A finished session may be reopened.
    ///
    /// # Errors
    /// - `InvalidTransition` when a draft is already open.
    pub fn open(&mut self, talk: &Talk) -> Result<EditRequest, EditorError> {
        if let EditorState::Open(_) = self.state {
            return Err(self.invalid("open"));
        }
        let draft = TalkDraft::from_talk(talk);
        let request = EditRequest {
            talk_id: draft.talk_id(),
            fields: draft.fields().clone(),
        };
        debug!("event=editor_open module=editor status=ok talk_id={}", talk.id);
        self.state = EditorState::Open(draft);
        Ok(request)
    }

    /// Open draft, if any, for in-session edits such as tag changes.
    pub fn draft_mut(&mut self) -> Option<&mut TalkDraft> {
        match &mut self.state {
            EditorState::Open(draft) => Some(draft),
            _ => None,
        }
    }

    /// Submits the in-session draft.
    pub fn submit(&mut self) -> Result<EditCommit, EditorError> {
        let fields = match &self.state {
            EditorState::Open(draft) => draft.fields().clone(),
            _ => return Err(self.invalid("submit")),
        };
        self.finish_with(fields)
    }

    /// Applies the outcome delivered by the dialog host.
    ///
    /// Returns `Some(commit)` for a valid submission and `None` on cancel.
    ///
    /// # Errors
    /// - `InvalidTransition` when no draft is open.
    /// - `Validation` when submitted values miss required fields; the
    ///   session stays open so the host can correct them.
    pub fn deliver(&mut self, outcome: DialogOutcome) -> Result<Option<EditCommit>, EditorError> {
        if !matches!(self.state, EditorState::Open(_)) {
            return Err(self.invalid("deliver"));
        }
        match outcome {
            DialogOutcome::Submitted(fields) => self.finish_with(fields).map(Some),
            DialogOutcome::Cancelled => {
                self.state = EditorState::Cancelled;
                info!("event=editor_cancel module=editor status=ok");
                Ok(None)
            }
        }
    }

    fn finish_with(&mut self, fields: TalkFields) -> Result<EditCommit, EditorError> {
        let talk_id = match &self.state {
            EditorState::Open(draft) => draft.talk_id(),
            _ => return Err(self.invalid("submit")),
        };
        fields.validate(&self.policy)?;

        let commit = EditCommit { talk_id, fields };
        self.state = EditorState::Committed(commit.clone());
        info!("event=editor_submit module=editor status=ok talk_id={talk_id}");
        Ok(commit)
    }

    fn invalid(&self, action: &'static str) -> EditorError {
        EditorError::InvalidTransition {
            state: self.state.name(),
            action,
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorPolicy::default())
    }
}
