//! Talk card record and field-level validation.
//!
//! # Responsibility
//! - Define the card shape shown inside a track.
//! - Provide the in-place update used when an edit is committed.
//!
//! # Invariants
//! - `id` is an in-memory handle only; it is not part of the wire shape and
//!   is regenerated whenever a talk is deserialized.
//! - `apply_fields` never changes `id`, so the owning track sequence is left
//!   untouched by edits.

use crate::config::EditorPolicy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// In-memory handle that addresses one talk across edits and moves.
pub type TalkId = Uuid;

/// Text given to talks created by the "add talk" action.
pub const NEW_TALK_TEXT: &str = "New talk";

/// Editable talk fields, used to name validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalkField {
    Text,
    Speaker,
    Image,
}

impl TalkField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Speaker => "speaker",
            Self::Image => "image",
        }
    }
}

impl Display for TalkField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commit rejected because required fields are blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkValidationError {
    /// Missing fields in declaration order (`text`, `speaker`, `image`).
    pub missing_fields: Vec<TalkField>,
}

impl TalkValidationError {
    pub fn is_missing(&self, field: TalkField) -> bool {
        self.missing_fields.contains(&field)
    }
}

impl Display for TalkValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self
            .missing_fields
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "talk is missing required fields: {names}")
    }
}

impl Error for TalkValidationError {}

/// Card-like record with text, speaker, image and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: TalkId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Ordered, duplicates allowed. `None` means the talk never had tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Talk {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            speaker: None,
            image: None,
            tags: None,
        }
    }

    /// The default card inserted by the "add talk" action.
    pub fn placeholder() -> Self {
        Self::new(NEW_TALK_TEXT)
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Tags as a slice; empty when the talk has none.
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Overwrites editable fields in place.
    ///
    /// # Invariants
    /// - `id` is preserved.
    /// - Blank optional values are stored as `None`.
    /// - An empty tag list keeps `tags == None` when the talk had no tags.
    pub fn apply_fields(&mut self, fields: TalkFields) {
        self.text = fields.text;
        self.speaker = non_blank(fields.speaker);
        self.image = non_blank(fields.image);
        self.tags = if fields.tags.is_empty() && self.tags.is_none() {
            None
        } else {
            Some(fields.tags)
        };
    }
}

/// Plain field values exchanged with the dialog host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkFields {
    pub text: String,
    pub speaker: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl TalkFields {
    /// Snapshot of a talk's current values; absent values become empty.
    pub fn from_talk(talk: &Talk) -> Self {
        Self {
            text: talk.text.clone(),
            speaker: talk.speaker.clone().unwrap_or_default(),
            image: talk.image.clone().unwrap_or_default(),
            tags: talk.tag_list().to_vec(),
        }
    }

    pub fn value(&self, field: TalkField) -> &str {
        match field {
            TalkField::Text => &self.text,
            TalkField::Speaker => &self.speaker,
            TalkField::Image => &self.image,
        }
    }

    /// Reports blank fields the policy requires, in declaration order.
    pub fn validate(&self, policy: &EditorPolicy) -> Result<(), TalkValidationError> {
        let missing_fields = [TalkField::Text, TalkField::Speaker, TalkField::Image]
            .into_iter()
            .filter(|field| policy.requires(*field) && self.value(*field).trim().is_empty())
            .collect::<Vec<_>>();
        if missing_fields.is_empty() {
            Ok(())
        } else {
            Err(TalkValidationError { missing_fields })
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
