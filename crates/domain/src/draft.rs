//! Edit drafts — the editable part of a workshop and the outgoing update.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::id::WorkshopId;
use crate::workshop::Workshop;

/// One of the six editable text fields of a workshop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Date,
    Time,
    MeetingLink,
    Description,
    Instructor,
}

impl DraftField {
    /// All editable fields, in form order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Date,
        Self::Time,
        Self::MeetingLink,
        Self::Description,
        Self::Instructor,
    ];

    /// Name of the field in the multipart payload and in JSON.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Time => "time",
            Self::MeetingLink => "meetingLink",
            Self::Description => "description",
            Self::Instructor => "instructor",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Time => "time",
            Self::MeetingLink => "meeting link",
            Self::Description => "description",
            Self::Instructor => "instructor",
        })
    }
}

/// Error returned when parsing an unknown wire field name.
#[derive(Debug, thiserror::Error)]
#[error("unknown workshop field `{0}`")]
pub struct UnknownFieldError(pub String);

impl FromStr for DraftField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// Editable copy of a workshop's text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkshopDraft {
    pub name: String,
    pub date: String,
    pub time: String,
    pub meeting_link: String,
    pub description: String,
    pub instructor: String,
}

impl From<&Workshop> for WorkshopDraft {
    fn from(ws: &Workshop) -> Self {
        Self {
            name: ws.name.clone(),
            date: ws.date.clone(),
            time: ws.time.clone(),
            meeting_link: ws.meeting_link.clone(),
            description: ws.description.clone(),
            instructor: ws.instructor.clone(),
        }
    }
}

impl WorkshopDraft {
    /// Read a field.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::MeetingLink => &self.meeting_link,
            DraftField::Description => &self.description,
            DraftField::Instructor => &self.instructor,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Date => &mut self.date,
            DraftField::Time => &mut self.time,
            DraftField::MeetingLink => &mut self.meeting_link,
            DraftField::Description => &mut self.description,
            DraftField::Instructor => &mut self.instructor,
        };
        *slot = value.into();
    }

    /// Check the same constraints the edit form enforces.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in DraftField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }
        if NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_err() {
            return Err(ValidationError::InvalidDate);
        }
        let time = self.time.trim();
        if NaiveTime::parse_from_str(time, "%H:%M").is_err()
            && NaiveTime::parse_from_str(time, "%H:%M:%S").is_err()
        {
            return Err(ValidationError::InvalidTime);
        }
        Ok(())
    }
}

/// A replacement material file picked in the editor.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Original file name as picked by the operator.
    pub file_name: String,
    /// MIME type reported by the browser, if any.
    pub content_type: Option<String>,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Outgoing update: all six text fields plus an optional replacement file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateWorkshop {
    pub id: WorkshopId,
    pub draft: WorkshopDraft,
    pub material: Option<Attachment>,
}

impl UpdateWorkshop {
    /// The text parts of the multipart payload, in form order.
    #[must_use]
    pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
        DraftField::ALL
            .into_iter()
            .map(|field| (field.wire_name(), self.draft.get(field)))
            .collect()
    }
}
