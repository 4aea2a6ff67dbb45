//! Workshop — a scheduled session record owned by the remote API.

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::{MaterialRef, WorkshopId};

/// A workshop as returned by the remote API.
///
/// `date` and `time` are kept exactly as the server formats them so a
/// canonical record returned after a write replaces the cached one verbatim.
/// Text fields that are `null` or missing on the wire read as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: WorkshopId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meeting_link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instructor: String,
    #[serde(default)]
    pub material: Option<MaterialRef>,
}

impl Workshop {
    /// Create a builder for constructing a [`Workshop`].
    #[must_use]
    pub fn builder(id: WorkshopId) -> WorkshopBuilder {
        WorkshopBuilder {
            workshop: Self {
                id,
                name: String::new(),
                date: String::new(),
                time: String::new(),
                meeting_link: String::new(),
                description: String::new(),
                instructor: String::new(),
                material: None,
            },
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Replace the record whose id matches `updated.id`, keeping order.
///
/// Returns `true` when a record was replaced.
pub fn replace_by_id(workshops: &mut [Workshop], updated: Workshop) -> bool {
    match workshops.iter_mut().find(|ws| ws.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove every record with `id`, returning how many were removed.
pub fn remove_by_id(workshops: &mut Vec<Workshop>, id: WorkshopId) -> usize {
    let before = workshops.len();
    workshops.retain(|ws| ws.id != id);
    before - workshops.len()
}

/// Step-by-step builder for [`Workshop`], mostly used by tests and fakes.
#[derive(Debug)]
pub struct WorkshopBuilder {
    workshop: Workshop,
}

impl WorkshopBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.workshop.name = name.into();
        self
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.workshop.date = date.into();
        self
    }

    #[must_use]
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.workshop.time = time.into();
        self
    }

    #[must_use]
    pub fn meeting_link(mut self, link: impl Into<String>) -> Self {
        self.workshop.meeting_link = link.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.workshop.description = description.into();
        self
    }

    #[must_use]
    pub fn instructor(mut self, instructor: impl Into<String>) -> Self {
        self.workshop.instructor = instructor.into();
        self
    }

    #[must_use]
    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.workshop.material = Some(MaterialRef::new(material));
        self
    }

    #[must_use]
    pub fn build(self) -> Workshop {
        self.workshop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64, name: &str) -> Workshop {
        Workshop::builder(WorkshopId::new(id))
            .name(name)
            .date("2024-05-01")
            .time("10:00")
            .meeting_link("https://meet.example.com/abc")
            .description("Hands-on session")
            .instructor("Dr. Grace")
            .build()
    }

    #[test]
    fn should_deserialize_camel_case_payload() {
        let json = r#"{
            "id": 3,
            "name": "Intro to Rust",
            "date": "2024-05-01",
            "time": "10:00",
            "meetingLink": "https://meet.example.com/abc",
            "description": "Ownership and borrowing",
            "instructor": "Ferris",
            "material": "intro.pdf"
        }"#;
        let ws: Workshop = serde_json::from_str(json).unwrap();
        assert_eq!(ws.id, WorkshopId::new(3));
        assert_eq!(ws.meeting_link, "https://meet.example.com/abc");
        assert_eq!(ws.material, Some(MaterialRef::new("intro.pdf")));
    }

    #[test]
    fn should_accept_missing_or_null_material() {
        let json = r#"{"id":1,"name":"n","date":"d","time":"t","meetingLink":"l","description":"x","instructor":"i","material":null}"#;
        let ws: Workshop = serde_json::from_str(json).unwrap();
        assert!(ws.material.is_none());

        let json = r#"{"id":1,"name":"n","date":"d","time":"t","meetingLink":"l","description":"x","instructor":"i"}"#;
        let ws: Workshop = serde_json::from_str(json).unwrap();
        assert!(ws.material.is_none());
    }

    #[test]
    fn should_read_null_text_fields_as_empty() {
        let json = r#"[
            {"id":1,"name":"Intro to Rust","date":"2024-05-01","time":"10:00","meetingLink":"https://meet/1","description":"Basics","instructor":"Ferris"},
            {"id":2,"name":"Async","date":"2024-06-01","time":"14:00","meetingLink":null,"description":null,"instructor":null}
        ]"#;
        let list: Vec<Workshop> = serde_json::from_str(json).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].instructor, "Ferris");
        assert_eq!(list[1].name, "Async");
        assert_eq!(list[1].meeting_link, "");
        assert_eq!(list[1].description, "");
        assert_eq!(list[1].instructor, "");
    }

    #[test]
    fn should_read_missing_text_fields_as_empty() {
        let ws: Workshop = serde_json::from_str(r#"{"id":7,"name":"Only a name"}"#).unwrap();
        assert_eq!(ws.name, "Only a name");
        assert!(ws.date.is_empty());
        assert!(ws.description.is_empty());
    }

    #[test]
    fn should_replace_only_matching_record_in_place() {
        let mut list = vec![sample(1, "A"), sample(2, "B"), sample(3, "C")];
        let updated = sample(2, "B2");

        assert!(replace_by_id(&mut list, updated.clone()));
        assert_eq!(list[1], updated);
        assert_eq!(list[0].name, "A");
        assert_eq!(list[2].name, "C");
    }

    #[test]
    fn should_leave_list_unchanged_when_replacing_unknown_id() {
        let mut list = vec![sample(1, "A")];
        let before = list.clone();
        assert!(!replace_by_id(&mut list, sample(9, "Z")));
        assert_eq!(list, before);
    }

    #[test]
    fn should_remove_record_by_id() {
        let mut list = vec![sample(1, "A"), sample(2, "B")];
        assert_eq!(remove_by_id(&mut list, WorkshopId::new(1)), 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, WorkshopId::new(2));
    }

    #[test]
    fn should_be_noop_when_removing_absent_id() {
        let mut list = vec![sample(1, "A")];
        assert_eq!(remove_by_id(&mut list, WorkshopId::new(2)), 0);
        assert_eq!(list.len(), 1);
    }
}
