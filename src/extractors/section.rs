// src/extractors/section.rs

// --- Imports ---
use crate::document::Page;
use crate::extractors::models::{Role, Section};
use crate::extractors::patterns::RoleMarkerPattern;
use regex::Regex;

// --- Accumulator ---
// Holds the section currently being collected, page by page.
struct OpenSection<'a> {
    texts: Vec<&'a str>,
    pages: Vec<u32>,
    role: Role,
}

impl<'a> OpenSection<'a> {
    fn seeded(page: &'a Page) -> Self {
        Self {
            texts: vec![page.text.as_str()],
            pages: vec![page.page_number],
            role: Role::Unknown,
        }
    }

    fn absorb(&mut self, page: &'a Page) {
        self.texts.push(page.text.as_str());
        self.pages.push(page.page_number);
    }

    /// Later markers override earlier ones, both across and within pages.
    fn scan_roles(&mut self, text: &str, role_markers: &[RoleMarkerPattern]) {
        if let Some(role) = last_role_marker(text, role_markers) {
            if self.role != Role::Unknown && self.role != role {
                tracing::debug!("Section role changes from {} to {}", self.role, role);
            }
            self.role = role;
        }
    }

    fn close(self) -> Section {
        Section {
            text: self.texts.join("\n"),
            pages: self.pages,
            role: self.role,
        }
    }
}

/// The role of the marker that appears last in `text`, if any.
fn last_role_marker(text: &str, role_markers: &[RoleMarkerPattern]) -> Option<Role> {
    role_markers
        .iter()
        .filter_map(|m| m.pattern.find_iter(text).last().map(|hit| (hit.start(), m.role)))
        .max_by_key(|(pos, _)| *pos)
        .map(|(_, role)| role)
}

/// Finds every occurrence of a section delimited by `start_marker` and
/// `end_marker` across `pages`, in document order.
///
/// * A start marker while a section is open closes that section first.
/// * The end-marker page is included in the section it closes. On the
///   opening page only an end marker *after* the start marker counts.
/// * A section still open when pages run out is kept as a trailing section.
///
/// Returns an empty list when no start marker is found.
pub fn locate_sections(
    pages: &[Page],
    start_marker: &Regex,
    end_marker: &Regex,
    role_markers: &[RoleMarkerPattern],
) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut open: Option<OpenSection> = None;

    for page in pages {
        if let Some(start) = start_marker.find(&page.text) {
            if let Some(previous) = open.take() {
                tracing::debug!(
                    "Start marker on page {} before an end marker; closing previous section at page {:?}",
                    page.page_number,
                    previous.pages.last()
                );
                sections.push(previous.close());
            }

            tracing::debug!("Section opens on page {}", page.page_number);
            let mut section = OpenSection::seeded(page);
            section.scan_roles(&page.text, role_markers);

            if end_marker.is_match(&page.text[start.end()..]) {
                tracing::debug!("Section opens and closes on page {}", page.page_number);
                sections.push(section.close());
            } else {
                open = Some(section);
            }
            continue;
        }

        if let Some(section) = open.as_mut() {
            section.absorb(page);
            section.scan_roles(&page.text, role_markers);

            if end_marker.is_match(&page.text) {
                tracing::debug!("Section closes on page {}", page.page_number);
                if let Some(section) = open.take() {
                    sections.push(section.close());
                }
            }
        }
    }

    if let Some(section) = open.take() {
        tracing::warn!(
            "No end marker after section starting on page {:?}; keeping it to the end of the document",
            section.pages.first()
        );
        sections.push(section.close());
    }

    sections
}
