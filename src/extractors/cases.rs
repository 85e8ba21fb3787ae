// src/extractors/cases.rs

// --- Imports ---
use crate::extractors::models::{CaseRecord, Role};
use crate::extractors::patterns::CasePatterns;
use crate::extractors::role::RoleStrategy;
use crate::utils::text::{first_capture, normalize_whitespace, window_bounds};

/// Extracts one [`CaseRecord`] per case-identifier match in `section_text`,
/// left to right.
///
/// Attributes are searched independently inside a window of `window_radius`
/// characters either side of the identifier; the first hit in the window is
/// taken. A wider radius finds attributes laid out further from the
/// identifier but can pick up a neighbouring case's values.
///
/// The role strategy only sees the part of the window from the identifier up
/// to the next identifier, so party blocks of neighbouring cases never decide
/// this case's role.
///
/// The returned records carry `section_index = 1` and no pages; the caller
/// stamps the owning section's context.
pub fn extract_cases(
    section_text: &str,
    section_role: Role,
    patterns: &CasePatterns,
    role_strategy: &dyn RoleStrategy,
    window_radius: usize,
) -> Vec<CaseRecord> {
    let mut records = Vec::new();
    let identifiers: Vec<_> = patterns.case_identifier.captures_iter(section_text).collect();

    for (idx, caps) in identifiers.iter().enumerate() {
        let Some(whole) = caps.get(0) else { continue };
        let case_no = caps.get(1).unwrap_or(whole).as_str().trim();
        if case_no.is_empty() {
            continue;
        }

        let (lo, hi) = window_bounds(section_text, whole.start(), whole.end(), window_radius);
        let window = &section_text[lo..hi];
        let case_end = identifiers
            .get(idx + 1)
            .and_then(|next| next.get(0))
            .map_or(hi, |next| next.start().min(hi));
        let role_text = &section_text[whole.start()..case_end];

        let mut record = CaseRecord::new(case_no, role_strategy.resolve(section_role, role_text));
        record.court = first_capture(&patterns.court, window).map(|c| normalize_whitespace(&c));
        record.plaintiff = first_capture(&patterns.plaintiff, window)
            .map(|p| normalize_whitespace(&p))
            .filter(|p| !p.is_empty());
        record.status = first_capture(&patterns.status, window);
        record.hearing_date = first_capture(&patterns.hearing_date, window).map(|d| normalize_whitespace(&d));

        tracing::trace!(
            "Case {} at {}..{}: court={:?} plaintiff={:?} status={:?} hearing={:?}",
            record.case_no,
            whole.start(),
            whole.end(),
            record.court,
            record.plaintiff,
            record.status,
            record.hearing_date
        );
        records.push(record);
    }

    tracing::debug!("Extracted {} case records from {} chars", records.len(), section_text.len());
    records
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::patterns::PatternSet;
    use crate::extractors::role::{MarkerScanRole, NameMatchRole};
    use pretty_assertions::assert_eq;

    fn extract(text: &str, radius: usize) -> Vec<CaseRecord> {
        extract_cases(text, Role::Defendant, &PatternSet::defaults().cases, &MarkerScanRole, radius)
    }

    fn block(id: &str, court: &str, status: &str) -> String {
        format!("{id}\n{court}\nCase Status {status}\n")
    }

    #[test]
    fn extracts_all_attributes_from_window() {
        let text = "Case No BK-AB12-2024\nSESSIONS COURT KUALA LUMPUR\nPlaintiff JANE\n   DOE Local No 5\n\
                    Case Status ACTIVE\nHearing Date 5 March 2024";
        let records = extract(text, 400);

        let mut expected = CaseRecord::new("BK-AB12-2024", Role::Defendant);
        expected.court = Some("SESSIONS COURT KUALA LUMPUR".into());
        expected.plaintiff = Some("JANE DOE".into());
        expected.status = Some("ACTIVE".into());
        expected.hearing_date = Some("5 March 2024".into());
        assert_eq!(records, vec![expected]);
    }

    #[test]
    fn missing_attributes_stay_absent() {
        let records = extract("BK-X9/77-2021 with nothing else around", 400);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.case_no, "BK-X9/77-2021");
        assert_eq!((r.court.as_deref(), r.plaintiff.as_deref()), (None, None));
        assert_eq!((r.status.as_deref(), r.hearing_date.as_deref()), (None, None));
    }

    #[test]
    fn records_follow_identifier_order() {
        let text = "BK-C3-2022 x BK-A1-2020 y BK-B2-2021";
        let ids: Vec<String> = extract(text, 5).into_iter().map(|r| r.case_no).collect();
        assert_eq!(ids, vec!["BK-C3-2022", "BK-A1-2020", "BK-B2-2021"]);
    }

    #[test]
    fn identifier_at_text_edges_clamps_window() {
        let records = extract("BK-A1-2023", 400);
        assert_eq!(records.len(), 1);
        let records = extract("Case Status CLOSED BK-A1-2023", 1_000_000);
        assert_eq!(records[0].status.as_deref(), Some("CLOSED"));
    }

    #[test]
    fn no_identifier_means_no_records() {
        assert!(extract("SECTION 3: LITIGATION INFORMATION\nNo records found", 400).is_empty());
    }

    #[test]
    fn narrow_radius_keeps_dense_cases_apart() {
        let filler = format!("{}\n", "-".repeat(100));
        let text = block("BK-A1-2023", "SESSIONS COURT IPOH", "SETTLED")
            + &filler
            + &block("BK-B2-2024", "HIGH COURT SHAH ALAM", "ACTIVE");

        let records = extract(&text, 60);
        assert_eq!(records[0].court.as_deref(), Some("SESSIONS COURT IPOH"));
        assert_eq!(records[0].status.as_deref(), Some("SETTLED"));
        assert_eq!(records[1].court.as_deref(), Some("HIGH COURT SHAH ALAM"));
        assert_eq!(records[1].status.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn wide_radius_bleeds_previous_case_attributes() {
        let filler = format!("{}\n", "-".repeat(100));
        let text = block("BK-A1-2023", "SESSIONS COURT IPOH", "SETTLED")
            + &filler
            + &block("BK-B2-2024", "HIGH COURT SHAH ALAM", "ACTIVE");

        // The second window reaches back over the first block and takes its values.
        let records = extract(&text, 400);
        assert_eq!(records[1].court.as_deref(), Some("SESSIONS COURT IPOH"));
        assert_eq!(records[1].status.as_deref(), Some("SETTLED"));
    }

    #[test]
    fn name_match_resolves_role_per_case() {
        let text = "BK-A1-2023 Plaintiff ACME SDN BHD Local No 1 Defendant JOHN DOE Local No 2";
        let patterns = PatternSet::defaults();
        let acme = NameMatchRole::new("ACME SDN BHD", patterns.role_blocks.clone()).unwrap();
        let records = extract_cases(text, Role::Unknown, &patterns.cases, &acme, 400);
        assert_eq!(records[0].role, Role::Plaintiff);
        assert_eq!(records[0].plaintiff.as_deref(), Some("ACME SDN BHD"));
    }

    #[test]
    fn name_match_ignores_neighbouring_cases_blocks() {
        // Both windows span both cases; ACME is plaintiff in the first and
        // defendant in the second, and the third names it nowhere.
        let text = "CASES WITH SUBJECT AS DEFENDANT\n\
                    BK-A1-2023\nPlaintiff ACME SDN BHD Local No 1\nDefendant JOHN DOE Local No 2\n\
                    BK-B2-2024\nPlaintiff JANE DOE Local No 3\nDefendant ACME SDN BHD Local No 4\n\
                    BK-C3-2025\nPlaintiff JANE DOE Local No 5\nDefendant JOHN DOE Local No 6";
        let patterns = PatternSet::defaults();
        let acme = NameMatchRole::new("ACME SDN BHD", patterns.role_blocks.clone()).unwrap();
        let records = extract_cases(text, Role::Defendant, &patterns.cases, &acme, 400);

        let roles: Vec<Role> = records.iter().map(|r| r.role).collect();
        assert_eq!(roles, vec![Role::Plaintiff, Role::Defendant, Role::Unknown]);
    }

    #[test]
    fn name_match_role_holds_under_upper_case_heading() {
        let text = "CASES WITH SUBJECT AS DEFENDANT\nBK-A1-2023\n\
                    Plaintiff JANE DOE Local No 5\nDefendant ACME SDN BHD Local No 6";
        let patterns = PatternSet::defaults();
        let acme = NameMatchRole::new("ACME SDN BHD", patterns.role_blocks.clone()).unwrap();
        let records = extract_cases(text, Role::Defendant, &patterns.cases, &acme, 400);
        assert_eq!(records[0].role, Role::Defendant);
    }
}
