use super::*;

#[test]
fn section_ids_are_unique() {
    let mut ids: Vec<&str> = SECTIONS.iter().map(|(id, _)| *id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), SECTIONS.len());
}

#[test]
fn project_pages_partition_preserves_size() {
    let pages = project_pages();
    assert!(!pages.is_empty());

    let (last, full) = pages.split_last().expect("at least one page");
    for page in full {
        assert_eq!(page.len(), PROJECTS_PER_PAGE);
    }
    assert!((1..=PROJECTS_PER_PAGE).contains(&last.len()));
}

#[test]
fn project_pages_preserve_order() {
    let flattened: Vec<Project> = project_pages().into_iter().flatten().collect();
    assert_eq!(flattened.first().map(|p| p.title.clone()),
        Some("Zero-Downtime Mail Migration".to_owned()));
    assert_eq!(flattened.len(), 6);
}

#[test]
fn every_certificate_carries_a_logo_color() {
    for cert in certificates() {
        assert!(cert.logo_color.starts_with('#'), "{}: {}", cert.title, cert.logo_color);
        assert!(!cert.icon_class.is_empty());
    }
}

#[test]
fn terminal_output_is_multiline_and_nonempty() {
    assert!(!TERMINAL_OUTPUT.is_empty());
    assert!(TERMINAL_OUTPUT.lines().count() > 1);
}
