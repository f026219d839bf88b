use super::*;
use crate::net::types::Skill;

struct StaticContent(PortfolioContent);

impl ContentProvider for StaticContent {
    fn snapshot(&self) -> PortfolioContent {
        self.0.clone()
    }
}

fn sample() -> PortfolioContent {
    PortfolioContent {
        skills: vec![Skill { id: "s1".into(), name: "Rust".into(), icon: None }],
        ..PortfolioContent::default()
    }
}

#[test]
fn static_content_returns_its_snapshot() {
    let provider = StaticContent(sample());
    assert_eq!(provider.snapshot(), sample());
}

#[test]
fn snapshot_from_context_reads_provided_handle() {
    let owner = Owner::new();
    owner.with(|| {
        let handle: ContentHandle = Arc::new(StaticContent(sample()));
        provide_context(handle);
        assert_eq!(snapshot_from_context().unwrap(), sample());
    });
}

#[test]
fn snapshot_from_context_without_provider_errors() {
    let owner = Owner::new();
    owner.with(|| {
        let err = snapshot_from_context().unwrap_err();
        assert!(err.to_string().contains("content provider not configured"));
    });
}

#[test]
fn content_or_default_passes_resolved_content_through() {
    assert_eq!(content_or_default(Some(Ok(sample()))), sample());
}

#[test]
fn content_or_default_is_empty_while_pending_or_failed() {
    assert!(content_or_default(None).is_empty());
    assert!(content_or_default(Some(Err(ServerFnError::new("cms down")))).is_empty());
}
