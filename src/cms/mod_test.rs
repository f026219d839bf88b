use super::*;

fn make_response(data: serde_json::Value) -> String {
    serde_json::json!({ "data": data }).to_string()
}

#[test]
fn parse_full_response() {
    let json = make_response(serde_json::json!({
        "jobs": [{
            "id": "j1",
            "company": "Acme",
            "position": "Software Developer",
            "startDate": "2021-06-01",
            "endDate": null,
            "location": null,
            "description": "Shipped features",
            "companyUrl": null,
            "logo": { "url": "https://cdn.test/acme.png" }
        }],
        "projects": [{
            "id": "p1",
            "title": "Portfolio",
            "description": "This site",
            "techStack": ["Rust", "Leptos"],
            "sourceUrl": "https://git.test/portfolio",
            "liveUrl": null,
            "image": null
        }],
        "skills": [{ "id": "s1", "name": "Rust", "icon": null }]
    }));

    let content = parse_response(&json).unwrap();
    assert_eq!(content.jobs.len(), 1);
    assert_eq!(content.jobs[0].company, "Acme");
    assert_eq!(content.projects[0].tech_stack, vec!["Rust".to_string(), "Leptos".to_string()]);
    assert_eq!(content.skills[0].name, "Rust");
}

#[test]
fn parse_empty_collections() {
    let json = make_response(serde_json::json!({ "jobs": [], "projects": [], "skills": [] }));
    assert!(parse_response(&json).unwrap().is_empty());
}

#[test]
fn parse_graphql_errors() {
    let json = serde_json::json!({
        "data": null,
        "errors": [
            { "message": "field 'techStack' not found" },
            { "message": "unauthorized" }
        ]
    })
    .to_string();
    let err = parse_response(&json).unwrap_err();
    assert!(matches!(&err, CmsError::Query(msg) if msg == "field 'techStack' not found; unauthorized"));
}

#[test]
fn parse_missing_data_errors() {
    let err = parse_response("{}").unwrap_err();
    assert!(matches!(err, CmsError::ApiParse(_)));
}

#[test]
fn parse_invalid_json_errors() {
    let err = parse_response("<html>bad gateway</html>").unwrap_err();
    assert!(matches!(err, CmsError::ApiParse(_)));
}

#[test]
fn query_selects_every_section() {
    for field in ["jobs", "projects", "skills", "startDate", "techStack", "icon { url }"] {
        assert!(QUERY.contains(field), "query missing {field}");
    }
}

#[test]
fn client_builds_from_config() {
    let cfg = CmsConfig {
        endpoint: "https://cms.example.test/graphql".into(),
        token: Some("tok".into()),
        revalidate_secs: 10,
        timeouts: config::CmsTimeouts { request_secs: 5, connect_secs: 2 },
    };
    let client = CmsClient::new(&cfg).unwrap();
    assert_eq!(client.endpoint, "https://cms.example.test/graphql");
    assert_eq!(client.token.as_deref(), Some("tok"));
}
