use super::*;

fn render(skills: Vec<Skill>) -> String {
    Owner::new().with(|| view! { <Skills skills=Signal::stored(skills)/> }.to_html())
}

#[test]
fn empty_skills_render_placeholder_instead_of_empty_grid() {
    let html = render(Vec::new());
    assert!(html.contains("Nothing to show yet."));
    assert!(!html.contains("skills__grid"));
}

#[test]
fn skills_render_in_grid() {
    let html = render(vec![Skill { id: "s1".into(), name: "Rust".into(), icon: None }]);
    assert!(html.contains("skills__grid"));
    assert!(html.contains("Rust"));
    assert!(!html.contains("Nothing to show yet."));
}
