use sprintf::rendering::{Render, Syntax};
use sprintf::Problem;

/// Format a problem with concise single-line output
pub fn concise_problem(problem: &Problem, template: &str, renderer: &impl Render) -> String {
    let column = calculate_column_number(template, problem.offset) + 1;

    format!(
        "{}: {}:{} {}",
        renderer.style(Syntax::Label, "error"),
        renderer.style(Syntax::Location, "template"),
        column,
        renderer.style(
            Syntax::Annotation,
            &problem
                .annotation
                .to_string()
        ),
    )
}

// Zero-origin, counting characters rather than bytes. Offsets past the end
// (the audit) land one past the last character.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let offset = offset.min(content.len());
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
