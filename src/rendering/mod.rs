//! Presenting an expansion with its annotations set apart from the text

mod renderer;

pub use renderer::*;

use crate::formatting::Expansion;

/// The expanded text with each annotation styled by the given renderer.
pub fn highlight(expansion: &Expansion, renderer: &impl Render) -> String {
    let text = &expansion.text;
    let mut output = String::new();
    let mut i = 0;

    for problem in &expansion.problems {
        let range = &problem.range;
        output.push_str(&renderer.style(Syntax::Neutral, &text[i..range.start]));
        output.push_str(&renderer.style(Syntax::Annotation, &text[range.start..range.end]));
        i = range.end;
    }
    output.push_str(&renderer.style(Syntax::Neutral, &text[i..]));

    output
}
