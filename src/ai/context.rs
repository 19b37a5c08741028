use crate::i18n::Translator;
use crate::model::Canvas;

pub const NO_CANVAS_SELECTED: &str = "No canvas is currently selected.";
pub const NOT_FILLED_YET: &str = "Not filled yet.";
const UNNAMED_PROJECT: &str = "Unnamed Project";

/// Flattens a canvas into plain text for a model prompt. Item content goes in
/// verbatim, markup included.
pub fn format_canvas(canvas: Option<&Canvas>, translator: &Translator) -> String {
    let Some(canvas) = canvas else {
        return NO_CANVAS_SELECTED.to_string();
    };

    let sections = canvas
        .items
        .iter()
        .map(|item| {
            let content = if item.content.is_empty() {
                NOT_FILLED_YET
            } else {
                item.content.as_str()
            };
            format!(
                "- {}:\n  {}",
                translator.t(&item.title_key),
                content.split('\n').collect::<Vec<_>>().join("\n  ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Canvas Type: {}\nCanvas Name: {}\n\nContent:\n{}",
        canvas.canvas_type, canvas.name, sections
    )
}

/// Full prompt for one user question: persona, project, canvas context, question.
pub fn compose_prompt(project_name: Option<&str>, canvas_context: &str, question: &str) -> String {
    let project_name = project_name.unwrap_or(UNNAMED_PROJECT);
    format!(
        "You are a world-class senior business consultant providing expert advice.\n\
         The user is working on a project named \"{project_name}\".\n\
         They are currently focused on the following strategic analysis:\n\
         \n\
         {canvas_context}\n\
         \n\
         Based on this context, please provide a thoughtful, insightful, and actionable response to the user's question.\n\
         User's question: \"{question}\""
    )
}

#[cfg(test)]
mod tests {
    use super::{compose_prompt, format_canvas, NOT_FILLED_YET, NO_CANVAS_SELECTED};
    use crate::i18n::Translator;
    use crate::model::{AppState, CanvasType, Language};
    use crate::state::{reduce, Action};

    fn swot_state() -> AppState {
        let state = reduce(&AppState::default(), Action::AddProject { name: "Acme".into() });
        reduce(
            &state,
            Action::AddCanvas {
                name: "Outlook".into(),
                canvas_type: CanvasType::Swot,
            },
        )
    }

    #[test]
    fn no_canvas_yields_sentinel() {
        let translator = Translator::new(Language::En);
        assert_eq!(format_canvas(None, &translator), NO_CANVAS_SELECTED);
    }

    #[test]
    fn empty_items_use_placeholder_text() {
        let state = swot_state();
        let text = format_canvas(state.current_canvas(), &Translator::new(Language::En));
        let expected = format!(
            "Canvas Type: SWOT Analysis\nCanvas Name: Outlook\n\nContent:\n\
             - Strengths:\n  {NOT_FILLED_YET}\n\n\
             - Weaknesses:\n  {NOT_FILLED_YET}\n\n\
             - Opportunities:\n  {NOT_FILLED_YET}\n\n\
             - Threats:\n  {NOT_FILLED_YET}"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn multiline_content_is_indented_and_passed_verbatim() {
        let state = swot_state();
        let item_id = state.current_canvas().expect("canvas").items[0].id.clone();
        let state = reduce(
            &state,
            Action::UpdateCanvasItem {
                item_id,
                content: "<b>Brand</b>\nLoyal customers".into(),
            },
        );

        let text = format_canvas(state.current_canvas(), &Translator::new(Language::En));
        assert!(text.contains("- Strengths:\n  <b>Brand</b>\n  Loyal customers\n\n- Weaknesses:"));
    }

    #[test]
    fn titles_follow_translator_language() {
        let state = swot_state();
        let text = format_canvas(state.current_canvas(), &Translator::new(Language::Zh));
        assert!(text.contains("- 優勢 (S):"));
        assert!(text.starts_with("Canvas Type: SWOT Analysis\n"));
    }

    #[test]
    fn prompt_includes_project_context_and_question() {
        let prompt = compose_prompt(Some("Acme"), "CONTEXT", "What should we fix first?");
        assert!(prompt.contains("project named \"Acme\""));
        assert!(prompt.contains("\nCONTEXT\n"));
        assert!(prompt.ends_with("User's question: \"What should we fix first?\""));
    }

    #[test]
    fn prompt_names_missing_project() {
        let prompt = compose_prompt(None, "CONTEXT", "Hi");
        assert!(prompt.contains("project named \"Unnamed Project\""));
    }
}
