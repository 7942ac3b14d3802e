use wortkarte_core::types::Tier;
use wortkarte_types::{AppEvent, Screen};

use crate::state::UiState;

/// Map one line typed by the user to an app event. `None` means the input means
/// nothing on the current screen.
pub fn parse_input(state: &UiState, line: &str) -> Option<AppEvent> {
    let input = line.trim().to_lowercase();

    match state.screen {
        Screen::Start => match input.as_str() {
            "" => Some(AppEvent::StartSession(state.selected_tier)),
            "q" | "quit" => Some(AppEvent::Quit),
            code => Tier::from_code(code).map(AppEvent::StartSession),
        },
        Screen::Question { article_required } => match input.as_str() {
            "e" | "end" | "q" | "quit" => Some(AppEvent::EndSession),
            choice => {
                if let Some(index) = parse_option(choice, state.option_count) {
                    return Some(AppEvent::SelectOption(index));
                }

                if !article_required {
                    return None;
                }

                state
                    .articles
                    .iter()
                    .find(|article| article.to_lowercase() == choice)
                    .map(|article| AppEvent::SelectArticle(article.clone()))
            }
        },
        Screen::Answered => match input.as_str() {
            "" | "n" | "next" => Some(AppEvent::NextQuestion),
            "e" | "end" | "q" | "quit" => Some(AppEvent::EndSession),
            _ => None,
        },
        Screen::Summary => match input.as_str() {
            "" | "r" | "restart" => Some(AppEvent::NewSession),
            "q" | "quit" => Some(AppEvent::Quit),
            _ => None,
        },
    }
}

/// Options are numbered from 1 on screen
fn parse_option(input: &str, option_count: usize) -> Option<usize> {
    let number: usize = input.parse().ok()?;
    (1..=option_count).contains(&number).then(|| number - 1)
}

/// Keys accepted on the current screen
pub fn hint(state: &UiState) -> String {
    match state.screen {
        Screen::Start => format!(
            "Type a, b or c to choose a level (Enter = {}), q to quit",
            state.selected_tier
        ),
        Screen::Question {
            article_required: true,
        } => format!(
            "Type the article ({}) and then 1-{} for the translation, e to end",
            state.articles.join("/"),
            state.option_count
        ),
        Screen::Question {
            article_required: false,
        } => format!("Type 1-{} to answer, e to end", state.option_count),
        Screen::Answered => "Press Enter for the next word, e to end".to_string(),
        Screen::Summary => "Press Enter to start again, q to quit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_state(article_required: bool) -> UiState {
        UiState {
            screen: Screen::Question { article_required },
            articles: vec!["der".into(), "die".into(), "das".into()],
            option_count: 4,
            question_number: 1,
            ..UiState::default()
        }
    }

    #[test]
    fn start_screen_picks_tier() {
        let state = UiState {
            selected_tier: Tier::B,
            ..UiState::default()
        };

        assert!(matches!(
            parse_input(&state, "c"),
            Some(AppEvent::StartSession(Tier::C))
        ));
        assert!(matches!(
            parse_input(&state, " A "),
            Some(AppEvent::StartSession(Tier::A))
        ));
        assert!(matches!(
            parse_input(&state, ""),
            Some(AppEvent::StartSession(Tier::B))
        ));
        assert!(matches!(parse_input(&state, "q"), Some(AppEvent::Quit)));
        assert!(parse_input(&state, "d").is_none());
    }

    #[test]
    fn options_are_one_based() {
        let state = question_state(false);

        assert!(matches!(
            parse_input(&state, "1"),
            Some(AppEvent::SelectOption(0))
        ));
        assert!(matches!(
            parse_input(&state, "4"),
            Some(AppEvent::SelectOption(3))
        ));
        assert!(parse_input(&state, "0").is_none());
        assert!(parse_input(&state, "5").is_none());
    }

    #[test]
    fn articles_only_when_asked() {
        let state = question_state(true);
        match parse_input(&state, "Das") {
            Some(AppEvent::SelectArticle(article)) => assert_eq!(article, "das"),
            other => panic!("unexpected: {:?}", other),
        }

        let state = question_state(false);
        assert!(parse_input(&state, "das").is_none());
    }

    #[test]
    fn end_and_next() {
        let state = question_state(true);
        assert!(matches!(
            parse_input(&state, "e"),
            Some(AppEvent::EndSession)
        ));

        let answered = UiState {
            screen: Screen::Answered,
            ..question_state(true)
        };
        assert!(matches!(
            parse_input(&answered, ""),
            Some(AppEvent::NextQuestion)
        ));
        assert!(parse_input(&answered, "2").is_none());

        let summary = UiState {
            screen: Screen::Summary,
            ..UiState::default()
        };
        assert!(matches!(
            parse_input(&summary, "r"),
            Some(AppEvent::NewSession)
        ));
        assert!(matches!(parse_input(&summary, "q"), Some(AppEvent::Quit)));
    }

    #[test]
    fn hint_lists_articles() {
        let text = hint(&question_state(true));
        assert!(text.contains("der/die/das"));
        assert!(text.contains("1-4"));
    }
}
