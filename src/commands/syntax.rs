use serde::{Deserialize, Serialize};

use crate::clipboard::{copy_to_clipboard, ClipboardSink, CopyIndicator};
use crate::models::error::CatalogError;
use crate::models::filter::SelectionState;
use crate::state::AppState;

/// Which part of a card to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyTarget {
    Example,
    Syntax,
}

/// Focus a card, apply a full selection and return the built syntax
pub fn build_command_syntax(
    state: &AppState,
    id: &str,
    selection: SelectionState,
) -> Result<String, CatalogError> {
    state.focus_command(id)?;
    state.update_selection(id, |s| *s = selection)?;
    state.built_syntax(id)
}

/// Select or deselect one flag on a card
pub fn toggle_syntax_flag(state: &AppState, id: &str, flag: &str) -> Result<String, CatalogError> {
    let record = state.catalog().require(id)?;
    if record.flag(flag).is_none() {
        tracing::debug!("Flag {} is not documented for {}", flag, id);
    }
    state.update_selection(id, |s| {
        s.toggle_flag(flag);
    })?;
    state.built_syntax(id)
}

/// Set or clear the image reference on a card
pub fn set_syntax_image(
    state: &AppState,
    id: &str,
    image: Option<String>,
) -> Result<String, CatalogError> {
    state.update_selection(id, |s| s.set_image(image))?;
    state.built_syntax(id)
}

/// Set or clear the sub-command on a card
pub fn set_syntax_command(
    state: &AppState,
    id: &str,
    command: Option<String>,
) -> Result<String, CatalogError> {
    state.update_selection(id, |s| s.set_command(command))?;
    state.built_syntax(id)
}

/// Drop a card's selections, returning its bare template
pub fn reset_syntax(state: &AppState, id: &str) -> Result<String, CatalogError> {
    state.reset_selection(id);
    state.built_syntax(id)
}

/// Copy a card's example or built syntax. Clipboard failures yield `Ok(false)`.
pub async fn copy_command(
    state: &AppState,
    sink: &dyn ClipboardSink,
    indicator: &CopyIndicator,
    id: &str,
    target: CopyTarget,
) -> Result<bool, CatalogError> {
    let text = match target {
        CopyTarget::Example => state.catalog().require(id)?.example.clone(),
        CopyTarget::Syntax => state.built_syntax(id)?,
    };

    Ok(copy_to_clipboard(sink, indicator, &text).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::favorites::FavoritesStore;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    fn state() -> AppState {
        AppState::new(Catalog::built_in(), FavoritesStore::in_memory())
    }

    #[derive(Default)]
    struct RecordingSink {
        last: Mutex<Option<String>>,
    }

    #[async_trait]
    impl ClipboardSink for RecordingSink {
        async fn write_text(&self, text: &str) -> Result<(), CatalogError> {
            *self.last.lock() = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_build_command_syntax() {
        let selection = SelectionState {
            selected_flags: vec!["-d".to_string(), "-p".to_string(), "--name".to_string()],
            selected_image: Some("nginx".to_string()),
            selected_command: None,
        };
        let result = build_command_syntax(&state(), "docker-run", selection).unwrap();
        assert_eq!(result, "docker run -dp --name nginx [COMMAND] [ARG...]");
    }

    #[test]
    fn test_incremental_selection() {
        let state = state();
        assert_eq!(
            toggle_syntax_flag(&state, "docker-ps", "-a").unwrap(),
            "docker ps -a"
        );
        assert_eq!(
            toggle_syntax_flag(&state, "docker-ps", "-q").unwrap(),
            "docker ps -aq"
        );
        assert_eq!(
            toggle_syntax_flag(&state, "docker-ps", "-a").unwrap(),
            "docker ps -q"
        );
        assert_eq!(reset_syntax(&state, "docker-ps").unwrap(), "docker ps [OPTIONS]");
    }

    #[test]
    fn test_image_and_command() {
        let state = state();
        set_syntax_image(&state, "docker-run", Some("ubuntu".to_string())).unwrap();
        let result = set_syntax_command(&state, "docker-run", Some("bash".to_string())).unwrap();
        assert_eq!(result, "docker run [OPTIONS] ubuntu bash [ARG...]");

        let result = set_syntax_image(&state, "docker-run", None).unwrap();
        assert_eq!(result, "docker run [OPTIONS] IMAGE bash [ARG...]");
    }

    #[test]
    fn test_switching_cards_resets_selection() {
        let state = state();
        toggle_syntax_flag(&state, "docker-run", "-d").unwrap();
        build_command_syntax(&state, "docker-ps", SelectionState::default()).unwrap();
        assert!(state.selection("docker-run").is_empty());
    }

    #[tokio::test]
    async fn test_copy_example_and_syntax() {
        let state = state();
        let sink = RecordingSink::default();
        let indicator = CopyIndicator::new();

        let copied = copy_command(&state, &sink, &indicator, "docker-ps", CopyTarget::Example)
            .await
            .unwrap();
        assert!(copied);
        assert_eq!(sink.last.lock().as_deref(), Some("docker ps -a"));
        assert!(indicator.is_copied());

        toggle_syntax_flag(&state, "docker-ps", "-q").unwrap();
        copy_command(&state, &sink, &indicator, "docker-ps", CopyTarget::Syntax)
            .await
            .unwrap();
        assert_eq!(sink.last.lock().as_deref(), Some("docker ps -q"));
    }

    #[tokio::test]
    async fn test_copy_unknown_command() {
        let state = state();
        let result = copy_command(
            &state,
            &RecordingSink::default(),
            &CopyIndicator::new(),
            "docker-nope",
            CopyTarget::Example,
        )
        .await;
        assert!(matches!(result, Err(CatalogError::CommandNotFound(_))));
    }
}
