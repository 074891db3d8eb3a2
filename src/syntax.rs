use crate::models::{CommandRecord, SelectionState};

/// Placeholder replaced by the selected flags
pub const OPTIONS_PLACEHOLDER: &str = "[OPTIONS]";
/// Placeholder replaced by the selected image reference
pub const IMAGE_PLACEHOLDER: &str = "IMAGE";
/// Placeholder replaced by the selected sub-command
pub const COMMAND_PLACEHOLDER: &str = "[COMMAND]";

/// Builds display syntax strings from a template and a card's selections
pub struct SyntaxBuilder;

impl SyntaxBuilder {
    /// Substitute the selection into `base`. Pure string templating: values
    /// are not validated as Docker arguments.
    pub fn build(base: &str, selection: &SelectionState) -> String {
        let mut syntax = base.to_string();

        let flags = Self::join_flags(&selection.selected_flags);
        if !flags.is_empty() {
            syntax = syntax.replacen(OPTIONS_PLACEHOLDER, &flags, 1);
        }

        if let Some(image) = &selection.selected_image {
            syntax = syntax.replacen(IMAGE_PLACEHOLDER, image, 1);
        }

        if let Some(command) = &selection.selected_command {
            syntax = syntax.replacen(COMMAND_PLACEHOLDER, command, 1);
        }

        syntax
    }

    /// Build from the record's own template (or its `<command> [OPTIONS]` default)
    pub fn build_for(record: &CommandRecord, selection: &SelectionState) -> String {
        Self::build(&record.effective_syntax(), selection)
    }

    /// A short flag is exactly `-x` where `x` is not `-`.
    ///
    /// Multi-letter short-style flags such as `-it` are treated as long flags.
    pub fn is_short_flag(flag: &str) -> bool {
        let mut chars = flag.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some('-'), Some(c), None) if c != '-'
        )
    }

    /// Cluster short flags into one `-abc` token, then append long flags verbatim
    pub fn join_flags(flags: &[String]) -> String {
        let (short, long): (Vec<&String>, Vec<&String>) =
            flags.iter().partition(|f| Self::is_short_flag(f));

        let cluster: String = short.iter().map(|f| &f[1..]).collect();

        let mut parts = Vec::with_capacity(long.len() + 1);
        if !cluster.is_empty() {
            parts.push(format!("-{}", cluster));
        }
        parts.extend(long.into_iter().cloned());

        parts.join(" ")
    }
}
