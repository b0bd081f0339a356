//! Plain-text rendering of history and branch listings
//!
//! History is rendered newest first, one block per commit:
//!
//! ```text
//! Commit <id>
//! Date: <formatted date>
//!
//! 	<message>
//! ```
//!
//! Blocks are separated by a blank line and the whole text is trimmed.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use std::sync::Arc;

/// Render commits (given oldest first) as a newest-first log
pub fn render_history<C>(commits: &[Arc<Commit<C>>], date_format: &str) -> String {
    commits
        .iter()
        .rev()
        .map(|commit| {
            format!(
                "Commit {}\nDate: {}\n\n\t{}\n\n",
                commit.id(),
                commit.readable_timestamp(date_format),
                commit.message()
            )
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Render sorted branch names, marking the current one with `*`
pub fn render_branch_list<'n>(
    names: impl IntoIterator<Item = &'n BranchName>,
    current: &BranchName,
) -> String {
    names
        .into_iter()
        .map(|name| {
            if name == current {
                format!("* {name}")
            } else {
                format!("  {name}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::commit_id::CommitId;
    use chrono::{FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn commit(id: &str, message: &str, hour: u32) -> Arc<Commit<()>> {
        let timestamp = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2023, 1, 1, hour, 5, 0)
            .unwrap();
        Arc::new(Commit::new(
            CommitId::from(id),
            message.to_string(),
            timestamp,
            BTreeMap::new(),
        ))
    }

    #[test]
    fn history_is_rendered_newest_first() {
        let commits = vec![commit("c1", "First commit", 9), commit("c2", "Second commit", 10)];

        let expected = "Commit c2\nDate: Sun Jan 1 10:05 2023 +0000\n\n\tSecond commit\n\n\
                        Commit c1\nDate: Sun Jan 1 09:05 2023 +0000\n\n\tFirst commit";
        assert_eq!(render_history(&commits, "%a %b %-d %H:%M %Y %z"), expected);
    }

    #[test]
    fn single_commit_history_has_no_trailing_blank_lines() {
        let commits = vec![commit("c1", "Only", 9)];

        assert_eq!(
            render_history(&commits, "%Y"),
            "Commit c1\nDate: 2023\n\n\tOnly"
        );
    }

    #[test]
    fn branch_list_marks_only_current_branch() {
        let names = [BranchName::from("dev"), BranchName::from("master")];

        assert_eq!(
            render_branch_list(&names, &BranchName::from("master")),
            "  dev\n* master"
        );
    }
}
