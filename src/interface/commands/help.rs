//! # Help Command
//!
//! Handles `sensu help`.
//! Lists every routed command with its usage and description.

use crate::strings::help;

pub fn handle_help<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = help::HEADER.to_string();
    for (usage, description) in entries {
        out.push_str(&help::entry(usage, description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_entries_in_order() {
        let text = handle_help([("sensu info", "Displays sensu information"), ("sensu stashes", "Lists stashes")]);
        assert_eq!(
            text,
            "**Sensu commands**\n* `sensu info`: Displays sensu information\n* `sensu stashes`: Lists stashes\n"
        );
    }
}
