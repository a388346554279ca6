//! # Help Text
//!
//! Header and line layout of the `sensu help` reply. The command lines themselves
//! come from the router's route table.

pub const HEADER: &str = "**Sensu commands**\n";

pub fn entry(usage: &str, description: &str) -> String {
    format!("* `{usage}`: {description}\n")
}
