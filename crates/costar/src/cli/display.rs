//! Common display and input-formatting utilities for CLI commands.

use colored::Colorize;
use costar::{NodeKind, display_name, person_id};

/// Conventional default search target.
pub const DEFAULT_TARGET: &str = "<a>Bacon, Kevin (I)";

/// Turn a person argument into a node identifier.
///
/// Arguments starting with `<` are taken as raw identifiers. A name
/// containing a comma is already in "Lastname, Firstname" form. Anything
/// else is "Firstname Lastname", split at the last whitespace so multi-word
/// first names ("Kevin (I) Bacon") survive. A single bare token is treated
/// as a mononym.
pub fn person_arg_to_id(arg: &str) -> String {
    let arg = arg.trim();
    if arg.starts_with('<') {
        return arg.to_string();
    }
    if let Some((last, first)) = arg.split_once(',') {
        return format_person(last, first);
    }
    match arg.rsplit_once(char::is_whitespace) {
        Some((first, last)) => format_person(last, first),
        None => format!("<a>{}", title_case(arg)),
    }
}

/// Format raw last/first name input into a person identifier, with the
/// first-letter title-casing the record files use.
pub fn format_person(last: &str, first: &str) -> String {
    person_id(&title_case(last), &title_case(first))
}

/// Degrees of separation along a path: the number of event hops.
pub fn degrees(path: &[String]) -> usize {
    path.iter()
        .filter(|id| NodeKind::of(id) == Some(NodeKind::Event))
        .count()
}

/// Print the "X is N steps away from Y" summary line for a found path.
pub fn print_summary(path: &[String], start: &str, target: &str) {
    let degrees = degrees(path);
    let steps = if degrees == 1 { "step" } else { "steps" };
    println!(
        "{} is {} away from {}.",
        display_name(start).white().bold(),
        format!("{degrees} {steps}").cyan(),
        display_name(target).white().bold()
    );
}

/// Print the nodes of a found path, one per line with kind annotations,
/// events indented under the people they connect.
pub fn print_path(path: &[String]) {
    for id in path {
        let kind = NodeKind::of(id).unwrap_or(NodeKind::Event);
        let annotation = format!("({})", kind.as_str());
        match kind {
            NodeKind::Person => {
                println!("  {} {}", display_name(id).white().bold(), annotation.dimmed());
            }
            NodeKind::Event => {
                println!("    {} {}", display_name(id).cyan(), annotation.dimmed());
            }
        }
    }
}

/// First-letter title-casing, as the original record files use for names.
fn title_case(part: &str) -> String {
    let mut chars = part.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_identifiers_pass_through() {
        assert_eq!(person_arg_to_id("<a>Bacon, Kevin (I)"), "<a>Bacon, Kevin (I)");
    }

    #[test]
    fn first_last_form_is_reordered_and_title_cased() {
        assert_eq!(person_arg_to_id("sean connery"), "<a>Connery, Sean");
        assert_eq!(person_arg_to_id("Kevin (I) Bacon"), "<a>Bacon, Kevin (I)");
    }

    #[test]
    fn last_comma_first_form_is_kept() {
        assert_eq!(person_arg_to_id("Bacon, Kevin (I)"), "<a>Bacon, Kevin (I)");
    }

    #[test]
    fn mononyms_get_no_comma() {
        assert_eq!(person_arg_to_id("madonna"), "<a>Madonna");
    }

    #[test]
    fn degrees_counts_event_hops() {
        let path = [
            "<a>Connery, Sean".to_string(),
            "<t>Wild Things (1998)".to_string(),
            "<a>Bacon, Kevin (I)".to_string(),
        ];
        assert_eq!(degrees(&path), 1);
        assert_eq!(degrees(&path[..1]), 0);
    }
}
