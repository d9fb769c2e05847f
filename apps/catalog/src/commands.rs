use crate::cli::Command;
use crate::config::{CatalogConfig, OutputFormat};
use crate::declarations::{find_registry, registries};
use crate::error::{CatalogError, CatalogErrorExt};
use crate::programmers::{ProgrammersError, ProgrammersErrorMessages};
use elemental::{Element, Elemental, Key, Registry};
use serde_json::json;
use std::io::Write;
use tracing::debug;

/// Longest walk `walk` prints.
pub const MAX_WALK_STEPS: usize = 10_000;

/// Executes one command, writing its output to `out`.
///
/// # Errors
/// Lookup failures, output failures, and the deliberate failure of `raise`.
pub fn run(command: Command, config: &CatalogConfig, out: &mut impl Write) -> Result<(), CatalogError> {
    debug!(?command, output = ?config.output, "Running command");

    match command {
        Command::Registries {} => list_registries(config.output, out),
        Command::List { registry, sorted, defaults } => {
            let registry = find_registry(&registry)?;
            let mut elements: Vec<Element<'_>> =
                if sorted || config.sorted { registry.sorted_by_position() } else { registry.iter().collect() };
            if defaults {
                elements.retain(|e| e.is_default());
            }
            list_members(registry, &elements, config.output, out)
        },
        Command::Show { registry, key } => {
            let registry = find_registry(&registry)?;
            let element = registry.lookup(parse_key(&key)).context(format!("show {key}"))?;
            show_member(element, config.output, out)
        },
        Command::Walk { registry, key, steps, backward } => {
            let registry = find_registry(&registry)?;
            let start = registry.lookup(parse_key(&key)).context(format!("walk {key}"))?;
            if steps > MAX_WALK_STEPS {
                return Err(CatalogError::InvalidArgument {
                    message: format!("at most {MAX_WALK_STEPS} steps, got {steps}").into(),
                    context: Some(format!("walk {key}").into()),
                });
            }
            let path: Vec<Element<'_>> = std::iter::successors(Some(start), |e| {
                Some(if backward { e.pred() } else { e.succ() })
            })
            .take(steps + 1)
            .collect();
            walk(&path, config.output, out)
        },
        Command::Raise { kind, detail } => Err(raise(kind.as_deref(), detail)?.into()),
    }
}

/// Integers address ordinals; anything else is a name.
fn parse_key(raw: &str) -> Key<'_> {
    raw.parse::<i64>().map_or_else(|_| Key::from(raw), Key::from)
}

fn list_registries(format: OutputFormat, out: &mut impl Write) -> Result<(), CatalogError> {
    match format {
        OutputFormat::Text => {
            for registry in registries() {
                writeln!(out, "{:<28} {:>3} members  values: {}", registry.name(), registry.len(), policy(registry))?;
            }
        },
        OutputFormat::Json => {
            let listing: Vec<_> = registries()
                .iter()
                .map(|r| json!({ "name": r.name(), "members": r.len(), "values": policy(r) }))
                .collect();
            write_json(out, &listing)?;
        },
    }
    Ok(())
}

fn list_members(
    registry: &Registry,
    elements: &[Element<'_>],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CatalogError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{} ({} members, values: {})", registry.name(), registry.len(), policy(registry))?;
            for element in elements {
                let marker = if element.is_default() { "  [default]" } else { "" };
                writeln!(
                    out,
                    "{:>4}  {:<24} {:<32} position={}{marker}",
                    element.ordinal(),
                    element.name(),
                    element.display(),
                    element.position(),
                )?;
            }
        },
        OutputFormat::Json => {
            let members: Vec<_> = elements.iter().map(|e| e.member()).collect();
            write_json(out, &members)?;
        },
    }
    Ok(())
}

fn show_member(element: Element<'_>, format: OutputFormat, out: &mut impl Write) -> Result<(), CatalogError> {
    let registry = element.registry();
    let names = registry.names_of(element)?;

    match format {
        OutputFormat::Text => {
            writeln!(out, "registry: {}", registry.name())?;
            writeln!(out, "name:     {}", element.name())?;
            writeln!(out, "ordinal:  {}", element.ordinal())?;
            writeln!(out, "display:  {}", element.display())?;
            writeln!(out, "label:    {}", element.humanize())?;
            writeln!(out, "position: {}", element.position())?;
            writeln!(out, "default:  {}", element.is_default())?;
            writeln!(out, "value:    {}", element.value())?;
            writeln!(out, "names:    {}", names.join(", "))?;
            writeln!(out, "previous: {}", element.pred())?;
            writeln!(out, "next:     {}", element.succ())?;
        },
        OutputFormat::Json => {
            let shown = json!({
                "registry": registry.name(),
                "member": element.member(),
                "value": element.value(),
                "names": names,
                "previous": element.pred().name(),
                "next": element.succ().name(),
            });
            write_json(out, &shown)?;
        },
    }
    Ok(())
}

fn walk(path: &[Element<'_>], format: OutputFormat, out: &mut impl Write) -> Result<(), CatalogError> {
    match format {
        OutputFormat::Text => {
            for element in path {
                writeln!(out, "{element}")?;
            }
        },
        OutputFormat::Json => {
            let names: Vec<_> = path.iter().map(|e| e.name()).collect();
            write_json(out, &names)?;
        },
    }
    Ok(())
}

/// Builds the error `raise` fails with.
///
/// A number picks a kind by its 1-based position in the listing; any other number falls back
/// to the generic error.
fn raise(kind: Option<&str>, detail: Option<String>) -> Result<ProgrammersError, CatalogError> {
    let error = match kind.map(|k| (k, k.parse::<usize>())) {
        None => ProgrammersError::named("")?,
        Some((_, Ok(choice))) => choice
            .checked_sub(1)
            .and_then(ProgrammersErrorMessages::from_ordinal)
            .map_or_else(|| ProgrammersError::new(ProgrammersErrorMessages::VARIANTS[0]), ProgrammersError::new),
        Some((name, Err(_))) => ProgrammersError::named(name).context(format!("raise {name}"))?,
    };
    debug!(kind = error.kind().name(), "Raising programmer's error");
    Ok(match detail {
        Some(detail) => error.with_detail(detail),
        None => error,
    })
}

fn policy(registry: &Registry) -> &'static str {
    if registry.value_as_ordinal() { "ordinals" } else { "names" }
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<(), CatalogError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(command: Command, config: &CatalogConfig) -> Result<String, CatalogError> {
        let mut out = Vec::new();
        run(command, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn text() -> CatalogConfig {
        CatalogConfig::default()
    }

    fn json() -> CatalogConfig {
        CatalogConfig { output: OutputFormat::Json, ..CatalogConfig::default() }
    }

    #[test]
    fn list_shows_every_member_in_ordinal_order() {
        let output = render(
            Command::List { registry: "PublicStatus".to_owned(), sorted: false, defaults: false },
            &text(),
        )
        .unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("PublicStatus (4 members, values: names)"));
        assert!(lines[1].contains("unpublished") && lines[1].ends_with("[default]"));
        assert!(lines[2].contains("Editorial Approval Needed"));
    }

    #[test]
    fn list_filters_defaults() {
        let output = render(
            Command::List { registry: "comment_type".to_owned(), sorted: true, defaults: true },
            &text(),
        )
        .unwrap();

        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("moderated"));
    }

    #[test]
    fn show_accepts_synonyms_and_negative_ordinals() {
        let output = render(
            Command::Show { registry: "public_status".to_owned(), key: "pending".to_owned() },
            &text(),
        )
        .unwrap();
        assert!(output.contains("name:     editor_approval"));
        assert!(output.contains("names:    editor_approval, pending"));

        let output =
            render(Command::Show { registry: "CommentType".to_owned(), key: "-1".to_owned() }, &json())
                .unwrap();
        let shown: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(shown["member"]["name"], "closed");
        assert_eq!(shown["value"], 2);
        assert_eq!(shown["next"], "all");
    }

    #[test]
    fn walk_wraps_in_both_directions() {
        let forward = render(
            Command::Walk { registry: "CommentType".to_owned(), key: "closed".to_owned(), steps: 2, backward: false },
            &text(),
        )
        .unwrap();
        assert_eq!(forward.lines().collect::<Vec<_>>(), ["closed", "all", "moderated"]);

        let backward = render(
            Command::Walk { registry: "CommentType".to_owned(), key: "0".to_owned(), steps: 1, backward: true },
            &json(),
        )
        .unwrap();
        let names: Vec<String> = serde_json::from_str(&backward).unwrap();
        assert_eq!(names, ["all", "closed"]);
    }

    #[test]
    fn walk_rejects_step_counts_past_the_limit() {
        let walk = |steps| Command::Walk {
            registry: "CommentType".to_owned(),
            key: "all".to_owned(),
            steps,
            backward: false,
        };

        let err = render(walk(usize::MAX), &text()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument { .. }));
        assert!(err.to_string().starts_with("Invalid argument (walk all): at most 10000 steps"));

        let output = render(walk(MAX_WALK_STEPS), &json()).unwrap();
        let names: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(names.len(), MAX_WALK_STEPS + 1);
        assert_eq!(names.last().map(String::as_str), Some("moderated"));
    }

    #[test]
    fn unknown_member_is_reported_with_context() {
        let err = render(Command::Show { registry: "CommentType".to_owned(), key: "open".to_owned() }, &text())
            .unwrap_err();
        assert!(matches!(err, CatalogError::Elemental { context: Some(_), .. }));
        assert!(err.to_string().contains("`open`"));
    }

    #[test]
    fn raise_picks_messages_from_the_registry() {
        let err = render(Command::Raise { kind: Some("2".to_owned()), detail: None }, &text()).unwrap_err();
        assert_eq!(err.to_string(), "Programmer's Error: Called an abstract method.");

        let err = render(Command::Raise { kind: Some("9".to_owned()), detail: None }, &text()).unwrap_err();
        assert_eq!(err.to_string(), "Programmer's Error: An unspecified error occurred.");

        let err = render(
            Command::Raise { kind: Some("InvalidFieldPassedError".to_owned()), detail: Some("age".to_owned()) },
            &text(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Programmer's Error: Invalid field was passed in arguments. (age)");
    }
}
