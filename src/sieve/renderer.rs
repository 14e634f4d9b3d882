/// Compile rules into SIEVE script text.
///
/// Every node kind is rendered through its [`Template`]; the `require` header
/// is inferred from the same trees.
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::action::Action;
use crate::model::filter::Filter;
use crate::model::rule::{Rule, RuleFile};
use crate::sieve::enums::{SieveExtension, SieveSection};
use crate::sieve::templates::Template;
use crate::store::script_io;

pub fn render_filter(filter: &Filter) -> Result<String> {
    match filter {
        Filter::True => Ok("true".to_string()),
        Filter::False => Ok("false".to_string()),
        Filter::Text(text) => Template::FilterGeneric {
            text: &text.text,
            case_sensitive: text.case_sensitive,
            operation: text.comparison,
            section: SieveSection::from(text.field),
        }
        .render(),
        Filter::Not { filter } => {
            let expr = render_filter(filter)?;
            Template::FilterCombineNot { expr: &expr }.render()
        }
        Filter::Combination(combination) => {
            let exprs = combination
                .args()
                .iter()
                .map(render_filter)
                .collect::<Result<Vec<_>>>()?;
            Template::FilterCombineAndOr {
                operation: combination.operator(),
                exprs: &exprs,
            }
            .render()
        }
    }
}

pub fn render_action(action: &Action) -> Result<String> {
    match action {
        Action::AddTag { tag } => Template::ActionTag { tag_name: tag }.render(),
        Action::MoveToFolder { folder } => Template::ActionMoveToFolder { folder }.render(),
        Action::MarkAsRead => Ok(r#"addflag "\\Seen";"#.to_string()),
        Action::StopProcessingAllFiles => Ok("stop;".to_string()),
        Action::StopProcessingCurrentFile => Ok("return;".to_string()),
    }
}

pub fn render_rule(rule: &Rule) -> Result<String> {
    let condition = render_filter(&rule.filter)?;
    let actions = rule
        .actions
        .iter()
        .map(render_action)
        .collect::<Result<Vec<_>>>()?;
    Template::EmailRule {
        comment: rule.comment.as_deref(),
        condition: &condition,
        actions: &actions,
    }
    .render()
}

/// `require` statement for `extensions`, deduplicated and sorted. `None`
/// when nothing is required.
pub fn render_extensions(extensions: &[SieveExtension]) -> Option<String> {
    let names: BTreeSet<&str> = extensions.iter().map(SieveExtension::as_sieve).collect();
    match names.len() {
        0 => None,
        1 => names.first().map(|name| format!("require \"{name}\";")),
        _ => {
            let list = names
                .iter()
                .map(|name| format!("\"{name}\""))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("require [{list}];"))
        }
    }
}

/// Extensions needed by `rules`, sorted by name. `include` is always added
/// when anything else is needed so the generated file can be included from
/// a master script.
pub fn required_extensions(rules: &[Rule]) -> Vec<SieveExtension> {
    let mut requires = BTreeSet::new();
    for rule in rules {
        collect_filter_requires(&rule.filter, &mut requires);
        for action in &rule.actions {
            collect_action_requires(action, &mut requires);
        }
    }
    if !requires.is_empty() {
        requires.insert(SieveExtension::Include);
    }

    let mut extensions: Vec<SieveExtension> = requires.into_iter().collect();
    extensions.sort_by_key(SieveExtension::as_sieve);
    extensions
}

fn collect_filter_requires(filter: &Filter, requires: &mut BTreeSet<SieveExtension>) {
    match filter {
        Filter::True | Filter::False => {}
        Filter::Text(text) => {
            if text.case_sensitive {
                requires.insert(SieveExtension::ComparatorAsciiNumeric);
            }
        }
        Filter::Not { filter } => collect_filter_requires(filter, requires),
        Filter::Combination(combination) => {
            for arg in combination.args() {
                collect_filter_requires(arg, requires);
            }
        }
    }
}

fn collect_action_requires(action: &Action, requires: &mut BTreeSet<SieveExtension>) {
    match action {
        Action::AddTag { .. } | Action::MoveToFolder { .. } => {
            requires.insert(SieveExtension::Fileinto);
        }
        Action::MarkAsRead => {
            requires.insert(SieveExtension::Imap4flags);
        }
        Action::StopProcessingCurrentFile | Action::StopProcessingAllFiles => {}
    }
}

/// Complete script for one rule file: `require` header plus every rule.
pub fn render_rules_file(rules: &[Rule]) -> Result<String> {
    let extensions = render_extensions(&required_extensions(rules));
    let rendered_rules = rules.iter().map(render_rule).collect::<Result<Vec<_>>>()?;
    Template::RulesFile {
        extensions: extensions.as_deref(),
        rendered_rules: &rendered_rules,
    }
    .render()
}

/// Render `rule_file` and write it to `<output_dir>/<file_name>`, replacing
/// any existing file.
pub fn render_rule_file_to(rule_file: &RuleFile, output_dir: &Path) -> Result<PathBuf> {
    let text = render_rules_file(&rule_file.rules)?;
    let path = output_dir.join(&rule_file.file_name);
    script_io::save_script(&path, &text)?;
    tracing::info!(path = %path.display(), rules = rule_file.rules.len(), "wrote rule file");
    Ok(path)
}
