//! CAP type listing and component resolution.

use crate::cap::{rules::rule_for, CapExecutorSelector, CapTypeService};
use crate::cli::common::{parse_arg, to_json, CliError, CliResult};
use crate::models::{CapComponent, CapType, ComponentSet};
use clap::Args;
use serde::Serialize;

/// List CAP types, or resolve a component combination to one
#[derive(Debug, Clone, Args)]
pub struct CapTypesArgs {
    /// Comma-separated components to resolve (rotated, mirrored, swapped, complementary)
    #[arg(long, value_name = "LIST")]
    pub components: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable CAP type entry
#[derive(Serialize, Debug)]
struct CapTypeInfo {
    name: String,
    tag: String,
    display: String,
    components: Vec<String>,
    supported: bool,
    quartered: bool,
}

impl CapTypeInfo {
    fn new(cap_type: CapType) -> Self {
        Self {
            name: cap_type.as_str().to_string(),
            tag: cap_type.hyphenated(),
            display: CapTypeService::format_for_display(cap_type),
            components: CapTypeService::parse_components(cap_type)
                .iter()
                .map(|c| c.keyword().to_string())
                .collect(),
            supported: CapExecutorSelector::is_supported(cap_type),
            quartered: rule_for(cap_type).is_some_and(|rule| rule.supports_quartered),
        }
    }
}

impl CapTypesArgs {
    /// Execute the cap-types command
    pub fn execute(&self) -> CliResult<()> {
        match &self.components {
            Some(list) => self.resolve(list),
            None => self.list(),
        }
    }

    fn list(&self) -> CliResult<()> {
        let entries: Vec<CapTypeInfo> = CapTypeService::all_cap_types()
            .iter()
            .map(|cap_type| CapTypeInfo::new(*cap_type))
            .collect();

        if self.json {
            println!("{}", to_json(&entries)?);
            return Ok(());
        }

        println!("CAP types ({}):", entries.len());
        for entry in &entries {
            println!(
                "  {:<32} {:<24} {}{}",
                entry.name,
                entry.display,
                entry.components.join(" + "),
                if entry.quartered { " (halved, quartered)" } else { "" }
            );
        }
        Ok(())
    }

    fn resolve(&self, list: &str) -> CliResult<()> {
        let components = parse_components(list)?;
        if !CapTypeService::is_implemented(components) {
            return Err(CliError::validation(format!(
                "No CAP type implements components {components}"
            )));
        }
        let cap_type = CapTypeService::generate_cap_type(components);
        let info = CapTypeInfo::new(cap_type);

        if self.json {
            println!("{}", to_json(&info)?);
        } else {
            println!("✓ {} -> {} ({})", components, info.name, info.display);
        }
        Ok(())
    }
}

fn parse_components(list: &str) -> CliResult<ComponentSet> {
    let components = list
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_arg::<CapComponent>)
        .collect::<CliResult<Vec<_>>>()?;
    if components.is_empty() {
        return Err(CliError::validation(
            "At least one component must be specified: rotated, mirrored, swapped, complementary",
        ));
    }
    Ok(ComponentSet::from_components(&components))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_components() {
        let set = parse_components("mirrored, Rotated").unwrap();
        assert_eq!(
            set,
            ComponentSet::from_components(&[CapComponent::Mirrored, CapComponent::Rotated])
        );
        assert!(parse_components("").is_err());
        assert!(parse_components("rotated,spun").is_err());
    }

    #[test]
    fn test_info_for_triple() {
        let info = CapTypeInfo::new(CapType::MirroredComplementaryRotated);
        assert_eq!(info.display, "Mirrored + 2 more");
        assert_eq!(info.components, vec!["ROTATED", "MIRRORED", "COMPLEMENTARY"]);
        assert!(info.supported);
        assert!(!info.quartered);
    }
}
