//! List rules command implementation.

use anyhow::{Context, Result};
use labinsight_core::{Dispatch, IdentifierKind, NamingConvention};
use labinsight_rules::default_table;

/// Runs the list-rules command.
pub fn run() -> Result<()> {
    let table = default_table().context("Failed to build rule table")?;

    println!("Naming rules:\n");
    println!("{:<12} {:<12} {:<14} Description", "Kind", "Convention", "Rule");
    println!("{}", "-".repeat(80));

    for kind in IdentifierKind::ALL {
        for convention in NamingConvention::ALL {
            match table.lookup(kind, convention) {
                Dispatch::Rule(rule) => println!(
                    "{:<12} {:<12} {:<14} {}",
                    kind.as_str(),
                    convention.as_str(),
                    rule.name(),
                    rule.description()
                ),
                Dispatch::Unimplemented => println!(
                    "{:<12} {:<12} {:<14} reserved, not checked",
                    kind.as_str(),
                    convention.as_str(),
                    "-"
                ),
            }
        }
    }

    println!("\nConstruct rules:\n");
    for rule in table.constructs() {
        println!("  {:<12} {}", rule.name(), rule.description());
    }

    println!("\nConventions are assigned per kind in .labinsight, e.g.:");
    println!("  {{ \"casing\": {{ \"variableCasing\": \"camelCase\", \"classCasing\": \"pascalCase\" }} }}");
    println!("Set \"options\": {{ \"noAny\": true }} to enable no-any.");

    Ok(())
}
