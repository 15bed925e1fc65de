//! Fields command - list the extraction catalog.

use console::style;

use csf_core::FieldCatalog;

pub fn run() -> anyhow::Result<()> {
    let catalog = FieldCatalog::builtin();
    let width = catalog
        .names()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(10);

    println!("{} {} fields, evaluated in order:\n", style("ℹ").blue(), catalog.len());

    for (i, rule) in catalog.rules().iter().enumerate() {
        let pad = width - rule.name().chars().count();
        println!(
            "  {:>2}. {}{}  [{} group{}]  {}",
            i + 1,
            style(rule.name()).bold(),
            " ".repeat(pad),
            rule.group_count(),
            if rule.group_count() == 1 { "" } else { "s" },
            style(rule.pattern().as_str()).dim()
        );
    }

    Ok(())
}
