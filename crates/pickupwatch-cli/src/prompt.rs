//! Interactive variant selection.

use colored::Colorize;
use inquire::{Confirm, Select};
use pickupwatch_core::{Catalog, CatalogModel, SelectionSet, VariantSelection};

/// What happened to one model/color/capacity pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChoiceOutcome {
    Added(VariantSelection),
    /// Already selected; the earlier entry is kept.
    Duplicate(VariantSelection),
    /// The model is not sold in that color/capacity combination.
    NotSold,
}

/// Resolves a pick against `model` and records it in `selections`.
pub(crate) fn record_choice(
    selections: &mut SelectionSet,
    model: &CatalogModel,
    color: &str,
    capacity: &str,
) -> ChoiceOutcome {
    let Some(part) = model.part_for(color, capacity) else {
        return ChoiceOutcome::NotSold;
    };
    let selection = model.selection_for(part);
    if selections.insert(selection.clone()) {
        ChoiceOutcome::Added(selection)
    } else {
        ChoiceOutcome::Duplicate(selection)
    }
}

/// Walks the user through model → color → capacity until they stop adding.
///
/// # Errors
///
/// Returns an error if the catalog is empty, the terminal is not
/// interactive, or the user cancels before choosing anything.
pub(crate) fn prompt_selections(catalog: &Catalog) -> anyhow::Result<SelectionSet> {
    if catalog.is_empty() {
        anyhow::bail!("catalog has no models to choose from");
    }

    let mut selections = SelectionSet::new();
    loop {
        let names: Vec<&str> = catalog.models.iter().map(|m| m.name.as_str()).collect();
        let name = Select::new("Model:", names).prompt()?;
        let model = catalog
            .model(name)
            .ok_or_else(|| anyhow::anyhow!("model '{name}' vanished from the catalog"))?;

        let color = Select::new("Color:", model.colors()).prompt()?;
        let capacity = Select::new("Capacity:", model.capacities()).prompt()?;

        match record_choice(&mut selections, model, color, capacity) {
            ChoiceOutcome::Added(selection) => {
                println!("{} {}", "added".green(), selection.label());
            }
            ChoiceOutcome::Duplicate(selection) => {
                println!("{} {} is already selected", "skipped".yellow(), selection.label());
            }
            ChoiceOutcome::NotSold => {
                println!(
                    "{} {} is not sold in {capacity} {color}",
                    "skipped".yellow(),
                    model.name
                );
            }
        }

        let more = Confirm::new("Add another model?")
            .with_default(false)
            .prompt()?;
        if !more {
            break;
        }
    }

    if selections.is_empty() {
        anyhow::bail!("no variants selected");
    }
    Ok(selections)
}

/// Asks whether to show the running stats line each round.
///
/// # Errors
///
/// Returns an error if the prompt cannot be shown or is cancelled.
pub(crate) fn prompt_show_stats() -> anyhow::Result<bool> {
    Ok(Confirm::new("Show check count and running time?")
        .with_default(false)
        .prompt()?)
}

#[cfg(test)]
mod tests {
    use pickupwatch_core::{CatalogPart, VariantId};

    use super::*;

    fn pro() -> CatalogModel {
        let part = |color: &str, capacity: &str, id: &str| CatalogPart {
            color: color.to_string(),
            capacity: capacity.to_string(),
            part_number: VariantId::new(id).unwrap(),
        };
        CatalogModel {
            name: "iPhone 16 Pro".to_string(),
            parts: vec![
                part("White Titanium", "256GB", "MYNF3ZP/A"),
                part("Black Titanium", "128GB", "MYMC3ZP/A"),
            ],
        }
    }

    #[test]
    fn first_pick_is_added_with_label() {
        let mut set = SelectionSet::new();
        let outcome = record_choice(&mut set, &pro(), "White Titanium", "256GB");

        let ChoiceOutcome::Added(selection) = outcome else {
            panic!("expected Added, got {outcome:?}");
        };
        assert_eq!(selection.id().as_str(), "MYNF3ZP/A");
        assert_eq!(selection.label(), "iPhone 16 Pro 256GB White Titanium");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn repeated_pick_is_rejected_and_first_kept() {
        let mut set = SelectionSet::new();
        record_choice(&mut set, &pro(), "White Titanium", "256GB");
        let outcome = record_choice(&mut set, &pro(), "White Titanium", "256GB");

        assert!(matches!(outcome, ChoiceOutcome::Duplicate(_)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice()[0].id().as_str(), "MYNF3ZP/A");
    }

    #[test]
    fn unsold_combination_adds_nothing() {
        let mut set = SelectionSet::new();
        let outcome = record_choice(&mut set, &pro(), "White Titanium", "128GB");

        assert_eq!(outcome, ChoiceOutcome::NotSold);
        assert!(set.is_empty());
    }

    #[test]
    fn empty_catalog_is_rejected_before_prompting() {
        let err = prompt_selections(&Catalog::default()).unwrap_err();
        assert!(err.to_string().contains("no models"));
    }
}
