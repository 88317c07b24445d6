use anyhow::{Context, Result, anyhow};
use serde_json::json;
use tracing::{info_span, warn};

use area_model::{SiblingTypePolicy, TypeStubPolicy};

use area_cli::dataset::{Dataset, load_dataset};
use area_cli::pipeline::{check, code_strings, trace_leaf, walk};
use area_cli::summary::{print_check, print_levels, print_path};

use crate::cli::{DatasetArgs, LevelsArgs, PathArgs, SiblingTypesArg};

/// Load the dataset and apply command-line overrides to its options.
fn prepare(args: &DatasetArgs) -> Result<Dataset> {
    let mut dataset = load_dataset(&args.dataset)?;
    if let Some(policy) = args.sibling_types {
        dataset.options.sibling_types = match policy {
            SiblingTypesArg::Reject => SiblingTypePolicy::Reject,
            SiblingTypesArg::Warn => SiblingTypePolicy::Warn,
        };
    }
    if args.ignore_type_stubs {
        dataset.options.type_stubs = TypeStubPolicy::Ignore;
    }
    Ok(dataset)
}

/// Returns whether the dataset has errors.
pub fn run_check(args: &DatasetArgs) -> Result<bool> {
    let dataset = prepare(args)?;
    let outcome = check(&dataset);
    print_check(&outcome);
    Ok(outcome.has_errors())
}

pub fn run_levels(args: &LevelsArgs) -> Result<()> {
    let mut dataset = prepare(&args.dataset)?;
    if args.auto_advance {
        dataset.options.auto_advance = true;
    }
    let span = info_span!("levels", tenant = %dataset.label());
    let _guard = span.enter();
    let outcome = walk(&dataset, &args.select)?;
    if args.json {
        let document = json!({
            "levels": outcome.levels,
            "path": outcome.path,
            "leafCode": outcome.path.leaf_code_str(),
            "autoSelected": code_strings(&outcome.auto_selected),
        });
        let text = serde_json::to_string_pretty(&document).context("serialize levels")?;
        println!("{text}");
    } else {
        print_levels(&outcome, args.dataset.local_names);
    }
    Ok(())
}

pub fn run_path(args: &PathArgs) -> Result<()> {
    let dataset = prepare(&args.dataset)?;
    let span = info_span!("path", tenant = %dataset.label(), leaf = %args.leaf);
    let _guard = span.enter();
    let outcome = trace_leaf(&dataset, &args.leaf).map_err(|error| {
        if error.is_not_found() {
            warn!(%error, "Stored leaf is not in the hierarchy");
        }
        anyhow!(error)
    })?;
    if args.json {
        let document = json!({
            "leafCode": outcome.leaf,
            "selections": code_strings(&outcome.selections),
            "path": outcome.path,
        });
        let text = serde_json::to_string_pretty(&document).context("serialize path")?;
        println!("{text}");
    } else {
        print_path(&outcome);
    }
    Ok(())
}
