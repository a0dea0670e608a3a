//! Human-readable output formatting

use crate::action::{ActionInfo, FlagSpec};
use crate::engine::executor::{ExperimentResult, ResultData};

pub fn format_human(result: &ResultData) -> String {
    match result {
        ResultData::Experiment(experiment) => format_experiment(experiment),
        ResultData::Actions(actions) => {
            if actions.is_empty() {
                return "No actions registered".to_string();
            }
            let mut output = String::from("Actions\n-------\n");
            output.push_str(&format!(
                "{:<10} {:<10} {:<8} {}\n",
                "TARGET", "ACTION", "ALIASES", "DESCRIPTION"
            ));
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for action in actions {
                output.push_str(&format!(
                    "{:<10} {:<10} {:<8} {}\n",
                    action.target,
                    action.name,
                    if action.aliases.is_empty() {
                        "-".to_string()
                    } else {
                        action.aliases.join(",")
                    },
                    truncate(&action.short_desc, 40)
                ));
            }
            output
        }
        ResultData::Action(action) => format_action(action),
    }
}

fn format_experiment(experiment: &ExperimentResult) -> String {
    let verb = if experiment.destroy { "Destroy" } else { "Create" };
    let title = format!("{} {} {}", verb, experiment.target, experiment.action);
    let mut output = format!("{}\n{}\n", title, "-".repeat(title.len()));
    if experiment.dry_run {
        output.push_str("[DRY RUN] No helper was started\n\n");
    }
    output.push_str(&format!("Uid:     {}\n", experiment.uid));
    output.push_str(&format!("Code:    {}\n", experiment.response.code()));
    if !experiment.response.message().is_empty() {
        output.push_str(&format!("Message: {}\n", experiment.response.message()));
    }
    if let Some(result) = experiment.response.result().filter(|r| !r.is_empty()) {
        output.push_str(&format!("Result:  {}\n", result));
    }
    output
}

fn format_action(action: &ActionInfo) -> String {
    let title = format!("{} {}", action.target, action.name);
    let mut output = format!("{}\n{}\n", title, "-".repeat(title.len()));
    output.push_str(&format!("{}\n", action.long_desc.trim()));
    if !action.aliases.is_empty() {
        output.push_str(&format!("\nAliases:    {}\n", action.aliases.join(", ")));
    }
    output.push_str(&format!("Programs:   {}\n", action.programs.join(", ")));
    output.push_str(&format!("Categories: {}\n", action.categories.join(", ")));

    if !action.matchers.is_empty() {
        output.push_str("\nMatchers\n");
        for flag in &action.matchers {
            output.push_str(&format_flag(flag));
        }
    }
    if !action.flags.is_empty() {
        output.push_str("\nFlags\n");
        for flag in &action.flags {
            output.push_str(&format_flag(flag));
        }
    }
    if !action.example.is_empty() {
        output.push_str("\nExamples\n");
        for line in action.example.lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }
    output
}

fn format_flag(flag: &FlagSpec) -> String {
    let name = if flag.no_args {
        format!("--{}", flag.name)
    } else {
        format!("--{} <value>", flag.name)
    };
    let required = if flag.required { " (required)" } else { "" };
    format!("  {:<22} {}{}\n", name, flag.desc, required)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
