// rowgrade/src/render.rs
//
// Console tables shared by the commands.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table as ConsoleTable};
use rowgrade_core::application::FileResult;
use rowgrade_core::{RowReport, Rulebook};

fn console_table(header: Vec<&str>) -> ConsoleTable {
    let mut table = ConsoleTable::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn limit(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn summary_table(files: &[FileResult]) -> ConsoleTable {
    let mut table = console_table(vec![
        "Catalog", "Rows", "Mean", "Min", "Grades", "Violations", "Below min",
    ]);
    for file in files {
        let s = &file.summary;
        table.add_row(vec![
            s.name.clone(),
            s.rows.to_string(),
            format!("{:.1}", s.mean_score),
            s.min_score.map_or_else(|| "-".to_string(), |m| format!("{:.1}", m)),
            s.grade_line(),
            s.total_violations().to_string(),
            s.below_threshold.len().to_string(),
        ]);
    }
    table
}

pub fn report_table(reports: &[RowReport]) -> ConsoleTable {
    let mut table = console_table(vec!["Row", "Score", "Grade", "Corrections"]);
    for (idx, report) in reports.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            format!("{:.1}", report.score),
            report.grade.to_string(),
            report.corrections(),
        ]);
    }
    table
}

pub fn rules_table(rulebook: &Rulebook) -> ConsoleTable {
    let mut table = console_table(vec![
        "Column",
        "Words",
        "Items",
        "Steps",
        "Words/Step",
        "Skills",
        "Hashtags",
        "Options",
        "Required",
        "Customer Facing",
    ]);
    for (column, rule) in rulebook.iter() {
        table.add_row(vec![
            column.to_string(),
            limit(rule.max_words()),
            limit(rule.max_items()),
            limit(rule.max_steps()),
            limit(rule.max_words_per_step()),
            limit(rule.max_skills()),
            limit(rule.max_hashtags()),
            rule.options().join(", "),
            if rule.is_required() { "yes" } else { "" }.to_string(),
            if rule.is_customer_facing() { "yes" } else { "" }.to_string(),
        ]);
    }
    table
}
