use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};

use prodfeed_cli::pipeline::{ImportOptions, run_import};
use prodfeed_import::{ProductFeedRules, RuleSet};
use prodfeed_model::{ProductRecord, TargetRecord};

use crate::cli::{ImportArgs, ReportFormatArg};
use crate::summary::{
    align_column, apply_table_style, dim_cell, header_cell, print_report, print_report_json,
};

pub fn run_import_command(args: &ImportArgs) -> Result<()> {
    let options = ImportOptions {
        file: args.file.clone(),
        store: args.store.clone(),
        test_mode: args.test,
    };
    let report = run_import(&options)?;
    match args.format {
        ReportFormatArg::Text => print_report(&report),
        ReportFormatArg::Json => print_report_json(&report)?,
    }
    Ok(())
}

pub fn run_mapping_command() -> Result<()> {
    let rules = ProductFeedRules::new().context("configure product feed rules")?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Position"),
        header_cell("Field"),
        header_cell("Required"),
        header_cell("Max length"),
        header_cell("Sign"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (position, field) in rules.mapping().entries() {
        let constraint = ProductRecord::fields()
            .iter()
            .find(|constraint| constraint.field == field);
        table.add_row(vec![
            Cell::new(position),
            Cell::new(field),
            match constraint {
                Some(c) if c.required => Cell::new("yes"),
                _ => dim_cell("-"),
            },
            match constraint.and_then(|c| c.max_length) {
                Some(max) => Cell::new(max),
                None => dim_cell("-"),
            },
            match constraint {
                Some(c) if c.non_negative => Cell::new(">= 0"),
                _ => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
    Ok(())
}
