// Entry point and high-level CLI flow.
//
// - Option [1] loads the CSV and derives every province's metrics.
// - Option [2] renders the overview page for the current selection.
// - Option [3] renders the analysis page (island totals and scatter series).
// - Option [4] changes the province selection used by both pages.
// With `--page` a single page is rendered and the program exits.
mod args;

use args::{Args, Page};
use clap::Parser;
use log::{debug, info};
use provdash::error::{DashboardError, Result};
use provdash::output;
use provdash::regional::aggregate_by_island;
use provdash::reports;
use provdash::selection::{filter_rows, AppContext, Selection};
use provdash::util;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Read a single line of input after printing the common "Enter choice:" prompt.
///
/// Returns `None` once stdin is closed or unreadable.
fn read_choice() -> Option<String> {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    read_line_from(&mut io::stdin().lock())
}

fn read_line_from<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut buf = String::new();
    match reader.read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

/// Handle option [1]: load the CSV and derive metrics into `ctx`.
fn handle_load(ctx: &mut AppContext, args: &Args) -> Result<()> {
    let dataset = provdash::load_dataset(&args.input)?;
    println!(
        "Processing dataset... ({} provinces loaded)",
        util::format_int(dataset.rows.len())
    );
    if dataset.report.blank_rows_skipped > 0 {
        println!(
            "Note: {} blank rows skipped.",
            util::format_int(dataset.report.blank_rows_skipped)
        );
    }
    println!();
    ctx.dataset = Some(dataset);
    Ok(())
}

fn export_path(args: &Args, file: &str) -> std::path::PathBuf {
    Path::new(&args.out_dir).join(file)
}

/// Handle option [2]: KPI cards, delta KPIs and the province detail table.
fn handle_home(ctx: &AppContext, args: &Args) -> Result<()> {
    let dataset = ctx.dataset.as_ref().ok_or(DashboardError::NoData)?;
    let filtered = filter_rows(&dataset.rows, &ctx.selection);
    let page = reports::generate_overview(&filtered, &ctx.selection);

    println!("Pemantauan Analisis Kondisi Sosial Ekonomi Wilayah di Indonesia");
    println!("(Filter Provinsi: {})\n", ctx.selection);
    output::preview_table_rows(&page.kpis, page.kpis.len());
    if !page.deltas.is_empty() {
        println!("Delta Metrics\n");
        output::preview_table_rows(&page.deltas, page.deltas.len());
    }
    match &ctx.selection {
        Selection::All => println!("Detail Provinsi\n"),
        Selection::Province(name) => println!("Detail Provinsi - {}\n", name),
    }
    output::preview_table_rows(&page.table, args.preview_rows);

    if !args.no_export {
        let file = export_path(args, "derived_metrics.csv");
        output::write_csv(&file, &filtered)?;
        println!("(Full table exported to {})\n", file.display());
    }
    Ok(())
}

/// Handle option [3]: island totals and the two scatter series, all over
/// the whole dataset.
fn handle_analysis(ctx: &AppContext, args: &Args) -> Result<()> {
    let dataset = ctx.dataset.as_ref().ok_or(DashboardError::NoData)?;
    let regional = aggregate_by_island(&dataset.rows);
    let page = reports::generate_analysis(&dataset.rows, &regional);

    println!("Analisis Lanjutan Provinsi Indonesia\n");
    println!("PTN vs PTS per Pulau\n");
    output::preview_table_rows(&regional.totals, regional.totals.len());
    if !regional.unknown_provinces.is_empty() {
        println!(
            "Note: provinces without an island group: {}\n",
            regional.unknown_provinces.join(", ")
        );
    }
    println!(
        "APBN vs Rasio Penduduk Miskin: {} points",
        page.budget_vs_poverty.len()
    );
    println!(
        "Realisasi Anggaran Pendidikan vs Rata2 Tingkat Penyelesaian: {} points\n",
        page.education_vs_completion.len()
    );

    if !args.no_export {
        output::write_csv(export_path(args, "island_totals.csv"), &page.island_bars)?;
        output::write_csv(
            export_path(args, "provinces_by_island.csv"),
            &regional.tagged_rows(),
        )?;
        output::write_csv(
            export_path(args, "scatter_budget_poverty.csv"),
            &page.budget_vs_poverty,
        )?;
        output::write_csv(
            export_path(args, "scatter_education_completion.csv"),
            &page.education_vs_completion,
        )?;
        let summary = reports::generate_summary(&dataset.rows, &regional);
        output::write_json(export_path(args, "summary.json"), &summary)?;
        println!("Outputs saved to {}\n", args.out_dir);
    }
    Ok(())
}

/// Handle option [4]: pick a province by number, 0 for all.
fn handle_select(ctx: &mut AppContext) -> Result<()> {
    let names: Vec<String> = ctx
        .province_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    if names.is_empty() {
        return Err(DashboardError::NoData);
    }
    println!("[0] All");
    for (i, name) in names.iter().enumerate() {
        println!("[{}] {}", i + 1, name);
    }
    let Some(choice) = read_choice() else {
        return Ok(());
    };
    match choice.parse::<usize>() {
        Ok(0) => ctx.selection = Selection::All,
        Ok(n) if n <= names.len() => ctx.selection = Selection::Province(names[n - 1].clone()),
        _ => {
            println!("Invalid choice. Selection unchanged.\n");
            return Ok(());
        }
    }
    debug!("selection set to {}", ctx.selection);
    println!("Selected: {}\n", ctx.selection);
    Ok(())
}

fn report(res: Result<()>) {
    if let Err(e) = res {
        match e {
            DashboardError::NoData => {
                println!("Error: No data loaded. Please load the CSV file first (option 1).\n")
            }
            e => eprintln!("Error: {}\n", e),
        }
    }
}

fn run_page(ctx: &mut AppContext, args: &Args, page: Page) -> Result<()> {
    handle_load(ctx, args)?;
    match page {
        Page::Home => handle_home(ctx, args),
        Page::Analysis => handle_analysis(ctx, args),
    }
}

fn main() {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut ctx = AppContext {
        dataset: None,
        selection: args.province.parse().unwrap_or_default(),
    };
    info!("input file: {}", args.input);

    if let Some(page) = args.page {
        if let Err(e) = run_page(&mut ctx, &args, page) {
            if matches!(e, DashboardError::Io(_)) {
                eprintln!("File '{}' not found or unreadable: {}", args.input, e);
            } else {
                eprintln!("Error: {}", e);
            }
            std::process::exit(1);
        }
        return;
    }

    loop {
        println!("Select Page:");
        println!("[1] Load the file");
        println!("[2] Home Dashboard");
        println!("[3] Page Analysis");
        println!("[4] Select Province (current: {})", ctx.selection);
        println!("[0] Exit\n");
        let Some(choice) = read_choice() else {
            println!("\nExiting the program.");
            break;
        };
        match choice.as_str() {
            "1" => report(handle_load(&mut ctx, &args)),
            "2" => {
                println!();
                report(handle_home(&ctx, &args));
            }
            "3" => {
                println!();
                report(handle_analysis(&ctx, &args));
            }
            "4" => report(handle_select(&mut ctx)),
            "0" => {
                println!("Exiting the program.");
                break;
            }
            _ => println!("Invalid choice. Please enter 0-4.\n"),
        }
    }
}
