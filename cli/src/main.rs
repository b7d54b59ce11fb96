//! glyphdown CLI - recover styled Markdown from positioned glyph dumps

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use glyphdown::{
    duplicate_anchors, pages_from_json, ConvertOptions, LayoutOptions, Page, PageConverter,
    PageSet, StyleSheet,
};

#[derive(Parser)]
#[command(name = "glyphdown")]
#[command(version)]
#[command(about = "Recover styled Markdown from positioned glyph dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a glyph dump to Markdown
    #[command(alias = "md")]
    Convert {
        /// Input page dump (JSON array of pages)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Style sheet file (font markup classes and symbol map)
        #[arg(short, long, value_name = "FILE")]
        styles: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Pages to skip (e.g., "2,112-202,326-")
        #[arg(long)]
        skip_pages: Option<String>,

        /// Binding margin width in points
        #[arg(long)]
        margin_width: Option<f64>,

        /// Footer rule minimum width in points
        #[arg(long)]
        rule_min_width: Option<f64>,

        /// Paragraph gap threshold in points
        #[arg(long)]
        paragraph_gap: Option<f64>,
    },

    /// Show page dump statistics
    Info {
        /// Input page dump (JSON array of pages)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            styles,
            output,
            skip_pages,
            margin_width,
            rule_min_width,
            paragraph_gap,
        } => cmd_convert(
            &input,
            &styles,
            output.as_deref(),
            skip_pages.as_deref(),
            margin_width,
            rule_min_width,
            paragraph_gap,
        ),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_pages(input: &Path) -> Result<Vec<Page>, Box<dyn std::error::Error>> {
    let data = fs::read_to_string(input)?;
    Ok(pages_from_json(&data)?)
}

fn cmd_convert(
    input: &Path,
    styles: &Path,
    output: Option<&Path>,
    skip_pages: Option<&str>,
    margin_width: Option<f64>,
    rule_min_width: Option<f64>,
    paragraph_gap: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = load_pages(input)?;
    let style_sheet = StyleSheet::from_json(&fs::read_to_string(styles)?)?;

    let mut layout = LayoutOptions::new();
    if let Some(width) = margin_width {
        layout = layout.with_margin_width(width);
    }
    if let Some(width) = rule_min_width {
        layout = layout.with_rule_min_width(width);
    }
    if let Some(gap) = paragraph_gap {
        layout = layout.with_paragraph_gap(gap);
    }

    let mut options = ConvertOptions::new()
        .with_styles(style_sheet)
        .with_layout(layout);
    if let Some(spec) = skip_pages {
        options = options.with_skip_pages(PageSet::parse(spec)?);
    }

    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let converter = PageConverter::new(options);
    let mut markdown = String::new();
    for page in &pages {
        pb.set_message(format!("page {}", page.number));
        markdown.push_str(&converter.convert_page(page)?);
        pb.inc(1);
    }
    pb.finish_with_message("done");

    for anchor in duplicate_anchors(&markdown) {
        eprintln!(
            "{}: duplicate anchor {{#{}}} in output",
            "Warning".yellow().bold(),
            anchor
        );
    }

    match output {
        Some(path) => {
            fs::write(path, &markdown)?;
            println!(
                "{} {} pages -> {}",
                "Converted".green().bold(),
                pages.len(),
                path.display()
            );
        }
        None => print!("{markdown}"),
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let pages = load_pages(input)?;

    let glyphs: usize = pages.iter().map(Page::glyph_count).sum();
    let lines: usize = pages.iter().map(|p| p.drawn_lines().count()).sum();
    let rects: usize = pages.iter().map(|p| p.drawn_rects().count()).sum();
    let fonts: BTreeSet<&str> = pages
        .iter()
        .flat_map(|p| p.glyphs().map(|g| g.font_name.as_str()))
        .collect();

    println!("{}", "Page Dump Information".bold());
    println!("  {}: {}", "Pages".cyan(), pages.len());
    println!("  {}: {}", "Glyphs".cyan(), glyphs);
    println!("  {}: {}", "Painted lines".cyan(), lines);
    println!("  {}: {}", "Painted rects".cyan(), rects);
    println!("  {}: {}", "Fonts".cyan(), fonts.len());
    for font in fonts {
        println!("    {font}");
    }

    Ok(())
}
