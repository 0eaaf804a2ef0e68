use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crystnet::archive::{Archive, Classification};
use crystnet::config::SYMMETRY_SEARCH_BUDGET;
use crystnet::io::NetSource;
use crystnet::pipeline::{NetReport, Pipeline};
use crystnet::Result;

#[derive(Parser)]
#[command(name = "crystnet")]
#[command(about = "Canonical keys and archive identification for periodic nets")]
#[command(version)]
struct Cli {
    /// Net source file in PERIODIC_GRAPH format
    input: PathBuf,

    /// Reference archive to identify structures against (repeatable)
    #[arg(short, long)]
    archive: Vec<PathBuf>,

    /// Write an archive of all first-seen structures
    #[arg(short, long)]
    output_archive: Option<PathBuf>,

    /// Number of coordination shells to report
    #[arg(short, long, default_value = "10")]
    shells: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    info!("Starting crystnet v{}", crystnet::VERSION);

    let mut pipeline = Pipeline::new(cli.shells, SYMMETRY_SEARCH_BUDGET);
    for path in &cli.archive {
        // A broken reference archive makes every lookup meaningless.
        let archive = Archive::load(path)?;
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        pipeline.add_archive(&label, archive);
    }

    let file = File::open(&cli.input)?;
    let mut source = NetSource::new(BufReader::new(file));
    let mut count = 0usize;
    let mut skipped = 0usize;

    while let Some(parsed) = source.parse_next() {
        count += 1;
        let outcome = parsed
            .and_then(|block| pipeline.process(count, block.name.as_deref(), &block.net));
        match outcome {
            Ok(report) => print_report(&report),
            Err(e) if e.is_recoverable() => {
                error!("net {} skipped: {}", count, e);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    if skipped > 0 {
        info!("{} of {} nets skipped", skipped, count);
    }

    if let Some(path) = &cli.output_archive {
        let mut out = BufWriter::new(File::create(path)?);
        pipeline.new_entries().write(&mut out)?;
        info!(
            "wrote {} entries to {}",
            pipeline.new_entries().len(),
            path.display()
        );
    }
    Ok(())
}

fn print_report(report: &NetReport) {
    println!();
    println!("Structure #{} - \"{}\"", report.index, report.name);
    if report.reduced {
        println!("   Input cell was not primitive; reduced to the minimal image.");
    }
    println!(
        "   {} node(s) and {} edge(s) in the repeat unit.",
        report.node_count, report.edge_count
    );
    println!(
        "   Symmetry group of order {}; point group {} ({}).",
        report.group_order, report.point_group, report.point_group.system
    );

    println!("   Coordination sequences:");
    for orbit in &report.orbits {
        let shells: Vec<String> = orbit.sequence.iter().map(|n| n.to_string()).collect();
        println!(
            "      node {} (orbit size {}): {}",
            orbit.representative + 1,
            orbit.size,
            shells.join(" ")
        );
    }
    println!("   TD10: {:.2}", report.topological_density);

    let (a, b, c) = report.embedding.lattice.lattice_parameters();
    let (alpha, beta, gamma) = report.embedding.lattice.lattice_angles();
    println!(
        "   Barycentric cell: a = {:.5}, b = {:.5}, c = {:.5}, volume = {:.5}",
        a,
        b,
        c,
        report.embedding.lattice.cell_volume()
    );
    println!(
        "   Cell angles: alpha = {:.3}, beta = {:.3}, gamma = {:.3} (degrees)",
        alpha.to_degrees(),
        beta.to_degrees(),
        gamma.to_degrees()
    );
    println!("   Barycentric positions:");
    for (i, p) in report.embedding.positions.iter().enumerate() {
        println!("      node {}: {:.5} {:.5} {:.5}", i + 1, p.x, p.y, p.z);
    }

    match &report.archive_match {
        Some((label, name)) => println!("   Identified as \"{}\" in archive {}.", name, label),
        None => println!("   Structure not present in any given archive."),
    }
    match &report.classification {
        Classification::New { assigned } => {
            println!("   First occurrence in this run; recorded as \"{}\".", assigned)
        }
        Classification::Duplicate { of } => {
            println!("   Structure already seen in this run: duplicate of \"{}\".", of)
        }
    }
    println!("   Invariant key: {}", report.key);
}
