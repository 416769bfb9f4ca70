use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rowfit::build_layout_with_config;
use rowfit::io::export::export_layout;
use rowfit::io::import::import_instance;
use rowfit::io::svg::layout_to_svg;
use rowfit_cli::config::RowfitConfig;
use rowfit_cli::generate::random_instance;
use rowfit_cli::io;
use rowfit_cli::io::cli::Cli;
use rowfit_cli::io::output::{ExtSolution, RowfitOutput};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RowfitConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed RowfitConfig: {config:?}");

    let (ext_instance, stem) = match (&args.input_file, args.random_items) {
        (Some(input_file), _) => {
            let stem = input_file
                .file_stem()
                .and_then(|s| s.to_str())
                .context("input file has no valid name")?
                .to_string();
            (io::read_instance(input_file)?, stem)
        }
        (None, Some(n_items)) => {
            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            let instance = random_instance(n_items, &mut rng);
            let stem = instance.name.clone();
            (instance, stem)
        }
        (None, None) => unreachable!("clap requires either an input file or a random item count"),
    };

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {:?}", args.solution_folder)
        })?;
    }

    let (items, options) = import_instance(&ext_instance)?;
    info!(
        "[MAIN] Laying out {} items in a {}x{} container (gap {})",
        items.len().separate_with_commas(),
        options.container_width,
        options.container_height,
        options.gap
    );

    let start = Instant::now();
    let layout = build_layout_with_config(&items, &options, &config.layout_config);
    let run_time = start.elapsed();
    info!("[MAIN] layout took {:.3} ms", run_time.as_secs_f64() * 1000.0);

    match &layout {
        Some(layout) => info!(
            "[MAIN] {} rows, fill ratio: {:.3}%",
            layout.rows.len(),
            layout.fill_ratio() * 100.0
        ),
        None => warn!(
            "[MAIN] no feasible layout exists for instance {}",
            ext_instance.name
        ),
    }

    let solution_folder = args.solution_folder.as_path();
    if let Some(layout) = &layout {
        let svg_path = solution_folder.join(format!("sol_{stem}.svg"));
        let svg = layout_to_svg(layout, config.svg_draw_options, &ext_instance.name);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    let output = RowfitOutput {
        solution: ExtSolution {
            layout: layout.as_ref().map(export_layout),
            run_time_ms: run_time.as_millis() as u64,
        },
        instance: ext_instance,
        config,
    };
    let solution_path = solution_folder.join(format!("sol_{stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
