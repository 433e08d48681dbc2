#![warn(clippy::all)]

//! Styles a GeoJSON layer the way the dashboard map does and prints it back
//! with `style` and `tooltip` properties on every feature and the layer's
//! legend as a top-level `legend` member.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::Parser;
    use egms_map_style::{
        annotate_velocity_groups, embed_styles, point_layer, polygon_layer, render_points,
        render_polygons, Metric, Result, StyleSettings,
    };
    use geojson::FeatureCollection;
    use std::path::PathBuf;

    /// Style EGMS measurement points or ADA polygons for the ground-motion map
    #[derive(Parser, Debug)]
    #[command(name = "egms-map-style")]
    #[command(version)]
    #[command(about, long_about = None)]
    pub struct Args {
        /// GeoJSON FeatureCollection to style
        #[arg(value_name = "INPUT")]
        pub input: PathBuf,

        /// Metric to color by, e.g. mean_velocity, label_prob, stable_prop,
        /// ada_major_class or ada_major_subclass
        #[arg(value_name = "METRIC")]
        pub metric: Metric,

        /// Treat the input as measurement points instead of ADA polygons
        #[arg(long)]
        pub points: bool,

        /// JSON file with style settings; defaults are used when omitted
        #[arg(long, value_name = "FILE")]
        pub settings: Option<PathBuf>,
    }

    pub fn run(args: Args) -> Result<String> {
        let settings = match &args.settings {
            Some(path) => StyleSettings::from_path(path)?,
            None => StyleSettings::default(),
        };

        let raw = std::fs::read_to_string(&args.input)?;
        let mut collection: FeatureCollection = raw.parse()?;
        log::info!(
            "Read {} features from {}",
            collection.features.len(),
            args.input.display()
        );
        annotate_velocity_groups(&mut collection);

        let (rendered, legend) = if args.points {
            let layer = point_layer(args.metric, &settings)?;
            (render_points(&collection, &layer.hideout)?, layer.legend)
        } else {
            let layer = polygon_layer(args.metric, &settings);
            (render_polygons(&collection, &layer.hideout)?, layer.legend)
        };
        embed_styles(&mut collection, &rendered)?;

        log::debug!("Attaching legend {:?}", legend.title());
        collection
            .foreign_members
            .get_or_insert_with(Default::default)
            .insert("legend".to_string(), serde_json::to_value(&legend)?);

        Ok(serde_json::to_string_pretty(&collection)?)
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();

    let args = cli::Args::parse();
    match cli::run(args) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}
