use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use titanic_features::dataset::load_table_csv;
use titanic_features::model::LogisticClassifier;
use titanic_features::preprocessing::{FittedTitanicPipeline, FittedTransformer, TitanicPipeline, Transformer};
use titanic_features::serving::{PredictionRequest, Predictor};
use titanic_features::PipelineConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "titanic-features")]
#[command(about = "Fit, apply and serve the Titanic feature pipeline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit the pipeline on a reference CSV and save it
    Fit {
        /// Training CSV with the raw passenger columns
        #[arg(long)]
        train: PathBuf,
        /// Where to write the fitted pipeline
        #[arg(long, default_value = "pipeline.bin")]
        output: PathBuf,
        /// Optional TOML pipeline configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Transform a CSV with a fitted pipeline and write the features as CSV
    Transform {
        #[arg(long, default_value = "pipeline.bin")]
        pipeline: PathBuf,
        #[arg(long)]
        input: PathBuf,
        /// Output CSV (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Score one passenger given as JSON
    Predict {
        #[arg(long, default_value = "pipeline.bin")]
        pipeline: PathBuf,
        /// Saved logistic classifier coefficients
        #[arg(long)]
        model: PathBuf,
        /// Request JSON, e.g. '{"pclass": 2, "name": "...", "sex": "female"}'
        #[arg(long)]
        request: String,
    },
}

#[derive(Serialize)]
struct PredictResponse {
    input_proba: (f64, f64),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fit(train: PathBuf, output: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => PipelineConfig::from_toml_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    let reference = load_table_csv(&train)
        .with_context(|| format!("reading {}", train.display()))?;
    let fitted = TitanicPipeline::from_config(&config).fit(&reference)?;
    fitted
        .save_to_file(&output)
        .with_context(|| format!("writing {}", output.display()))?;

    info!(features = fitted.output_columns().len(), "pipeline ready");
    Ok(())
}

fn transform(pipeline: PathBuf, input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let fitted = FittedTitanicPipeline::load_from_file(&pipeline)?;
    let query = load_table_csv(&input).with_context(|| format!("reading {}", input.display()))?;
    let features = fitted.transform(&query)?.to_array2()?;

    let sink: Box<dyn std::io::Write> = match &output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(fitted.output_columns())?;
    for row in features.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;

    info!(rows = features.nrows(), "wrote features");
    Ok(())
}

fn predict(pipeline: PathBuf, model: PathBuf, request: String) -> Result<()> {
    let fitted = FittedTitanicPipeline::load_from_file(&pipeline)?;
    let classifier = LogisticClassifier::load_from_file(&model)?;
    let request: PredictionRequest =
        serde_json::from_str(&request).context("parsing request JSON")?;

    let predictor = Predictor::new(fitted, classifier)?;
    let input_proba = predictor.predict(&request)?;
    println!("{}", serde_json::to_string(&PredictResponse { input_proba })?);
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fit {
            train,
            output,
            config,
        } => fit(train, output, config),
        Commands::Transform {
            pipeline,
            input,
            output,
        } => transform(pipeline, input, output),
        Commands::Predict {
            pipeline,
            model,
            request,
        } => predict(pipeline, model, request),
    }
}
