use anyhow::Context;
use clap::Parser;
use render::export::PlotModel;
use render::plot::PlotRenderer;
use std::path::PathBuf;
use workflow::config::{Overrides, WorkflowConfig};
use workflow::runner::{Runner, WorkflowResult};

mod render;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Plot sine waves and their joint signal")]
struct Args {
    /// Signal frequencies in Hz, comma separated (defaults to 10,7,5)
    #[arg(value_delimiter = ',', allow_negative_numbers = true)]
    frequencies: Vec<f64>,
    /// Load run settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Length of the time base in seconds
    #[arg(long)]
    duration: Option<f64>,
    /// Samples per second
    #[arg(long)]
    sampling_rate: Option<f64>,
    /// Write the stacked plot to this PNG file
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Write the signals as JSON to this file
    #[arg(long)]
    export: Option<PathBuf>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            duration_secs: self.duration,
            sampling_rate_hz: self.sampling_rate,
            frequencies_hz: (!self.frequencies.is_empty()).then(|| self.frequencies.clone()),
            plot: self.plot.clone(),
            export: self.export.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

fn print_summary(result: &WorkflowResult) {
    println!(
        "Synthesized {} signals x {} samples",
        result.bank.signal_count(),
        result.bank.sample_count()
    );
    for (frequency, stats) in result.bank.frequencies().iter().zip(&result.signal_stats) {
        println!(
            "  {:>10} Hz  peak {:.3}  rms {:.3}",
            frequency, stats.peak, stats.rms
        );
    }
    println!(
        "  {:>13}  peak {:.3}  rms {:.3}  range [{:.3}, {:.3}]",
        "joint",
        result.joint_stats.peak,
        result.joint_stats.rms,
        result.joint_stats.min,
        result.joint_stats.max
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = if let Some(path) = args.config.as_ref() {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::default()
    };
    let workflow_config = base.apply_overrides(args.overrides());

    let runner = Runner::new(workflow_config.clone());
    let result = runner.execute()?;
    print_summary(&result);

    if let Some(path) = workflow_config.plot.as_ref() {
        PlotRenderer::new(workflow_config.width, workflow_config.height)
            .render(&result, path)
            .with_context(|| format!("rendering plot {}", path.display()))?;
        println!("Plot written to {}", path.display());
    }
    if let Some(path) = workflow_config.export.as_ref() {
        PlotModel::from_result(&result).write_json(path)?;
        println!("Signals exported to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_frequencies_replace_the_file_list() {
        let args = Args::try_parse_from(["wavesum", "3,-1", "--duration", "2"]).unwrap();
        let base = WorkflowConfig {
            frequencies_hz: Some(vec![8.0]),
            ..Default::default()
        };
        let cfg = base.apply_overrides(args.overrides());
        assert_eq!(cfg.frequencies_hz, Some(vec![3.0, -1.0]));
        assert_eq!(cfg.duration_secs, 2.0);
        assert_eq!(cfg.sampling_rate_hz, 1000.0);
    }

    #[test]
    fn missing_positionals_keep_file_or_default_list() {
        let args = Args::try_parse_from(["wavesum"]).unwrap();
        assert_eq!(args.overrides().frequencies_hz, None);

        let from_file = WorkflowConfig {
            frequencies_hz: Some(vec![8.0, 2.0]),
            ..Default::default()
        }
        .apply_overrides(args.overrides());
        assert_eq!(from_file.frequencies_hz, Some(vec![8.0, 2.0]));

        let defaults = WorkflowConfig::default().apply_overrides(args.overrides());
        let result = Runner::new(defaults).execute().unwrap();
        assert_eq!(result.bank.frequencies(), &[10.0, 7.0, 5.0]);
    }

    #[test]
    fn malformed_positional_frequency_is_a_parse_error() {
        assert!(Args::try_parse_from(["wavesum", "10,abc"]).is_err());
    }
}
