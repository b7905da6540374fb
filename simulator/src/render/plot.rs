use crate::workflow::runner::WorkflowResult;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use wavecore::math::SignalStats;
use wavecore::synthesis::SignalBank;

const FLAT_EPSILON: f64 = 1e-12;

/// Draws the signals of a run as vertically stacked PNG panels.
pub struct PlotRenderer {
    width: u32,
    height: u32,
}

fn draw_err<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow::anyhow!("plot rendering failed: {}", err)
}

/// Panel captions: one per signal in input order, then the joint signal.
pub fn panel_titles(bank: &SignalBank) -> Vec<String> {
    bank.frequencies()
        .iter()
        .map(|frequency| format!("{} Hz", frequency))
        .chain(std::iter::once("joint".to_string()))
        .collect()
}

/// Y axis range with 5% headroom; flat signals get a unit band around their value.
pub fn value_range(stats: &SignalStats) -> Range<f64> {
    let spread = stats.max - stats.min;
    if spread.abs() < FLAT_EPSILON {
        return (stats.min - 1.0)..(stats.max + 1.0);
    }
    let pad = spread * 0.05;
    (stats.min - pad)..(stats.max + pad)
}

impl PlotRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn render(&self, result: &WorkflowResult, path: &Path) -> anyhow::Result<()> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let titles = panel_titles(&result.bank);
        let panels = root.split_evenly((titles.len(), 1));
        let times = result.time_base.as_slice();
        let x_range = 0.0..result.time_base.span().max(FLAT_EPSILON);

        for (index, signal) in result.bank.signals().iter().enumerate() {
            let stats = result
                .signal_stats
                .get(index)
                .copied()
                .unwrap_or_else(|| SignalStats::from_samples(&signal.samples));
            self.draw_panel(
                &panels[index],
                &titles[index],
                times,
                &signal.samples,
                x_range.clone(),
                value_range(&stats),
                false,
            )?;
        }

        let last = titles.len() - 1;
        self.draw_panel(
            &panels[last],
            &titles[last],
            times,
            result.bank.joint(),
            x_range,
            value_range(&result.joint_stats),
            true,
        )?;

        root.present().map_err(draw_err)?;
        log::info!("wrote {} panels to {}", titles.len(), path.display());
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_panel<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        title: &str,
        times: &[f64],
        samples: &[f64],
        x_range: Range<f64>,
        y_range: Range<f64>,
        label_time_axis: bool,
    ) -> anyhow::Result<()>
    where
        DB::ErrorType: 'static,
    {
        let mut chart = ChartBuilder::on(area)
            .caption(title, ("sans-serif", 16))
            .margin(8)
            .x_label_area_size(if label_time_axis { 36 } else { 20 })
            .y_label_area_size(48)
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_err)?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh().y_labels(3);
        if label_time_axis {
            mesh.x_desc("time (s)");
        }
        mesh.draw().map_err(draw_err)?;

        chart
            .draw_series(LineSeries::new(
                times.iter().copied().zip(samples.iter().copied()),
                BLACK.stroke_width(2),
            ))
            .map_err(draw_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecore::math::TimeBase;
    use wavecore::synthesis::synthesize;

    #[test]
    fn titles_list_signals_then_joint() {
        let bank = synthesize(&TimeBase::linspace(0.0, 1.0, 4), &[10.0, 2.5]);
        assert_eq!(panel_titles(&bank), vec!["10 Hz", "2.5 Hz", "joint"]);
    }

    #[test]
    fn value_range_pads_varying_signals() {
        let stats = SignalStats::from_samples(&[-1.0, 1.0]);
        let range = value_range(&stats);
        assert!((range.start + 1.1).abs() < 1e-12);
        assert!((range.end - 1.1).abs() < 1e-12);
    }

    #[test]
    fn value_range_widens_flat_signals() {
        let stats = SignalStats::from_samples(&[0.0, 0.0, 0.0]);
        assert_eq!(value_range(&stats), -1.0..1.0);
    }
}
