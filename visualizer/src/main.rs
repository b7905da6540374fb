use iced::{
    mouse,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, scrollable, text, text_input, Column, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Task, Theme,
};
use wavecore::math::{SignalStats, TimeBase};
use wavecore::prelude::{SynthConfig, WaveResult};
use wavecore::synthesis::{synthesize, FrequencySet, SignalBank};
use wavecore::telemetry::LogManager;

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Viewer::boot, Viewer::update, Viewer::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Viewer) -> String {
    "wavesum viewer".into()
}

fn application_theme(_: &Viewer) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Viewer {
    config: ConfigForm,
    plot: Option<PlotData>,
    status: String,
    history: Vec<String>,
    logger: LogManager,
}

#[derive(Debug, Clone)]
enum Message {
    ConfigFieldChanged(ConfigField, String),
    Render,
}

#[derive(Debug, Clone, Copy)]
enum ConfigField {
    Frequencies,
    Duration,
    SamplingRate,
}

/// Everything the panels need from one synthesis run.
#[derive(Debug, Clone)]
struct PlotData {
    times: Vec<f64>,
    bank: SignalBank,
}

impl PlotData {
    fn compute(config: &SynthConfig) -> WaveResult<Self> {
        let time_base: TimeBase = config.time_base()?;
        let frequencies = config.frequency_set()?;
        let bank = synthesize(&time_base, frequencies.as_slice());
        Ok(Self {
            times: time_base.as_slice().to_vec(),
            bank,
        })
    }
}

impl Viewer {
    fn boot() -> (Self, Task<Message>) {
        let mut viewer = Viewer {
            config: ConfigForm::default(),
            plot: None,
            status: "Press Render to synthesize.".into(),
            history: Vec::new(),
            logger: LogManager::new("viewer"),
        };
        viewer.render();
        (viewer, Task::none())
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigFieldChanged(field, value) => {
                state.config.update_field(field, value);
            }
            Message::Render => state.render(),
        }
        Task::none()
    }

    /// Replaces the plot on success; keeps the previous one on bad input.
    fn render(&mut self) {
        match self.config.to_config().and_then(|config| PlotData::compute(&config)) {
            Ok(plot) => {
                self.logger.record_bank(&plot.bank);
                self.status = format!(
                    "{} signals x {} samples",
                    plot.bank.signal_count(),
                    plot.bank.sample_count()
                );
                self.push_history(format!("Rendered {:?} Hz", plot.bank.frequencies()));
                self.plot = Some(plot);
            }
            Err(err) => {
                self.status = format!("Input error: {err}");
                self.push_history(format!("Rejected: {err}"));
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let config_column = column![
            text("Signals").size(26),
            text_input("Frequencies (Hz), e.g. 10, 7, 5", &state.config.frequencies)
                .on_input(|value| Message::ConfigFieldChanged(ConfigField::Frequencies, value))
                .on_submit(Message::Render)
                .padding(6),
            text_input("Duration (s)", &state.config.duration)
                .on_input(|value| Message::ConfigFieldChanged(ConfigField::Duration, value))
                .padding(6),
            text_input("Sampling rate (Hz)", &state.config.sampling_rate)
                .on_input(|value| Message::ConfigFieldChanged(ConfigField::SamplingRate, value))
                .padding(6),
            button("Render").on_press(Message::Render).padding(10),
            text(&state.status).size(14),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(160.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(320.0));

        let panels = match &state.plot {
            Some(plot) => {
                let joint_panel = column![
                    text("joint").size(16),
                    waveform_canvas(&plot.times, plot.bank.joint()),
                ]
                .spacing(4);
                plot.bank
                    .signals()
                    .into_iter()
                    .fold(Column::new().spacing(10), |col, signal| {
                        col.push(
                            column![
                                text(format!("{} Hz", signal.frequency_hz)).size(16),
                                waveform_canvas(&plot.times, &signal.samples),
                            ]
                            .spacing(4),
                        )
                    })
                    .push(joint_panel)
            }
            None => Column::new().push(text("Nothing rendered yet").size(14)),
        };

        let plot_column = column![text("Waveforms").size(26), scrollable(panels)]
            .spacing(10)
            .padding(16)
            .width(Length::Fill);

        let layout = row![config_column, plot_column]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

fn waveform_canvas(times: &[f64], samples: &[f64]) -> Element<'static, Message> {
    Canvas::new(Waveform::new(times, samples))
        .width(Length::Fill)
        .height(Length::Fixed(140.0))
        .into()
}

#[derive(Debug, Clone)]
struct ConfigForm {
    frequencies: String,
    duration: String,
    sampling_rate: String,
}

impl Default for ConfigForm {
    fn default() -> Self {
        let defaults = SynthConfig::default();
        Self {
            frequencies: FrequencySet::default()
                .iter()
                .map(|frequency| frequency.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            duration: defaults.duration_secs.to_string(),
            sampling_rate: defaults.sampling_rate_hz.to_string(),
        }
    }
}

impl ConfigForm {
    fn update_field(&mut self, field: ConfigField, value: String) {
        match field {
            ConfigField::Frequencies => self.frequencies = value,
            ConfigField::Duration => self.duration = value,
            ConfigField::SamplingRate => self.sampling_rate = value,
        }
    }

    fn to_config(&self) -> WaveResult<SynthConfig> {
        let frequencies = FrequencySet::parse(&self.frequencies)?;
        let duration_secs = parse_number(&self.duration, "duration")?;
        let sampling_rate_hz = parse_number(&self.sampling_rate, "sampling rate")?;
        Ok(SynthConfig {
            duration_secs,
            sampling_rate_hz,
            frequencies_hz: Some(frequencies.into()),
        })
    }
}

fn parse_number(value: &str, name: &str) -> WaveResult<f64> {
    value.trim().parse().map_err(|_| {
        wavecore::WaveError::InvalidTimeBase(format!("{} {:?} is not a number", name, value))
    })
}

#[derive(Debug, Clone)]
struct Waveform {
    points: Vec<(f32, f32)>,
    low: f32,
    high: f32,
}

impl Waveform {
    fn new(times: &[f64], samples: &[f64]) -> Self {
        let stats = SignalStats::from_samples(samples);
        let (low, high) = if (stats.max - stats.min).abs() < 1e-12 {
            (stats.min - 1.0, stats.max + 1.0)
        } else {
            (stats.min, stats.max)
        };
        Self {
            points: times
                .iter()
                .zip(samples)
                .map(|(&t, &v)| (t as f32, v as f32))
                .collect(),
            low: low as f32,
            high: high as f32,
        }
    }
}

impl canvas::Program<Message> for Waveform {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        let zero_y = bounds.height - (-self.low / (self.high - self.low)) * bounds.height;
        if (0.0..=bounds.height).contains(&zero_y) {
            let axis = Path::line(Point::new(0.0, zero_y), Point::new(bounds.width, zero_y));
            frame.stroke(
                &axis,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(Color::from_rgb(0.3, 0.3, 0.35)),
            );
        }

        if self.points.len() > 1 {
            let t_start = self.points[0].0;
            let t_end = self.points[self.points.len() - 1].0;
            let t_span = (t_end - t_start).max(f32::EPSILON);
            let range = self.high - self.low;
            let path = Path::new(|builder| {
                for (i, &(t, value)) in self.points.iter().enumerate() {
                    let x = (t - t_start) / t_span * bounds.width;
                    let normalized = (value - self.low) / range;
                    let y = bounds.height - normalized * bounds.height;
                    if i == 0 {
                        builder.move_to(Point::new(x, y));
                    } else {
                        builder.line_to(Point::new(x, y));
                    }
                }
            });

            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(Color::from_rgb(0.18, 0.72, 0.89)),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecore::WaveError;

    #[test]
    fn default_form_produces_the_classic_run() {
        let config = ConfigForm::default().to_config().unwrap();
        assert_eq!(config.frequencies_hz, Some(vec![10.0, 7.0, 5.0]));
        assert_eq!(config.duration_secs, 5.0);
        assert_eq!(config.sampling_rate_hz, 1000.0);
    }

    #[test]
    fn form_rejects_empty_frequencies() {
        let mut form = ConfigForm::default();
        form.update_field(ConfigField::Frequencies, " ".into());
        assert_eq!(form.to_config(), Err(WaveError::EmptyFrequencySet));
    }

    #[test]
    fn form_rejects_non_numeric_duration() {
        let mut form = ConfigForm::default();
        form.update_field(ConfigField::Duration, "soon".into());
        assert!(matches!(
            form.to_config(),
            Err(WaveError::InvalidTimeBase(_))
        ));
    }

    #[test]
    fn plot_data_shares_one_time_base() {
        let mut form = ConfigForm::default();
        form.update_field(ConfigField::Frequencies, "1, 2".into());
        form.update_field(ConfigField::Duration, "1".into());
        form.update_field(ConfigField::SamplingRate, "8".into());
        let plot = PlotData::compute(&form.to_config().unwrap()).unwrap();
        assert_eq!(plot.times.len(), 8);
        assert_eq!(plot.bank.signal_count(), 2);
        assert_eq!(plot.bank.joint().len(), plot.times.len());
    }

    #[test]
    fn flat_waveform_gets_a_unit_band() {
        let waveform = Waveform::new(&[0.0, 0.5], &[0.0, 0.0]);
        assert_eq!((waveform.low, waveform.high), (-1.0, 1.0));
        assert_eq!(waveform.points.len(), 2);
    }
}
