use crate::{
    error::Result,
    plot::{Plot, Shape},
};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use std::io::{self, Write};
use tui::{
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
    Terminal,
};

impl Widget for &Plot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let datasets = self
            .series
            .iter()
            .map(|series| {
                let (graph_type, marker) = match series.style.shape {
                    Shape::Line => (GraphType::Line, Marker::Braille),
                    Shape::Scatter => (GraphType::Scatter, Marker::Dot),
                };

                Dataset::default()
                    .name(series.name.as_str())
                    .marker(marker)
                    .graph_type(graph_type)
                    .style(Style::default().fg(series.style.color))
                    .data(&series.points)
            })
            .collect::<Vec<Dataset>>();

        let x_bounds = self.x_bounds();
        let y_bounds = self.y_bounds();

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(Span::styled(
                        self.title.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL),
            )
            .x_axis(
                Axis::default()
                    .title("x")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(x_bounds)
                    .labels(axis_labels(x_bounds)),
            )
            .y_axis(
                Axis::default()
                    .title("y")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(y_bounds)
                    .labels(axis_labels(y_bounds)),
            );

        chart.render(area, buf);
    }
}

fn axis_labels<'a>([lo, hi]: [f64; 2]) -> Vec<Span<'a>> {
    [lo, (lo + hi) / 2.0, hi]
        .iter()
        .map(|value| {
            Span::styled(
                // to two decimal places of precision
                format!("{:.2}", value),
                Style::default().add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

/// Takes over the terminal and draws `plot` until `q`, esc or enter is pressed.
pub fn show(plot: &Plot) -> Result<()> {
    info!("showing plot {:?} with {} series", plot.title, plot.series.len());

    // dropped last, after the terminal
    let _raw = RawMode::enable()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run(&mut terminal, plot)?;

    Ok(())
}

/// Holds the terminal in raw mode and puts it back when dropped, however
/// [`show`] exits.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = restore(&mut io::stdout(), disable_raw_mode) {
            warn!("failed to restore the terminal: {}", err);
        }
    }
}

/// Runs every restore step, even after one fails, and reports the first failure.
fn restore<W, F>(out: &mut W, disable_raw: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let raw = disable_raw();
    let screen = execute!(out, LeaveAlternateScreen, Show);

    raw.and(screen)
}

fn run<B: Backend>(terminal: &mut Terminal<B>, plot: &Plot) -> io::Result<()> {
    loop {
        terminal.draw(|f| f.render_widget(plot, f.size()))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => return Ok(()),
                _ => {}
            }
        }
    }
}
