//! satorb control panel - Terminal User Interface
//!
//! Parameter entry panel with the orbit animation running on a
//! background thread. App logic lives in `satorb::tui::panel`; this
//! binary owns the terminal event loop.

#![forbid(unsafe_code)]

fn main() -> std::io::Result<()> {
    use satorb::config::VizConfig;
    use satorb::tui::panel::ControlPanel;
    tui::run(ControlPanel::new(VizConfig::default()))
}

mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{
            canvas::{Canvas, Circle},
            Block, Borders, Paragraph,
        },
        Frame, Terminal,
    };
    use satorb::orbit::presets::PRESETS;
    use satorb::tui::panel::{ControlPanel, Field};
    use std::io;
    use std::time::{Duration, Instant};

    /// Run the TUI application.
    pub fn run(mut panel: ControlPanel) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(33);

        loop {
            let start = Instant::now();
            terminal.draw(|f| ui(f, &panel))?;

            let timeout = tick_rate.saturating_sub(start.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        panel.handle_key(key.code);
                    }
                }
            }

            if panel.should_quit {
                break;
            }
        }

        panel.shutdown();

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn ui(f: &mut Frame, panel: &ControlPanel) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(42), Constraint::Min(20)])
            .split(f.area());

        render_panel(f, chunks[0], panel);
        render_orbit(f, chunks[1], panel);
    }

    fn render_panel(f: &mut Frame, area: Rect, panel: &ControlPanel) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(8),
                Constraint::Length(2 + PRESETS.len() as u16),
                Constraint::Min(3),
            ])
            .split(area);

        render_inputs(f, chunks[0], panel);
        render_results(f, chunks[1], panel);
        render_presets(f, chunks[2]);
        render_controls(f, chunks[3], panel);
    }

    fn render_inputs(f: &mut Frame, area: Rect, panel: &ControlPanel) {
        let focused = |field: Field| {
            if panel.focus == field {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            }
        };

        let inputs = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Mass (kg):     ", Style::default().fg(Color::Gray)),
                Span::styled(panel.mass_input.clone(), focused(Field::Mass)),
            ]),
            Line::from(vec![
                Span::styled("Altitude (km): ", Style::default().fg(Color::Gray)),
                Span::styled(panel.altitude_input.clone(), focused(Field::Altitude)),
            ]),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Satellite Parameters"),
        );
        f.render_widget(inputs, area);
    }

    fn render_results(f: &mut Frame, area: Rect, panel: &ControlPanel) {
        let snap = panel.snapshot();
        let params = &snap.parameters;

        let results = Paragraph::new(vec![
            Line::from(format!("Velocity:  {:.2} km/s", params.velocity_kms())),
            Line::from(format!("Period:    {:.2} h", params.period_hours())),
            Line::from(format!("Force:     {:.0} N", params.centripetal_force_n)),
            Line::from(format!("Escape v:  {:.2} km/s", params.escape_velocity_kms())),
            Line::from(vec![
                Span::raw("Orbit:     "),
                Span::styled(
                    snap.classification.full_name,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(snap.classification.description),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Calculated Results"),
        );
        f.render_widget(results, area);
    }

    fn render_presets(f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for preset in PRESETS {
            lines.push(Line::from(format!(
                "[{}] {} - {:.0} km",
                preset.name.chars().next().unwrap_or('?').to_ascii_lowercase(),
                preset.name,
                preset.altitude_km
            )));
        }

        let presets = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Presets"));
        f.render_widget(presets, area);
    }

    fn render_controls(f: &mut Frame, area: Rect, panel: &ControlPanel) {
        let running = panel.snapshot().running;
        let controls = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Simulation: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    if running { "RUNNING" } else { "STOPPED" },
                    Style::default().fg(if running { Color::Green } else { Color::Red }),
                ),
            ]),
            Line::from("[Tab] Field  [Enter] Apply"),
            Line::from("[Space] Start/Stop  [Esc] Quit"),
        ])
        .block(Block::default().borders(Borders::ALL).title("Controls"));
        f.render_widget(controls, area);
    }

    fn render_orbit(f: &mut Frame, area: Rect, panel: &ControlPanel) {
        let snap = panel.snapshot();
        let geometry = snap.geometry;
        let bound = geometry.orbit_px.max(geometry.earth_px) * 1.2;
        let band = snap.classification.band;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Live Orbit - {}", band.label())),
            )
            .x_bounds([-bound, bound])
            .y_bounds([-bound, bound])
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: geometry.earth_px,
                    color: Color::Blue,
                });
                let c = band.color();
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: geometry.orbit_px,
                    color: Color::Rgb(c.r, c.g, c.b),
                });

                let sat_x = geometry.orbit_px * snap.angle_rad.cos();
                let sat_y = geometry.orbit_px * snap.angle_rad.sin();
                ctx.print(
                    sat_x,
                    sat_y,
                    Span::styled("o", Style::default().fg(Color::Yellow)),
                );
            });

        f.render_widget(canvas, area);
    }

}
