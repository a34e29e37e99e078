//! satorb animated orbit display - Terminal User Interface
//!
//! Real-time orbit animation using ratatui. App logic lives in
//! `satorb::tui::app`; this binary owns the terminal event loop.

#![forbid(unsafe_code)]

fn main() -> std::io::Result<()> {
    use satorb::config::VizConfig;
    use satorb::tui::app::OrbitApp;
    tui::run(OrbitApp::new(VizConfig::default()))
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
            canvas::{Canvas, Circle, Points},
            Block, Borders, Paragraph,
        },
        Frame, Terminal,
    };
    use satorb::tui::app::OrbitApp;
    use std::io;
    use std::time::{Duration, Instant};

    /// Run the TUI application.
    pub fn run(mut app: OrbitApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(33);

        loop {
            let start = Instant::now();
            terminal.draw(|f| ui(f, &app))?;

            let timeout = tick_rate.saturating_sub(start.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit {
                break;
            }

            app.update();
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn ui(f: &mut Frame, app: &OrbitApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(6),
            ])
            .split(f.area());

        render_title(f, chunks[0], app);
        render_orbit_canvas(f, chunks[1], app);
        render_status(f, chunks[2], app);
        render_info_panel(f, chunks[3], app);
    }

    fn render_title(f: &mut Frame, area: Rect, app: &OrbitApp) {
        let title = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " SATORB ORBIT VIEW ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                if app.running { "[RUNNING]" } else { "[PAUSED]" },
                Style::default().fg(if app.running {
                    Color::Green
                } else {
                    Color::Yellow
                }),
            ),
            Span::raw(" | "),
            Span::styled(
                format!(
                    "{} @ {:.0} km",
                    app.snapshot().classification.band.label(),
                    app.request().altitude().as_km()
                ),
                Style::default().fg(Color::White),
            ),
        ])])
        .block(Block::default().borders(Borders::ALL).title(
            "Controls: [Space] Run/Pause  [R] Reset  [↑↓] Altitude  [←→] Mass  [+/-] Speed  [1-5] Presets  [Q] Quit",
        ));
        f.render_widget(title, area);
    }

    fn render_orbit_canvas(f: &mut Frame, area: Rect, app: &OrbitApp) {
        let geometry = app.geometry();
        let bound = geometry.orbit_px.max(geometry.earth_px) * 1.2;
        let band_color = band_tui_color(app);

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Orbit View"))
            .x_bounds([-bound, bound])
            .y_bounds([-bound, bound])
            .paint(move |ctx| {
                // Planet
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: geometry.earth_px,
                    color: Color::Blue,
                });

                // Orbit path
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: geometry.orbit_px,
                    color: band_color,
                });

                // Trail
                if app.trail.points().len() > 1 {
                    ctx.draw(&Points {
                        coords: app.trail.points(),
                        color: Color::DarkGray,
                    });
                }

                // Satellite
                let angle = app.angle;
                let sat_x = geometry.orbit_px * angle.cos();
                let sat_y = geometry.orbit_px * angle.sin();
                ctx.print(
                    sat_x,
                    sat_y,
                    Span::styled("o", Style::default().fg(Color::Yellow)),
                );
            });

        f.render_widget(canvas, area);
    }

    fn render_status(f: &mut Frame, area: Rect, app: &OrbitApp) {
        let params = app.params();
        let status = Paragraph::new(vec![Line::from(vec![
            Span::styled("v: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.2} km/s", params.velocity_kms()),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("T: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.2} h", params.period_hours()),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("Frame: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", app.frame_count),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("Speed: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}x", app.speed),
                Style::default().fg(Color::Cyan),
            ),
        ])])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(status, area);
    }

    fn render_info_panel(f: &mut Frame, area: Rect, app: &OrbitApp) {
        let snap = app.snapshot();
        let params = &snap.parameters;
        let class = &snap.classification;

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let physics_widget = Paragraph::new(vec![
            Line::from(format!(
                "Mass {:.0} kg   Force {:.0} N",
                snap.mass_kg, params.centripetal_force_n
            )),
            Line::from(format!(
                "Energy {:.2e} J   ω {:.2e} rad/s",
                params.orbital_energy_j, params.angular_velocity_rad_s
            )),
            Line::from(format!(
                "Escape {:.2} km/s   Δv {:.2} km/s",
                params.escape_velocity_kms(),
                params.delta_v_ms / 1000.0
            )),
            Line::from(format!(
                "Scale {:.1}x   Orbit {:.0} px",
                snap.geometry.scale_ratio(),
                snap.geometry.orbit_px
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("Physics"));
        f.render_widget(physics_widget, chunks[0]);

        let class_widget = Paragraph::new(vec![
            Line::from(vec![Span::styled(
                class.full_name,
                Style::default().fg(band_tui_color(app)).add_modifier(Modifier::BOLD),
            )]),
            Line::from(class.description),
            Line::from(format!("e.g. {}", class.examples.join(", "))),
        ])
        .block(Block::default().borders(Borders::ALL).title("Classification"));
        f.render_widget(class_widget, chunks[1]);
    }

    /// Map the band badge color into the terminal palette.
    fn band_tui_color(app: &OrbitApp) -> Color {
        let c = app.snapshot().classification.band.color();
        Color::Rgb(c.r, c.g, c.b)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crossterm::event::KeyCode;
        use ratatui::backend::TestBackend;

        fn create_test_terminal() -> Terminal<TestBackend> {
            let backend = TestBackend::new(100, 40);
            Terminal::new(backend).expect("Failed to create test terminal")
        }

        #[test]
        fn test_ui_renders_without_panic() {
            let mut terminal = create_test_terminal();
            let app = OrbitApp::default();

            terminal
                .draw(|f| ui(f, &app))
                .expect("UI should render without panic");
        }

        #[test]
        fn test_ui_renders_while_running() {
            let mut terminal = create_test_terminal();
            let mut app = OrbitApp::default();
            app.handle_key(KeyCode::Char(' '));
            for _ in 0..30 {
                app.update();
            }

            terminal
                .draw(|f| ui(f, &app))
                .expect("UI should render with trail");
        }

        #[test]
        fn test_ui_renders_every_preset() {
            let mut terminal = create_test_terminal();
            for key in ['1', '2', '3', '4', '5'] {
                let mut app = OrbitApp::default();
                app.handle_key(KeyCode::Char(key));
                terminal
                    .draw(|f| ui(f, &app))
                    .expect("UI should render preset");
            }
        }

        #[test]
        fn test_full_ui_layout_writes_buffer() {
            let mut terminal = create_test_terminal();
            let app = OrbitApp::default();

            let result = terminal.draw(|f| ui(f, &app));
            assert!(result.is_ok());

            let buffer = terminal.backend().buffer();
            assert!(buffer.area.width > 0);
            assert!(buffer.area.height > 0);
        }
    }
}
