use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
};
use sommaire_config::{BandConfig, Config};
use sommaire_engine::{
    ContentSource, IntersectionSample, NormalizedDocument, NullWatch, ReadingNavigator,
    RenderNode, StaticCatalog, ViewportBand, io, normalize,
};
use std::{env, io::stdout, path::PathBuf, process};

fn viewport_band(band: &BandConfig) -> ViewportBand {
    ViewportBand {
        top_fraction: band.top_fraction,
        bottom_fraction: band.bottom_fraction,
        thresholds: band.thresholds.clone(),
    }
}

/// One open article: rendered lines plus the navigator tracking it.
struct OpenView {
    title: String,
    doc: NormalizedDocument,
    lines: Vec<String>,
    /// Line index of each navigable heading, document order.
    heading_lines: Vec<(String, usize)>,
    navigator: ReadingNavigator<NullWatch>,
    scroll: usize,
}

impl OpenView {
    fn max_scroll(&self, view_height: usize) -> usize {
        self.lines.len().saturating_sub(view_height)
    }
}

struct App {
    catalog: StaticCatalog,
    post_list_state: ListState,
    open: Option<OpenView>,
    band: ViewportBand,
    /// Article panel height from the last draw, drives the synthetic
    /// viewport geometry.
    view_height: usize,
}

impl App {
    fn new(content_path: PathBuf, band: ViewportBand) -> Result<Self> {
        let catalog = io::load_catalog(&content_path)?;

        let mut app = Self {
            catalog,
            post_list_state: ListState::default(),
            open: None,
            band,
            view_height: 24,
        };

        if !app.catalog.is_empty() {
            app.post_list_state.select(Some(0));
            app.open_selected_post();
        }

        Ok(app)
    }

    fn next_post(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(i) => (i + 1) % self.catalog.len(),
            None => 0,
        };
        self.post_list_state.select(Some(i));
        self.open_selected_post();
    }

    fn previous_post(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.catalog.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.post_list_state.select(Some(i));
        self.open_selected_post();
    }

    fn open_selected_post(&mut self) {
        // Dropping the previous view unmounts its navigator.
        if let Some(mut view) = self.open.take() {
            view.navigator.unmount();
        }

        let Some(index) = self.post_list_state.selected() else {
            return;
        };
        let Some(post) = self.catalog.posts().get(index) else {
            return;
        };

        let doc = normalize(&post.body);
        let (lines, heading_lines) = render_article_lines(&doc);

        let mut navigator = ReadingNavigator::with_band(NullWatch, self.band.clone());
        navigator.mount(&doc.toc);

        let mut view = OpenView {
            title: post.title.clone(),
            doc,
            lines,
            heading_lines,
            navigator,
            scroll: 0,
        };
        sync_navigator(&mut view, self.view_height);
        self.open = Some(view);
    }

    fn scroll_by(&mut self, delta: isize) {
        let view_height = self.view_height;
        if let Some(view) = self.open.as_mut() {
            let max = view.max_scroll(view_height);
            view.scroll = view
                .scroll
                .saturating_add_signed(delta)
                .min(max);
            sync_navigator(view, view_height);
        }
    }
}

/// Flatten render nodes into display lines, recording which line each
/// navigable heading lands on.
fn render_article_lines(doc: &NormalizedDocument) -> (Vec<String>, Vec<(String, usize)>) {
    let mut lines = Vec::new();
    let mut heading_lines = Vec::new();

    for node in &doc.nodes {
        match node {
            RenderNode::Heading { level, text, id } => {
                if !id.is_empty() {
                    heading_lines.push((id.clone(), lines.len()));
                }
                let prefix = "#".repeat(level.as_u8() as usize);
                lines.push(format!("{} {}", prefix, text));
                lines.push(String::new());
            }
            RenderNode::Paragraph { text } => {
                lines.push(text.clone());
                lines.push(String::new());
            }
            RenderNode::Quote { text } => {
                for line in text.lines() {
                    lines.push(format!("> {}", line));
                }
                lines.push(String::new());
            }
            RenderNode::List { items } => {
                for item in items {
                    lines.push(format!("• {}", item));
                }
                lines.push(String::new());
            }
            RenderNode::Code { code, lang } => {
                lines.push(format!("```{}", lang.as_deref().unwrap_or("")));
                lines.extend(code.lines().map(|s| s.to_string()));
                lines.push("```".to_string());
                lines.push(String::new());
            }
            RenderNode::Image { url, alt } => {
                lines.push(format!("[image: {}]", alt.as_deref().unwrap_or(url)));
                lines.push(String::new());
            }
        }
    }

    (lines, heading_lines)
}

/// Feed the navigator the scroll offset and synthesized heading
/// visibility for the current window. A heading "intersects" when its
/// line sits inside the active band of the visible rows.
fn sync_navigator(view: &mut OpenView, view_height: usize) {
    let max_scroll = view.max_scroll(view_height);
    view.navigator.on_scroll(view.scroll as f64, max_scroll as f64);

    let band = view.navigator.band().clone();
    let band_top = view.scroll + (view_height as f32 * band.top_fraction) as usize;
    let band_len = (view_height as f32 * (1.0 - band.top_fraction - band.bottom_fraction)) as usize;
    let band_bottom = band_top + band_len.max(1);

    let samples: Vec<IntersectionSample> = view
        .heading_lines
        .iter()
        .map(|(id, line)| {
            let in_band = *line >= band_top && *line < band_bottom;
            IntersectionSample {
                id: id.clone(),
                ratio: if in_band { 1.0 } else { 0.0 },
                is_intersecting: in_band,
            }
        })
        .collect();
    view.navigator.on_viewport(&samples);
}

fn main() -> Result<()> {
    // Determine content path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let content_path;
    let from_config;
    let mut band = ViewportBand::default();

    if args.len() == 2 {
        content_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                content_path = config.content_path;
                band = viewport_band(&config.band);
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No content path provided and no config file found");
                eprintln!("Usage: {} <content-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <content-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [content-folder-path]", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_content_dir(&content_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Content path '{}'{} is invalid: {e}",
            content_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(content_path, band)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down => app.next_post(),
                KeyCode::Up => app.previous_post(),
                KeyCode::Char('j') => app.scroll_by(1),
                KeyCode::Char('k') => app.scroll_by(-1),
                KeyCode::PageDown | KeyCode::Char(' ') => {
                    app.scroll_by(app.view_height as isize)
                }
                KeyCode::PageUp => app.scroll_by(-(app.view_height as isize)),
                KeyCode::Home | KeyCode::Char('g') => app.scroll_by(isize::MIN / 2),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    // Article panel height minus borders drives the synthetic viewport.
    app.view_height = columns[1].height.saturating_sub(2) as usize;

    // Post list panel
    let post_items: Vec<ListItem> = app
        .catalog
        .posts()
        .iter()
        .map(|post| {
            let date = post.published_at.as_deref().unwrap_or("");
            ListItem::new(vec![Line::from(vec![
                Span::raw(post.title.clone()),
                Span::styled(format!("  {date}"), Style::default().fg(Color::DarkGray)),
            ])])
        })
        .collect();

    let posts_list = List::new(post_items)
        .block(Block::default().borders(Borders::ALL).title("Posts"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(posts_list, columns[0], &mut app.post_list_state);

    // Article panel
    let (article_lines, title, toc_lines, progress) = match app.open.as_ref() {
        Some(view) => {
            let visible: Vec<Line> = view
                .lines
                .iter()
                .skip(view.scroll)
                .take(app.view_height)
                .map(|line| Line::from(Span::raw(line.clone())))
                .collect();

            let active_id = view.navigator.state().active_id.clone();
            let toc: Vec<Line> = view
                .doc
                .toc
                .iter()
                .map(|entry| {
                    let style = if Some(entry.id.as_str()) == active_id.as_deref() {
                        Style::default().fg(Color::Black).bg(Color::Cyan)
                    } else {
                        Style::default()
                    };
                    Line::from(Span::styled(entry.title.clone(), style))
                })
                .collect();

            (
                visible,
                view.title.clone(),
                toc,
                view.navigator.state().progress_percent,
            )
        }
        None => (
            vec![Line::from("Select a post to start reading")],
            "Article".to_string(),
            Vec::new(),
            0.0,
        ),
    };

    let article = Paragraph::new(article_lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(article, columns[1]);

    let toc_panel = Paragraph::new(toc_lines)
        .block(Block::default().borders(Borders::ALL).title("Sommaire"));
    f.render_widget(toc_panel, columns[2]);

    // Reading progress
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress.round().clamp(0.0, 100.0) as u16);
    f.render_widget(gauge, rows[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/↓: Switch post | "),
        Span::raw("j/k: Scroll | "),
        Span::raw("PgUp/PgDn: Page | "),
        Span::raw("g: Top"),
    ]));
    f.render_widget(help, rows[2]);
}
