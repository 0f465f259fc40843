use anyhow::{Context, Result};
use bitram_markdown_config::{Config, OutputFormat};
use bitram_markdown_engine::{BlockNode, InlineNode, html, io, render};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut format_flag = None;
    let mut path_arg: Option<PathBuf> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--html" => format_flag = Some(OutputFormat::Html),
            "--text" => format_flag = Some(OutputFormat::Text),
            other if other.starts_with('-') => {
                eprintln!("Error: Unknown option '{other}'");
                usage_and_exit(&args[0]);
            }
            other => {
                if path_arg.is_some() {
                    usage_and_exit(&args[0]);
                }
                path_arg = Some(PathBuf::from(other));
            }
        }
    }
    let Some(path) = path_arg else {
        usage_and_exit(&args[0]);
    };

    // Flag beats config file; absent config falls back to the preview.
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let format = format_flag.unwrap_or(config.format);

    let body = io::read_post(&path)
        .with_context(|| format!("failed to read post '{}'", path.display()))?;
    let blocks = render(&body);
    let title = config
        .page_title
        .clone()
        .unwrap_or_else(|| title_from_path(&path));

    match format {
        OutputFormat::Html => println!("{}", html::to_document(&blocks, &title)),
        OutputFormat::Text => {
            for line in layout_blocks(&blocks) {
                println!("{line}");
            }
        }
        OutputFormat::Preview => run_preview(&title, layout_blocks(&blocks))?,
    }

    Ok(())
}

fn usage_and_exit(program: &str) -> ! {
    eprintln!("Usage: {program} [--html|--text] <post-file>");
    process::exit(1);
}

fn title_from_path(path: &std::path::Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Post")
        .to_string()
}

/// Maps rendered blocks to display lines for the text and preview modes.
fn layout_blocks(blocks: &[BlockNode]) -> Vec<String> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            BlockNode::Heading { level, inline } => {
                let prefix = "#".repeat(*level as usize);
                lines.push(format!("{} {}", prefix, inline_text(inline)));
                lines.push(String::new());
            }
            BlockNode::Paragraph { lines: para_lines } => {
                for line in para_lines {
                    lines.push(inline_text(line));
                }
                lines.push(String::new());
            }
            BlockNode::CodeFence {
                language,
                lines: code_lines,
            } => {
                lines.push(format!("```{}", language.as_deref().unwrap_or("")));
                lines.extend(code_lines.iter().cloned());
                lines.push("```".to_string());
                lines.push(String::new());
            }
            BlockNode::BlockQuote { lines: quoted } => {
                for line in quoted {
                    lines.push(format!("> {}", inline_text(line)));
                }
                lines.push(String::new());
            }
            BlockNode::BulletList { items } => {
                for item in items {
                    lines.push(format!("• {}", inline_text(item)));
                }
                lines.push(String::new());
            }
            BlockNode::NumberedList { items } => {
                for (i, item) in items.iter().enumerate() {
                    lines.push(format!("{}. {}", i + 1, inline_text(item)));
                }
                lines.push(String::new());
            }
            BlockNode::ThematicBreak => {
                lines.push("---".to_string());
                lines.push(String::new());
            }
        }
    }

    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

fn inline_text(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            InlineNode::Text(t) => out.push_str(t),
            InlineNode::Strong { children } => out.push_str(&inline_text(children)),
            InlineNode::Emphasis { text } => out.push_str(text),
            InlineNode::CodeSpan { text } => {
                out.push('`');
                out.push_str(text);
                out.push('`');
            }
            InlineNode::Link { label, href } => {
                out.push_str(label);
                out.push_str(" <");
                out.push_str(href);
                out.push('>');
            }
            InlineNode::Image { alt, src } => {
                out.push('[');
                out.push_str(alt);
                out.push_str("] <");
                out.push_str(src);
                out.push('>');
            }
        }
    }
    out
}

struct App {
    title: String,
    lines: Vec<String>,
    scroll: u16,
}

impl App {
    fn new(title: String, lines: Vec<String>) -> Self {
        Self {
            title,
            lines,
            scroll: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        self.lines.len().saturating_sub(1) as u16
    }

    fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.max_scroll());
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn scroll_top(&mut self) {
        self.scroll = 0;
    }

    fn scroll_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}

fn run_preview(title: &str, lines: Vec<String>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(title.to_string(), lines);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Home | KeyCode::Char('g') => app.scroll_top(),
                KeyCode::End | KeyCode::Char('G') => app.scroll_bottom(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let content_text: Vec<Line> = app
        .lines
        .iter()
        .map(|line| Line::from(Span::raw(line.clone())))
        .collect();

    let content = Paragraph::new(content_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.title.clone()),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("g/G: Top/Bottom"),
    ]));
    f.render_widget(help, chunks[1]);
}
