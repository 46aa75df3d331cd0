use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use indoc::indoc;
use ratatui::Frame;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::{Terminal, layout::Rect};

use panel_dock::components::RotatingNotification;
use panel_dock::geometry::Length;
use panel_dock::panel::{BorderEdge, ChatPanel, HomePanel, LeftButton, LeftPanel};
use panel_dock::state::LayoutState;
use panel_dock::tracing_sub;
use panel_dock::ui::{self, DragSession, HitRegions, PanelKind, PanelRects};

const HELP: &str = indoc! {"
    controls:
      mouse        drag a panel border to resize it freehand
      double-click a border to snap between docked and expanded
      [A] [!] [S]  open and close the left side panel
      [□]          expand and collapse the home launcher
      q / ctrl-c   quit
"};

#[derive(Parser, Debug)]
#[command(
    name = "panel-dock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Adaptive docking-panel demo shell",
    after_help = HELP
)]
struct Cli {
    /// Input poll interval.
    #[arg(long = "tick", value_name = "MS", default_value_t = 33)]
    tick_ms: u64,

    /// How often the chat bar's notification line rotates.
    #[arg(long = "rotate", value_name = "MS", default_value_t = 3000)]
    rotate_ms: u64,
}

/// Demo stand-in for the host's draggable-surface handle: the layout only
/// stores and returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SurfaceId(u8);

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init_default();

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Duration::from_millis(cli.rotate_ms));
    let result = app.run(&mut terminal, Duration::from_millis(cli.tick_ms));

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

struct App {
    layout: LayoutState<SurfaceId>,
    notification: RotatingNotification,
    hits: HitRegions,
    rects: PanelRects,
    drag: Option<DragSession>,
}

impl App {
    fn new(rotate_interval: Duration) -> Self {
        // Cell-scale geometry; the library defaults are sized for px-based
        // hosts and would swallow a typical terminal.
        let home = HomePanel::new(
            Length::Px(14),
            Length::Px(5),
            Length::Percent(100),
            Length::Percent(100),
        );
        let left = LeftPanel::new(Length::Px(24), Length::Px(40));
        let chat = ChatPanel::new(Length::Px(3), Length::Vh(70));
        let mut layout = LayoutState::new(home, left, chat);
        layout.attach_home_surface(SurfaceId(0));
        layout.attach_left_surface(SurfaceId(1));
        layout.attach_chat_surface(SurfaceId(2));
        let notification = RotatingNotification::with_interval(
            vec![
                "Welcome to the chat!".to_string(),
                "Please be respectful to others".to_string(),
                "No spamming or trolling".to_string(),
                "Have fun!".to_string(),
            ],
            rotate_interval,
        );
        Self {
            layout,
            notification,
            hits: HitRegions::default(),
            rects: PanelRects::default(),
            drag: None,
        }
    }

    fn run<B>(&mut self, terminal: &mut Terminal<B>, tick: Duration) -> io::Result<()>
    where
        B: ratatui::backend::Backend,
        io::Error: From<<B as ratatui::backend::Backend>::Error>,
    {
        loop {
            terminal.draw(|frame| self.render(frame))?;
            if event::poll(tick)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let ctrl_c = key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL);
                        if key.code == KeyCode::Char('q') || ctrl_c {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            } else {
                self.notification
                    .tick(Instant::now(), self.layout.chat().is_expanded());
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let snap = self.layout.snapshot();
        self.rects = ui::compute_rects(frame.area(), &snap, self.drag.as_ref());
        let status = "panel-dock · q quits";
        let area = frame.area();
        ui::safe_set_string(
            frame.buffer_mut(),
            area,
            area.x.saturating_add(area.width.saturating_sub(status.len() as u16 + 1)),
            area.y,
            status,
            Style::default(),
        );
        ui::render_shell(
            frame,
            &self.rects,
            &snap,
            self.notification.current(),
            &mut self.hits,
        );
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.on_press(mouse.column, mouse.row);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(session) = self.drag.as_mut() {
                    session.update(mouse.column, mouse.row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(session) = self.drag.take() {
                    self.commit_drag(session);
                }
            }
            _ => {}
        }
    }

    fn on_press(&mut self, column: u16, row: u16) {
        if self.hits.home_button_at(column, row) {
            self.layout.home_toggle();
            return;
        }
        if let Some(button) = self.hits.rail_button_at(column, row) {
            match button {
                LeftButton::Account => self.layout.left_account_click(),
                LeftButton::Alerts => self.layout.left_alerts_click(),
                LeftButton::Saved => self.layout.left_saved_click(),
            }
            return;
        }
        // Borders, topmost first: the chat bar overlays the main band.
        let now = Instant::now();
        if let Some(edge) = ui::edge_at(self.rects.chat, column, row) {
            if !self.layout.chat_resize_start(edge, now) {
                self.begin_drag(PanelKind::Chat, edge, self.rects.chat, column, row);
            }
            return;
        }
        if let Some(rect) = self.rects.left
            && let Some(edge) = ui::edge_at(rect, column, row)
        {
            if !self.layout.left_resize_start(edge, now) {
                self.begin_drag(PanelKind::Left, edge, rect, column, row);
            }
            return;
        }
        if let Some(edge) = ui::edge_at(self.rects.home, column, row)
            && !self.layout.home_resize_start(edge, now)
        {
            self.begin_drag(PanelKind::Home, edge, self.rects.home, column, row);
        }
    }

    fn begin_drag(&mut self, panel: PanelKind, edge: BorderEdge, start: Rect, column: u16, row: u16) {
        self.drag = Some(DragSession {
            panel,
            edge,
            start,
            start_col: column,
            start_row: row,
            live: start,
        });
    }

    fn commit_drag(&mut self, session: DragSession) {
        let live = session.live;
        match session.panel {
            PanelKind::Home => self.layout.home_resize_stop(
                Some(Length::Px(live.width)),
                Some(Length::Px(live.height)),
            ),
            PanelKind::Left => self
                .layout
                .left_resize_stop(Some(Length::Px(live.width)), None),
            PanelKind::Chat => self
                .layout
                .chat_resize_stop(None, Some(Length::Px(live.height))),
        }
    }
}
