// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use seekbar_app::{
    AppCommand, AppEvent, AppState, Catalog, FileKind, Point, Region, SearchResult, Tab,
    TimerToken, filter_results, highlight, tab_count,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const INPUT_HEIGHT: u16 = 3;
const ROW_HEIGHT: u16 = 2;
const SKELETON_ROWS: usize = 5;
const MENU_WIDTH: u16 = 24;
const PLACEHOLDER: &str = "Search...";
const PROMPT: &str = "/ ";
const CLEAR_LABEL: &str = "Clear";
const SETTINGS_LABEL: &str = "[≡]";
const OPEN_LABEL: &str = "[open]";
const COPY_LABEL: &str = "[copy]";
const TOAST_TEXT: &str = " Link copied ";
const LOADING_BADGE: &str = "...";

/// Side effects the widget asks of its host.
pub trait AppRuntime {
    fn copy_link(&mut self, url: &str) -> Result<()>;
    fn open_link(&mut self, url: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalEvent {
    LoadingElapsed(TimerToken),
    ToastExpired(TimerToken),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    catalog: Catalog,
    selected_row: usize,
    screen: Rect,
}

impl ViewData {
    fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowLayout {
    index: usize,
    area: Rect,
    open: Rect,
    copy: Rect,
}

/// Where everything landed on the last frame; shared by rendering and
/// pointer hit-testing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ScreenLayout {
    input: Rect,
    clear_button: Option<Rect>,
    body: Rect,
    footer: Rect,
    tabs: Vec<(Tab, Rect)>,
    settings_button: Option<Rect>,
    results: Option<Rect>,
    rows: Vec<RowLayout>,
    menu: Option<Rect>,
    menu_rows: Vec<(Tab, Rect)>,
}

impl ScreenLayout {
    fn menu_regions(&self) -> Vec<Region> {
        self.settings_button
            .iter()
            .chain(self.menu.iter())
            .map(|rect| region(*rect))
            .collect()
    }
}

enum PointerTarget {
    MenuRow(Tab),
    SettingsButton,
    ClearButton,
    Tab(Tab),
    Open(usize),
    Copy(usize),
    Row(usize),
    Nothing,
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    catalog: Catalog,
    runtime: &mut R,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(catalog);
    let (internal_tx, internal_rx) = mpsc::channel();
    tracing::info!(records = view_data.catalog.len(), "search widget started");

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| {
            view_data.screen = frame.area();
            render(frame, state, &view_data);
        }) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(POLL_INTERVAL).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if !has_event {
            continue;
        }
        match event::read().context("read event") {
            Ok(Event::Key(key)) => {
                if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                    break;
                }
            }
            Ok(Event::Mouse(mouse)) => {
                handle_mouse_event(state, runtime, &mut view_data, &internal_tx, mouse);
            }
            Ok(_) => {}
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(
        io::stdout(),
        DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        handle_internal_event(state, view_data, tx, event);
    }
}

fn handle_internal_event(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    event: InternalEvent,
) -> Vec<AppEvent> {
    let command = match event {
        InternalEvent::LoadingElapsed(token) => AppCommand::LoadingElapsed(token),
        InternalEvent::ToastExpired(token) => AppCommand::ToastExpired(token),
    };
    dispatch_command(state, view_data, tx, command)
}

fn schedule_timer(internal_tx: &Sender<InternalEvent>, delay: Duration, event: InternalEvent) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = sender.send(event);
    });
}

/// Applies a command and starts whatever timers its events call for.
fn dispatch_command(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) -> Vec<AppEvent> {
    let events = state.dispatch(command);
    for event in &events {
        match event {
            AppEvent::LoadingStarted { token, delay } => {
                schedule_timer(internal_tx, *delay, InternalEvent::LoadingElapsed(*token));
            }
            AppEvent::ToastShown { token, delay, .. } => {
                schedule_timer(internal_tx, *delay, InternalEvent::ToastExpired(*token));
            }
            AppEvent::QueryChanged(_) | AppEvent::TabChanged(_) => {
                view_data.selected_row = 0;
            }
            AppEvent::LoadingFinished
            | AppEvent::SettingsMenuChanged(_)
            | AppEvent::FilterToggled { .. }
            | AppEvent::ToastHidden => {}
        }
    }
    clamp_selection(state, view_data);
    events
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
        return true;
    }

    if state.menu_open() {
        match key.code {
            KeyCode::Esc => {
                dispatch_command(state, view_data, internal_tx, AppCommand::CloseSettingsMenu);
                return false;
            }
            KeyCode::Char(digit @ '1'..='4') if !ctrl => {
                let index = digit as usize - '1' as usize;
                let tab = Tab::TOGGLEABLE[index];
                dispatch_command(state, view_data, internal_tx, AppCommand::ToggleFilter(tab));
                return false;
            }
            _ => {}
        }
    }

    match (key.code, ctrl) {
        (KeyCode::Char('s'), true) if !state.query.is_empty() || state.menu_open() => {
            dispatch_command(
                state,
                view_data,
                internal_tx,
                AppCommand::ToggleSettingsMenu,
            );
        }
        (KeyCode::Char('u'), true) | (KeyCode::Esc, false) => {
            dispatch_command(state, view_data, internal_tx, AppCommand::ClearQuery);
        }
        (KeyCode::Char('y'), true) => {
            let layout = compute_layout(view_data.screen, state, view_data);
            let anchor = layout
                .rows
                .iter()
                .find(|row| row.index == view_data.selected_row)
                .map_or(layout.input, |row| row.copy);
            if let Some(url) = selected_url(state, view_data) {
                copy_link(
                    state,
                    runtime,
                    view_data,
                    internal_tx,
                    &url,
                    Point::new(anchor.x, anchor.y),
                );
            }
        }
        (KeyCode::Enter, false) => {
            if let Some(url) = selected_url(state, view_data) {
                open_link(runtime, &url);
            }
        }
        (KeyCode::Tab, false) => {
            dispatch_command(state, view_data, internal_tx, AppCommand::NextTab);
        }
        (KeyCode::BackTab, _) => {
            dispatch_command(state, view_data, internal_tx, AppCommand::PrevTab);
        }
        (KeyCode::Down, false) => move_selection(state, view_data, 1),
        (KeyCode::Up, false) => move_selection(state, view_data, -1),
        (KeyCode::Backspace, false) => {
            let mut query = state.query.clone();
            if query.pop().is_some() {
                dispatch_command(state, view_data, internal_tx, AppCommand::SetQuery(query));
            }
        }
        (KeyCode::Char(ch), false) if !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut query = state.query.clone();
            query.push(ch);
            dispatch_command(state, view_data, internal_tx, AppCommand::SetQuery(query));
        }
        _ => {}
    }
    false
}

fn handle_mouse_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    mouse: MouseEvent,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let at = Point::new(mouse.column, mouse.row);
    let layout = compute_layout(view_data.screen, state, view_data);

    if state.menu_open() {
        dispatch_command(
            state,
            view_data,
            internal_tx,
            AppCommand::PointerDown {
                at,
                menu_regions: layout.menu_regions(),
            },
        );
    }

    match pointer_target(&layout, at) {
        PointerTarget::MenuRow(tab) => {
            dispatch_command(state, view_data, internal_tx, AppCommand::ToggleFilter(tab));
        }
        PointerTarget::SettingsButton => {
            dispatch_command(
                state,
                view_data,
                internal_tx,
                AppCommand::ToggleSettingsMenu,
            );
        }
        PointerTarget::ClearButton => {
            dispatch_command(state, view_data, internal_tx, AppCommand::ClearQuery);
        }
        PointerTarget::Tab(tab) => {
            dispatch_command(state, view_data, internal_tx, AppCommand::SelectTab(tab));
        }
        PointerTarget::Copy(index) => {
            if let Some(url) = result_url(state, view_data, index) {
                copy_link(state, runtime, view_data, internal_tx, &url, at);
            }
        }
        PointerTarget::Open(index) => {
            if let Some(url) = result_url(state, view_data, index) {
                open_link(runtime, &url);
            }
        }
        PointerTarget::Row(index) => {
            view_data.selected_row = index;
        }
        PointerTarget::Nothing => {}
    }
}

/// Resolves the innermost target under `at`. Action buttons shadow their row.
fn pointer_target(layout: &ScreenLayout, at: Point) -> PointerTarget {
    let hit = |rect: &Rect| region(*rect).contains(at);

    if let Some((tab, _)) = layout.menu_rows.iter().find(|(_, rect)| hit(rect)) {
        return PointerTarget::MenuRow(*tab);
    }
    if layout.menu.as_ref().is_some_and(hit) {
        return PointerTarget::Nothing;
    }
    if layout.settings_button.as_ref().is_some_and(hit) {
        return PointerTarget::SettingsButton;
    }
    if layout.clear_button.as_ref().is_some_and(hit) {
        return PointerTarget::ClearButton;
    }
    if let Some((tab, _)) = layout.tabs.iter().find(|(_, rect)| hit(rect)) {
        return PointerTarget::Tab(*tab);
    }
    for row in &layout.rows {
        if hit(&row.copy) {
            return PointerTarget::Copy(row.index);
        }
        if hit(&row.open) {
            return PointerTarget::Open(row.index);
        }
        if hit(&row.area) {
            return PointerTarget::Row(row.index);
        }
    }
    PointerTarget::Nothing
}

fn copy_link<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    url: &str,
    at: Point,
) {
    match runtime.copy_link(url) {
        Ok(()) => {
            tracing::info!(url, "link copied to clipboard");
            dispatch_command(state, view_data, internal_tx, AppCommand::ShowToast { at });
        }
        Err(error) => {
            tracing::warn!(url, "failed to copy link: {error:#}");
        }
    }
}

fn open_link<R: AppRuntime>(runtime: &mut R, url: &str) {
    match runtime.open_link(url) {
        Ok(()) => tracing::info!(url, "opened link"),
        Err(error) => tracing::warn!(url, "failed to open link: {error:#}"),
    }
}

fn visible_results<'a>(state: &AppState, view_data: &'a ViewData) -> Vec<&'a SearchResult> {
    if state.is_loading() {
        return Vec::new();
    }
    filter_results(view_data.catalog.results(), state.active_tab, &state.query)
}

fn result_url(state: &AppState, view_data: &ViewData, index: usize) -> Option<String> {
    visible_results(state, view_data)
        .get(index)
        .map(|result| result.url().to_owned())
}

fn selected_url(state: &AppState, view_data: &ViewData) -> Option<String> {
    result_url(state, view_data, view_data.selected_row)
}

fn move_selection(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let len = visible_results(state, view_data).len();
    if len == 0 {
        view_data.selected_row = 0;
        return;
    }
    let next = (view_data.selected_row as isize + delta).clamp(0, len as isize - 1);
    view_data.selected_row = next as usize;
}

fn clamp_selection(state: &AppState, view_data: &mut ViewData) {
    let len = visible_results(state, view_data).len();
    view_data.selected_row = view_data.selected_row.min(len.saturating_sub(1));
}

fn region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

/// Display columns, so wide glyphs count twice.
fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

fn tab_badge(state: &AppState, view_data: &ViewData, tab: Tab) -> String {
    if state.is_loading() {
        return LOADING_BADGE.to_owned();
    }
    tab_count(view_data.catalog.results(), tab, &state.query).to_string()
}

fn tab_title(state: &AppState, view_data: &ViewData, tab: Tab) -> String {
    format!("{} {}", tab.label(), tab_badge(state, view_data, tab))
}

fn compute_layout(area: Rect, state: &AppState, view_data: &ViewData) -> ScreenLayout {
    let input = Rect::new(area.x, area.y, area.width, INPUT_HEIGHT.min(area.height));
    let footer_height = u16::from(area.height > INPUT_HEIGHT);
    let footer = Rect::new(
        area.x,
        area.bottom().saturating_sub(footer_height),
        area.width,
        footer_height,
    );
    let body = Rect::new(
        area.x,
        input.bottom(),
        area.width,
        footer.y.saturating_sub(input.bottom()),
    );

    let mut layout = ScreenLayout {
        input,
        body,
        footer,
        ..ScreenLayout::default()
    };

    let clear_width = text_width(CLEAR_LABEL);
    if !state.query.is_empty() && input.height == INPUT_HEIGHT && input.width > clear_width + 8 {
        layout.clear_button = Some(Rect::new(
            input.right() - clear_width - 2,
            input.y + 1,
            clear_width,
            1,
        ));
    }

    if state.query.is_empty() || body.height < 2 {
        return layout;
    }

    let settings_width = text_width(SETTINGS_LABEL);
    let settings = Rect::new(
        body.right().saturating_sub(settings_width + 1),
        body.y,
        settings_width.min(body.width),
        1,
    );
    layout.settings_button = Some(settings);

    let mut x = body.x + 1;
    for tab in state.filters.visible_tabs() {
        let width = text_width(&tab_title(state, view_data, tab));
        if x + width > settings.x {
            break;
        }
        layout.tabs.push((tab, Rect::new(x, body.y, width, 1)));
        x += width + 2;
    }

    let results = Rect::new(body.x, body.y + 1, body.width, body.height - 1);
    layout.results = Some(results);

    let content = Rect::new(
        results.x,
        results.y + 1,
        results.width,
        results.height.saturating_sub(1),
    );
    let capacity = usize::from(content.height / ROW_HEIGHT);
    let buttons_width = text_width(OPEN_LABEL) + text_width(COPY_LABEL) + 2;
    let visible = visible_results(state, view_data);
    if capacity > 0 && content.width > buttons_width + 4 {
        let offset = view_data.selected_row.saturating_sub(capacity - 1);
        for (slot, index) in (offset..visible.len()).take(capacity).enumerate() {
            let y = content.y + ROW_HEIGHT * slot as u16;
            let area = Rect::new(content.x, y, content.width, ROW_HEIGHT);
            let copy = Rect::new(
                area.right() - text_width(COPY_LABEL) - 1,
                y,
                text_width(COPY_LABEL),
                1,
            );
            let open = Rect::new(
                copy.x - text_width(OPEN_LABEL) - 1,
                y,
                text_width(OPEN_LABEL),
                1,
            );
            layout.rows.push(RowLayout {
                index,
                area,
                open,
                copy,
            });
        }
    }

    if state.menu_open() {
        let width = MENU_WIDTH.min(body.width);
        let wanted = Tab::TOGGLEABLE.len() as u16 + 2;
        let top = settings.y + 1;
        let height = wanted.min(area.bottom().saturating_sub(top));
        let menu = Rect::new(settings.right().saturating_sub(width), top, width, height);
        layout.menu = Some(menu);
        for (offset, tab) in Tab::TOGGLEABLE.into_iter().enumerate() {
            let y = menu.y + 1 + offset as u16;
            if y + 1 >= menu.bottom() {
                break;
            }
            let row = Rect::new(menu.x + 1, y, menu.width.saturating_sub(2), 1);
            layout.menu_rows.push((tab, row));
        }
    }

    layout
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = compute_layout(frame.area(), state, view_data);

    render_input(frame, state, &layout);

    if state.query.is_empty() {
        let hint = Paragraph::new("type to search people, files, and folders")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, layout.body);
    } else {
        render_tabs(frame, state, view_data, &layout);
        render_results(frame, state, view_data, &layout);
    }

    let footer =
        Paragraph::new(footer_text(state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, layout.footer);

    if let Some(menu) = layout.menu {
        render_menu(frame, state, &layout, menu);
    }

    if let Some(toast) = state.toast {
        render_toast(frame, toast.at);
    }
}

fn render_input(frame: &mut ratatui::Frame<'_>, state: &AppState, layout: &ScreenLayout) {
    let text = if state.query.is_empty() {
        Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Color::DarkGray)),
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Color::DarkGray)),
            Span::raw(state.query.clone()),
        ])
    };
    let block = Block::default().title("seekbar").borders(Borders::ALL);
    let input = Paragraph::new(text).block(block);
    frame.render_widget(input, layout.input);

    if let Some(clear) = layout.clear_button {
        let button = Paragraph::new(CLEAR_LABEL).style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::UNDERLINED),
        );
        frame.render_widget(button, clear);
    }

    if layout.input.height == INPUT_HEIGHT && layout.input.width > 2 {
        let typed = text_width(PROMPT).saturating_add(text_width(&state.query));
        let x = layout
            .input
            .x
            .saturating_add(1)
            .saturating_add(typed)
            .min(layout.input.right().saturating_sub(2));
        frame.set_cursor_position((x, layout.input.y + 1));
    }
}

fn render_tabs(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    view_data: &ViewData,
    layout: &ScreenLayout,
) {
    for (tab, rect) in &layout.tabs {
        let style = if *tab == state.active_tab {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        let title = Paragraph::new(tab_title(state, view_data, *tab)).style(style);
        frame.render_widget(title, *rect);
    }

    if let Some(settings) = layout.settings_button {
        let style = if state.menu_open() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(Paragraph::new(SETTINGS_LABEL).style(style), settings);
    }
}

fn render_results(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    view_data: &ViewData,
    layout: &ScreenLayout,
) {
    let Some(results) = layout.results else {
        return;
    };
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let content = block.inner(results);
    frame.render_widget(block, results);

    if state.is_loading() {
        let lines = (0..SKELETON_ROWS)
            .flat_map(|index| skeleton_lines(index, content.width))
            .collect::<Vec<_>>();
        frame.render_widget(Paragraph::new(lines), content);
        return;
    }

    let visible = visible_results(state, view_data);
    if visible.is_empty() {
        let empty = Paragraph::new(vec![
            Line::default(),
            Line::styled(
                "No results found",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw("Try adjusting your search terms or selected tab"),
        ])
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
        frame.render_widget(empty, content);
        return;
    }

    for row in &layout.rows {
        let Some(result) = visible.get(row.index) else {
            continue;
        };
        let selected = row.index == view_data.selected_row;
        let text_area = Rect::new(
            row.area.x,
            row.area.y,
            row.open.x.saturating_sub(row.area.x + 1),
            row.area.height,
        );
        let mut paragraph = Paragraph::new(result_lines(result, &state.query));
        if selected {
            paragraph = paragraph.style(Style::default().bg(Color::DarkGray));
        }
        frame.render_widget(paragraph, text_area);

        let button_style = if selected {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(OPEN_LABEL).style(button_style), row.open);
        frame.render_widget(Paragraph::new(COPY_LABEL).style(button_style), row.copy);
    }
}

fn result_icon(result: &SearchResult) -> Span<'static> {
    match result {
        SearchResult::Person { is_active, .. } => {
            let color = if *is_active {
                Color::Green
            } else {
                Color::Magenta
            };
            Span::styled("● ", Style::default().fg(color))
        }
        SearchResult::Folder { .. } => Span::styled("▤ ", Style::default().fg(Color::Blue)),
        SearchResult::File { file_kind, .. } => {
            let glyph = match file_kind {
                FileKind::Image => "▣ ",
                FileKind::Video => "▶ ",
                FileKind::Other => "□ ",
            };
            Span::styled(glyph, Style::default().fg(Color::Gray))
        }
    }
}

fn highlight_spans(text: &str, query: &str, base: Style) -> Vec<Span<'static>> {
    highlight(text, query)
        .into_iter()
        .map(|segment| {
            let style = if segment.emphasized {
                base.fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            };
            Span::styled(segment.text.to_owned(), style)
        })
        .collect()
}

fn result_lines(result: &SearchResult, query: &str) -> Vec<Line<'static>> {
    let mut title = vec![result_icon(result)];
    title.extend(highlight_spans(
        result.name(),
        query,
        Style::default().fg(Color::White),
    ));

    let muted = Style::default().fg(Color::DarkGray);
    let separator = || Span::styled(" • ", muted);
    let mut detail = vec![Span::raw("  ")];
    match result {
        SearchResult::Person {
            status, is_active, ..
        } => {
            let style = if *is_active {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                muted
            };
            detail.push(Span::styled(status.clone(), style));
        }
        SearchResult::Folder {
            location,
            file_count,
            timestamp,
            ..
        } => {
            detail.push(Span::styled("in ", Style::default().fg(Color::Gray)));
            detail.extend(highlight_spans(
                location,
                query,
                Style::default().fg(Color::Gray),
            ));
            detail.push(separator());
            detail.push(Span::styled(
                file_count.clone(),
                Style::default().fg(Color::Gray),
            ));
            detail.push(separator());
            detail.push(Span::styled(timestamp.clone(), muted));
        }
        SearchResult::File {
            location,
            timestamp,
            ..
        } => {
            detail.push(Span::styled("in ", Style::default().fg(Color::Gray)));
            detail.extend(highlight_spans(
                location,
                query,
                Style::default().fg(Color::Gray),
            ));
            detail.push(separator());
            detail.push(Span::styled(timestamp.clone(), muted));
        }
    }

    vec![Line::from(title), Line::from(detail)]
}

/// Placeholder row; widths vary by index so the column looks organic.
fn skeleton_lines(index: usize, width: u16) -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::DarkGray);
    let available = usize::from(width.saturating_sub(4));
    let percent = 60 + (index * 17) % 40;
    let title = "░".repeat(available * percent / 100);
    let meta = ["░".repeat(4), "░".repeat(6), "░".repeat(8)].join(" ");
    vec![
        Line::from(vec![Span::styled("░ ", style), Span::styled(title, style)]),
        Line::from(vec![Span::raw("  "), Span::styled(meta, style)]),
    ]
}

fn render_menu(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    layout: &ScreenLayout,
    menu: Rect,
) {
    frame.render_widget(Clear, menu);
    frame.render_widget(
        Block::default()
            .title("tabs")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
        menu,
    );

    for (position, (tab, rect)) in layout.menu_rows.iter().enumerate() {
        let enabled = state.filters.is_visible(*tab);
        let switch = if enabled {
            Span::styled(
                "[on ]",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("[off]", Style::default().fg(Color::DarkGray))
        };
        let label = format!("{} {:<9}", position + 1, tab.label());
        let line = Line::from(vec![Span::raw(label), switch]);
        frame.render_widget(Paragraph::new(line), *rect);
    }
}

fn render_toast(frame: &mut ratatui::Frame<'_>, at: Point) {
    let area = frame.area();
    let width = text_width(TOAST_TEXT).min(area.width);
    if width == 0 || area.height == 0 {
        return;
    }
    let x = at.x.min(area.right().saturating_sub(width));
    let y = at.y.saturating_sub(1).min(area.bottom() - 1);
    let rect = Rect::new(x, y, width, 1);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(TOAST_TEXT).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        rect,
    );
}

fn footer_text(state: &AppState) -> String {
    if state.menu_open() {
        return "1-4 toggle tab | esc close | click outside to dismiss".to_owned();
    }
    if state.query.is_empty() {
        return "type to search | ctrl+q quit".to_owned();
    }
    "tab/shift+tab switch | up/down select | enter open | ctrl+y copy | esc clear | ctrl+s tabs | ctrl+q quit"
        .to_owned()
}
