// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod map_widget;

pub use map_widget::MapWidget;

use anyhow::{Context, Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use profmap_app::{
    AppCommand, AppEvent, AppState, DraftField, FormState, GeoPoint, LookupKind, LookupOutcome,
    LookupTicket, MapView, PhotoPreview, ProfileId,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use std::io;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const ALL_LOCATIONS: &str = "All Locations";

pub trait AppRuntime {
    fn geocode(&mut self, address: &str) -> Result<Vec<GeoPoint>>;

    /// Resolves `ticket` and reports back over `tx`. The default runs inline;
    /// runtimes backed by a network client should override it with a worker.
    fn spawn_lookup(&mut self, ticket: LookupTicket, tx: Sender<InternalEvent>) -> Result<()> {
        let outcome = LookupOutcome::from_result(self.geocode(&ticket.address));
        tx.send(InternalEvent::Lookup {
            kind: ticket.kind,
            generation: ticket.generation,
            outcome,
        })
        .map_err(|_| anyhow!("lookup event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InternalEvent {
    ClearStatus {
        token: u64,
    },
    Lookup {
        kind: LookupKind,
        generation: u64,
        outcome: LookupOutcome,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    List,
    NameFilter,
    DescriptionFilter,
    Form(DraftField),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    focus: Focus,
    cursor: usize,
    photo_path: String,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();
    log::info!("profmap started with {} profiles", state.profiles.len());

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    log::info!("profmap exiting");
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::Lookup {
                kind,
                generation,
                outcome,
            } => {
                let events = state.apply_lookup(kind, generation, outcome);
                for event in &events {
                    track_event(view_data, tx, event);
                }
                clamp_cursor(state, view_data);
            }
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    let events = state.dispatch(AppCommand::SetStatus(message.into()));
    for event in &events {
        track_event(view_data, internal_tx, event);
    }
}

fn dispatch<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    let events = state.dispatch(command);
    for event in events {
        match event {
            AppEvent::LookupRequested(ticket) => {
                start_lookup(state, runtime, view_data, internal_tx, ticket);
            }
            event => track_event(view_data, internal_tx, &event),
        }
    }
    clamp_cursor(state, view_data);
}

fn start_lookup<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    ticket: LookupTicket,
) {
    let (kind, generation) = (ticket.kind, ticket.generation);
    if let Err(error) = runtime.spawn_lookup(ticket, internal_tx.clone()) {
        log::warn!("could not start {kind:?} lookup: {error:#}");
        let outcome = LookupOutcome::Failed(format!("{error:#}"));
        let events = state.apply_lookup(kind, generation, outcome);
        for event in &events {
            track_event(view_data, internal_tx, event);
        }
    }
}

/// View-side bookkeeping for state events that need no runtime.
fn track_event(view_data: &mut ViewData, internal_tx: &Sender<InternalEvent>, event: &AppEvent) {
    match event {
        AppEvent::StatusUpdated(_) => {
            view_data.status_token = view_data.status_token.saturating_add(1);
            schedule_status_clear(internal_tx, view_data.status_token);
        }
        AppEvent::EditStarted(_) => {
            view_data.focus = Focus::Form(DraftField::Name);
            view_data.photo_path.clear();
        }
        AppEvent::EditCancelled | AppEvent::ProfileSaved(_) => {
            view_data.photo_path.clear();
            if matches!(view_data.focus, Focus::Form(_)) {
                view_data.focus = Focus::List;
            }
        }
        _ => {}
    }
}

fn clamp_cursor(state: &AppState, view_data: &mut ViewData) {
    let visible = state.visible_profiles().len();
    view_data.cursor = view_data.cursor.min(visible.saturating_sub(1));
}

fn selected_profile_id(state: &AppState, view_data: &ViewData) -> Option<ProfileId> {
    state
        .visible_profiles()
        .get(view_data.cursor)
        .map(|profile| profile.id)
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if state.notice.is_some() {
        dispatch(state, runtime, view_data, internal_tx, AppCommand::DismissNotice);
        return false;
    }

    if state.pending_delete.is_some() {
        let command = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(AppCommand::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(AppCommand::CancelDelete)
            }
            _ => None,
        };
        if let Some(command) = command {
            dispatch(state, runtime, view_data, internal_tx, command);
        }
        return false;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if state.layout().detail.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('b')) {
            dispatch(state, runtime, view_data, internal_tx, AppCommand::BackToList);
        }
        return false;
    }

    match view_data.focus {
        Focus::List => handle_list_key(state, runtime, view_data, internal_tx, key),
        Focus::NameFilter | Focus::DescriptionFilter => {
            handle_filter_key(state, runtime, view_data, internal_tx, key);
        }
        Focus::Form(field) => handle_form_key(state, runtime, view_data, internal_tx, field, key),
    }
    false
}

fn handle_list_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let selected = selected_profile_id(state, view_data);
    let on_selected = |build: fn(ProfileId) -> AppCommand| selected.map(build);

    let command = match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.cursor = view_data.cursor.saturating_add(1);
            clamp_cursor(state, view_data);
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.cursor = view_data.cursor.saturating_sub(1);
            return;
        }
        KeyCode::Char('s') => on_selected(AppCommand::ShowSummary),
        KeyCode::Enter => on_selected(AppCommand::ShowDetails),
        KeyCode::Char('e') => on_selected(AppCommand::BeginEdit),
        KeyCode::Char('x') | KeyCode::Delete => on_selected(AppCommand::RequestDelete),
        KeyCode::Char('/') => {
            view_data.focus = Focus::NameFilter;
            return;
        }
        KeyCode::Char('\\') => {
            view_data.focus = Focus::DescriptionFilter;
            return;
        }
        KeyCode::Char('a') => {
            view_data.focus = Focus::Form(DraftField::Name);
            let status = match state.form.editing_id() {
                Some(_) => "editing profile",
                None => "adding profile",
            };
            emit_status(state, view_data, internal_tx, status);
            return;
        }
        KeyCode::Char('l') => Some(AppCommand::CycleLocationFilter),
        KeyCode::Char('c') => Some(AppCommand::ClearFilters),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(AppCommand::ZoomIn),
        KeyCode::Char('-') => Some(AppCommand::ZoomOut),
        KeyCode::Char('?') => {
            view_data.help_visible = true;
            return;
        }
        _ => return,
    };

    match command {
        Some(command) => dispatch(state, runtime, view_data, internal_tx, command),
        None => emit_status(state, view_data, internal_tx, "no profiles found"),
    }
}

fn handle_filter_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let editing_name = view_data.focus == Focus::NameFilter;
    let mut query = if editing_name {
        state.filter.name_query.clone()
    } else {
        state.filter.description_query.clone()
    };

    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
            view_data.focus = Focus::List;
            return;
        }
        KeyCode::Backspace => {
            query.pop();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => query.push(ch),
        _ => return,
    }

    let command = if editing_name {
        AppCommand::SetNameQuery(query)
    } else {
        AppCommand::SetDescriptionQuery(query)
    };
    dispatch(state, runtime, view_data, internal_tx, command);
}

fn handle_form_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    field: DraftField,
    key: KeyEvent,
) {
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        dispatch(state, runtime, view_data, internal_tx, AppCommand::Submit);
        return;
    }

    match key.code {
        KeyCode::Esc => {
            if state.form.editing_id().is_some() {
                dispatch(state, runtime, view_data, internal_tx, AppCommand::CancelEdit);
                emit_status(state, view_data, internal_tx, "edit cancelled");
            } else {
                view_data.focus = Focus::List;
            }
        }
        KeyCode::Tab => view_data.focus = Focus::Form(step_field(field, 1)),
        KeyCode::BackTab => view_data.focus = Focus::Form(step_field(field, -1)),
        KeyCode::Enter if field == DraftField::Photo => {
            load_photo(state, runtime, view_data, internal_tx);
        }
        KeyCode::Enter => view_data.focus = Focus::Form(step_field(field, 1)),
        KeyCode::Backspace if field == DraftField::Photo => {
            view_data.photo_path.pop();
        }
        KeyCode::Backspace => {
            let mut value = state.form.draft().text(field).to_owned();
            value.pop();
            edit_field(state, view_data, internal_tx, field, value);
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if field == DraftField::Photo {
                view_data.photo_path.push(ch);
            } else {
                let mut value = state.form.draft().text(field).to_owned();
                value.push(ch);
                edit_field(state, view_data, internal_tx, field, value);
            }
        }
        _ => {}
    }
}

fn edit_field(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    field: DraftField,
    value: String,
) {
    if !state.form.set_field(field, value) {
        emit_status(state, view_data, internal_tx, "saving... please wait");
    }
}

fn load_photo<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let typed = view_data.photo_path.trim().to_owned();
    if typed.is_empty() {
        emit_status(state, view_data, internal_tx, "type a photo path, then press enter");
        return;
    }

    match PhotoPreview::acquire(Path::new(&typed)) {
        Ok(preview) => {
            let label = preview.label();
            if state.form.choose_photo(preview) {
                view_data.photo_path.clear();
                emit_status(state, view_data, internal_tx, format!("photo loaded: {label}"));
            } else {
                emit_status(state, view_data, internal_tx, "saving... please wait");
            }
        }
        Err(error) => {
            log::debug!("photo rejected: {error}");
            dispatch(
                state,
                runtime,
                view_data,
                internal_tx,
                AppCommand::ShowNotice(format!("{error}.")),
            );
        }
    }
}

fn step_field(field: DraftField, delta: isize) -> DraftField {
    let fields = DraftField::ALL;
    let index = fields.iter().position(|f| *f == field).unwrap_or(0) as isize;
    let next = (index + delta).rem_euclid(fields.len() as isize) as usize;
    fields[next]
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let view = state.layout();
    if let Some(id) = view.detail {
        let header = Paragraph::new("← back to list (esc/b)")
            .block(Block::default().title("profmap").borders(Borders::ALL));
        frame.render_widget(header, layout[0]);
        let detail = Paragraph::new(render_detail_text(state, id))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("profile").borders(Borders::ALL));
        frame.render_widget(detail, layout[1]);
    } else {
        let filters = Paragraph::new(render_filters_text(state, view_data))
            .block(Block::default().title("profmap").borders(Borders::ALL));
        frame.render_widget(filters, layout[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(layout[1]);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(1)])
            .split(columns[0]);

        let form = Paragraph::new(render_form_text(state, view_data))
            .block(Block::default().title(form_title(state)).borders(Borders::ALL));
        frame.render_widget(form, left[0]);
        render_list(frame, left[1], state, view_data);
        render_map(frame, columns[1], state);
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if let Some(id) = state.pending_delete {
        let area = centered_rect(50, 20, frame.area());
        frame.render_widget(Clear, area);
        let name = state
            .profiles
            .get(id)
            .map(|profile| profile.name.as_str())
            .unwrap_or("this profile");
        let confirm = Paragraph::new(format!(
            "Are you sure you want to delete {name}?\n\ny delete | n cancel"
        ))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("delete")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(confirm, area);
    }

    if let Some(notice) = &state.notice {
        let area = centered_rect(50, 20, frame.area());
        frame.render_widget(Clear, area);
        let popup = Paragraph::new(format!("{notice}\n\npress any key"))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title("notice")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(popup, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_list(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState, view_data: &ViewData) {
    let profiles = state.visible_profiles();
    let title = format!("profiles ({}/{})", profiles.len(), state.profiles.len());
    let block = Block::default().title(title).borders(Borders::ALL);
    if profiles.is_empty() {
        frame.render_widget(Paragraph::new("No profiles found.").block(block), area);
        return;
    }

    let summarized = state.selection.summarized();
    let header = Row::new(["name", "address", "description"].map(|label| {
        Cell::from(label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }));
    let rows = profiles.iter().enumerate().map(|(index, profile)| {
        let marker = if summarized == Some(profile.id) { "◆ " } else { "" };
        let mut style = Style::default();
        if index == view_data.cursor {
            style = match view_data.focus {
                Focus::List => Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                _ => style.bg(Color::DarkGray),
            };
        }
        Row::new(vec![
            Cell::from(format!("{marker}{}", profile.name)),
            Cell::from(profile.address.clone()),
            Cell::from(profile.description.clone()),
        ])
        .style(style)
    });
    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Percentage(40),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(block);
    frame.render_widget(table, area);
}

fn render_map(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState) {
    let title = format!("map (zoom {})", state.map.zoom());
    let block = Block::default().title(title).borders(Borders::ALL);
    match state.map.view() {
        MapView::Located { label, point, .. } => {
            let widget = MapWidget::new(*point, state.map.zoom(), label).block(block);
            frame.render_widget(widget, area);
        }
        view => {
            let text = map_placeholder_text(view);
            frame.render_widget(
                Paragraph::new(text).wrap(Wrap { trim: false }).block(block),
                area,
            );
        }
    }
}

fn map_placeholder_text(view: &MapView) -> String {
    match view {
        MapView::Blank => "press s on a profile to show it on the map".to_owned(),
        MapView::Loading { address } => format!("Loading map for {address}..."),
        MapView::Failed { address, message } => format!("{address}\n\n{message}"),
        MapView::Located { address, .. } => address.clone(),
    }
}

fn form_title(state: &AppState) -> &'static str {
    match (state.form.state(), state.form.editing_id()) {
        (FormState::Submitting, Some(_)) => "updating...",
        (FormState::Submitting, None) => "adding...",
        (_, Some(_)) => "edit profile",
        (_, None) => "add profile",
    }
}

fn render_form_text(state: &AppState, view_data: &ViewData) -> String {
    let draft = state.form.draft();
    DraftField::ALL
        .iter()
        .map(|field| {
            let focused = view_data.focus == Focus::Form(*field);
            let marker = if focused { ">" } else { " " };
            let value = match field {
                DraftField::Photo => {
                    let current = draft.photo_label().unwrap_or_else(|| "none".to_owned());
                    if focused {
                        format!("{current} | path: {}_", view_data.photo_path)
                    } else {
                        current
                    }
                }
                _ => {
                    let text = draft.text(*field);
                    if focused {
                        format!("{text}_")
                    } else {
                        text.to_owned()
                    }
                }
            };
            format!("{marker} {:<11} {value}", field.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_filters_text(state: &AppState, view_data: &ViewData) -> String {
    let cursor = |focus: Focus| if view_data.focus == focus { "_" } else { "" };
    let location = state.filter.address_exact.as_deref().unwrap_or(ALL_LOCATIONS);
    format!(
        "/ name: {}{} | \\ description: {}{} | l location: {location}",
        state.filter.name_query,
        cursor(Focus::NameFilter),
        state.filter.description_query,
        cursor(Focus::DescriptionFilter),
    )
}

fn render_detail_text(state: &AppState, id: ProfileId) -> String {
    let Some(profile) = state.profiles.get(id) else {
        return "profile no longer exists".to_owned();
    };
    format!(
        "{}\n\n{}\n\nAddress: {}\nCoordinates: {}\nPhoto: {}",
        profile.name,
        profile.description,
        profile.address,
        profile.location,
        profile.photo.display(),
    )
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return String::new();
    }

    let (mode, hints) = if state.layout().detail.is_some() {
        ("DETAIL", "esc/b back | ctrl+q quit")
    } else {
        match view_data.focus {
            Focus::List => (
                "LIST",
                "j/k move | s summary | enter details | e edit | x delete | a form | / \\ l c filters | +/- zoom | ? help",
            ),
            Focus::NameFilter | Focus::DescriptionFilter => {
                ("FILTER", "type to search | enter/esc done")
            }
            Focus::Form(_) => (
                "FORM",
                "tab/shift+tab field | enter load photo | ctrl+s save | esc cancel",
            ),
        }
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {hints}"),
        None => format!("{mode} | {hints}"),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ? help\n\
list: j/k or up/down move | s show on map | enter details | e edit | x/delete delete\n\
filters: / name search | \\ description keyword | l cycle location | c clear\n\
form: a focus | tab/shift+tab field | enter on photo loads the typed path | ctrl+s save | esc cancel\n\
map: + zoom in | - zoom out\n\
details: esc/b back to list\n\
prompts: y/n confirm delete | any key dismisses a notice"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
