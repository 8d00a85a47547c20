//! services/tui/src/ui/event_loop.rs
//!
//! Terminal setup/teardown and the main event loop: draw a frame, poll for
//! a key, dispatch it against the current modal or the browse screen. Every
//! intent runs to completion before the next key is processed.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use tooldex_core::domain::{Pricing, SortKey};
use tooldex_core::ports::PortError;

use super::forms::{AuthForm, TagBrowser, ToolForm, TOOL_FIELD_CATEGORY, TOOL_FIELD_PRICING};
use super::render::draw_ui;
use super::view::{Focus, Modal, ViewState};
use crate::error::AppError;
use crate::state::AppState;

/// Run the browser until the user quits.
pub async fn run(state: &mut AppState) -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut view = ViewState::default();
    let result = run_event_loop(&mut terminal, state, &mut view).await;

    // Always attempt to restore the terminal, even on error.
    let cleanup = restore_terminal(&mut terminal);
    result.and(cleanup)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), AppError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    view: &mut ViewState,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| draw_ui(f, &state.directory, view))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                view.status = None;
                if handle_key(state, view, key).await? {
                    break;
                }
            }
        }
    }
    Ok(())
}

//=========================================================================================
// Key dispatch
//=========================================================================================

/// Returns `Ok(true)` when the user asked to quit.
async fn handle_key(state: &mut AppState, view: &mut ViewState, key: KeyEvent) -> Result<bool, AppError> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    if matches!(view.modal, Modal::None) {
        return handle_browse_key(state, view, key).await;
    }

    // Take the modal by value; handlers either resolve it or put it back.
    let modal = std::mem::take(&mut view.modal);
    match modal {
        Modal::Auth(form) => handle_auth_key(state, view, form, key).await,
        Modal::Tool(form) => handle_tool_key(state, view, form, key),
        Modal::Tags(browser) => handle_tags_key(state, view, browser, key),
        Modal::Detail(id) => handle_detail_key(state, view, id, key).await?,
        Modal::None => {}
    }
    Ok(false)
}

async fn handle_browse_key(state: &mut AppState, view: &mut ViewState, key: KeyEvent) -> Result<bool, AppError> {
    // Search capture runs first so every printable key lands in the query.
    if view.searching {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => view.searching = false,
            KeyCode::Backspace => {
                state.directory.filter.query.pop();
            }
            KeyCode::Char(c) => state.directory.filter.query.push(c),
            _ => {}
        }
        return Ok(false);
    }

    let visible_len = state.directory.visible().len();
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('/') => view.searching = true,
        KeyCode::Tab => {
            view.focus = match view.focus {
                Focus::Sidebar => Focus::Results,
                Focus::Results => Focus::Sidebar,
            };
        }
        KeyCode::Up => match view.focus {
            Focus::Sidebar => {
                view.sidebar_up();
                state.directory.filter.category = view.cursor_category();
            }
            Focus::Results => view.select_prev(),
        },
        KeyCode::Down => match view.focus {
            Focus::Sidebar => {
                view.sidebar_down();
                state.directory.filter.category = view.cursor_category();
            }
            Focus::Results => view.select_next(visible_len),
        },
        KeyCode::Char('s') => {
            let sort = next_sort(state.directory.filter.sort);
            state.directory.filter.sort = sort;
            view.set_status(format!("Sorted by {}", sort.label()));
        }
        KeyCode::Char('p') => {
            state.directory.filter.pricing = next_pricing(state.directory.filter.pricing);
            let label = state
                .directory
                .filter
                .pricing
                .map_or("All Pricing", Pricing::label);
            view.set_status(format!("Pricing: {label}"));
        }
        KeyCode::Char('c') => {
            state.directory.filter.clear();
            view.set_status("Filters cleared");
        }
        KeyCode::Char('f') => toggle_selected_favorite(state, view).await?,
        KeyCode::Char('F') => {
            if state.directory.is_signed_in() {
                state.directory.filter.favorites_only = !state.directory.filter.favorites_only;
            } else {
                view.set_status("Sign in to use favorites");
            }
        }
        KeyCode::Char('t') => {
            let tags = state.directory.catalog.all_tags();
            if tags.is_empty() {
                view.set_status("No tags in the catalog yet");
            } else {
                view.modal = Modal::Tags(TagBrowser::new(tags));
            }
        }
        KeyCode::Char('a') => {
            if state.directory.is_signed_in() {
                view.modal = Modal::Tool(ToolForm::new_add());
            } else {
                view.set_status("Sign in to add tools");
            }
        }
        KeyCode::Char('e') => {
            if !state.directory.is_signed_in() {
                view.set_status("Sign in to edit tools");
            } else if let Some(id) = view.selected_tool(&state.directory) {
                if let Some(tool) = state.directory.catalog.get(id) {
                    view.modal = Modal::Tool(ToolForm::new_edit(tool));
                }
            }
        }
        KeyCode::Enter => {
            if let Some(id) = view.selected_tool(&state.directory) {
                view.modal = Modal::Detail(id);
            }
        }
        KeyCode::Char('o') => {
            if let Some(id) = view.selected_tool(&state.directory) {
                if let Some(tool) = state.directory.catalog.get(id) {
                    open_website(&tool.website, view);
                }
            }
        }
        KeyCode::Char('l') => {
            if state.directory.is_signed_in() {
                match state.directory.logout(state.store.as_ref()).await {
                    Ok(()) => view.set_status("Signed out. Favorites saved."),
                    Err(e) => {
                        warn!("favorites flush on logout failed: {e}");
                        view.set_status(format!("Sign-out problem: {e}"));
                    }
                }
            } else {
                view.modal = Modal::Auth(AuthForm::default());
            }
        }
        _ => {}
    }
    Ok(false)
}

async fn toggle_selected_favorite(state: &mut AppState, view: &mut ViewState) -> Result<(), AppError> {
    if !state.directory.is_signed_in() {
        view.set_status("Sign in to favorite tools");
        return Ok(());
    }
    let Some(id) = view.selected_tool(&state.directory) else {
        return Ok(());
    };
    match state.directory.toggle_favorite(id, state.store.as_ref()).await {
        Ok(true) => view.set_status("Added to favorites"),
        Ok(false) => view.set_status("Removed from favorites"),
        Err(e) => {
            warn!("favorites flush failed: {e}");
            view.set_status(format!("Could not save favorites: {e}"));
        }
    }
    Ok(())
}

//=========================================================================================
// Modal handlers
//=========================================================================================

async fn handle_auth_key(state: &mut AppState, view: &mut ViewState, mut form: AuthForm, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => return,
        KeyCode::Left | KeyCode::Right => form.switch_tab(),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => {
            let focus = form.focus;
            form.field_mut(focus).pop();
        }
        KeyCode::Char(c) => {
            let focus = form.focus;
            form.field_mut(focus).push(c);
        }
        KeyCode::Enter => {
            match form.credentials() {
                Err(message) => form.error = Some(message),
                Ok(credentials) => {
                    let login = state
                        .directory
                        .login(&credentials, state.verifier.as_ref(), state.store.as_ref())
                        .await;
                    match login {
                        Ok(user) => {
                            info!("signed in as {}", user.email);
                            view.set_status(format!(
                                "Signed in as {} ({} favorites)",
                                user.name,
                                state.directory.favorite_count()
                            ));
                            return;
                        }
                        Err(PortError::Rejected(message)) => form.error = Some(message),
                        Err(e) => form.error = Some(e.to_string()),
                    }
                }
            }
        }
        _ => {}
    }
    view.modal = Modal::Auth(form);
}

fn handle_tool_key(state: &mut AppState, view: &mut ViewState, mut form: ToolForm, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => return,
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left if form.focus == TOOL_FIELD_CATEGORY => form.cycle_category(-1),
        KeyCode::Right if form.focus == TOOL_FIELD_CATEGORY => form.cycle_category(1),
        KeyCode::Left if form.focus == TOOL_FIELD_PRICING => form.cycle_pricing(-1),
        KeyCode::Right if form.focus == TOOL_FIELD_PRICING => form.cycle_pricing(1),
        KeyCode::Backspace => {
            if let Some(buffer) = form.text_field_mut() {
                buffer.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(buffer) = form.text_field_mut() {
                buffer.push(c);
            }
        }
        KeyCode::Enter => match form.draft() {
            Err(message) => form.error = Some(message),
            Ok(draft) => {
                match form.target {
                    None => {
                        let tool = state.directory.catalog.add(draft);
                        info!("added tool {}", tool.name);
                        view.set_status(format!("Added \"{}\"", tool.name));
                    }
                    Some(id) => match state.directory.catalog.update(id, draft) {
                        Ok(tool) => {
                            info!("updated tool {}", tool.name);
                            view.set_status(format!("Updated \"{}\"", tool.name));
                        }
                        Err(e) => {
                            warn!("update failed: {e}");
                            view.set_status(e.to_string());
                        }
                    },
                }
                return;
            }
        },
        _ => {}
    }
    view.modal = Modal::Tool(form);
}

fn handle_tags_key(state: &mut AppState, view: &mut ViewState, mut browser: TagBrowser, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return,
        KeyCode::Up => browser.up(),
        KeyCode::Down => browser.down(),
        KeyCode::Char('s') => {
            if let Some(tag) = browser.current() {
                let tag = tag.to_string();
                state.directory.filter.toggle_show_tag(&tag);
            }
        }
        KeyCode::Char('h') => {
            if let Some(tag) = browser.current() {
                let tag = tag.to_string();
                state.directory.filter.toggle_hide_tag(&tag);
            }
        }
        _ => {}
    }
    view.modal = Modal::Tags(browser);
}

async fn handle_detail_key(
    state: &mut AppState,
    view: &mut ViewState,
    id: tooldex_core::domain::ToolId,
    key: KeyEvent,
) -> Result<(), AppError> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => return Ok(()),
        KeyCode::Char('o') => {
            if let Some(tool) = state.directory.catalog.get(id) {
                open_website(&tool.website, view);
            }
        }
        KeyCode::Char('f') => {
            if state.directory.is_signed_in() {
                match state.directory.toggle_favorite(id, state.store.as_ref()).await {
                    Ok(true) => view.set_status("Added to favorites"),
                    Ok(false) => view.set_status("Removed from favorites"),
                    Err(e) => view.set_status(format!("Could not save favorites: {e}")),
                }
            } else {
                view.set_status("Sign in to favorite tools");
            }
        }
        _ => {}
    }
    view.modal = Modal::Detail(id);
    Ok(())
}

//=========================================================================================
// Helpers
//=========================================================================================

fn next_sort(sort: SortKey) -> SortKey {
    let all = SortKey::ALL;
    let pos = all.iter().position(|s| *s == sort).unwrap_or(0);
    all[(pos + 1) % all.len()]
}

/// Cycles all -> free -> freemium -> paid -> all.
fn next_pricing(pricing: Option<Pricing>) -> Option<Pricing> {
    match pricing {
        None => Some(Pricing::Free),
        Some(Pricing::Free) => Some(Pricing::Freemium),
        Some(Pricing::Freemium) => Some(Pricing::Paid),
        Some(Pricing::Paid) => None,
    }
}

/// Hands the URL to the platform opener in a detached child. The record's
/// website is a plain string; presence is the only guarantee.
fn open_website(url: &str, view: &mut ViewState) {
    let result = if cfg!(target_os = "macos") {
        std::process::Command::new("open").arg(url).spawn()
    } else if cfg!(target_os = "windows") {
        std::process::Command::new("cmd").args(["/C", "start", "", url]).spawn()
    } else {
        std::process::Command::new("xdg-open").arg(url).spawn()
    };
    match result {
        Ok(_) => view.set_status(format!("Opening {url}")),
        Err(e) => view.set_status(format!("Could not open browser: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_cycles_through_all_tiers_and_back() {
        let mut pricing = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            pricing = next_pricing(pricing);
            seen.push(pricing);
        }
        assert_eq!(
            seen,
            vec![Some(Pricing::Free), Some(Pricing::Freemium), Some(Pricing::Paid), None]
        );
    }

    #[test]
    fn sort_cycles_through_every_key() {
        let mut sort = SortKey::Popular;
        for _ in 0..SortKey::ALL.len() {
            sort = next_sort(sort);
        }
        assert_eq!(sort, SortKey::Popular);
    }
}
