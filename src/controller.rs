// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search modal as an explicit state machine.
//!
//! Browser callbacks (clicks, keydowns, input events, the index fetch
//! resolving) are turned into [`Event`]s. [`transition`] is a pure function
//! from `(state, event)` to the next state plus the side effects the host has
//! to perform, expressed as [`Command`]s. Nothing here touches a DOM, which is
//! what makes the whole interaction testable as plain Rust.
//!
//! ```text
//!            Open                    Input (index ready)
//!   Closed ────────▶ Hint ─────────────────────────────▶ Results / NoResults
//!     ▲               │  ▲                                   │
//!     │               │  └──────── Input (too short) ────────┘
//!     │               │ Input (index not ready)
//!     │               ▼
//!     │            Loading ──── IndexReady ────▶ Results / NoResults
//!     │
//!     └──────── Close (any open state) ─────────
//! ```
//!
//! # Invariant
//!
//! In `Results`, `selected` is `None` or a valid index into `results`.
//! Every transition that replaces `results` resets it to `None`, and
//! `Results` is never entered with an empty list (that is `NoResults`).

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::loader::{FetchTicket, IndexLoader};
use crate::search::{search_with, shows_hint};
use crate::types::{SearchIndex, SearchOptions, SearchOutcome, SearchResult};

/// What the modal is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    /// Open, query empty or too short.
    Hint,
    /// Open, a query arrived before the index finished loading.
    Loading { query: String },
    Results {
        query: String,
        results: Vec<SearchResult>,
        selected: Option<usize>,
    },
    NoResults { query: String },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Current query text, empty when closed or showing the hint.
    pub fn query(&self) -> &str {
        match self {
            ModalState::Loading { query }
            | ModalState::Results { query, .. }
            | ModalState::NoResults { query } => query,
            ModalState::Closed | ModalState::Hint => "",
        }
    }

    pub fn results(&self) -> &[SearchResult] {
        match self {
            ModalState::Results { results, .. } => results,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            ModalState::Results { selected, .. } => *selected,
            _ => None,
        }
    }

    /// Selection as the integer hosts expect: -1 when nothing is selected.
    pub fn selected_index(&self) -> isize {
        self.selected().map_or(-1, |i| i as isize)
    }
}

/// Something that happened on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard shortcut or search button.
    Open,
    /// Close button, backdrop click or Escape.
    Close,
    /// The input's value changed.
    Input(String),
    ArrowDown,
    ArrowUp,
    Enter,
    /// A result row was clicked.
    Activate(usize),
    IndexReady,
    IndexFailed,
}

/// Side effect the host must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    FocusInput,
    ClearInput,
    /// Resolved by [`SearchController`] into `FetchIndex` or dropped.
    BeginIndexLoad,
    FetchIndex { path: String, attempt: u32 },
    Navigate { url: String },
    ScrollIntoView { index: usize },
    PreventDefault,
    /// The results container must be re-rendered from the new state.
    Render,
}

/// Result of [`transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ModalState,
    pub commands: Vec<Command>,
}

impl Transition {
    fn to(state: ModalState, commands: Vec<Command>) -> Self {
        Self { state, commands }
    }

    fn stay(state: ModalState) -> Self {
        Self {
            state,
            commands: Vec::new(),
        }
    }
}

/// Compute the next state. Pure: no I/O, no clocks, no globals.
///
/// `index` is the cached index if it has finished loading.
pub fn transition(
    state: ModalState,
    event: Event,
    index: Option<&SearchIndex>,
    options: &SearchOptions,
) -> Transition {
    use Command::*;

    match (state, event) {
        (_, Event::Open) => {
            let mut commands = vec![ClearInput, FocusInput, Render];
            if index.is_none() {
                commands.push(BeginIndexLoad);
            }
            Transition::to(ModalState::Hint, commands)
        }

        (ModalState::Closed, _) => Transition::stay(ModalState::Closed),

        (_, Event::Close) => Transition::to(ModalState::Closed, vec![Render]),

        (_, Event::Input(query)) => run_query(query, index, options),

        (
            ModalState::Results {
                query,
                results,
                selected,
            },
            Event::ArrowDown,
        ) => {
            let last = results.len().saturating_sub(1);
            let next = selected.map_or(0, |i| (i + 1).min(last));
            Transition::to(
                ModalState::Results {
                    query,
                    results,
                    selected: Some(next),
                },
                vec![PreventDefault, Render, ScrollIntoView { index: next }],
            )
        }

        (
            ModalState::Results {
                query,
                results,
                selected,
            },
            Event::ArrowUp,
        ) => {
            let next = selected.and_then(|i| i.checked_sub(1));
            let mut commands = vec![PreventDefault, Render];
            if let Some(index) = next {
                commands.push(ScrollIntoView { index });
            }
            Transition::to(
                ModalState::Results {
                    query,
                    results,
                    selected: next,
                },
                commands,
            )
        }

        (state, Event::ArrowDown | Event::ArrowUp) => Transition::to(state, vec![PreventDefault]),

        (state @ ModalState::Results { .. }, Event::Enter) => {
            let target = state
                .selected()
                .and_then(|i| state.results().get(i))
                .map(|r| r.url.clone());
            match target {
                Some(url) => Transition::to(state, vec![PreventDefault, Navigate { url }]),
                None => Transition::stay(state),
            }
        }

        (state @ ModalState::Results { .. }, Event::Activate(i)) => {
            match state.results().get(i).map(|r| r.url.clone()) {
                Some(url) => Transition::to(state, vec![Navigate { url }]),
                None => Transition::stay(state),
            }
        }

        (ModalState::Loading { query }, Event::IndexReady) if index.is_some() => {
            run_query(query, index, options)
        }

        (state, _) => Transition::stay(state),
    }
}

/// Evaluate a query against whatever the loader has so far.
fn run_query(query: String, index: Option<&SearchIndex>, options: &SearchOptions) -> Transition {
    if shows_hint(&query, options) {
        return Transition::to(ModalState::Hint, vec![Command::Render]);
    }

    let Some(index) = index else {
        return Transition::to(
            ModalState::Loading { query },
            vec![Command::Render, Command::BeginIndexLoad],
        );
    };

    let state = match search_with(index, &query, options) {
        SearchOutcome::Hint => ModalState::Hint,
        SearchOutcome::Matches(results) if results.is_empty() => ModalState::NoResults { query },
        SearchOutcome::Matches(results) => ModalState::Results {
            query,
            results,
            selected: None,
        },
    };
    Transition::to(state, vec![Command::Render])
}

/// Where a keydown was heard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    /// Global listener on the document.
    Document,
    /// Listener on the search input.
    Input,
}

/// The parts of a `KeyboardEvent` the modal cares about.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyPress {
    pub key: String,
    pub ctrl_key: bool,
    pub meta_key: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }
}

impl Event {
    /// Map a keydown to a modal event. Unknown keys map to nothing.
    pub fn from_key(scope: KeyScope, key: &KeyPress) -> Option<Event> {
        match scope {
            KeyScope::Document => {
                let shortcut = (key.ctrl_key || key.meta_key) && matches!(key.key.as_str(), "k" | "K");
                shortcut.then_some(Event::Open)
            }
            KeyScope::Input => match key.key.as_str() {
                "ArrowDown" => Some(Event::ArrowDown),
                "ArrowUp" => Some(Event::ArrowUp),
                "Enter" => Some(Event::Enter),
                "Escape" => Some(Event::Close),
                _ => None,
            },
        }
    }
}

/// One search modal for one page view.
///
/// Owns the modal state with its selection and the memoized index.
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    state: ModalState,
    loader: IndexLoader,
    options: SearchOptions,
}

impl SearchController {
    pub fn new(loader: IndexLoader, options: SearchOptions) -> Self {
        Self {
            state: ModalState::Closed,
            loader,
            options,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn loader(&self) -> &IndexLoader {
        &self.loader
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn index(&self) -> Option<&Arc<SearchIndex>> {
        self.loader.index()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn selected_index(&self) -> isize {
        self.state.selected_index()
    }

    /// Apply an event and return the commands for the host.
    pub fn dispatch(&mut self, event: Event) -> Vec<Command> {
        let index = self.loader.index().cloned();
        let state = std::mem::take(&mut self.state);
        let Transition { state, commands } =
            transition(state, event, index.as_deref(), &self.options);
        self.state = state;
        self.resolve(commands)
    }

    /// Handle a keydown. Keys the modal acts on include `PreventDefault`.
    pub fn handle_key(&mut self, scope: KeyScope, key: &KeyPress) -> Vec<Command> {
        let Some(event) = Event::from_key(scope, key) else {
            return Vec::new();
        };
        let mut commands = Vec::new();
        if matches!(event, Event::Open) || (matches!(event, Event::Close) && self.is_open()) {
            commands.push(Command::PreventDefault);
        }
        commands.extend(self.dispatch(event));
        commands
    }

    /// Feed back the outcome of a `FetchIndex` command.
    ///
    /// Works whether or not the modal is still open: a late index is cached
    /// for the next search.
    pub fn index_loaded(&mut self, ticket: &FetchTicket, response: Result<Vec<u8>>) -> Vec<Command> {
        match self.loader.complete(ticket, response) {
            Ok(_) => self.dispatch(Event::IndexReady),
            Err(_) => self.dispatch(Event::IndexFailed),
        }
    }

    /// Turn `BeginIndexLoad` into a real fetch, at most one at a time.
    fn resolve(&mut self, commands: Vec<Command>) -> Vec<Command> {
        commands
            .into_iter()
            .filter_map(|command| match command {
                Command::BeginIndexLoad => self.loader.begin().map(|ticket| Command::FetchIndex {
                    path: ticket.path,
                    attempt: ticket.attempt,
                }),
                other => Some(other),
            })
            .collect()
    }
}

/// Rebuild a ticket from a `FetchIndex` command echoed back by the host.
impl From<(String, u32)> for FetchTicket {
    fn from((path, attempt): (String, u32)) -> Self {
        FetchTicket { path, attempt }
    }
}
