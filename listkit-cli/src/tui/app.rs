//! Core application state and mode management

use listkit_core::{
    render_list, AppShell, Component, DataFetcher, Greeting, InputForm, ListkitConfig, Node,
    ProgramMode,
};

/// Input mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation mode - switch tabs, refetch, quit
    #[default]
    Normal,
    /// Edit mode - keys go to the form input
    Edit,
}

/// Active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// App shell with the numbers and fruits lists
    #[default]
    Lists,
    Greeting,
    /// Controlled input form
    Form,
    /// Post fetcher
    Posts,
    /// Program mode table
    Modes,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Lists, Tab::Greeting, Tab::Form, Tab::Posts, Tab::Modes];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Lists => "Lists",
            Tab::Greeting => "Greeting",
            Tab::Form => "Form",
            Tab::Posts => "Posts",
            Tab::Modes => "Modes",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    /// Tab for a 1-based number key
    pub fn from_number(n: usize) -> Option<Tab> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current input mode
    pub mode: Mode,
    /// Active tab
    pub tab: Tab,
    pub shell: AppShell,
    pub greeting: Greeting,
    pub form: InputForm,
    pub fetcher: DataFetcher,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App from configuration
    pub fn new(config: &ListkitConfig) -> Self {
        Self {
            mode: Mode::Normal,
            tab: Tab::Lists,
            shell: AppShell::default(),
            greeting: config.greeting(),
            form: InputForm::new(),
            fetcher: DataFetcher::new(),
            should_quit: false,
            status_message: None,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a tab (leaves edit mode)
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.mode = Mode::Normal;
    }

    /// Start editing the form input (switches to the form tab)
    pub fn enter_edit(&mut self) {
        self.tab = Tab::Form;
        self.mode = Mode::Edit;
    }

    /// Exit current mode back to normal
    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Submit the form and show the notification
    pub fn submit_form(&mut self) {
        let submission = self.form.on_submit();
        self.set_status(submission.message());
    }

    /// Node tree for the active tab
    pub fn current_node(&self) -> Node {
        match self.tab {
            Tab::Lists => self.shell.render(),
            Tab::Greeting => self.greeting.render(),
            Tab::Form => self.form.render(),
            Tab::Posts => self.fetcher.render(),
            Tab::Modes => render_list(&ProgramMode::ALL, |mode| {
                Node::text(format!("{}  {}", mode.key(), mode))
            }),
        }
    }
}
