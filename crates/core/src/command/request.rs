use std::fmt;

use crate::types::Topic;

/// What the user asked `cs` to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Find,
    Edit,
    Update,
    List,
}

impl Action {
    pub fn needs_topic(self) -> bool {
        matches!(self, Action::Find | Action::Edit)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Help => "help",
            Action::Version => "version",
            Action::Find => "find",
            Action::Edit => "edit",
            Action::Update => "update",
            Action::List => "list",
        };
        f.write_str(name)
    }
}

/// A parsed invocation, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub action: Action,
    pub topic: Option<Topic>,
    pub verbose: bool,
}

impl Request {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            topic: None,
            verbose: false,
        }
    }

    pub fn find(topic: Topic) -> Self {
        Self::new(Action::Find).with_topic(topic)
    }

    pub fn edit(topic: Topic) -> Self {
        Self::new(Action::Edit).with_topic(topic)
    }

    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topic = Some(topic);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
