// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Image,
    Video,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchResult {
    Person {
        name: String,
        status: String,
        is_active: bool,
        url: String,
    },
    File {
        name: String,
        location: String,
        timestamp: String,
        file_kind: FileKind,
        url: String,
    },
    Folder {
        name: String,
        location: String,
        file_count: String,
        timestamp: String,
        url: String,
    },
}

impl SearchResult {
    pub fn name(&self) -> &str {
        match self {
            Self::Person { name, .. } | Self::File { name, .. } | Self::Folder { name, .. } => name,
        }
    }

    /// Persons carry no location.
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Person { .. } => None,
            Self::File { location, .. } | Self::Folder { location, .. } => Some(location),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Person { url, .. } | Self::File { url, .. } | Self::Folder { url, .. } => url,
        }
    }

    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Person { .. } => "person",
            Self::File { .. } => "file",
            Self::Folder { .. } => "folder",
        }
    }

    pub const fn is_person(&self) -> bool {
        matches!(self, Self::Person { .. })
    }

    pub const fn is_file_like(&self) -> bool {
        matches!(self, Self::File { .. } | Self::Folder { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    All,
    Files,
    People,
    Chats,
    Lists,
}

impl Tab {
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Files,
        Self::People,
        Self::Chats,
        Self::Lists,
    ];

    /// Tabs that can be hidden from the settings menu, in menu order.
    pub const TOGGLEABLE: [Self; 4] = [Self::Files, Self::People, Self::Chats, Self::Lists];

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Files => "Files",
            Self::People => "People",
            Self::Chats => "Chats",
            Self::Lists => "Lists",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "files" => Some(Self::Files),
            "people" => Some(Self::People),
            "chats" => Some(Self::Chats),
            "lists" => Some(Self::Lists),
            _ => None,
        }
    }

    /// Whether a record belongs under this tab. Tabs without a dedicated
    /// record variant admit everything.
    pub const fn admits(self, result: &SearchResult) -> bool {
        match self {
            Self::People => result.is_person(),
            Self::Files => result.is_file_like(),
            Self::All | Self::Chats | Self::Lists => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabFilters {
    pub files: bool,
    pub people: bool,
    pub chats: bool,
    pub lists: bool,
}

impl Default for TabFilters {
    fn default() -> Self {
        Self {
            files: true,
            people: true,
            chats: false,
            lists: false,
        }
    }
}

impl TabFilters {
    pub const fn is_visible(&self, tab: Tab) -> bool {
        match tab {
            Tab::All => true,
            Tab::Files => self.files,
            Tab::People => self.people,
            Tab::Chats => self.chats,
            Tab::Lists => self.lists,
        }
    }

    /// Flips a tab's flag and returns the new value. `All` cannot be hidden.
    pub fn toggle(&mut self, tab: Tab) -> bool {
        let flag = match tab {
            Tab::All => return true,
            Tab::Files => &mut self.files,
            Tab::People => &mut self.people,
            Tab::Chats => &mut self.chats,
            Tab::Lists => &mut self.lists,
        };
        *flag = !*flag;
        *flag
    }

    pub fn visible_tabs(&self) -> Vec<Tab> {
        Tab::ALL
            .into_iter()
            .filter(|tab| self.is_visible(*tab))
            .collect()
    }
}
