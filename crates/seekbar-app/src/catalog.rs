// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{FileKind, SearchResult};

/// Fixed, read-only list of searchable records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    results: Vec<SearchResult>,
}

impl Catalog {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    pub fn demo() -> Self {
        Self::new(vec![
            SearchResult::Person {
                name: "Randall Johnsson".to_owned(),
                status: "Active now".to_owned(),
                is_active: true,
                url: "https://example.com/users/randall-johnsson".to_owned(),
            },
            SearchResult::Folder {
                name: "Random Michal Folder".to_owned(),
                location: "Photos".to_owned(),
                file_count: "12 Files".to_owned(),
                timestamp: "Edited 12m ago".to_owned(),
                url: "https://example.com/folders/random-michal-folder".to_owned(),
            },
            SearchResult::File {
                name: "crative_file_frankies.jpg".to_owned(),
                location: "Photos/Assets".to_owned(),
                timestamp: "Edited 12m ago".to_owned(),
                file_kind: FileKind::Image,
                url: "https://example.com/files/crative-file-frankies.jpg".to_owned(),
            },
            SearchResult::Person {
                name: "Kristinge Karand".to_owned(),
                status: "Active 2d ago".to_owned(),
                is_active: false,
                url: "https://example.com/users/kristinge-karand".to_owned(),
            },
            SearchResult::File {
                name: "files_krande_michelle.avi".to_owned(),
                location: "Videos".to_owned(),
                timestamp: "Added 12m ago".to_owned(),
                file_kind: FileKind::Video,
                url: "https://example.com/files/files-krande-michelle.avi".to_owned(),
            },
        ])
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}
