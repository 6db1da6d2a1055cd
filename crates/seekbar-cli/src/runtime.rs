// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use url::Url;

/// Clipboard and browser access for the interactive UI. The clipboard handle
/// is opened on first use so headless runs never touch the display server.
#[derive(Default)]
pub struct SystemRuntime {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.clipboard.is_none() {
            let clipboard = arboard::Clipboard::new().context("open system clipboard")?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .context("system clipboard unavailable")
    }
}

impl seekbar_tui::AppRuntime for SystemRuntime {
    fn copy_link(&mut self, url: &str) -> Result<()> {
        self.clipboard()?
            .set_text(url)
            .with_context(|| format!("write {url} to clipboard"))
    }

    fn open_link(&mut self, url: &str) -> Result<()> {
        let link = validate_link(url)?;
        open::that(link.as_str()).with_context(|| format!("open {link} in browser"))
    }
}

/// Only web links are handed to the platform opener.
pub fn validate_link(raw: &str) -> Result<Url> {
    let link = Url::parse(raw).with_context(|| format!("parse link {raw:?}"))?;
    match link.scheme() {
        "http" | "https" => Ok(link),
        other => bail!("refusing to open {other}: link {raw:?}; only http and https are allowed"),
    }
}
