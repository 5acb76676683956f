use std::path::{Path, PathBuf};

use crate::{config, error::Res};

/// The locally stored list of known styles, one per line on disk.
pub struct StylesManager {
    styles: Vec<String>,
}

impl StylesManager {
    /// Wraps an in-memory style list.
    pub fn new(styles: Vec<String>) -> Self {
        Self { styles }
    }

    /// Loads the list from [`StylesManager::styles_path`].
    ///
    /// # Errors
    ///
    /// Fails with an I/O error if the file is missing or unreadable.
    pub async fn load() -> Res<Self> {
        Self::load_from(&Self::styles_path()).await
    }

    /// Loads the list from `path`.
    pub async fn load_from(path: &Path) -> Res<Self> {
        let content = async_fs::read_to_string(path).await?;
        Ok(Self::parse(&content))
    }

    /// Writes the list to [`StylesManager::styles_path`], replacing any previous list.
    pub async fn persist(&self) -> Res<()> {
        self.persist_to(&Self::styles_path()).await
    }

    /// Writes the list to `path`, creating parent directories as needed.
    pub async fn persist_to(&self, path: &Path) -> Res<()> {
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        async_fs::write(path, self.render()).await?;
        Ok(())
    }

    /// One style per line. Surrounding whitespace and blank lines are dropped.
    pub fn parse(content: &str) -> Self {
        Self {
            styles: content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// The on-disk form, newline terminated.
    pub fn render(&self) -> String {
        let mut content = self.styles.join("\n");
        content.push('\n');
        content
    }

    /// Case-insensitive membership.
    pub fn contains(&self, style: &str) -> bool {
        let style = style.trim().to_lowercase();
        self.styles.iter().any(|s| s.to_lowercase() == style)
    }

    /// Styles in stored order.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// `styles.txt` inside [`config::data_dir`].
    pub fn styles_path() -> PathBuf {
        config::data_dir().join("styles.txt")
    }
}
