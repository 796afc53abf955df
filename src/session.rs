//! Application state and the operations that mutate it.
//!
//! A [`Session`] owns everything the user sees: the current proverb, the
//! history ledger and the image state. Front-ends call the operations and
//! drain [`Notice`]s to show the outcome; no error is fatal to the session.

use std::fmt;
use std::path::PathBuf;

use crate::context::ServiceContext;
use crate::download::{download_image, resolve_download_path};
use crate::error::ProverbError;
use crate::history::HistoryLedger;
use crate::ports::ImageRequest;
use crate::proverb::{validate_word, ProverbGenerator, ProverbRecord};
use crate::share::{build_share_url, copy_to_clipboard, proverb_from_share_url};

/// Where the image for the current proverb stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight; no image is displayed.
    Requesting,
    /// The service returned this image URL.
    Succeeded(String),
    /// The last request failed; no image is displayed.
    Failed,
}

/// A user-visible outcome message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Something worked.
    Success(String),
    /// Something failed and was recovered from.
    Error(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(msg) => write!(f, "✔ {msg}"),
            Self::Error(msg) => write!(f, "✖ {msg}"),
        }
    }
}

/// Which proverb an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The proverb on display.
    Current,
    /// History entry, 1-based, newest first.
    History(usize),
}

/// Everything the user sees.
#[derive(Debug, Default)]
pub struct AppState {
    current: Option<String>,
    history: HistoryLedger,
    image: ImageState,
}

/// One interactive session.
pub struct Session {
    state: AppState,
    generator: ProverbGenerator,
    ctx: ServiceContext,
    share_origin: String,
    notices: Vec<Notice>,
}

impl Session {
    /// Create a session over the given ports.
    #[must_use]
    pub fn new(ctx: ServiceContext, generator: ProverbGenerator, share_origin: String) -> Self {
        Self { state: AppState::default(), generator, ctx, share_origin, notices: Vec::new() }
    }

    /// The proverb on display, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.state.current.as_deref()
    }

    /// Recent generations, newest first.
    #[must_use]
    pub fn history(&self) -> &HistoryLedger {
        &self.state.history
    }

    /// Image state for the displayed proverb.
    #[must_use]
    pub fn image_state(&self) -> &ImageState {
        &self.state.image
    }

    /// Displayed image URL, present only after a successful request.
    #[must_use]
    pub fn generated_image_url(&self) -> Option<&str> {
        match &self.state.image {
            ImageState::Succeeded(url) => Some(url.as_str()),
            _ => None,
        }
    }

    /// Whether an image request is in flight.
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.state.image == ImageState::Requesting
    }

    /// Drain queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Give the ports back, e.g. to finish a recording.
    #[must_use]
    pub fn into_context(self) -> ServiceContext {
        self.ctx
    }

    /// Generate a proverb from raw user input and put it on display.
    ///
    /// # Errors
    ///
    /// Returns [`ProverbError::EmptyWord`] for blank input; state is unchanged.
    pub fn submit_word(&mut self, raw: &str) -> Result<&ProverbRecord, ProverbError> {
        let word = match validate_word(raw) {
            Ok(word) => word,
            Err(e) => {
                self.error("Введите слово для генерации");
                return Err(e);
            }
        };

        let record = self.generator.generate(word);
        tracing::debug!(
            id = %record.id(),
            word = record.word(),
            at = %record.timestamp(),
            "generated proverb"
        );
        self.state.current = Some(record.text().to_string());
        self.state.history.append(record);
        self.success("Пословица сгенерирована!");

        self.state.history.get(0).ok_or(ProverbError::NothingSelected)
    }

    /// Display the proverb carried by a share link.
    ///
    /// # Errors
    ///
    /// Returns [`ProverbError::NotShared`] if the link carries no proverb.
    pub fn open_shared(&mut self, url: &str) -> Result<&str, ProverbError> {
        let Some(text) = proverb_from_share_url(url) else {
            self.error("Ссылка не содержит пословицы");
            return Err(ProverbError::NotShared(url.to_string()));
        };
        self.state.current = Some(text);
        self.state.image = ImageState::Idle;
        Ok(self.state.current.as_deref().unwrap_or_default())
    }

    /// Build the share link for a proverb and copy it to the clipboard.
    ///
    /// On clipboard failure the link is still put in the error notice so it
    /// can be copied by hand.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no such proverb, the origin is invalid,
    /// or the clipboard copy failed.
    pub fn share(&mut self, target: Target) -> Result<String, ProverbError> {
        let text = self.resolve(target)?;
        let url = match build_share_url(&self.share_origin, &text) {
            Ok(url) => url,
            Err(e) => {
                self.error(format!("Не удалось создать ссылку: {e}"));
                return Err(e);
            }
        };

        match copy_to_clipboard(self.ctx.clipboard.as_ref(), &url) {
            Ok(()) => {
                self.success("Ссылка скопирована в буфер обмена");
                Ok(url)
            }
            Err(e) => {
                self.error(format!("Не удалось скопировать ссылку, скопируйте вручную: {url}"));
                Err(e)
            }
        }
    }

    /// Ask the image service to illustrate a proverb.
    ///
    /// Entering the request clears any displayed image. `&mut self` rules out
    /// overlapping requests; a `Requesting` state left by an abandoned call is
    /// simply replaced, so the latest request always wins.
    ///
    /// # Errors
    ///
    /// Returns the service failure after recording it as a notice.
    pub async fn request_image(&mut self, target: Target) -> Result<String, ProverbError> {
        let text = self.resolve(target)?;
        self.state.image = ImageState::Requesting;

        let result = self.ctx.image_service.request_image(&ImageRequest { text }).await;

        match result {
            Ok(answer) => {
                self.state.image = ImageState::Succeeded(answer.image_url.clone());
                self.success("Изображение создано!");
                Ok(answer.image_url)
            }
            Err(e) => {
                tracing::error!(error = %e, "image generation failed");
                self.state.image = ImageState::Failed;
                self.error("Ошибка при создании изображения");
                Err(e)
            }
        }
    }

    /// Save the displayed image as PNG (`proverb.png` by default).
    ///
    /// # Errors
    ///
    /// Returns [`ProverbError::NoImage`] if nothing is displayed, or the
    /// download failure.
    pub async fn download(&mut self, path: Option<&str>) -> Result<PathBuf, ProverbError> {
        let Some(url) = self.generated_image_url().map(str::to_string) else {
            self.error("Сначала создайте изображение");
            return Err(ProverbError::NoImage);
        };
        let path = resolve_download_path(path);

        match download_image(self.ctx.fetcher.as_ref(), &url, &path).await {
            Ok(()) => {
                self.success(format!("Изображение сохранено: {}", path.display()));
                Ok(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, %url, "download failed");
                self.error("Не удалось скачать изображение");
                Err(e)
            }
        }
    }

    fn resolve(&mut self, target: Target) -> Result<String, ProverbError> {
        let found = match target {
            Target::Current => self.state.current.clone().ok_or(ProverbError::NothingSelected),
            Target::History(n) => n
                .checked_sub(1)
                .and_then(|i| self.state.history.get(i))
                .map(|r| r.text().to_string())
                .ok_or(ProverbError::NoSuchEntry(n)),
        };
        if let Err(ref e) = found {
            self.error(match e {
                ProverbError::NoSuchEntry(n) => format!("В истории нет записи №{n}"),
                _ => "Сначала сгенерируйте пословицу".to_string(),
            });
        }
        found
    }

    fn success(&mut self, msg: impl Into<String>) {
        self.notices.push(Notice::Success(msg.into()));
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.notices.push(Notice::Error(msg.into()));
    }
}
